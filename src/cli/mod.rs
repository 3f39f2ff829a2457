//! Command-line interface
//!
//! Argument parsing for `mbt`. Commands hand the work to [`crate::core`] and
//! report the outcome through [`output`].

pub mod commands;
pub mod output;

use anyhow::Result;
use clap::{ArgAction, Parser};

use commands::Commands;
use output::OutputConfig;

/// mbt - Build tool for multi-module application packages
///
/// Validates `mta.yaml` descriptors against the built-in schema and the
/// project directory.
#[derive(Parser, Debug)]
#[command(name = "mbt", author, version, about, long_about = None)]
#[command(arg_required_else_help = true, propagate_version = true)]
pub struct Cli {
    /// Log progress to stderr (-v for info, -vv for debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print nothing on success
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print the validation report as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Output settings selected by the global flags
    pub fn output_config(&self) -> OutputConfig {
        OutputConfig::new(self.quiet, self.json, self.verbose)
    }

    /// Execute the selected command
    pub async fn run(self) -> Result<()> {
        self.command.run().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_config_from_flags() {
        let cli = Cli::try_parse_from(["mbt", "-q", "validate", "-vv"]).unwrap();
        assert_eq!(cli.output_config(), OutputConfig::new(true, false, 2));
    }

    #[test]
    fn test_command_is_required() {
        let err = Cli::try_parse_from(["mbt"]).unwrap_err();
        assert_eq!(
            err.kind(),
            clap::error::ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        );
    }
}
