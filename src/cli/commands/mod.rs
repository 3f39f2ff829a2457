//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod validate;

use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;

use crate::config::defaults::{DEFAULT_DESCRIPTOR, DEFAULT_SOURCE};

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate the project descriptor
    Validate {
        /// Project directory
        #[arg(short, long, env = "MBT_SOURCE", default_value = DEFAULT_SOURCE)]
        source: PathBuf,

        /// Descriptor file, relative to the project directory
        #[arg(short, long, default_value = DEFAULT_DESCRIPTOR)]
        descriptor: PathBuf,

        /// Validation mode: all, schema or project (empty means all)
        #[arg(short, long, env = "MBT_VALIDATION_MODE", default_value = "")]
        mode: String,
    },
}

impl Commands {
    /// Execute the command
    pub async fn run(self) -> Result<()> {
        match self {
            Self::Validate {
                source,
                descriptor,
                mode,
            } => validate::execute(&source, &descriptor, &mode).await,
        }
    }
}
