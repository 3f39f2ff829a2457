//! Validate command implementation
//!
//! Implements `mbt validate` to check a descriptor against the built-in schema
//! and the project directory.

use anyhow::Result;
use std::path::Path;

use crate::cli::output::{is_json, print_detail, print_info, print_success};
use crate::core::validate::{DescriptorValidator, ValidateOptions};
use crate::error::ValidateError;

/// Execute the validate command
///
/// Validation issues fail the command with the full report. In JSON mode the
/// report is also printed to stdout.
pub async fn execute(source: &Path, descriptor: &Path, mode: &str) -> Result<()> {
    let options = ValidateOptions::parse(mode)?;
    let descriptor_path = source.join(descriptor);

    tracing::info!("Validating {}", descriptor_path.display());
    print_info(&format!("Validating {}...", descriptor_path.display()));

    let validator = DescriptorValidator::default();
    let result = validator.validate_project_descriptor(source, descriptor, &options);

    if is_json() {
        let issues = match &result {
            Ok(()) => Some(&[][..]),
            Err(e @ ValidateError::Invalid { .. }) => Some(e.issues()),
            Err(_) => None,
        };
        if let Some(issues) = issues {
            let json_result = serde_json::json!({
                "status": if issues.is_empty() { "success" } else { "error" },
                "descriptor": descriptor_path.display().to_string(),
                "issues": issues,
            });
            println!("{}", serde_json::to_string_pretty(&json_result)?);
        }
    }

    result?;

    print_success(&format!("Validation of {} passed", descriptor_path.display()));
    print_detail(&format!("Mode: {}", options.mode));
    Ok(())
}
