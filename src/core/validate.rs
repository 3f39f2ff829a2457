//! Descriptor validation orchestration
//!
//! Resolves the validation mode, runs schema and/or semantic validation over
//! a descriptor and merges the results into one report.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use tracing::{debug, info, warn};

use crate::config::schema::MTA_SCHEMA;
use crate::core::descriptor::Descriptor;
use crate::core::issue::{render_report, Issue};
use crate::core::project;
use crate::core::schema::{compile_schema_text, CompiledSchema};
use crate::error::ValidateError;
use crate::infra::filesystem;

/// Which validation phases to run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationMode {
    /// Schema and semantic validation
    #[default]
    All,
    /// Schema validation only
    Schema,
    /// Semantic validation only
    Project,
}

impl ValidationMode {
    /// Whether the schema phase runs
    pub fn runs_schema(self) -> bool {
        matches!(self, Self::All | Self::Schema)
    }

    /// Whether the semantic phase runs
    pub fn runs_project(self) -> bool {
        matches!(self, Self::All | Self::Project)
    }
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::All => "all",
            Self::Schema => "schema",
            Self::Project => "project",
        };
        f.write_str(name)
    }
}

impl FromStr for ValidationMode {
    type Err = ValidateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "all" => Ok(Self::All),
            "schema" => Ok(Self::Schema),
            "project" => Ok(Self::Project),
            other => Err(ValidateError::WrongMode {
                mode: other.to_string(),
            }),
        }
    }
}

/// Resolve a mode flag into `(run_schema, run_project)`
pub fn resolve_mode(mode: &str) -> Result<(bool, bool), ValidateError> {
    let mode: ValidationMode = mode.parse()?;
    Ok((mode.runs_schema(), mode.runs_project()))
}

/// Options for one validation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidateOptions {
    /// Phases to run
    pub mode: ValidationMode,
}

impl ValidateOptions {
    /// Build options from a raw mode flag
    pub fn parse(mode: &str) -> Result<Self, ValidateError> {
        Ok(Self { mode: mode.parse()? })
    }
}

/// Validates descriptors against a compiled schema and the project on disk
#[derive(Debug, Clone)]
pub struct DescriptorValidator {
    schema: CompiledSchema,
}

impl Default for DescriptorValidator {
    fn default() -> Self {
        Self::new(MTA_SCHEMA)
    }
}

impl DescriptorValidator {
    /// Compile `schema_text` once for all later validations
    pub fn new(schema_text: &str) -> Self {
        let schema = compile_schema_text(schema_text);
        if !schema.is_valid() {
            warn!(
                "Descriptor schema has {} issues; schema validation will report them",
                schema.schema_issues().len()
            );
        }
        Self { schema }
    }

    /// The compiled schema
    pub fn schema(&self) -> &CompiledSchema {
        &self.schema
    }

    /// Validate descriptor bytes, returning every issue found
    ///
    /// When the schema itself is broken its issues are the whole result and
    /// the semantic phase is skipped.
    pub fn validate_content(
        &self,
        content: &[u8],
        project_root: &Path,
        options: &ValidateOptions,
    ) -> Result<Vec<Issue>, ValidateError> {
        let mut issues = Vec::new();

        if options.mode.runs_schema() {
            if !self.schema.is_valid() {
                return Ok(self
                    .schema
                    .schema_issues()
                    .iter()
                    .cloned()
                    .map(Issue::from)
                    .collect());
            }
            info!("Running schema validation");
            issues.extend(self.validate_schema(content));
        }

        if options.mode.runs_project() {
            info!("Running semantic validation in {}", project_root.display());
            let descriptor =
                Descriptor::from_slice(content).map_err(|source| ValidateError::Unmarshal { source })?;
            issues.extend(project::validate_project(&descriptor, project_root));
        }

        debug!("Validation produced {} issues", issues.len());
        Ok(issues)
    }

    fn validate_schema(&self, content: &[u8]) -> Vec<Issue> {
        match self.schema.validate(content) {
            Ok(issues) => issues,
            Err(e) => vec![Issue::new(format!("validation failed because: {e}"))],
        }
    }

    /// Read `descriptor` under `project_dir` and validate it
    ///
    /// Issues are returned as [`ValidateError::Invalid`] carrying the
    /// concatenated report.
    pub fn validate_project_descriptor(
        &self,
        project_dir: &Path,
        descriptor: &Path,
        options: &ValidateOptions,
    ) -> Result<(), ValidateError> {
        let path = project_dir.join(descriptor);
        info!("Validating {} ({} mode)", path.display(), options.mode);

        let content = filesystem::read_file_bytes(&path).map_err(|source| {
            ValidateError::ReadDescriptor {
                path: path.clone(),
                source,
            }
        })?;

        let issues = self.validate_content(&content, project_dir, options)?;
        if issues.is_empty() {
            return Ok(());
        }

        let report = render_report(&issues);
        Err(ValidateError::Invalid {
            path,
            issues,
            report,
        })
    }
}

/// Validate a descriptor file with the built-in schema
pub fn validate_project_descriptor(
    project_dir: &Path,
    descriptor: &Path,
    options: &ValidateOptions,
) -> Result<(), ValidateError> {
    DescriptorValidator::default().validate_project_descriptor(project_dir, descriptor, options)
}
