//! Error types for mbt
//!
//! Domain-specific error types using thiserror. Validation findings are not
//! errors: they travel as [`crate::core::issue::Issue`] values and only turn
//! into a [`ValidateError::Invalid`] at the orchestration boundary.

use std::path::PathBuf;
use thiserror::Error;

use crate::core::issue::Issue;
use crate::core::node::NodeKind;

/// Typed access to a YAML node found a value of another kind
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("expected a {expected} node, found a {found} node")]
pub struct NodeTypeError {
    /// Kind the accessor asked for
    pub expected: &'static str,
    /// Kind actually present
    pub found: NodeKind,
}

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to read file
    #[error("Failed to read file '{path}': {error}")]
    ReadFile { path: PathBuf, error: String },
}

/// Descriptor validation errors
#[derive(Error, Debug)]
pub enum ValidateError {
    /// Unknown validation mode flag
    #[error("wrong argument of validation mode. Expected one of [all, schema, project]")]
    WrongMode { mode: String },

    /// The descriptor could not be read
    #[error("could not read the {} file; the validation failed", path.display())]
    ReadDescriptor {
        path: PathBuf,
        #[source]
        source: FilesystemError,
    },

    /// The descriptor could not be read into the module model
    #[error("validation failed when unmarshalling the descriptor: {source}")]
    Unmarshal {
        #[source]
        source: serde_yaml::Error,
    },

    /// The descriptor has validation issues
    #[error("validation of the {} file failed with the following issues: \n{report}", path.display())]
    Invalid {
        path: PathBuf,
        issues: Vec<Issue>,
        report: String,
    },
}

impl ValidateError {
    /// Issues carried by an [`ValidateError::Invalid`] error, empty otherwise
    pub fn issues(&self) -> &[Issue] {
        match self {
            Self::Invalid { issues, .. } => issues,
            _ => &[],
        }
    }
}
