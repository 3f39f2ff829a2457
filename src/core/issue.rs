//! Validation findings
//!
//! [`Issue`] is a user-facing problem in a validated document.
//! [`SchemaIssue`] is a defect in the schema itself and is kept as a separate
//! type so a broken schema can never be mistaken for an invalid document.

use std::fmt;

use serde::Serialize;

use crate::config::defaults::SCHEMA_ISSUE_PREFIX;

/// A single path-qualified validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    /// Human-readable message
    pub message: String,
}

impl Issue {
    /// Create an issue from a message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// A defect in the schema text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaIssue {
    /// Human-readable message, prefixed with `invalid YAML schema: `
    pub message: String,
}

impl SchemaIssue {
    /// Create a schema issue; the common prefix is added here
    pub fn new(message: impl AsRef<str>) -> Self {
        Self {
            message: format!("{SCHEMA_ISSUE_PREFIX}{}", message.as_ref()),
        }
    }
}

impl fmt::Display for SchemaIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<SchemaIssue> for Issue {
    fn from(issue: SchemaIssue) -> Self {
        Self {
            message: issue.message,
        }
    }
}

/// Concatenate issue messages into a single report
///
/// Messages are joined as-is; consumers diff this output, so no separator is
/// inserted.
pub fn render_report(issues: &[Issue]) -> String {
    issues.iter().map(|issue| issue.message.as_str()).collect()
}
