//! Composable validation checks
//!
//! A [`Check`] is a pure function from a node and its path to a list of
//! issues. Checks are built once, hold no mutable state and can be shared
//! across threads, so one compiled schema may validate many documents.
//!
//! Type, pattern and enum checks are absence-tolerant: they report nothing on
//! a missing node. Whether a property must exist is the job of [`required`].

use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::config::defaults::ENUM_VALUES_IN_MESSAGE;
use crate::core::issue::Issue;
use crate::core::node::Node;
use crate::core::path::Path;

type CheckFn = dyn Fn(&Node<'_>, &Path) -> Vec<Issue> + Send + Sync;

/// A compiled validation rule
#[derive(Clone)]
pub struct Check {
    label: String,
    run: Arc<CheckFn>,
}

impl Check {
    /// Wrap a validation function under a descriptive label
    pub fn new<F>(label: impl Into<String>, run: F) -> Self
    where
        F: Fn(&Node<'_>, &Path) -> Vec<Issue> + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            run: Arc::new(run),
        }
    }

    /// Descriptive label, e.g. `property(name)` or `required`
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Run the check against a node
    pub fn evaluate(&self, node: &Node<'_>, path: &Path) -> Vec<Issue> {
        (self.run)(node, path)
    }
}

impl fmt::Debug for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Check")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Run checks against the value of a map property
///
/// An absent key is handed to the inner checks as [`Node::Missing`]. All inner
/// checks run, so sibling failures never hide each other.
pub fn property(name: &str, checks: Vec<Check>) -> Check {
    let name = name.to_string();
    Check::new(format!("property({name})"), move |node, path| {
        let value = node.get(&name);
        let value_path = path.child(&name);
        checks
            .iter()
            .flat_map(|check| check.evaluate(&value, &value_path))
            .collect()
    })
}

/// Run all checks against the same node and accumulate every issue
pub fn sequence(checks: Vec<Check>) -> Check {
    Check::new("sequence", move |node, path| {
        checks
            .iter()
            .flat_map(|check| check.evaluate(node, path))
            .collect()
    })
}

/// Run checks in order and stop at the first one that reports anything
pub fn sequence_fail_fast(checks: Vec<Check>) -> Check {
    Check::new("sequence_fail_fast", move |node, path| {
        for check in &checks {
            let issues = check.evaluate(node, path);
            if !issues.is_empty() {
                return issues;
            }
        }
        Vec::new()
    })
}

/// Run checks against every element of a sequence
///
/// Each element gets the path `...[i]`. Nodes that are not sequences yield no
/// issues; pair this with [`type_is_array`] when array-ness matters.
pub fn for_each(checks: Vec<Check>) -> Check {
    let element_checks = sequence(checks);
    Check::new("for_each", move |node, path| {
        node.elements()
            .iter()
            .enumerate()
            .flat_map(|(i, element)| element_checks.evaluate(element, &path.index(i)))
            .collect()
    })
}

/// The property must be present
pub fn required() -> Check {
    Check::new("required", |node, path| {
        if node.is_found() {
            return Vec::new();
        }
        vec![Issue::new(format!(
            "Missing required property <{}> in <{}>",
            path.leaf().unwrap_or_default(),
            path.parent()
        ))]
    })
}

/// Run checks only when the property is present
pub fn optional(checks: Vec<Check>) -> Check {
    Check::new("optional", move |node, path| {
        if !node.is_found() {
            return Vec::new();
        }
        checks
            .iter()
            .flat_map(|check| check.evaluate(node, path))
            .collect()
    })
}

/// A present value must be a map
pub fn type_is_map() -> Check {
    Check::new("type_is_map", |node, path| {
        type_issue(node.as_map().is_err(), path, "a map")
    })
}

/// A present value must be an array
pub fn type_is_array() -> Check {
    Check::new("type_is_array", |node, path| {
        type_issue(node.as_sequence().is_err(), path, "an array")
    })
}

/// A present value must be a boolean
pub fn type_is_boolean() -> Check {
    Check::new("type_is_boolean", |node, path| {
        type_issue(node.as_bool().is_err(), path, "a boolean")
    })
}

/// A present value must not be a map or an array
pub fn type_is_scalar() -> Check {
    Check::new("type_is_scalar", |node, path| {
        type_issue(node.is_map() || node.is_sequence(), path, "a scalar value")
    })
}

fn type_issue(mismatch: bool, path: &Path, expected: &str) -> Vec<Issue> {
    if mismatch {
        vec![Issue::new(format!("the {path} property must be {expected}"))]
    } else {
        Vec::new()
    }
}

/// The literal form of a present scalar must match a regular expression
pub fn matches_reg_exp(regex: Regex) -> Check {
    Check::new(format!("matches_reg_exp({})", regex.as_str()), move |node, path| {
        let Some(value) = node.literal() else {
            return Vec::new();
        };
        if regex.is_match(&value) {
            return Vec::new();
        }
        vec![Issue::new(format!(
            "the {path} property with the {value} value does not match the {} pattern",
            regex.as_str()
        ))]
    })
}

/// The literal form of a present scalar must equal one of the allowed values
///
/// Only the first few allowed values are quoted in the message; matching
/// always uses the full list.
pub fn matches_enum_values(values: Vec<String>) -> Check {
    let expected = values
        .iter()
        .take(ENUM_VALUES_IN_MESSAGE)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(",");
    Check::new("matches_enum_values", move |node, path| {
        let Some(value) = node.literal() else {
            return Vec::new();
        };
        if values.contains(&value) {
            return Vec::new();
        }
        vec![Issue::new(format!(
            "the {path} property with the {value} value is not one of the expected values [{expected}]"
        ))]
    })
}
