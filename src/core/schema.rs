//! Schema compiler
//!
//! Turns a YAML-expressed schema into a list of [`Check`]s. The grammar:
//!
//! ```yaml
//! type: map                # or seq; anything else is a leaf
//! mapping:                 # required under `map`
//!   name: {required: true, pattern: '/^[a-z]+$/'}
//!   kind: {type: enum, enums: [a, b, c]}
//!   flag: {type: bool}
//!   items:
//!     type: seq
//!     sequence:            # required under `seq`, exactly one item schema
//!       - {required: true}
//! ```
//!
//! Defects in the schema text are reported as [`SchemaIssue`]s. A schema with
//! any issue compiles to no checks at all.

use regex::Regex;
use tracing::{debug, warn};

use crate::core::checks::{
    for_each, matches_enum_values, matches_reg_exp, optional, property, required,
    sequence_fail_fast, type_is_array, type_is_boolean, type_is_map, type_is_scalar, Check,
};
use crate::core::document::validate_document;
use crate::core::issue::{Issue, SchemaIssue};
use crate::core::node::{self, Node};

/// Checks and schema issues produced from one schema
#[derive(Debug, Clone, Default)]
pub struct CompiledSchema {
    checks: Vec<Check>,
    schema_issues: Vec<SchemaIssue>,
}

impl CompiledSchema {
    /// Top-level checks, empty when the schema has issues
    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    /// Defects found in the schema text
    pub fn schema_issues(&self) -> &[SchemaIssue] {
        &self.schema_issues
    }

    /// Whether the schema compiled without issues
    pub fn is_valid(&self) -> bool {
        self.schema_issues.is_empty()
    }

    /// Validate document bytes against this schema
    ///
    /// A document that is not valid YAML yields the parser error and no issues.
    pub fn validate(&self, content: &[u8]) -> Result<Vec<Issue>, serde_yaml::Error> {
        validate_document(content, &self.checks)
    }
}

/// Compile schema text
///
/// Unparseable text yields no checks and a single schema issue.
pub fn compile_schema_text(text: &str) -> CompiledSchema {
    match node::parse(text.as_bytes()) {
        Ok(value) => compile_schema(&Node::new(&value)),
        Err(e) => {
            warn!("Schema text could not be parsed: {e}");
            CompiledSchema {
                checks: Vec::new(),
                schema_issues: vec![SchemaIssue::new(format!("the schema could not be parsed: {e}"))],
            }
        }
    }
}

/// Compile an already parsed schema tree
pub fn compile_schema(schema: &Node<'_>) -> CompiledSchema {
    let mut built = Built::default();
    build_checks(schema, &mut built);

    if built.issues.is_empty() {
        debug!("Compiled schema into {} top-level checks", built.checks.len());
        CompiledSchema {
            checks: built.checks,
            schema_issues: Vec::new(),
        }
    } else {
        warn!("Schema has {} issues", built.issues.len());
        CompiledSchema {
            checks: Vec::new(),
            schema_issues: built.issues,
        }
    }
}

#[derive(Default)]
struct Built {
    checks: Vec<Check>,
    issues: Vec<SchemaIssue>,
}

impl Built {
    fn issue(&mut self, message: &str) {
        self.issues.push(SchemaIssue::new(message));
    }
}

fn build_checks(schema: &Node<'_>, out: &mut Built) {
    match schema.get("type").as_str() {
        Ok(Some("map")) => build_map(schema, out),
        Ok(Some("seq")) => build_sequence(schema, out),
        _ => build_leaf(schema, out),
    }
}

// type: map / mapping: {key: sub-schema, ...}
fn build_map(schema: &Node<'_>, out: &mut Built) {
    let mapping = schema.get("mapping");
    if !mapping.is_map() {
        out.issue("the mapping node must be a map");
        return;
    }

    out.checks.push(type_is_map());
    for (key, sub_schema) in mapping.entries() {
        let mut inner = Built::default();
        build_checks(&sub_schema, &mut inner);
        out.issues.extend(inner.issues);
        out.checks.push(property(&key, inner.checks));
    }
}

// type: seq / sequence: [item-schema]
fn build_sequence(schema: &Node<'_>, out: &mut Built) {
    let sequence = schema.get("sequence");
    let items = match sequence.as_sequence() {
        Ok(Some(items)) => items,
        _ => {
            out.issue("the sequence node must be an array");
            return;
        }
    };

    let item_schema = match items {
        [item] => Node::new(item),
        [] => {
            out.issue("the sequence node must contain one item");
            return;
        }
        _ => {
            out.issue("the sequence node can only have one item");
            return;
        }
    };

    let mut inner = Built::default();
    build_checks(&item_schema, &mut inner);
    out.issues.extend(inner.issues);
    out.checks
        .push(sequence_fail_fast(vec![type_is_array(), for_each(inner.checks)]));
}

// {required: <bool>, pattern: '/re/', type: bool|enum, enums: [...]}
fn build_leaf(schema: &Node<'_>, out: &mut Built) {
    let mut leaf = Built::default();
    build_type_check(schema, &mut leaf);
    build_pattern_check(schema, &mut leaf);

    // required/optional wraps everything built above, so it goes last
    let checks = match schema.get("required").as_bool() {
        Ok(None) => leaf.checks,
        Ok(Some(true)) => {
            let mut ordered = vec![required()];
            ordered.extend(leaf.checks);
            vec![sequence_fail_fast(ordered)]
        }
        Ok(Some(false)) => vec![optional(leaf.checks)],
        Err(_) => {
            leaf.issue("the required node must be a boolean");
            leaf.checks
        }
    };

    out.checks.extend(checks);
    out.issues.extend(leaf.issues);
}

fn build_type_check(schema: &Node<'_>, out: &mut Built) {
    match schema.get("type").as_str() {
        Ok(Some("bool")) => out.checks.push(type_is_boolean()),
        Ok(Some("enum")) => match enum_values(schema) {
            Ok(values) => out.checks.push(sequence_fail_fast(vec![
                type_is_scalar(),
                matches_enum_values(values),
            ])),
            Err(issue) => out.issues.push(issue),
        },
        Ok(_) => {}
        Err(_) => out.issue("the type node must be a string"),
    }
}

fn enum_values(schema: &Node<'_>) -> Result<Vec<String>, SchemaIssue> {
    let enums = schema.get("enums");
    if !enums.is_found() {
        return Err(SchemaIssue::new("enums values must be listed"));
    }
    if !enums.is_sequence() {
        return Err(SchemaIssue::new("enums values must be listed as an array"));
    }
    enums
        .elements()
        .iter()
        .map(|value| {
            value
                .literal()
                .ok_or_else(|| SchemaIssue::new("enum values must be simple"))
        })
        .collect()
}

fn build_pattern_check(schema: &Node<'_>, out: &mut Built) {
    let raw = match schema.get("pattern").as_str() {
        Ok(Some(raw)) => raw,
        Ok(None) => return,
        Err(_) => {
            out.issue("the pattern node must be a string");
            return;
        }
    };

    match Regex::new(strip_slashes(raw)) {
        Ok(regex) => out
            .checks
            .push(sequence_fail_fast(vec![type_is_scalar(), matches_reg_exp(regex)])),
        Err(e) => out.issues.push(SchemaIssue::new(format!(
            "the pattern node is invalid because: {e}"
        ))),
    }
}

/// Remove one leading and one trailing `/`
fn strip_slashes(pattern: &str) -> &str {
    let pattern = pattern.strip_prefix('/').unwrap_or(pattern);
    pattern.strip_suffix('/').unwrap_or(pattern)
}
