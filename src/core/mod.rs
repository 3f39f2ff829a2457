//! Core validation logic
//!
//! This module contains the validation engine for mbt.
//! It has NO I/O operations - those belong in [`crate::infra`], with the
//! exception of [`validate`], which coordinates a full run.
//!
//! # Submodules
//!
//! - [`node`] - Read-only view over parsed YAML
//! - [`path`] - Location of a node in a document
//! - [`issue`] - Validation findings and report rendering
//! - [`checks`] - Composable check combinators
//! - [`schema`] - Schema compiler
//! - [`document`] - Document validation
//! - [`descriptor`] - Minimal descriptor model
//! - [`project`] - Semantic project checks
//! - [`validate`] - Validation orchestration

pub mod checks;
pub mod descriptor;
pub mod document;
pub mod issue;
pub mod node;
pub mod path;
pub mod project;
pub mod schema;
pub mod validate;
