//! mbt - Build tool for multi-module application packages
//!
//! This library provides the descriptor validation engine of mbt: a compiler
//! that turns a YAML-expressed schema into composable checks, a document
//! validator that runs them, and semantic checks against the project on disk.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Validation logic (no I/O operations)
//! - [`infra`] - Infrastructure layer (filesystem)
//! - [`config`] - Configuration, constants and the built-in schema
//! - [`error`] - Error types and handling
//!
//! # Example
//!
//! ```
//! use mbt::core::schema::compile_schema_text;
//!
//! let schema = compile_schema_text("type: map\nmapping:\n  ID: {required: true}\n");
//! let issues = schema.validate(b"version: 1.0.0\n").unwrap();
//! assert_eq!(issues[0].message, "Missing required property <ID> in <root>");
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;

#[cfg(test)]
pub mod test_utils;
