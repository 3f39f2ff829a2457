//! Configuration and constants
//!
//! - [`defaults`] - Default values used across the validator
//! - [`schema`] - The built-in descriptor meta-schema

pub mod defaults;
pub mod schema;
