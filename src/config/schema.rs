//! Built-in descriptor meta-schema
//!
//! The schema is plain YAML using the `type`/`mapping`/`sequence` grammar
//! understood by [`crate::core::schema`]. It is embedded at compile time so a
//! built binary can never fail to locate it.

/// Meta-schema for `mta.yaml` descriptors
pub const MTA_SCHEMA: &str = include_str!("mta_schema.yaml");
