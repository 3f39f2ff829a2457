//! Infrastructure layer
//!
//! Handles the filesystem access needed by validation. This module is the only
//! place where side effects occur.

pub mod filesystem;
