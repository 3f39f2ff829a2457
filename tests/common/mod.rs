//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Test project context
///
/// Creates a temporary directory for test projects and provides
/// utilities for setting up test scenarios.
pub struct TestProject {
    /// Temporary directory for the test project
    pub dir: TempDir,
}

impl TestProject {
    /// Create a new test project in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Create a project holding `descriptor` as `mta.yaml`
    #[allow(dead_code)]
    pub fn with_descriptor(descriptor: &str) -> Self {
        let project = Self::new();
        project.create_file("mta.yaml", descriptor);
        project
    }

    /// Get the path to the test project directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Create a file in the test project
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Create a directory in the test project
    #[allow(dead_code)]
    pub fn create_dir(&self, name: &str) {
        let path = self.dir.path().join(name);
        std::fs::create_dir_all(path).expect("Failed to create directory");
    }

    /// Run `mbt <args>` inside the project directory
    #[allow(dead_code)]
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_mbt"))
            .current_dir(self.path())
            .env_remove("MBT_SOURCE")
            .env_remove("MBT_VALIDATION_MODE")
            .env_remove("RUST_LOG")
            .args(args)
            .output()
            .expect("Failed to execute mbt")
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// A descriptor that passes the built-in schema; needs `srv` and `ui5app` directories
#[allow(dead_code)]
pub const SAMPLE_DESCRIPTOR: &str = r"
_schema-version: '3.1'
ID: bookshop
version: 1.0.0
description: A sample bookshop application
modules:
  - name: srv
    type: nodejs
    path: gen/srv
    provides:
      - name: srv-api
        properties:
          url: https://bookshop.example.com
    requires:
      - name: uaa
  - name: ui5app
    type: html5
    requires:
      - name: srv-api
        properties:
          backend: ~{url}
    build-parameters:
      builder: custom
      supported-platforms: [CF, NEO]
resources:
  - name: uaa
    type: org.cloudfoundry.managed-service
    optional: false
";

/// Directories the sample descriptor's modules live in
#[allow(dead_code)]
pub const SAMPLE_MODULE_DIRS: &[&str] = &["gen/srv", "ui5app"];
