//! Minimal descriptor model
//!
//! Only the parts of a descriptor the semantic checks look at. Every field is
//! lenient: structural problems are the schema validator's concern, so absent
//! sections deserialize to empty values and unknown keys are ignored.

use serde::Deserialize;

/// Modules of a descriptor
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Descriptor {
    /// Modules in declaration order
    pub modules: Vec<Module>,
}

/// A buildable unit of the project
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Module {
    pub name: String,
    /// Directory relative to the project root; empty means the module name
    pub path: String,
}

impl Module {
    /// Create a module with a name and a path
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Directory of the module relative to the project root
    pub fn relative_path(&self) -> &str {
        if self.path.is_empty() {
            &self.name
        } else {
            &self.path
        }
    }
}

impl Descriptor {
    /// Deserialize descriptor bytes
    pub fn from_slice(content: &[u8]) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_slice(content)
    }
}
