//! Semantic project validation
//!
//! Checks that need more than the document shape. Every module declared in
//! the descriptor must have its directory under the project root.

use std::path::Path;

use tracing::{debug, info};

use crate::core::descriptor::{Descriptor, Module};
use crate::core::issue::Issue;
use crate::infra::filesystem;

/// Run the semantic checks for a deserialized descriptor
pub fn validate_project(descriptor: &Descriptor, project_root: &Path) -> Vec<Issue> {
    let issues = check_module_paths(&descriptor.modules, project_root);
    info!("Semantic validation produced {} issues", issues.len());
    issues
}

/// Every module directory must exist under the project root
///
/// The directory is the module `path`, or the module name when no path is
/// given. One issue per module, in declaration order.
pub fn check_module_paths(modules: &[Module], project_root: &Path) -> Vec<Issue> {
    modules
        .iter()
        .filter_map(|module| {
            let relative = module.relative_path();
            let exists = filesystem::dir_exists(&project_root.join(relative));
            debug!("Module '{}' at '{relative}': exists={exists}", module.name);
            (!exists).then(|| {
                Issue::new(format!(
                    "Module <{}> not found in project. Expected path: <{relative}>",
                    module.name
                ))
            })
        })
        .collect()
}
