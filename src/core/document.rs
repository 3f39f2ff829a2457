//! Document validation
//!
//! Runs compiled checks over a parsed YAML document.

use tracing::debug;

use crate::core::checks::Check;
use crate::core::issue::Issue;
use crate::core::node::{self, Node};
use crate::core::path::Path;

/// Parse `content` and run every check against the document root
///
/// All top-level checks run; nothing short-circuits at this level. A parse
/// failure is returned as the error and no checks are run.
pub fn validate_document(content: &[u8], checks: &[Check]) -> Result<Vec<Issue>, serde_yaml::Error> {
    let value = node::parse(content)?;
    let issues = run_checks(&Node::new(&value), checks);
    debug!("Document validation produced {} issues", issues.len());
    Ok(issues)
}

/// Run checks against an already parsed node, rooted at [`Path::root`]
pub fn run_checks(node: &Node<'_>, checks: &[Check]) -> Vec<Issue> {
    let root = Path::root();
    checks
        .iter()
        .flat_map(|check| check.evaluate(node, &root))
        .collect()
}
