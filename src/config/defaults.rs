//! Default configuration values

/// Default descriptor file name, relative to the project directory
pub const DEFAULT_DESCRIPTOR: &str = "mta.yaml";

/// Default project directory
pub const DEFAULT_SOURCE: &str = ".";

/// Number of allowed enum values quoted in an enum mismatch message
pub const ENUM_VALUES_IN_MESSAGE: usize = 4;

/// Name rendered for the document root in issue paths
pub const ROOT_PATH_NAME: &str = "root";

/// Prefix of every schema authoring issue
pub const SCHEMA_ISSUE_PREFIX: &str = "invalid YAML schema: ";

/// Minimum proptest iterations
pub const MIN_PROPTEST_ITERATIONS: u32 = 100;
