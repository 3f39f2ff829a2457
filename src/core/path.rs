//! Location of a node inside a document
//!
//! Paths are immutable; descending into a property or element returns a new
//! path, so sibling checks never observe each other's segments.

use std::fmt;

use crate::config::defaults::ROOT_PATH_NAME;

/// Ordered list of property names and `[i]` index segments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    segments: Vec<String>,
}

impl Path {
    /// The document root
    pub fn root() -> Self {
        Self::default()
    }

    /// Path extended with a property name
    #[must_use]
    pub fn child(&self, name: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(name.to_string());
        Self { segments }
    }

    /// Path extended with a sequence index
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(format!("[{index}]"));
        Self { segments }
    }

    /// Path without its last segment
    #[must_use]
    pub fn parent(&self) -> Self {
        let mut segments = self.segments.clone();
        segments.pop();
        Self { segments }
    }

    /// Last segment, if any
    pub fn leaf(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Raw segments
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for Path {
    /// `root` for the root, `root.name` for a top-level property, and dotted
    /// segments below that with indices attached as `classes[1]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = match self.segments.as_slice() {
            [] => return f.write_str(ROOT_PATH_NAME),
            [single] => format!("{ROOT_PATH_NAME}.{single}"),
            segments => segments.join("."),
        };
        f.write_str(&joined.replace(".[", "["))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::MIN_PROPTEST_ITERATIONS;
    use proptest::prelude::*;

    #[test]
    fn test_root_renders_as_root() {
        assert_eq!(Path::root().to_string(), "root");
    }

    #[test]
    fn test_single_segment_is_root_qualified() {
        assert_eq!(Path::root().child("firstName").to_string(), "root.firstName");
    }

    #[test]
    fn test_index_attaches_without_dot() {
        let path = Path::root().child("classes").index(1);
        assert_eq!(path.to_string(), "classes[1]");
        assert_eq!(path.child("name").to_string(), "classes[1].name");
    }

    #[test]
    fn test_nested_indices() {
        let path = Path::root().child("modules").index(0).child("requires").index(2);
        assert_eq!(path.to_string(), "modules[0].requires[2]");
    }

    #[test]
    fn test_top_level_index() {
        assert_eq!(Path::root().index(0).to_string(), "root[0]");
    }

    #[test]
    fn test_parent_and_leaf() {
        let path = Path::root().child("modules").index(1).child("type");
        assert_eq!(path.leaf(), Some("type"));
        assert_eq!(path.parent().to_string(), "modules[1]");
        assert_eq!(Path::root().child("age").parent().to_string(), "root");
    }

    #[test]
    fn test_child_does_not_mutate_original() {
        let base = Path::root().child("a");
        let _ = base.child("b");
        let _ = base.index(3);
        assert_eq!(base.segments(), ["a".to_string()]);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(MIN_PROPTEST_ITERATIONS))]

        /// Rendered paths never contain a dot before an index
        #[test]
        fn prop_rendered_path_has_no_dot_before_index(
            names in proptest::collection::vec("[a-z][a-z0-9-]{0,10}", 1..5),
            indices in proptest::collection::vec(0usize..20, 1..5),
        ) {
            let mut path = Path::root();
            for (name, index) in names.iter().zip(indices.iter()) {
                path = path.child(name).index(*index);
            }
            let rendered = path.to_string();
            prop_assert!(!rendered.contains(".["), "bad path: {}", rendered);
        }
    }
}
