//! Generic YAML node accessor
//!
//! A [`Node`] is a borrowed, read-only view over a parsed [`serde_yaml::Value`]
//! tree. Navigating to a key or index that does not exist yields
//! [`Node::Missing`] instead of an error, so checks can decide for themselves
//! whether absence matters. A key whose value is YAML `null` (`type:`) is
//! absent as well.

use std::fmt;

use serde_yaml::{Mapping, Value};

use crate::error::NodeTypeError;

/// Structural kind of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Key/value mapping
    Map,
    /// Ordered list
    Sequence,
    /// String, number or boolean
    Scalar,
    /// No value at this location
    Missing,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Map => "map",
            Self::Sequence => "sequence",
            Self::Scalar => "scalar",
            Self::Missing => "missing",
        };
        f.write_str(name)
    }
}

/// Read-only view over a YAML value
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    /// A mapping
    Map(&'a Mapping),
    /// A sequence
    Sequence(&'a [Value]),
    /// A string, number or boolean
    Scalar(&'a Value),
    /// Nothing at this location
    Missing,
}

/// Parse YAML bytes into an owned value tree
pub fn parse(content: &[u8]) -> Result<Value, serde_yaml::Error> {
    serde_yaml::from_slice(content)
}

impl<'a> Node<'a> {
    /// Wrap a parsed value
    ///
    /// Tagged values are viewed through their inner value and `null` is
    /// [`Node::Missing`].
    pub fn new(value: &'a Value) -> Self {
        match value {
            Value::Mapping(map) => Self::Map(map),
            Value::Sequence(seq) => Self::Sequence(seq),
            Value::Tagged(tagged) => Self::new(&tagged.value),
            Value::Null => Self::Missing,
            scalar => Self::Scalar(scalar),
        }
    }

    /// Structural kind of this node
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Map(_) => NodeKind::Map,
            Self::Sequence(_) => NodeKind::Sequence,
            Self::Scalar(_) => NodeKind::Scalar,
            Self::Missing => NodeKind::Missing,
        }
    }

    /// Whether a value exists at this location
    pub fn is_found(&self) -> bool {
        !matches!(self, Self::Missing)
    }

    /// Whether this node is a mapping
    pub fn is_map(&self) -> bool {
        matches!(self, Self::Map(_))
    }

    /// Whether this node is a sequence
    pub fn is_sequence(&self) -> bool {
        matches!(self, Self::Sequence(_))
    }

    /// Navigate to a mapping entry by key
    ///
    /// Keys are compared by their literal form, so `1: x` is reachable as `"1"`.
    /// Any node other than a map yields [`Node::Missing`].
    pub fn get(&self, key: &str) -> Node<'a> {
        let Self::Map(map) = self else {
            return Self::Missing;
        };
        if let Some(value) = map.get(key) {
            return Node::new(value);
        }
        map.iter()
            .find(|(k, _)| Node::new(k).literal().as_deref() == Some(key))
            .map_or(Self::Missing, |(_, v)| Node::new(v))
    }

    /// Navigate to a sequence element by index
    pub fn index(&self, index: usize) -> Node<'a> {
        match self {
            Self::Sequence(items) => items.get(index).map_or(Self::Missing, Node::new),
            _ => Self::Missing,
        }
    }

    /// Mapping entries in declaration order, keyed by their literal form
    pub fn entries(&self) -> Vec<(String, Node<'a>)> {
        match self {
            Self::Map(map) => map
                .iter()
                .map(|(k, v)| (Node::new(k).literal().unwrap_or_default(), Node::new(v)))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Sequence elements in document order
    pub fn elements(&self) -> Vec<Node<'a>> {
        match self {
            Self::Sequence(items) => items.iter().map(Node::new).collect(),
            _ => Vec::new(),
        }
    }

    /// Typed access to a mapping
    pub fn as_map(&self) -> Result<Option<&'a Mapping>, NodeTypeError> {
        match self {
            Self::Map(map) => Ok(Some(map)),
            Self::Missing => Ok(None),
            other => Err(other.mismatch("map")),
        }
    }

    /// Typed access to a sequence
    pub fn as_sequence(&self) -> Result<Option<&'a [Value]>, NodeTypeError> {
        match self {
            Self::Sequence(items) => Ok(Some(items)),
            Self::Missing => Ok(None),
            other => Err(other.mismatch("sequence")),
        }
    }

    /// Typed access to a boolean scalar
    pub fn as_bool(&self) -> Result<Option<bool>, NodeTypeError> {
        match self {
            Self::Scalar(Value::Bool(b)) => Ok(Some(*b)),
            Self::Missing => Ok(None),
            other => Err(other.mismatch("boolean")),
        }
    }

    /// Typed access to a string scalar
    pub fn as_str(&self) -> Result<Option<&'a str>, NodeTypeError> {
        match self {
            Self::Scalar(Value::String(s)) => Ok(Some(s.as_str())),
            Self::Missing => Ok(None),
            other => Err(other.mismatch("string")),
        }
    }

    /// Canonical literal form of a scalar
    ///
    /// Strings are returned verbatim, booleans as `true`/`false` and numbers
    /// in their decimal form. Maps, sequences, `null` and missing nodes have no
    /// literal form.
    pub fn literal(&self) -> Option<String> {
        let Self::Scalar(value) = self else {
            return None;
        };
        match value {
            Value::String(s) => Some(s.clone()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Number(n) => Some(n.to_string()),
            Value::Tagged(tagged) => Node::new(&tagged.value).literal(),
            Value::Null | Value::Mapping(_) | Value::Sequence(_) => None,
        }
    }

    fn mismatch(&self, expected: &'static str) -> NodeTypeError {
        NodeTypeError {
            expected,
            found: self.kind(),
        }
    }
}
