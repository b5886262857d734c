//! Conversion from materialized nodes into typed record fields.

use super::Node;
use crate::schema::Record;
use crate::Result;

/// Types that can be extracted from a materialized [`Node`].
pub trait FromNode: Sized {
    /// Whether a field of this type may be absent from the wire object.
    const OPTIONAL: bool = false;

    /// Convert a present value.
    fn from_node(node: Node) -> Result<Self>;

    /// The value to use when the field is absent, if absence is allowed.
    fn absent() -> Option<Self> {
        None
    }
}

/// Extract a record of type `T` from a node, checking the matched schema.
pub fn record_from_node<T: Record>(node: Node) -> Result<T> {
    match node {
        Node::Record(record) => record.into_typed(),
        other => Err(other.unexpected(&format!("record {}", T::schema().name))),
    }
}

impl FromNode for Node {
    fn from_node(node: Node) -> Result<Self> {
        Ok(node)
    }
}

impl FromNode for String {
    fn from_node(node: Node) -> Result<Self> {
        match node {
            Node::String(value) => Ok(value),
            other => Err(other.unexpected("string")),
        }
    }
}

impl FromNode for i64 {
    fn from_node(node: Node) -> Result<Self> {
        match node {
            Node::Integer(value) => Ok(value),
            other => Err(other.unexpected("integer")),
        }
    }
}

impl FromNode for bool {
    fn from_node(node: Node) -> Result<Self> {
        match node {
            Node::Bool(value) => Ok(value),
            other => Err(other.unexpected("boolean")),
        }
    }
}

impl<T: FromNode> FromNode for Option<T> {
    const OPTIONAL: bool = true;

    fn from_node(node: Node) -> Result<Self> {
        match node {
            Node::Null => Ok(None),
            other => T::from_node(other).map(Some),
        }
    }

    fn absent() -> Option<Self> {
        Some(None)
    }
}

impl<T: FromNode> FromNode for Vec<T> {
    fn from_node(node: Node) -> Result<Self> {
        match node {
            Node::List(items) => items.into_iter().map(T::from_node).collect(),
            other => Err(other.unexpected("list")),
        }
    }
}

impl<T: FromNode> FromNode for Box<T> {
    const OPTIONAL: bool = T::OPTIONAL;

    fn from_node(node: Node) -> Result<Self> {
        T::from_node(node).map(Box::new)
    }

    fn absent() -> Option<Self> {
        T::absent().map(Box::new)
    }
}
