//! The materialized value tree produced by the deserializer.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate};
use rust_decimal::Decimal;

use super::FromNode;
use crate::schema::{EnumSchema, Record, RecordSchema, Wire};
use crate::{Error, Result};

/// A JSON value after structural matching and field conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// JSON `null`
    Null,
    /// JSON boolean
    Bool(bool),
    /// Integral number that fits in an `i64`
    Integer(i64),
    /// Inexact number (decimal parsing disabled)
    Float(f64),
    /// Exact number
    Decimal(Decimal),
    /// String
    String(String),
    /// Parsed calendar date
    Date(NaiveDate),
    /// Parsed timestamp
    DateTime(DateTime<FixedOffset>),
    /// Resolved enum member
    Enum(EnumMember),
    /// JSON array
    List(Vec<Node>),
    /// An object that matched no known record type
    Map(BTreeMap<String, Node>),
    /// An object matched to a record type
    Record(RecordInstance),
}

impl Node {
    /// A short description of the node's kind, for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Null => "null",
            Node::Bool(_) => "boolean",
            Node::Integer(_) => "integer",
            Node::Float(_) => "float",
            Node::Decimal(_) => "decimal",
            Node::String(_) => "string",
            Node::Date(_) => "date",
            Node::DateTime(_) => "timestamp",
            Node::Enum(_) => "enum member",
            Node::List(_) => "list",
            Node::Map(_) => "unmatched object",
            Node::Record(_) => "record",
        }
    }

    /// Returns `true` for `null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    /// Look up a key on a record or unmatched object.
    pub fn get(&self, key: &str) -> Option<&Node> {
        match self {
            Node::Record(record) => record.get(key),
            Node::Map(map) => map.get(key),
            _ => None,
        }
    }

    /// The matched record, if this node is one.
    pub fn as_record(&self) -> Option<&RecordInstance> {
        match self {
            Node::Record(record) => Some(record),
            _ => None,
        }
    }

    /// The unmatched object, if this node is one.
    pub fn as_map(&self) -> Option<&BTreeMap<String, Node>> {
        match self {
            Node::Map(map) => Some(map),
            _ => None,
        }
    }

    /// The string value, if this node is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::String(value) => Some(value),
            _ => None,
        }
    }

    pub(crate) fn unexpected(&self, expected: &str) -> Error {
        let found = match self {
            Node::Record(record) => format!("record {}", record.name()),
            Node::Map(map) => format!(
                "unmatched object with keys [{}]",
                map.keys().map(String::as_str).collect::<Vec<_>>().join(", ")
            ),
            other => other.kind_name().to_string(),
        };
        Error::Decode(format!("expected {}, found {}", expected, found))
    }
}

/// A resolved enum member: its schema plus the member index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumMember {
    schema: &'static EnumSchema,
    index: usize,
}

impl EnumMember {
    pub(crate) fn new(schema: &'static EnumSchema, index: usize) -> Self {
        Self { schema, index }
    }

    /// The enum's schema.
    pub fn schema(&self) -> &'static EnumSchema {
        self.schema
    }

    /// Position of the member within its schema.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Rust variant name of the member.
    pub fn name(&self) -> &'static str {
        self.schema.member(self.index).map_or("?", |member| member.name)
    }

    /// Wire value of the member.
    pub fn wire(&self) -> Option<Wire> {
        self.schema.member(self.index).map(|member| member.wire)
    }
}

impl fmt::Display for EnumMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.schema.name, self.name())
    }
}

/// An object matched to a record schema, with its converted field values.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordInstance {
    schema: &'static RecordSchema,
    fields: BTreeMap<String, Node>,
}

impl RecordInstance {
    /// Create an instance from already-converted field values.
    pub fn new(schema: &'static RecordSchema, fields: BTreeMap<String, Node>) -> Self {
        Self { schema, fields }
    }

    /// The matched schema.
    pub fn schema(&self) -> &'static RecordSchema {
        self.schema
    }

    /// The matched record type name.
    pub fn name(&self) -> &'static str {
        self.schema.name
    }

    /// Field value by wire name.
    pub fn get(&self, field: &str) -> Option<&Node> {
        self.fields.get(field)
    }

    /// All present field values.
    pub fn fields(&self) -> &BTreeMap<String, Node> {
        &self.fields
    }

    /// Consume the instance, returning its field values.
    pub fn into_fields(self) -> BTreeMap<String, Node> {
        self.fields
    }

    /// Remove a field and convert it to `T`.
    ///
    /// An absent field falls back to [`FromNode::absent`], so optional
    /// fields become `None` and required ones are a decode error.
    pub fn take<T: FromNode>(&mut self, field: &str) -> Result<T> {
        let name = self.schema.name;
        match self.fields.remove(field) {
            Some(node) => T::from_node(node).map_err(|err| match err {
                Error::Decode(message) => {
                    Error::Decode(format!("{}.{}: {}", name, field, message))
                }
                other => other,
            }),
            None => T::absent().ok_or_else(|| {
                Error::Decode(format!("{}: missing required field '{}'", name, field))
            }),
        }
    }

    /// Convert into the typed record `T`, checking the schema matches.
    pub fn into_typed<T: Record>(self) -> Result<T> {
        if self.schema != T::schema() {
            return Err(Error::Decode(format!(
                "expected record {}, found record {}",
                T::schema().name,
                self.schema.name
            )));
        }
        T::from_record(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldKind, FieldSchema, ValueKind};

    static PERSON: RecordSchema = RecordSchema {
        name: "Person",
        fields: &[
            FieldSchema { name: "age", kind: FieldKind::Single(ValueKind::Integer), optional: false },
            FieldSchema { name: "name", kind: FieldKind::Single(ValueKind::Str), optional: true },
        ],
    };

    fn person(age: i64) -> RecordInstance {
        RecordInstance::new(&PERSON, BTreeMap::from([("age".to_string(), Node::Integer(age))]))
    }

    #[test]
    fn test_take_present_and_optional_fields() {
        let mut record = person(38);
        assert_eq!(record.take::<i64>("age").unwrap(), 38);
        assert_eq!(record.take::<Option<String>>("name").unwrap(), None);
    }

    #[test]
    fn test_take_missing_required_field() {
        let mut record = person(38);
        let err = record.take::<String>("nickname").unwrap_err();
        assert_eq!(err.to_string(), "Decode error: Person: missing required field 'nickname'");
    }

    #[test]
    fn test_take_wrong_kind_names_the_field() {
        let mut record = person(38);
        let err = record.take::<String>("age").unwrap_err();
        assert_eq!(err.to_string(), "Decode error: Person.age: expected string, found integer");
    }

    #[test]
    fn test_node_get_on_record_and_map() {
        let record = Node::Record(person(7));
        assert_eq!(record.get("age"), Some(&Node::Integer(7)));
        let map = Node::Map(BTreeMap::from([("k".to_string(), Node::Bool(true))]));
        assert_eq!(map.get("k"), Some(&Node::Bool(true)));
        assert_eq!(Node::Null.get("k"), None);
    }
}
