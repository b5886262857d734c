//! Static schema descriptors for API records and enums.
//!
//! Every record type exposes a [`RecordSchema`]: a small static table of
//! field names and their semantic kinds. The deserializer matches untyped
//! JSON objects against these tables and converts field values according
//! to the declared [`ValueKind`]. Schemas are plain statics, so record
//! graphs may reference each other (and themselves) freely.
//!
//! Records and enums are normally declared with [`define_record!`] and
//! [`wire_enum!`], which generate the Rust type and its schema together.
//!
//! [`define_record!`]: crate::define_record
//! [`wire_enum!`]: crate::wire_enum

mod macros;
mod walker;

use std::fmt;

use crate::decode::{FromNode, Node, RecordInstance};
use crate::Result;

pub use walker::ModelTreeWalker;

/// The semantic kind of a single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Plain string
    Str,
    /// Integral number
    Integer,
    /// Boolean
    Boolean,
    /// Numeric value whose precision (float or decimal) is caller-configurable
    Number,
    /// Calendar date, `YYYY-MM-DD` on the wire
    Date,
    /// Timestamp, `YYYY-MM-DD HH:MM:SS ±ZZZZ` on the wire
    DateTime,
    /// Member of a closed enumeration
    Enum(&'static EnumSchema),
    /// Nested record
    Record(&'static RecordSchema),
    /// Untyped; passed through unchanged
    Any,
}

/// The declared shape of a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A single value
    Single(ValueKind),
    /// A homogeneous list (or set) of values
    List(ValueKind),
}

impl FieldKind {
    /// The kind of the value, or of each element for lists.
    pub fn value_kind(&self) -> ValueKind {
        match self {
            FieldKind::Single(kind) | FieldKind::List(kind) => *kind,
        }
    }

    /// The record type nested in this field, looking through lists.
    pub fn nested_record(&self) -> Option<&'static RecordSchema> {
        match self.value_kind() {
            ValueKind::Record(schema) => Some(schema),
            _ => None,
        }
    }
}

/// A single declared field of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSchema {
    /// Field name as it appears on the wire
    pub name: &'static str,
    /// Declared semantic kind
    pub kind: FieldKind,
    /// Whether the field may be absent from the wire object
    pub optional: bool,
}

/// Schema descriptor for a record type.
///
/// Record identity is the schema name, which must be unique across
/// every record reachable from a deserialization root.
pub struct RecordSchema {
    /// Record type name
    pub name: &'static str,
    /// Declared fields, in declaration order
    pub fields: &'static [FieldSchema],
}

impl RecordSchema {
    /// Look up a declared field by wire name.
    pub fn field(&self, name: &str) -> Option<&'static FieldSchema> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Returns `true` if every key is a declared field of this record.
    ///
    /// Declared fields that are missing from `keys` do not matter, which
    /// is what lets objects with omitted optional fields still match.
    pub fn declares_all<'a>(&self, mut keys: impl Iterator<Item = &'a str>) -> bool {
        keys.all(|key| self.field(key).is_some())
    }

    /// Names of the fields that must be present on the wire.
    pub fn required_fields(&self) -> impl Iterator<Item = &'static str> {
        self.fields
            .iter()
            .filter(|field| !field.optional)
            .map(|field| field.name)
    }
}

impl PartialEq for RecordSchema {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for RecordSchema {}

// Field kinds can point back at their own record, so Debug stays shallow.
impl fmt::Debug for RecordSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordSchema")
            .field("name", &self.name)
            .field("fields", &self.fields.len())
            .finish()
    }
}

/// A raw enum value as it appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Wire {
    /// String-valued member
    Str(&'static str),
    /// Integer-valued member
    Int(i64),
}

impl Wire {
    /// Returns `true` if the raw node carries this wire value.
    pub fn matches(&self, node: &Node) -> bool {
        match (self, node) {
            (Wire::Str(wire), Node::String(raw)) => wire == raw,
            (Wire::Int(wire), Node::Integer(raw)) => wire == raw,
            _ => false,
        }
    }

    /// Returns `true` if `raw` is the textual form of this wire value.
    pub fn matches_str(&self, raw: &str) -> bool {
        match self {
            Wire::Str(wire) => *wire == raw,
            Wire::Int(wire) => raw.trim().parse::<i64>() == Ok(*wire),
        }
    }
}

impl fmt::Display for Wire {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Wire::Str(value) => f.write_str(value),
            Wire::Int(value) => write!(f, "{}", value),
        }
    }
}

/// One member of an enum schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumMemberSchema {
    /// Rust variant name
    pub name: &'static str,
    /// Wire value
    pub wire: Wire,
}

/// Schema descriptor for a closed enumeration.
#[derive(Debug)]
pub struct EnumSchema {
    /// Enum type name
    pub name: &'static str,
    /// Members, in declaration order
    pub members: &'static [EnumMemberSchema],
}

impl EnumSchema {
    /// Index of the member whose wire value equals the raw node.
    pub fn position(&self, raw: &Node) -> Option<usize> {
        self.members.iter().position(|member| member.wire.matches(raw))
    }

    /// The member at `index`.
    pub fn member(&self, index: usize) -> Option<&'static EnumMemberSchema> {
        self.members.get(index)
    }
}

impl PartialEq for EnumSchema {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for EnumSchema {}

/// A record type with a static schema.
///
/// Implemented by [`define_record!`](crate::define_record).
pub trait Record: FromNode {
    /// The record's schema descriptor.
    fn schema() -> &'static RecordSchema;

    /// Build the typed record from a materialized instance of its schema.
    fn from_record(record: RecordInstance) -> Result<Self>;
}

/// An enum type with a static schema.
///
/// Implemented by [`wire_enum!`](crate::wire_enum).
pub trait WireEnum: Copy + 'static {
    /// The enum's schema descriptor.
    fn schema() -> &'static EnumSchema;

    /// Every member, in schema order.
    fn members() -> &'static [Self];

    /// The wire value of this member.
    fn wire(self) -> Wire;

    /// Resolve a textual wire value to a member.
    fn from_wire_str(raw: &str) -> Option<Self> {
        Self::members()
            .iter()
            .copied()
            .find(|member| member.wire().matches_str(raw))
    }
}
