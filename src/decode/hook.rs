//! The per-object materialization callback.

use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDate};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::{DecodeConfig, EnumMember, Node, RecordInstance};
use crate::schema::{FieldKind, FieldSchema, ModelTreeWalker, RecordSchema, ValueKind};
use crate::{Error, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";
const DATETIME_ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";

/// Matches parsed JSON objects to record types and converts their fields.
///
/// A hook is built for one root record and one [`DecodeConfig`]. Its
/// candidate list is every record reachable from the root, in
/// [`ModelTreeWalker`] order, and the first candidate that declares all
/// of an object's keys wins.
#[derive(Debug)]
pub struct ObjectHook {
    root: &'static RecordSchema,
    candidates: Vec<&'static RecordSchema>,
    config: DecodeConfig,
}

impl ObjectHook {
    /// Build the hook for `root`.
    pub fn new(root: &'static RecordSchema, config: DecodeConfig) -> Self {
        Self {
            root,
            candidates: ModelTreeWalker::new(root).collect(),
            config,
        }
    }

    /// The root record this hook was built for.
    pub fn root(&self) -> &'static RecordSchema {
        self.root
    }

    /// Candidate records, in matching order.
    pub fn candidates(&self) -> &[&'static RecordSchema] {
        &self.candidates
    }

    /// The conversion settings.
    pub fn config(&self) -> DecodeConfig {
        self.config
    }

    /// The first candidate declaring every key of `object`.
    pub fn match_record(&self, object: &BTreeMap<String, Node>) -> Option<&'static RecordSchema> {
        self.candidates
            .iter()
            .copied()
            .find(|candidate| candidate.declares_all(object.keys().map(String::as_str)))
    }

    /// Materialize one object whose children are already materialized.
    ///
    /// Unmatched objects are returned as [`Node::Map`].
    pub fn apply(&self, object: BTreeMap<String, Node>) -> Result<Node> {
        let Some(schema) = self.match_record(&object) else {
            warn!(
                root = self.root.name,
                keys = ?object.keys().collect::<Vec<_>>(),
                "object matched no known record; passing through"
            );
            return Ok(Node::Map(object));
        };

        let fields = object
            .into_iter()
            .map(|(key, value)| {
                let value = match schema.field(&key) {
                    Some(field) => self.convert(field, value)?,
                    None => value,
                };
                Ok((key, value))
            })
            .collect::<Result<BTreeMap<_, _>>>()?;

        Ok(Node::Record(RecordInstance::new(schema, fields)))
    }

    fn convert(&self, field: &FieldSchema, value: Node) -> Result<Node> {
        let kind = match field.kind {
            // List elements were materialized by their own hook calls.
            FieldKind::List(_) => return Ok(value),
            FieldKind::Single(kind) => kind,
        };

        match (kind, value) {
            (ValueKind::Date, Node::String(raw)) if self.config.parse_dates => {
                parse_date(field.name, &raw).map(Node::Date)
            }
            (ValueKind::DateTime, Node::String(raw)) if self.config.parse_dates => {
                parse_datetime(field.name, &raw).map(Node::DateTime)
            }
            (ValueKind::Number, Node::Integer(value)) => Ok(self.integer_number(value)),
            (ValueKind::Number, Node::String(raw)) => self
                .number_from_text(raw.trim())
                .ok_or_else(|| Error::format(field.name, raw, "number")),
            (ValueKind::Enum(schema), raw @ (Node::String(_) | Node::Integer(_)))
                if self.config.parse_enums =>
            {
                match schema.position(&raw) {
                    Some(index) => Ok(Node::Enum(EnumMember::new(schema, index))),
                    None => {
                        debug!(field = field.name, enum_type = schema.name, value = ?raw, "unknown enum value");
                        Ok(raw)
                    }
                }
            }
            (_, value) => Ok(value),
        }
    }

    fn integer_number(&self, value: i64) -> Node {
        if self.config.use_decimals {
            Node::Decimal(Decimal::from(value))
        } else {
            Node::Float(value as f64)
        }
    }

    /// Convert numeric text to the configured precision.
    pub(crate) fn number_from_text(&self, text: &str) -> Option<Node> {
        number_from_text(text, self.config.use_decimals)
    }
}

/// Numbers outside `Decimal`'s range fall back to `f64`.
pub(crate) fn number_from_text(text: &str, use_decimals: bool) -> Option<Node> {
    if use_decimals {
        if let Ok(value) = Decimal::from_str(text).or_else(|_| Decimal::from_scientific(text)) {
            return Some(Node::Decimal(value));
        }
    }
    text.parse::<f64>().ok().map(Node::Float)
}

fn parse_date(field: &str, raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| Error::format(field, raw, "date (YYYY-MM-DD)"))
}

fn parse_datetime(field: &str, raw: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_str(raw, DATETIME_FORMAT)
        .or_else(|_| DateTime::parse_from_str(raw, DATETIME_ISO_FORMAT))
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .map_err(|_| Error::format(field, raw, "timestamp (YYYY-MM-DD HH:MM:SS +ZZZZ)"))
}
