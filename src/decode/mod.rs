//! The type-introspecting deserializer.
//!
//! [`ModelDeserializer`] turns untyped JSON into typed records without
//! being told which record each nested object is. JSON is parsed with
//! exact number text preserved, then folded bottom-up: numbers are
//! converted first, and each object is handed to an [`ObjectHook`] after
//! its children, so nested objects are already records (or unmatched
//! maps) when their parent is matched.
//!
//! # Example
//!
//! ```
//! use prosper_rs::decode::{DecodeConfig, ModelDeserializer};
//! use prosper_rs::models::Account;
//!
//! let serde = ModelDeserializer::new(DecodeConfig::default());
//! let account: Account = serde
//!     .deserialize_as(r#"{"available_cash_balance": 4.25, "total_account_value": 100}"#)
//!     .unwrap();
//! assert_eq!(account.available_cash_balance.unwrap().to_string(), "4.25");
//! ```

mod from_node;
mod hook;
mod node;
mod values;

use std::collections::{BTreeMap, HashMap};
use std::io::Read;
use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::{Number, Value};

use crate::config::Config;
use crate::schema::{Record, RecordSchema};
use crate::{Error, Result};

pub use from_node::{record_from_node, FromNode};
pub use hook::ObjectHook;
pub use node::{EnumMember, Node, RecordInstance};
pub use values::{Amount, DateValue, EnumValue, RawWire, Timestamp};

/// Conversion toggles, fixed for a deserializer's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecodeConfig {
    /// Materialize numbers as exact decimals rather than floats
    pub use_decimals: bool,
    /// Parse date and timestamp strings
    pub parse_dates: bool,
    /// Resolve enum wire values to members
    pub parse_enums: bool,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            use_decimals: true,
            parse_dates: true,
            parse_enums: true,
        }
    }
}

impl DecodeConfig {
    /// Set decimal (exact) number handling.
    pub fn with_decimals(mut self, enabled: bool) -> Self {
        self.use_decimals = enabled;
        self
    }

    /// Set date parsing.
    pub fn with_dates(mut self, enabled: bool) -> Self {
        self.parse_dates = enabled;
        self
    }

    /// Set enum resolution.
    pub fn with_enums(mut self, enabled: bool) -> Self {
        self.parse_enums = enabled;
        self
    }

    /// Read the `[serde]` section of a configuration.
    pub fn from_config(config: &Config) -> Self {
        config.decode_config()
    }
}

/// Deserializes JSON into records reachable from a root record type.
///
/// Object hooks are memoized per root record on this instance, so
/// deserializers with different settings never share a hook.
#[derive(Debug, Default)]
pub struct ModelDeserializer {
    config: DecodeConfig,
    hooks: Mutex<HashMap<&'static str, Arc<ObjectHook>>>,
}

impl ModelDeserializer {
    /// Create a deserializer with the given settings.
    pub fn new(config: DecodeConfig) -> Self {
        Self {
            config,
            hooks: Mutex::new(HashMap::new()),
        }
    }

    /// The settings this deserializer was built with.
    pub fn config(&self) -> DecodeConfig {
        self.config
    }

    /// The memoized hook for `root`, building it on first use.
    pub fn object_hook(&self, root: &'static RecordSchema) -> Arc<ObjectHook> {
        let mut hooks = self.hooks.lock();
        hooks
            .entry(root.name)
            .or_insert_with(|| Arc::new(ObjectHook::new(root, self.config)))
            .clone()
    }

    /// Deserialize JSON text against `root`.
    pub fn deserialize(&self, input: &str, root: &'static RecordSchema) -> Result<Node> {
        let value: Value = serde_json::from_str(input)?;
        self.deserialize_value(value, root)
    }

    /// Deserialize JSON from a reader against `root`.
    pub fn deserialize_reader<R: Read>(&self, reader: R, root: &'static RecordSchema) -> Result<Node> {
        let value: Value = serde_json::from_reader(reader)?;
        self.deserialize_value(value, root)
    }

    /// Deserialize an already-parsed JSON value against `root`.
    pub fn deserialize_value(&self, value: Value, root: &'static RecordSchema) -> Result<Node> {
        let hook = self.object_hook(root);
        self.fold(&hook, value)
    }

    /// Deserialize JSON text into the record type `T`.
    pub fn deserialize_as<T: Record>(&self, input: &str) -> Result<T> {
        T::from_node(self.deserialize(input, T::schema())?)
    }

    /// Deserialize JSON from a reader into the record type `T`.
    pub fn deserialize_reader_as<T: Record, R: Read>(&self, reader: R) -> Result<T> {
        T::from_node(self.deserialize_reader(reader, T::schema())?)
    }

    fn fold(&self, hook: &ObjectHook, value: Value) -> Result<Node> {
        match value {
            Value::Null => Ok(Node::Null),
            Value::Bool(value) => Ok(Node::Bool(value)),
            Value::Number(number) => self.number(&number),
            Value::String(value) => Ok(Node::String(value)),
            Value::Array(items) => items
                .into_iter()
                .map(|item| self.fold(hook, item))
                .collect::<Result<Vec<_>>>()
                .map(Node::List),
            Value::Object(object) => {
                let fields = object
                    .into_iter()
                    .map(|(key, value)| Ok((key, self.fold(hook, value)?)))
                    .collect::<Result<BTreeMap<_, _>>>()?;
                hook.apply(fields)
            }
        }
    }

    fn number(&self, number: &Number) -> Result<Node> {
        if let Some(value) = number.as_i64() {
            return Ok(Node::Integer(value));
        }
        let text = number.to_string();
        hook::number_from_text(&text, self.config.use_decimals)
            .ok_or_else(|| Error::Decode(format!("number {} is out of range", text)))
    }
}
