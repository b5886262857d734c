//! Field value types whose representation depends on the decode settings.
//!
//! Numeric, date-like and enum fields can be materialized either in their
//! parsed form or as the raw wire value, depending on [`DecodeConfig`].
//! These wrappers carry both possibilities.
//!
//! [`DecodeConfig`]: super::DecodeConfig

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::{FromNode, Node};
use crate::schema::{Wire, WireEnum};
use crate::{Error, Result};

/// A monetary or ratio amount, exact or inexact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Amount {
    /// Inexact floating point value
    Float(f64),
    /// Exact decimal value
    Decimal(Decimal),
}

impl Amount {
    /// The value as a decimal, if representable.
    pub fn to_decimal(&self) -> Option<Decimal> {
        match self {
            Amount::Decimal(value) => Some(*value),
            Amount::Float(value) => Decimal::try_from(*value).ok(),
        }
    }

    /// The value as a float, if representable.
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Amount::Float(value) => Some(*value),
            Amount::Decimal(value) => value.to_f64(),
        }
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Amount::Decimal(value)
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Amount::Float(value)
    }
}

impl PartialEq<Decimal> for Amount {
    fn eq(&self, other: &Decimal) -> bool {
        self.to_decimal().as_ref() == Some(other)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Float(value) => write!(f, "{}", value),
            Amount::Decimal(value) => write!(f, "{}", value),
        }
    }
}

impl FromNode for Amount {
    fn from_node(node: Node) -> Result<Self> {
        match node {
            Node::Decimal(value) => Ok(Amount::Decimal(value)),
            Node::Float(value) => Ok(Amount::Float(value)),
            Node::Integer(value) => Ok(Amount::Decimal(Decimal::from(value))),
            other => Err(other.unexpected("number")),
        }
    }
}

/// A calendar date, parsed or raw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateValue {
    /// Wire text (date parsing disabled)
    Raw(String),
    /// Parsed date
    Parsed(NaiveDate),
}

impl DateValue {
    /// The parsed date, if parsing was enabled.
    pub fn parsed(&self) -> Option<NaiveDate> {
        match self {
            DateValue::Parsed(date) => Some(*date),
            DateValue::Raw(_) => None,
        }
    }
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateValue::Raw(raw) => f.write_str(raw),
            DateValue::Parsed(date) => write!(f, "{}", date.format("%Y-%m-%d")),
        }
    }
}

impl FromNode for DateValue {
    fn from_node(node: Node) -> Result<Self> {
        match node {
            Node::Date(date) => Ok(DateValue::Parsed(date)),
            Node::String(raw) => Ok(DateValue::Raw(raw)),
            other => Err(other.unexpected("date")),
        }
    }
}

/// A timestamp with offset, parsed or raw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Timestamp {
    /// Wire text (date parsing disabled)
    Raw(String),
    /// Parsed timestamp
    Parsed(DateTime<FixedOffset>),
}

impl Timestamp {
    /// The parsed timestamp, if parsing was enabled.
    pub fn parsed(&self) -> Option<DateTime<FixedOffset>> {
        match self {
            Timestamp::Parsed(timestamp) => Some(*timestamp),
            Timestamp::Raw(_) => None,
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timestamp::Raw(raw) => f.write_str(raw),
            Timestamp::Parsed(timestamp) => write!(f, "{}", timestamp.format("%Y-%m-%d %H:%M:%S %z")),
        }
    }
}

impl FromNode for Timestamp {
    fn from_node(node: Node) -> Result<Self> {
        match node {
            Node::DateTime(timestamp) => Ok(Timestamp::Parsed(timestamp)),
            Node::String(raw) => Ok(Timestamp::Raw(raw)),
            other => Err(other.unexpected("timestamp")),
        }
    }
}

/// A raw enum wire value that was not resolved to a member.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RawWire {
    /// String wire value
    Str(String),
    /// Integer wire value
    Int(i64),
}

impl fmt::Display for RawWire {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawWire::Str(value) => f.write_str(value),
            RawWire::Int(value) => write!(f, "{}", value),
        }
    }
}

/// An enum field: a resolved member, or the raw wire value.
///
/// The raw form appears when enum resolution is disabled, and also when
/// the API sends a value the enum does not (yet) declare.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EnumValue<E> {
    /// Resolved member
    Known(E),
    /// Unresolved wire value
    Raw(RawWire),
}

impl<E: WireEnum> EnumValue<E> {
    /// The resolved member, if any.
    pub fn known(&self) -> Option<E> {
        match self {
            EnumValue::Known(member) => Some(*member),
            EnumValue::Raw(_) => None,
        }
    }

    /// The resolved member, resolving a raw value that names a member.
    ///
    /// Useful when enum resolution was disabled at decode time.
    pub fn resolve(&self) -> Option<E> {
        match self {
            EnumValue::Known(member) => Some(*member),
            EnumValue::Raw(raw) => E::from_wire_str(&raw.to_string()),
        }
    }
}

impl<E: WireEnum> fmt::Display for EnumValue<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnumValue::Known(member) => write!(f, "{}", member.wire()),
            EnumValue::Raw(raw) => write!(f, "{}", raw),
        }
    }
}

impl<E: WireEnum> FromNode for EnumValue<E> {
    fn from_node(node: Node) -> Result<Self> {
        match node {
            Node::Enum(member) if member.schema() == E::schema() => E::members()
                .get(member.index())
                .copied()
                .map(EnumValue::Known)
                .ok_or_else(|| Error::Decode(format!("no member {} in {}", member.index(), E::schema().name))),
            Node::String(raw) => Ok(EnumValue::Raw(RawWire::Str(raw))),
            Node::Integer(raw) => Ok(EnumValue::Raw(RawWire::Int(raw))),
            other => Err(other.unexpected(E::schema().name)),
        }
    }
}

impl From<Wire> for RawWire {
    fn from(wire: Wire) -> Self {
        match wire {
            Wire::Str(value) => RawWire::Str(value.to_string()),
            Wire::Int(value) => RawWire::Int(value),
        }
    }
}
