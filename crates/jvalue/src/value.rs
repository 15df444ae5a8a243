//! The [`Value`] tagged union.

use std::fmt;

use indexmap::IndexMap;
use rust_decimal::Decimal;

use crate::json::JsonEncoder;
use crate::number::{decimal_from_f32, decimal_from_f64};

/// Ordered key/value storage of an object value.
pub type Map = IndexMap<String, Value>;

/// A JSON-shaped value.
///
/// Children are owned outright: arrays own their elements and objects own
/// their entries, so cloning a `Value` always yields an independent tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    /// Exact decimal, see [`crate::number`].
    Number(Decimal),
    String(String),
    /// Raw bytes. Not native to JSON; the text encoder writes them as a
    /// base64 data URI string.
    Binary(Vec<u8>),
    Array(Vec<Value>),
    Object(Map),
}

/// Shared `null` returned by read accessors for missing members.
pub(crate) static NULL: Value = Value::Null;

/// Variant tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Binary,
    Array,
    Object,
}

impl ValueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Binary => "binary",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    /// An empty object.
    pub fn object() -> Self {
        Value::Object(Map::new())
    }

    /// An empty array.
    pub fn array() -> Self {
        Value::Array(Vec::new())
    }

    /// A binary value holding `bytes`.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Value::Binary(bytes.into())
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Binary(_) => ValueKind::Binary,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_binary(&self) -> bool {
        matches!(self, Value::Binary(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// `true` for null, the empty string, and empty arrays, objects or blobs.
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            Value::Binary(b) => b.is_empty(),
            Value::Array(items) => items.is_empty(),
            Value::Object(map) => map.is_empty(),
            Value::Bool(_) | Value::Number(_) => false,
        }
    }

    /// Number of direct children: array elements, object entries or blob
    /// bytes. Scalars count as zero.
    pub fn count(&self) -> usize {
        match self {
            Value::Binary(b) => b.len(),
            Value::Array(items) => items.len(),
            Value::Object(map) => map.len(),
            _ => 0,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<Decimal> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Turn this value into an array unless it already is one, discarding
    /// any previous content, and return the elements.
    pub fn ensure_array(&mut self) -> &mut Vec<Value> {
        if !self.is_array() {
            self.log_discard(ValueKind::Array);
            *self = Value::array();
        }
        match self {
            Value::Array(items) => items,
            _ => unreachable!("value was just converted to an array"),
        }
    }

    /// Turn this value into an object unless it already is one, discarding
    /// any previous content, and return the entries.
    pub fn ensure_object(&mut self) -> &mut Map {
        if !self.is_object() {
            self.log_discard(ValueKind::Object);
            *self = Value::object();
        }
        match self {
            Value::Object(map) => map,
            _ => unreachable!("value was just converted to an object"),
        }
    }

    /// Replace this value with `Null`, returning the previous content.
    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }

    fn log_discard(&self, into: ValueKind) {
        if !self.is_null() {
            tracing::debug!(from = %self.kind(), to = %into, "discarding value content on shape change");
        }
    }
}

impl fmt::Display for Value {
    /// Compact JSON; the alternate flag (`{:#}`) pretty-prints with two
    /// spaces per level.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indent = if f.alternate() { "  " } else { "" };
        f.write_str(&JsonEncoder::with_indent(indent).encode(self))
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<Decimal> for Value {
    fn from(value: Decimal) -> Self {
        Value::Number(value)
    }
}

macro_rules! from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Number(Decimal::from(value))
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Number(decimal_from_f32(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(decimal_from_f64(value))
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::String(value.to_string())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::String(value.clone())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Object(map)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Array(iter.into_iter().collect())
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Value::Object(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
