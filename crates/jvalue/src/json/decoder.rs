//! JSON text decoder.
//!
//! Text is first read into a `serde_json` tree (with `preserve_order` so
//! object keys keep their document order, and `arbitrary_precision` so number
//! literals keep their exact text). The tree is then walked once, each scalar
//! node being converted from its literal text according to its [`NodeKind`].
//! A number node the decimal type cannot hold fails the whole decode.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::Value as JsonNode;

use super::error::ParseError;
use crate::number::parse_number_literal;
use crate::value::Value;

/// Kind label attached to a node of the intermediate tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Object,
    Array,
    String,
    Number,
    Boolean,
    Null,
}

impl NodeKind {
    pub fn of(node: &JsonNode) -> Self {
        match node {
            JsonNode::Object(_) => NodeKind::Object,
            JsonNode::Array(_) => NodeKind::Array,
            JsonNode::String(_) => NodeKind::String,
            JsonNode::Number(_) => NodeKind::Number,
            JsonNode::Bool(_) => NodeKind::Boolean,
            JsonNode::Null => NodeKind::Null,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Object => "object",
            NodeKind::Array => "array",
            NodeKind::String => "string",
            NodeKind::Number => "number",
            NodeKind::Boolean => "boolean",
            NodeKind::Null => "null",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct JsonDecoder;

impl JsonDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Decode a complete JSON document.
    ///
    /// Whitespace-only input is reported as [`ParseError::Empty`] rather than
    /// as a syntax error.
    pub fn decode(&self, text: &str) -> Result<Value, ParseError> {
        if text.trim().is_empty() {
            return Err(ParseError::Empty);
        }
        let tree: JsonNode = serde_json::from_str(text)?;
        from_tree(tree)
    }
}

/// Convert an intermediate tree into a [`Value`], consuming it.
pub fn from_tree(node: JsonNode) -> Result<Value, ParseError> {
    Ok(match node {
        JsonNode::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, child)| Ok((key, from_tree(child)?)))
                .collect::<Result<_, ParseError>>()?,
        ),
        JsonNode::Array(items) => Value::Array(
            items
                .into_iter()
                .map(from_tree)
                .collect::<Result<_, _>>()?,
        ),
        JsonNode::Number(n) => {
            let text = n.to_string();
            match parse_number_literal(&text) {
                Some(number) => Value::Number(number),
                None => return Err(ParseError::NumberOutOfRange(text)),
            }
        }
        JsonNode::String(s) => convert_scalar(NodeKind::String, s),
        JsonNode::Bool(b) => convert_scalar(NodeKind::Boolean, b.to_string()),
        JsonNode::Null => Value::Null,
    })
}

/// Build the scalar a node of `kind` with literal `text` stands for.
///
/// Numbers accept `0x` hex as well as plain and scientific decimal literals;
/// text that cannot be read as a number gives `0`. Container kinds have no
/// scalar form and give `Null`.
pub fn convert_scalar(kind: NodeKind, text: String) -> Value {
    match kind {
        NodeKind::String => Value::String(text),
        NodeKind::Number => Value::Number(parse_number_literal(&text).unwrap_or(Decimal::ZERO)),
        NodeKind::Boolean => Value::Bool(text.eq_ignore_ascii_case("true")),
        NodeKind::Null | NodeKind::Object | NodeKind::Array => Value::Null,
    }
}

impl Value {
    /// Parse a JSON document.
    ///
    /// ```
    /// use jvalue::Value;
    ///
    /// let value = Value::parse(r#"{"price": 0.10, "tags": ["a"]}"#).unwrap();
    /// assert_eq!(value["price"].to_string(), "0.10");
    /// assert_eq!(value["tags"][0].as_string(), "a");
    /// ```
    pub fn parse(text: &str) -> Result<Value, ParseError> {
        JsonDecoder::new().decode(text)
    }

    /// Replace this value with the parsed document. On error the value is
    /// left untouched.
    pub fn parse_into(&mut self, text: &str) -> Result<(), ParseError> {
        *self = Value::parse(text)?;
        Ok(())
    }

    /// Parse a JSON document, logging and discarding any error.
    pub fn try_parse(text: &str) -> Option<Value> {
        match Value::parse(text) {
            Ok(value) => Some(value),
            Err(error) => {
                tracing::warn!(%error, len = text.len(), "failed to parse JSON text");
                None
            }
        }
    }
}

impl FromStr for Value {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Value::parse(text)
    }
}
