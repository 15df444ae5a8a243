//! Conversion to and from `serde_json::Value`.

use std::str::FromStr;

use serde_json::{Number as JsonNumber, Value as JsonNode};

use crate::json::decoder::from_tree;
use crate::json::encoder::binary_data_uri;
use crate::json::error::ParseError;
use crate::value::Value;

impl Value {
    /// Export as a plain `serde_json` tree.
    ///
    /// Numbers keep their exact decimal text. Binary values become data URI
    /// strings, as in the text encoding.
    pub fn to_json_value(&self) -> JsonNode {
        match self {
            Value::Null => JsonNode::Null,
            Value::Bool(b) => JsonNode::Bool(*b),
            Value::Number(n) => JsonNumber::from_str(&n.to_string())
                .map(JsonNode::Number)
                .unwrap_or(JsonNode::Null),
            Value::String(s) => JsonNode::String(s.clone()),
            Value::Binary(bytes) => JsonNode::String(binary_data_uri(bytes)),
            Value::Array(items) => JsonNode::Array(items.iter().map(Value::to_json_value).collect()),
            Value::Object(map) => JsonNode::Object(
                map.iter()
                    .map(|(key, item)| (key.clone(), item.to_json_value()))
                    .collect(),
            ),
        }
    }
}

impl TryFrom<JsonNode> for Value {
    type Error = ParseError;

    fn try_from(node: JsonNode) -> Result<Self, Self::Error> {
        from_tree(node)
    }
}

impl From<&Value> for JsonNode {
    fn from(value: &Value) -> Self {
        value.to_json_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn exports_every_variant() {
        let mut value = Value::parse(r#"{"n":1.50,"s":"x","l":[true,null]}"#).unwrap();
        value.set("b", Value::from_bytes(b"hi".to_vec()));
        let raw = value.to_json_value();
        assert_eq!(raw["s"], json!("x"));
        assert_eq!(raw["l"], json!([true, null]));
        assert_eq!(raw["b"], json!("data:application/octet-stream;base64,aGk="));
        assert_eq!(serde_json::to_string(&raw["n"]).unwrap(), "1.50");
    }

    #[test]
    fn imports_serde_tree() {
        let value = Value::try_from(json!({"b": 2, "a": [1, "x"]})).unwrap();
        assert_eq!(value.to_string(), r#"{"b":2,"a":[1,"x"]}"#);
    }

    #[test]
    fn import_rejects_unrepresentable_numbers() {
        let result = Value::try_from(json!({"big": 1e300}));
        assert!(matches!(result, Err(ParseError::NumberOutOfRange(_))));
    }

    #[test]
    fn export_keeps_key_order() {
        let value = Value::parse(r#"{"z":1,"a":2}"#).unwrap();
        let raw = JsonNode::from(&value);
        assert_eq!(serde_json::to_string(&raw).unwrap(), r#"{"z":1,"a":2}"#);
    }
}
