//! JSON text encoder.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::value::Value;

/// Binary data URI prefix: `data:application/octet-stream;base64,`
pub const BIN_URI_START: &str = "data:application/octet-stream;base64,";

/// Render bytes as a base64 data URI.
pub fn binary_data_uri(bytes: &[u8]) -> String {
    let mut uri = String::with_capacity(BIN_URI_START.len() + bytes.len().div_ceil(3) * 4);
    uri.push_str(BIN_URI_START);
    STANDARD.encode_string(bytes, &mut uri);
    uri
}

/// Output settings for [`JsonEncoder`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncoderOptions {
    /// Text repeated once per nesting level. Empty means compact,
    /// single-line output.
    pub indent: String,
}

/// Writes a [`Value`] as JSON text.
///
/// Compact mode emits no whitespace at all. With an indent unit every array
/// element and object entry goes on its own line, and keys are followed by
/// `": "`. Binary values are written as a base64 data URI string.
#[derive(Debug, Default)]
pub struct JsonEncoder {
    indent: String,
    depth: usize,
    out: String,
}

impl JsonEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indent(indent: &str) -> Self {
        Self {
            indent: indent.to_owned(),
            ..Self::default()
        }
    }

    pub fn with_options(options: EncoderOptions) -> Self {
        Self {
            indent: options.indent,
            ..Self::default()
        }
    }

    pub fn encode(&mut self, value: &Value) -> String {
        self.out.clear();
        self.depth = 0;
        self.write_any(value);
        std::mem::take(&mut self.out)
    }

    fn pretty(&self) -> bool {
        !self.indent.is_empty()
    }

    fn write_any(&mut self, value: &Value) {
        match value {
            Value::Null => self.out.push_str("null"),
            Value::Bool(true) => self.out.push_str("true"),
            Value::Bool(false) => self.out.push_str("false"),
            Value::Number(n) => self.out.push_str(&n.to_string()),
            Value::String(s) => self.write_str(s),
            Value::Binary(bytes) => self.write_str(&binary_data_uri(bytes)),
            Value::Array(items) => self.write_arr(items),
            Value::Object(map) => self.write_obj(map),
        }
    }

    fn write_arr(&mut self, items: &[Value]) {
        if items.is_empty() {
            self.out.push_str("[]");
            return;
        }
        self.out.push('[');
        self.depth += 1;
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.out.push(',');
            }
            self.write_line_break();
            self.write_any(item);
        }
        self.depth -= 1;
        self.write_line_break();
        self.out.push(']');
    }

    fn write_obj(&mut self, map: &crate::value::Map) {
        if map.is_empty() {
            self.out.push_str("{}");
            return;
        }
        self.out.push('{');
        self.depth += 1;
        for (i, (key, item)) in map.iter().enumerate() {
            if i > 0 {
                self.out.push(',');
            }
            self.write_line_break();
            self.write_str(key);
            self.out.push(':');
            if self.pretty() {
                self.out.push(' ');
            }
            self.write_any(item);
        }
        self.depth -= 1;
        self.write_line_break();
        self.out.push('}');
    }

    fn write_line_break(&mut self) {
        if !self.pretty() {
            return;
        }
        self.out.push('\n');
        for _ in 0..self.depth {
            self.out.push_str(&self.indent);
        }
    }

    fn write_str(&mut self, s: &str) {
        self.out.reserve(s.len() + 2);
        self.out.push('"');
        for ch in s.chars() {
            match ch {
                '"' => self.out.push_str("\\\""),
                '\\' => self.out.push_str("\\\\"),
                '\n' => self.out.push_str("\\n"),
                '\r' => self.out.push_str("\\r"),
                '\t' => self.out.push_str("\\t"),
                '\u{08}' => self.out.push_str("\\b"),
                '\u{0c}' => self.out.push_str("\\f"),
                // Remaining C0 controls (vertical tab included) and the
                // Unicode line terminators.
                '\u{00}'..='\u{1f}' | '\u{85}' | '\u{2028}' | '\u{2029}' => {
                    self.out.push_str(&format!("\\u{:04x}", ch as u32));
                }
                _ => self.out.push(ch),
            }
        }
        self.out.push('"');
    }
}

impl Value {
    /// JSON text, pretty-printed with `indent` per level, or compact when
    /// `indent` is empty.
    pub fn to_json_string(&self, indent: &str) -> String {
        JsonEncoder::with_indent(indent).encode(self)
    }

    /// JSON text indented by two spaces per level.
    pub fn to_pretty_string(&self) -> String {
        self.to_json_string("  ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars() {
        let mut encoder = JsonEncoder::new();
        assert_eq!(encoder.encode(&Value::Null), "null");
        assert_eq!(encoder.encode(&Value::from(false)), "false");
        assert_eq!(encoder.encode(&Value::from(-3)), "-3");
        assert_eq!(encoder.encode(&Value::from(1.25)), "1.25");
        assert_eq!(encoder.encode(&Value::from("hi")), r#""hi""#);
    }

    #[test]
    fn escapes() {
        let mut encoder = JsonEncoder::new();
        let text = "q\" b\\ n\n r\r t\t f\u{0c} b\u{08} v\u{0b} nul\u{0} nel\u{85} ls\u{2028} ps\u{2029} '";
        assert_eq!(
            encoder.encode(&Value::from(text)),
            r#""q\" b\\ n\n r\r t\t f\f b\b v\u000b nul\u0000 nel\u0085 ls\u2028 ps\u2029 '""#
        );
    }

    #[test]
    fn keys_are_escaped() {
        let mut value = Value::object();
        value.set("a\"b", 1);
        assert_eq!(value.to_string(), r#"{"a\"b":1}"#);
    }

    #[test]
    fn binary_as_data_uri() {
        let value = Value::from_bytes(vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(
            JsonEncoder::new().encode(&value),
            r#""data:application/octet-stream;base64,3q2+7w==""#
        );
    }

    #[test]
    fn compact_containers() {
        let value = Value::parse(r#"{ "a" : [1, {"b": null}], "c": {} , "d": [] }"#).unwrap();
        assert_eq!(
            JsonEncoder::new().encode(&value),
            r#"{"a":[1,{"b":null}],"c":{},"d":[]}"#
        );
    }

    #[test]
    fn pretty_containers() {
        let value = Value::parse(r#"{"a":[1,2],"b":{},"c":"x"}"#).unwrap();
        let expected = "{\n  \"a\": [\n    1,\n    2\n  ],\n  \"b\": {},\n  \"c\": \"x\"\n}";
        assert_eq!(value.to_pretty_string(), expected);
        assert_eq!(format!("{value:#}"), expected);
    }

    #[test]
    fn custom_indent_unit() {
        let value = Value::parse("[[true]]").unwrap();
        let mut encoder = JsonEncoder::with_options(EncoderOptions {
            indent: "\t".into(),
        });
        assert_eq!(encoder.encode(&value), "[\n\t[\n\t\ttrue\n\t]\n]");
    }

    #[test]
    fn encoder_is_reusable() {
        let mut encoder = JsonEncoder::with_indent("  ");
        let value = Value::parse("[1]").unwrap();
        assert_eq!(encoder.encode(&value), encoder.encode(&value));
    }
}
