//! Reading a [`Value`] as a primitive.
//!
//! Every coercion is total: a value of the wrong shape, or a string that
//! does not parse, yields the type's zero (`0`, `false`, `None`) instead of
//! an error.

use rust_decimal::Decimal;

use crate::construct::Argb;
use crate::json::encoder::binary_data_uri;
use crate::number::{
    parse_hex_i32, parse_number_literal, to_f32, to_f64, truncate_to_i32, truncate_to_i64,
    truncate_to_u32,
};
use crate::value::Value;

/// How non-boolean, non-numeric values are read as a boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoolCoercion {
    /// The string form must read `true` (case-insensitive, surrounding
    /// whitespace ignored); anything else is `false`.
    #[default]
    Strict,
    /// `true` exactly when the string form is empty.
    ///
    /// Kept for callers that depend on this older rule; it inverts the usual
    /// truthiness of strings, so it is never applied implicitly.
    Emptiness,
}

impl Value {
    /// Read as a decimal. Numbers are returned as-is, booleans map to `1`
    /// and `0`, strings are trimmed and parsed (`0x` prefix for hex).
    pub fn as_decimal(&self) -> Decimal {
        match self {
            Value::Number(n) => *n,
            Value::Bool(true) => Decimal::ONE,
            Value::String(s) => parse_number_literal(s).unwrap_or(Decimal::ZERO),
            Value::Bool(false)
            | Value::Null
            | Value::Binary(_)
            | Value::Array(_)
            | Value::Object(_) => Decimal::ZERO,
        }
    }

    /// Read as `i32`, truncating toward zero. Out-of-range values give `0`.
    ///
    /// Hex strings of up to eight digits are taken as 32-bit patterns:
    /// `"0xFFFFFFFF"` reads as `-1`.
    pub fn as_i32(&self) -> i32 {
        if let Some(bits) = self.as_str().and_then(parse_hex_i32) {
            return bits;
        }
        truncate_to_i32(self.as_decimal())
    }

    /// Read as `u32`, truncating toward zero. Negative or out-of-range
    /// values give `0`.
    pub fn as_u32(&self) -> u32 {
        truncate_to_u32(self.as_decimal())
    }

    pub fn as_i64(&self) -> i64 {
        truncate_to_i64(self.as_decimal())
    }

    pub fn as_f32(&self) -> f32 {
        to_f32(self.as_decimal())
    }

    pub fn as_f64(&self) -> f64 {
        to_f64(self.as_decimal())
    }

    /// Textual form of the value.
    ///
    /// Strings are returned without quotes, containers as compact JSON and
    /// `Null` as the literal `"null"`. Use [`Value::to_nullable_string`] to
    /// tell `Null` apart from the string `"null"`.
    pub fn as_string(&self) -> String {
        match self {
            Value::Null => "null".to_owned(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::String(s) => s.clone(),
            Value::Binary(bytes) => binary_data_uri(bytes),
            Value::Array(_) | Value::Object(_) => self.to_string(),
        }
    }

    /// Like [`Value::as_string`], but `None` for `Null`.
    pub fn to_nullable_string(&self) -> Option<String> {
        match self {
            Value::Null => None,
            _ => Some(self.as_string()),
        }
    }

    /// Read as a boolean using [`BoolCoercion::Strict`].
    pub fn as_bool(&self) -> bool {
        self.to_boolean(BoolCoercion::Strict)
    }

    /// Read as a boolean. Booleans are returned as-is, numbers are `true`
    /// when non-zero and `Null` is `false`; everything else goes through
    /// `mode`.
    pub fn to_boolean(&self, mode: BoolCoercion) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => !n.is_zero(),
            _ => {
                let text = self.as_string();
                match mode {
                    BoolCoercion::Strict => text.trim().eq_ignore_ascii_case("true"),
                    BoolCoercion::Emptiness => text.is_empty(),
                }
            }
        }
    }

    /// The raw bytes of a binary value; `None` for every other variant.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Binary(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Read as an opaque colour from the packed ARGB integer form. The
    /// stored alpha channel is ignored.
    pub fn as_argb(&self) -> Argb {
        Argb {
            a: 0xff,
            ..Argb::from_argb(self.as_i32())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn numbers_from_each_variant() {
        assert_eq!(Value::from(12.9).as_i32(), 12);
        assert_eq!(Value::from(-12.9).as_i32(), -12);
        assert_eq!(Value::from(true).as_i32(), 1);
        assert_eq!(Value::from(false).as_i32(), 0);
        assert_eq!(Value::Null.as_i32(), 0);
        assert_eq!(Value::array().as_i32(), 0);
        assert_eq!(Value::object().as_f64(), 0.0);
        assert_eq!(Value::from_bytes(vec![1, 2]).as_i64(), 0);
    }

    #[test]
    fn numbers_from_strings() {
        assert_eq!(Value::from(" 42 ").as_i32(), 42);
        assert_eq!(Value::from("0x1F").as_i32(), 31);
        assert_eq!(Value::from("0x1F").as_u32(), 31);
        assert_eq!(Value::from("1.5").as_f64(), 1.5);
        assert_eq!(Value::from("abc").as_i32(), 0);
        assert_eq!(Value::from("").as_f32(), 0.0);
        assert_eq!(
            Value::from("0.1").as_decimal(),
            Decimal::from_str("0.1").unwrap()
        );
    }

    #[test]
    fn hex_strings_read_as_bit_patterns() {
        assert_eq!(Value::from("0xFFFFFFFF").as_i32(), -1);
        assert_eq!(Value::from("0xFFFF0000").as_i32(), -65536);
        assert_eq!(Value::from("0xFFFFFFFF").as_u32(), u32::MAX);
        assert_eq!(Value::from("0x1FFFFFFFF").as_i32(), 0);
        assert_eq!(Value::from("0xFFFF0000").as_argb(), Argb::opaque(0xff, 0, 0));
    }

    #[test]
    fn out_of_range_integers_fall_back() {
        assert_eq!(Value::from(5_000_000_000i64).as_i32(), 0);
        assert_eq!(Value::from(5_000_000_000i64).as_i64(), 5_000_000_000);
        assert_eq!(Value::from(-3).as_u32(), 0);
    }

    #[test]
    fn strings_from_each_variant() {
        assert_eq!(Value::Null.as_string(), "null");
        assert_eq!(Value::Null.to_nullable_string(), None);
        assert_eq!(Value::from("x").to_nullable_string(), Some("x".into()));
        assert_eq!(Value::from(true).as_string(), "true");
        assert_eq!(Value::from(Decimal::new(150, 2)).as_string(), "1.50");
        assert_eq!(Value::from("a\"b").as_string(), "a\"b");
        let array: Value = vec![Value::from(1), Value::from("x")].into();
        assert_eq!(array.as_string(), r#"[1,"x"]"#);
        assert_eq!(
            Value::from_bytes(b"hi".to_vec()).as_string(),
            "data:application/octet-stream;base64,aGk="
        );
    }

    #[test]
    fn strict_booleans() {
        assert!(!Value::Null.as_bool());
        assert!(Value::from(true).as_bool());
        assert!(Value::from(2).as_bool());
        assert!(!Value::from(0).as_bool());
        assert!(Value::from("TRUE").as_bool());
        assert!(Value::from(" true ").as_bool());
        assert!(!Value::from("yes").as_bool());
        assert!(!Value::from("false").as_bool());
        assert!(!Value::array().as_bool());
    }

    #[test]
    fn emptiness_booleans() {
        assert!(Value::from("").to_boolean(BoolCoercion::Emptiness));
        assert!(!Value::from("true").to_boolean(BoolCoercion::Emptiness));
        assert!(!Value::Null.to_boolean(BoolCoercion::Emptiness));
        assert!(Value::from(1).to_boolean(BoolCoercion::Emptiness));
    }

    #[test]
    fn bytes_only_from_binary() {
        assert_eq!(Value::from_bytes(vec![9]).as_bytes(), Some(&[9u8][..]));
        assert_eq!(Value::from("9").as_bytes(), None);
        assert_eq!(Value::Null.as_bytes(), None);
    }

    #[test]
    fn colour_forces_alpha() {
        let value = Value::from(Argb::new(0x10, 1, 2, 3));
        assert_eq!(value.as_argb(), Argb::opaque(1, 2, 3));
    }
}
