//! Exact-decimal number helpers.
//!
//! Every [`Value::Number`](crate::Value::Number) holds a [`Decimal`]: a 96-bit
//! mantissa with a base-10 scale of at most 28. That is enough to keep typical
//! JSON literals such as `0.1` or `12345678901234567890` exact, while staying a
//! fixed-size scalar.

use std::str::FromStr;

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

/// Parse a numeric literal into a [`Decimal`].
///
/// The text is trimmed first. A `0x`/`0X` prefix selects hexadecimal and
/// always yields an integer; anything else is read as a plain (`-12.50`) or
/// scientific (`1.5e3`) decimal literal. Literals carrying more digits than
/// the decimal can hold are retried through `f64`, which rounds them.
///
/// Returns `None` when the text is not a number at all, or when its
/// magnitude lies outside the decimal range (about ±7.9e28).
pub fn parse_number_literal(text: &str) -> Option<Decimal> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if let Some(digits) = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
    {
        return parse_hex(digits);
    }
    if text.contains(['e', 'E']) {
        if let Ok(value) = Decimal::from_scientific(&text.to_ascii_lowercase()) {
            return Some(value);
        }
    } else if let Ok(value) = Decimal::from_str(text) {
        return Some(value);
    }
    // Only fall back to binary floating point for strings that really are
    // numbers; `f64::from_str` also accepts `inf` and `NaN`.
    if !text
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
    {
        return None;
    }
    text.parse::<f64>().ok().and_then(Decimal::from_f64)
}

/// Parse bare hexadecimal digits (no prefix) into an integer-valued decimal.
pub fn parse_hex(digits: &str) -> Option<Decimal> {
    if digits.is_empty() {
        return None;
    }
    u64::from_str_radix(digits, 16).ok().map(Decimal::from)
}

/// Read `0x`-prefixed text of at most eight hex digits as the two's-complement
/// `i32` it encodes, so `0xFFFF0000` is `-65536`.
pub(crate) fn parse_hex_i32(text: &str) -> Option<i32> {
    let text = text.trim();
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))?;
    if digits.is_empty() || digits.len() > 8 {
        return None;
    }
    u32::from_str_radix(digits, 16).ok().map(|bits| bits as i32)
}

/// Convert an `f64` to the decimal it prints as.
///
/// Going through the shortest round-trip rendering keeps `0.1` as `0.1`
/// instead of the binary expansion `0.1000000000000000055511151231`.
/// Non-finite inputs and magnitudes beyond the decimal range become zero.
pub fn decimal_from_f64(value: f64) -> Decimal {
    if !value.is_finite() {
        return Decimal::ZERO;
    }
    Decimal::from_str(&value.to_string())
        .ok()
        .or_else(|| Decimal::from_f64(value))
        .unwrap_or(Decimal::ZERO)
}

/// Convert an `f32` to the decimal it prints as (see [`decimal_from_f64`]).
pub fn decimal_from_f32(value: f32) -> Decimal {
    if !value.is_finite() {
        return Decimal::ZERO;
    }
    Decimal::from_str(&value.to_string())
        .ok()
        .or_else(|| Decimal::from_f32(value))
        .unwrap_or(Decimal::ZERO)
}

pub(crate) fn truncate_to_i32(value: Decimal) -> i32 {
    value.trunc().to_i32().unwrap_or(0)
}

pub(crate) fn truncate_to_u32(value: Decimal) -> u32 {
    value.trunc().to_u32().unwrap_or(0)
}

pub(crate) fn truncate_to_i64(value: Decimal) -> i64 {
    value.trunc().to_i64().unwrap_or(0)
}

pub(crate) fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

pub(crate) fn to_f32(value: Decimal) -> f32 {
    value.to_f32().unwrap_or(0.0)
}
