//! Construction contract: turning native Rust data into a [`Value`].
//!
//! [`ToValue`] is implemented for scalars, strings, sequences, maps and
//! key/value pairs. Struct-like types opt in with their own impl, usually
//! through [`to_value_struct!`](crate::to_value_struct).

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::fmt::Display;
use std::hash::BuildHasher;

use indexmap::IndexMap;
use rust_decimal::Decimal;

use crate::number::{decimal_from_f32, decimal_from_f64};
use crate::value::{Map, Value};

/// Conversion of a native value into its canonical [`Value`].
pub trait ToValue {
    /// Whether every value of this type is key/value-pair shaped.
    ///
    /// Decides the shape of an empty sequence of this type: pairs give an
    /// empty object, everything else an empty array.
    const ENTRY_SHAPED: bool = false;

    fn to_value(&self) -> Value;

    /// The `(key, value)` entry this value stands for, if it is
    /// key/value-pair shaped.
    fn to_entry(&self) -> Option<(String, Value)> {
        None
    }
}

impl Value {
    /// Build a value from any [`ToValue`] input.
    ///
    /// ```
    /// use jvalue::Value;
    ///
    /// let pairs = vec![("a", 1), ("b", 2)];
    /// assert_eq!(Value::new(&pairs).to_string(), r#"{"a":1,"b":2}"#);
    ///
    /// let numbers = vec![1, 2];
    /// assert_eq!(Value::new(&numbers).to_string(), "[1,2]");
    /// ```
    pub fn new<T: ToValue + ?Sized>(input: &T) -> Value {
        input.to_value()
    }
}

/// Borrowed byte sequence, constructed as [`Value::Binary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bytes<'a>(pub &'a [u8]);

impl ToValue for Bytes<'_> {
    fn to_value(&self) -> Value {
        Value::Binary(self.0.to_vec())
    }
}

/// A colour with 8-bit alpha, red, green and blue channels.
///
/// Stored in a [`Value`] as the packed 32-bit ARGB integer, alpha in the
/// most significant byte, so opaque colours are negative numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Argb {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Argb {
    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(0xff, r, g, b)
    }

    pub const fn to_argb(self) -> i32 {
        (((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32)
            as i32
    }

    pub const fn from_argb(packed: i32) -> Self {
        let packed = packed as u32;
        Self {
            a: (packed >> 24) as u8,
            r: (packed >> 16) as u8,
            g: (packed >> 8) as u8,
            b: packed as u8,
        }
    }
}

impl ToValue for Argb {
    fn to_value(&self) -> Value {
        Value::Number(Decimal::from(self.to_argb()))
    }
}

impl From<Argb> for Value {
    fn from(color: Argb) -> Self {
        color.to_value()
    }
}

impl ToValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl ToValue for () {
    fn to_value(&self) -> Value {
        Value::Null
    }
}

impl ToValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl ToValue for Decimal {
    fn to_value(&self) -> Value {
        Value::Number(*self)
    }
}

macro_rules! integer_to_value {
    ($($ty:ty),*) => {
        $(
            impl ToValue for $ty {
                fn to_value(&self) -> Value {
                    Value::Number(Decimal::from(*self))
                }
            }
        )*
    };
}

integer_to_value!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl ToValue for f32 {
    fn to_value(&self) -> Value {
        Value::Number(decimal_from_f32(*self))
    }
}

impl ToValue for f64 {
    fn to_value(&self) -> Value {
        Value::Number(decimal_from_f64(*self))
    }
}

impl ToValue for char {
    fn to_value(&self) -> Value {
        Value::String(self.to_string())
    }
}

impl ToValue for str {
    fn to_value(&self) -> Value {
        Value::String(self.to_owned())
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl<T: ToValue + ?Sized> ToValue for &T {
    const ENTRY_SHAPED: bool = T::ENTRY_SHAPED;

    fn to_value(&self) -> Value {
        (**self).to_value()
    }

    fn to_entry(&self) -> Option<(String, Value)> {
        (**self).to_entry()
    }
}

impl<T: ToValue + ?Sized> ToValue for Box<T> {
    const ENTRY_SHAPED: bool = T::ENTRY_SHAPED;

    fn to_value(&self) -> Value {
        (**self).to_value()
    }

    fn to_entry(&self) -> Option<(String, Value)> {
        (**self).to_entry()
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Null, ToValue::to_value)
    }
}

/// A pair is a one-entry object, and the building block of object-shaped
/// sequences.
impl<K: Display, V: ToValue> ToValue for (K, V) {
    const ENTRY_SHAPED: bool = true;

    fn to_value(&self) -> Value {
        let mut map = Map::with_capacity(1);
        map.insert(self.0.to_string(), self.1.to_value());
        Value::Object(map)
    }

    fn to_entry(&self) -> Option<(String, Value)> {
        Some((self.0.to_string(), self.1.to_value()))
    }
}

fn sequence_to_value<'a, T, I>(items: I) -> Value
where
    T: ToValue + 'a,
    I: Iterator<Item = &'a T> + Clone,
{
    let mut probe = items.clone().peekable();
    if probe.peek().is_none() {
        return if T::ENTRY_SHAPED {
            Value::object()
        } else {
            Value::array()
        };
    }
    // `Option` collection stops at the first element that is not a pair.
    match probe.map(ToValue::to_entry).collect::<Option<Map>>() {
        Some(map) => Value::Object(map),
        None => Value::Array(items.map(ToValue::to_value).collect()),
    }
}

impl<T: ToValue> ToValue for [T] {
    fn to_value(&self) -> Value {
        sequence_to_value(self.iter())
    }
}

impl<T: ToValue, const N: usize> ToValue for [T; N] {
    fn to_value(&self) -> Value {
        sequence_to_value(self.iter())
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value {
        sequence_to_value(self.iter())
    }
}

impl<T: ToValue> ToValue for VecDeque<T> {
    fn to_value(&self) -> Value {
        sequence_to_value(self.iter())
    }
}

impl<K: Display, V: ToValue, S: BuildHasher> ToValue for HashMap<K, V, S> {
    fn to_value(&self) -> Value {
        Value::Object(
            self.iter()
                .map(|(k, v)| (k.to_string(), v.to_value()))
                .collect(),
        )
    }
}

impl<K: Display, V: ToValue> ToValue for BTreeMap<K, V> {
    fn to_value(&self) -> Value {
        Value::Object(
            self.iter()
                .map(|(k, v)| (k.to_string(), v.to_value()))
                .collect(),
        )
    }
}

impl<K: Display, V: ToValue, S: BuildHasher> ToValue for IndexMap<K, V, S> {
    fn to_value(&self) -> Value {
        Value::Object(
            self.iter()
                .map(|(k, v)| (k.to_string(), v.to_value()))
                .collect(),
        )
    }
}

/// Implement [`ToValue`] for a struct by listing its fields.
///
/// Each field becomes an object entry named after the field, in the order
/// given.
///
/// ```
/// use jvalue::{to_value_struct, ToValue, Value};
///
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// to_value_struct!(Point { x, y });
///
/// let value = Point { x: 1, y: -2 }.to_value();
/// assert_eq!(value.to_string(), r#"{"x":1,"y":-2}"#);
/// ```
#[macro_export]
macro_rules! to_value_struct {
    ($ty:ty { $($field:ident),* $(,)? }) => {
        impl $crate::ToValue for $ty {
            fn to_value(&self) -> $crate::Value {
                let mut object = $crate::Value::object();
                $(
                    object.set(
                        stringify!($field),
                        $crate::ToValue::to_value(&self.$field),
                    );
                )*
                object
            }
        }
    };
}
