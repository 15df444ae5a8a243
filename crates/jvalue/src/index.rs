//! Keyed and indexed access.
//!
//! Reads never fail: a missing member, or a key used on the wrong shape,
//! reads as `Null`. Writes reshape the receiver as needed: a string key turns
//! any non-object into an empty object, an integer index turns anything but
//! an array or object into an empty array and pads it with `Null` up to the
//! index. Objects take integer indices as their decimal key, and so does any
//! receiver when the index is too large to back with an array.

use std::ops::{Index, IndexMut};

use crate::value::{Value, NULL};

/// A type usable as a member key of a [`Value`]: `str`, `String` or `usize`.
///
/// Sealed; signed indices go through [`Value::at`], [`Value::set_at`] and
/// [`Value::get_or_insert_at`].
pub trait ValueIndex: private::Sealed {
    #[doc(hidden)]
    fn index_into<'v>(&self, value: &'v Value) -> Option<&'v Value>;

    #[doc(hidden)]
    fn index_into_mut<'v>(&self, value: &'v mut Value) -> Option<&'v mut Value>;

    /// Slot written by `set` and `IndexMut`.
    #[doc(hidden)]
    fn write_slot<'v>(&self, value: &'v mut Value) -> &'v mut Value;

    /// Slot returned by `get_or_insert`, which also forces the shape.
    #[doc(hidden)]
    fn vivify<'v>(&self, value: &'v mut Value) -> &'v mut Value;
}

mod private {
    pub trait Sealed {}
    impl Sealed for str {}
    impl Sealed for String {}
    impl Sealed for usize {}
    impl<T: ?Sized + Sealed> Sealed for &T {}
}

fn object_slot<'v>(value: &'v mut Value, key: &str) -> &'v mut Value {
    value
        .ensure_object()
        .entry(key.to_owned())
        .or_insert(Value::Null)
}

/// Make `value` an array holding at least `index + 1` elements. Returns
/// `false`, without growing it, when that length cannot be allocated.
fn reserve_index(value: &mut Value, index: usize) -> bool {
    let items = value.ensure_array();
    let Some(len) = index.checked_add(1) else {
        return false;
    };
    if items.len() < len {
        if items.try_reserve(len - items.len()).is_err() {
            tracing::debug!(index, "array index cannot be allocated");
            return false;
        }
        items.resize(len, Value::Null);
    }
    true
}

fn array_slot(value: &mut Value, index: usize) -> &mut Value {
    if reserve_index(value, index) {
        &mut value.ensure_array()[index]
    } else {
        object_slot(value, &index.to_string())
    }
}

fn indexed_slot(value: &mut Value, index: usize) -> &mut Value {
    match value {
        Value::Object(map) => map.entry(index.to_string()).or_insert(Value::Null),
        other => array_slot(other, index),
    }
}

impl ValueIndex for str {
    fn index_into<'v>(&self, value: &'v Value) -> Option<&'v Value> {
        value.as_object()?.get(self)
    }

    fn index_into_mut<'v>(&self, value: &'v mut Value) -> Option<&'v mut Value> {
        value.as_object_mut()?.get_mut(self)
    }

    fn write_slot<'v>(&self, value: &'v mut Value) -> &'v mut Value {
        object_slot(value, self)
    }

    fn vivify<'v>(&self, value: &'v mut Value) -> &'v mut Value {
        object_slot(value, self)
    }
}

impl ValueIndex for String {
    fn index_into<'v>(&self, value: &'v Value) -> Option<&'v Value> {
        self.as_str().index_into(value)
    }

    fn index_into_mut<'v>(&self, value: &'v mut Value) -> Option<&'v mut Value> {
        self.as_str().index_into_mut(value)
    }

    fn write_slot<'v>(&self, value: &'v mut Value) -> &'v mut Value {
        self.as_str().write_slot(value)
    }

    fn vivify<'v>(&self, value: &'v mut Value) -> &'v mut Value {
        self.as_str().vivify(value)
    }
}

impl ValueIndex for usize {
    fn index_into<'v>(&self, value: &'v Value) -> Option<&'v Value> {
        match value {
            Value::Array(items) => items.get(*self),
            Value::Object(map) => map.get(&self.to_string()),
            _ => None,
        }
    }

    fn index_into_mut<'v>(&self, value: &'v mut Value) -> Option<&'v mut Value> {
        match value {
            Value::Array(items) => items.get_mut(*self),
            Value::Object(map) => map.get_mut(&self.to_string()),
            _ => None,
        }
    }

    fn write_slot<'v>(&self, value: &'v mut Value) -> &'v mut Value {
        indexed_slot(value, *self)
    }

    fn vivify<'v>(&self, value: &'v mut Value) -> &'v mut Value {
        array_slot(value, *self)
    }
}

impl<T: ValueIndex + ?Sized> ValueIndex for &T {
    fn index_into<'v>(&self, value: &'v Value) -> Option<&'v Value> {
        (**self).index_into(value)
    }

    fn index_into_mut<'v>(&self, value: &'v mut Value) -> Option<&'v mut Value> {
        (**self).index_into_mut(value)
    }

    fn write_slot<'v>(&self, value: &'v mut Value) -> &'v mut Value {
        (**self).write_slot(value)
    }

    fn vivify<'v>(&self, value: &'v mut Value) -> &'v mut Value {
        (**self).vivify(value)
    }
}

impl Value {
    /// Member at `index`, or `Null` when absent.
    ///
    /// ```
    /// use jvalue::Value;
    ///
    /// let value = Value::parse(r#"{"a":[10,20]}"#).unwrap();
    /// assert_eq!(value.get("a").get(1).as_i32(), 20);
    /// assert!(value.get("missing").get(3).is_null());
    /// ```
    pub fn get<I: ValueIndex>(&self, index: I) -> &Value {
        index.index_into(self).unwrap_or(&NULL)
    }

    /// Mutable member at `index`, without creating it.
    pub fn get_mut<I: ValueIndex>(&mut self, index: I) -> Option<&mut Value> {
        index.index_into_mut(self)
    }

    /// Member at `index`, creating it on demand.
    ///
    /// The receiver is first converted to the shape the key asks for (object
    /// for string keys, array for indices) and a `Null` placeholder is
    /// inserted when the member is missing. The returned slot can be filled
    /// in place.
    pub fn get_or_insert<I: ValueIndex>(&mut self, index: I) -> &mut Value {
        index.vivify(self)
    }

    /// Store `value` at `index`, reshaping the receiver as needed.
    pub fn set<I: ValueIndex, V: Into<Value>>(&mut self, index: I, value: V) {
        *index.write_slot(self) = value.into();
    }

    /// Element at a signed index. Negative indices read as `Null`.
    pub fn at(&self, index: i64) -> &Value {
        match usize::try_from(index) {
            Ok(index) => self.get(index),
            Err(_) => &NULL,
        }
    }

    /// Store `value` at a signed index. Negative indices are ignored.
    pub fn set_at<V: Into<Value>>(&mut self, index: i64, value: V) {
        if let Ok(index) = usize::try_from(index) {
            self.set(index, value);
        }
    }

    /// [`Value::get_or_insert`] for a signed index. A negative index cannot
    /// address an array slot, so it is used as an object key instead.
    pub fn get_or_insert_at(&mut self, index: i64) -> &mut Value {
        match usize::try_from(index) {
            Ok(position) => self.get_or_insert(position),
            Err(_) => self.get_or_insert(index.to_string()),
        }
    }
}

impl<I: ValueIndex> Index<I> for Value {
    type Output = Value;

    fn index(&self, index: I) -> &Value {
        self.get(index)
    }
}

impl<'a> IndexMut<&'a str> for Value {
    fn index_mut(&mut self, key: &'a str) -> &mut Value {
        key.write_slot(self)
    }
}

impl IndexMut<String> for Value {
    fn index_mut(&mut self, key: String) -> &mut Value {
        key.write_slot(self)
    }
}

impl<'a> IndexMut<&'a String> for Value {
    fn index_mut(&mut self, key: &'a String) -> &mut Value {
        key.write_slot(self)
    }
}

impl IndexMut<usize> for Value {
    fn index_mut(&mut self, index: usize) -> &mut Value {
        index.write_slot(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_never_fail() {
        let value = Value::from(3);
        assert!(value["a"].is_null());
        assert!(value[0].is_null());
        assert!(value.at(-1).is_null());
        assert!(Value::Null["x"]["y"][2].is_null());
    }

    #[test]
    fn writing_index_into_null_pads_array() {
        let mut value = Value::Null;
        value[2] = Value::from("x");
        assert_eq!(value.length(), 3);
        assert!(value[0].is_null());
        assert!(value[1].is_null());
        assert_eq!(value[2], Value::from("x"));
    }

    #[test]
    fn writing_key_into_array_converts_to_object() {
        let mut value: Value = vec![Value::from(1), Value::from(2)].into();
        value["k"] = Value::from(true);
        assert!(value.is_object());
        assert_eq!(value.count(), 1);
        assert!(value[0].is_null());
    }

    #[test]
    fn writing_index_into_object_keeps_object() {
        let mut value = Value::object();
        value.set("name", "n");
        value[1] = Value::from(5);
        assert!(value.is_object());
        assert_eq!(value["1"], Value::from(5));
        assert_eq!(value[1], Value::from(5));
    }

    #[test]
    fn negative_writes_are_ignored() {
        let mut value = Value::Null;
        value.set_at(-1, 1);
        assert!(value.is_null());
        value.set_at(1, 1);
        assert_eq!(value.length(), 2);
        assert_eq!(value.at(1), &Value::from(1));
    }

    #[test]
    fn nested_autovivification() {
        let mut value = Value::Null;
        value["a"]["b"][1] = Value::from(true);
        assert_eq!(value.to_string(), r#"{"a":{"b":[null,true]}}"#);
    }

    #[test]
    fn get_or_insert_creates_placeholder() {
        let mut value = Value::object();
        let slot = value.get_or_insert("slot");
        assert!(slot.is_null());
        *slot = Value::from(7);
        assert_eq!(value["slot"], Value::from(7));

        let mut list = Value::from("scalar");
        list.get_or_insert(1).set("k", 1);
        assert_eq!(list.to_string(), r#"[null,{"k":1}]"#);
    }

    #[test]
    fn get_or_insert_forces_array_for_indices() {
        let mut value = Value::object();
        value.set("a", 1);
        *value.get_or_insert(0) = Value::from(9);
        assert_eq!(value, Value::Array(vec![Value::from(9)]));
    }

    #[test]
    fn get_or_insert_negative_uses_key() {
        let mut value = Value::Null;
        *value.get_or_insert_at(-2) = Value::from("neg");
        assert_eq!(value["-2"], Value::from("neg"));
    }

    #[test]
    fn unallocatable_indices_fall_back_to_keys() {
        let mut value = Value::Null;
        value.set(usize::MAX, 1);
        assert_eq!(value[usize::MAX], Value::from(1));
        assert_eq!(value.to_string(), r#"{"18446744073709551615":1}"#);

        let mut huge = Value::Null;
        *huge.get_or_insert(usize::MAX - 1) = Value::from(2);
        assert_eq!(huge["18446744073709551614"], Value::from(2));

        let mut list = Value::Null;
        list[usize::MAX / 2] = Value::from(true);
        assert!(list.is_object());
        assert_eq!(list.count(), 1);
    }

    #[test]
    fn get_mut_does_not_create() {
        let mut value = Value::object();
        assert!(value.get_mut("a").is_none());
        assert!(value.is_object());
        assert_eq!(value.count(), 0);
    }
}
