//! Array mutators.
//!
//! The non-forcing variants leave values of any other shape untouched and
//! report it through their return value. The `_force` variants convert the
//! receiver to an empty array first.

use std::cmp::Ordering;

use crate::value::Value;

impl Value {
    /// Append `item` if this is an array. Returns whether it was appended.
    pub fn push<V: Into<Value>>(&mut self, item: V) -> bool {
        match self {
            Value::Array(items) => {
                items.push(item.into());
                true
            }
            _ => false,
        }
    }

    /// Append `item`, converting this value to an array first if needed.
    pub fn push_force<V: Into<Value>>(&mut self, item: V) {
        self.ensure_array().push(item.into());
    }

    /// Prepend `item` if this is an array. Returns whether it was inserted.
    pub fn unshift<V: Into<Value>>(&mut self, item: V) -> bool {
        match self {
            Value::Array(items) => {
                items.insert(0, item.into());
                true
            }
            _ => false,
        }
    }

    pub fn unshift_force<V: Into<Value>>(&mut self, item: V) {
        self.ensure_array().insert(0, item.into());
    }

    /// Remove and return the last element; `Null` for empty arrays and
    /// non-arrays.
    pub fn pop(&mut self) -> Value {
        match self {
            Value::Array(items) => items.pop().unwrap_or_default(),
            _ => Value::Null,
        }
    }

    /// Remove and return the first element; `Null` for empty arrays and
    /// non-arrays.
    pub fn shift(&mut self) -> Value {
        match self {
            Value::Array(items) if !items.is_empty() => items.remove(0),
            _ => Value::Null,
        }
    }

    /// Append copies of the elements of `other`.
    ///
    /// This value always ends up an array, even when `other` is not one and
    /// nothing is appended.
    pub fn concat(&mut self, other: &Value) {
        let items = self.ensure_array();
        if let Value::Array(extra) = other {
            items.extend(extra.iter().cloned());
        }
    }

    /// Stable sort of the elements in place. No effect on non-arrays.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&Value, &Value) -> Ordering,
    {
        if let Value::Array(items) = self {
            items.sort_by(compare);
        }
    }

    /// Number of elements of an array, `0` for everything else.
    pub fn length(&self) -> usize {
        match self {
            Value::Array(items) => items.len(),
            _ => 0,
        }
    }

    /// Truncate or `Null`-pad an array to exactly `len` elements. No effect
    /// on non-arrays, or when `len` elements cannot be allocated.
    pub fn set_length(&mut self, len: usize) {
        if let Value::Array(items) = self {
            if len > items.len() && items.try_reserve(len - items.len()).is_err() {
                return;
            }
            items.resize(len, Value::Null);
        }
    }

    /// Position of the first element equal to `item`.
    pub fn index_of(&self, item: &Value) -> Option<usize> {
        self.as_array()?.iter().position(|candidate| candidate == item)
    }

    /// Remove the first element equal to `item`. Returns whether one was
    /// found.
    pub fn remove_item(&mut self, item: &Value) -> bool {
        match self.index_of(item) {
            Some(position) => {
                if let Value::Array(items) = self {
                    items.remove(position);
                }
                true
            }
            None => false,
        }
    }

    pub fn first_item(&self) -> Option<&Value> {
        self.as_array()?.first()
    }

    pub fn last_item(&self) -> Option<&Value> {
        self.as_array()?.last()
    }
}

/// Extending a value appends to it as an array, converting it first.
impl Extend<Value> for Value {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, iter: I) {
        self.ensure_array().extend(iter);
    }
}
