//! Object members and child enumeration.

use std::iter::Enumerate;
use std::slice;

use crate::value::Value;

impl Value {
    /// Whether this is an object holding `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.as_object().is_some_and(|map| map.contains_key(key))
    }

    /// Remove `key` from an object, keeping the order of the remaining
    /// entries. Returns the removed value.
    pub fn delete(&mut self, key: &str) -> Option<Value> {
        self.as_object_mut()?.shift_remove(key)
    }

    pub fn first_child(&self) -> Option<(&str, &Value)> {
        self.as_object()?
            .first()
            .map(|(key, value)| (key.as_str(), value))
    }

    pub fn last_child(&self) -> Option<(&str, &Value)> {
        self.as_object()?
            .last()
            .map(|(key, value)| (key.as_str(), value))
    }

    /// Entries of an object in insertion order; empty for other variants.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.as_object()
            .into_iter()
            .flatten()
            .map(|(key, value)| (key.as_str(), value))
    }

    /// Elements of an array; empty for other variants.
    pub fn array_items(&self) -> slice::Iter<'_, Value> {
        self.as_array()
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
    }

    /// Children of this value keyed by how they are reached: object keys,
    /// array positions, or (for a scalar) the value itself under
    /// [`ItemKey::None`].
    pub fn items(&self) -> Items<'_> {
        let inner = match self {
            Value::Object(map) => ItemsInner::Object(map.iter()),
            Value::Array(items) => ItemsInner::Array(items.iter().enumerate()),
            _ => ItemsInner::Single(Some(self)),
        };
        Items { inner }
    }

    /// Remove every child of an array or object. Scalars are left alone.
    pub fn clear(&mut self) {
        match self {
            Value::Object(map) => map.clear(),
            Value::Array(items) => items.clear(),
            _ => {}
        }
    }
}

/// How an item yielded by [`Value::items`] is addressed in its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKey<'a> {
    Key(&'a str),
    Index(usize),
    /// The value is a scalar and was yielded as its own only item.
    None,
}

/// Iterator returned by [`Value::items`].
#[derive(Debug, Clone)]
pub struct Items<'a> {
    inner: ItemsInner<'a>,
}

#[derive(Debug, Clone)]
enum ItemsInner<'a> {
    Object(indexmap::map::Iter<'a, String, Value>),
    Array(Enumerate<slice::Iter<'a, Value>>),
    Single(Option<&'a Value>),
}

impl<'a> Iterator for Items<'a> {
    type Item = (ItemKey<'a>, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            ItemsInner::Object(iter) => iter
                .next()
                .map(|(key, value)| (ItemKey::Key(key.as_str()), value)),
            ItemsInner::Array(iter) => iter
                .next()
                .map(|(index, value)| (ItemKey::Index(index), value)),
            ItemsInner::Single(slot) => slot.take().map(|value| (ItemKey::None, value)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            ItemsInner::Object(iter) => iter.size_hint(),
            ItemsInner::Array(iter) => iter.size_hint(),
            ItemsInner::Single(slot) => {
                let n = usize::from(slot.is_some());
                (n, Some(n))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Value {
        Value::parse(r#"{"a":1,"b":2,"c":3}"#).unwrap()
    }

    #[test]
    fn contains_and_delete() {
        let mut value = sample();
        assert!(value.contains_key("b"));
        assert_eq!(value.delete("b"), Some(Value::from(2)));
        assert!(!value.contains_key("b"));
        assert_eq!(value.delete("b"), None);
        assert_eq!(value.to_string(), r#"{"a":1,"c":3}"#);

        let mut array = Value::array();
        assert!(!array.contains_key("0"));
        assert_eq!(array.delete("0"), None);
    }

    #[test]
    fn first_and_last_child() {
        let value = sample();
        assert_eq!(value.first_child(), Some(("a", &Value::from(1))));
        assert_eq!(value.last_child(), Some(("c", &Value::from(3))));
        assert_eq!(Value::object().first_child(), None);
        assert_eq!(Value::from(1).last_child(), None);
    }

    #[test]
    fn entries_keep_insertion_order() {
        let mut value = Value::object();
        value.set("z", 1);
        value.set("a", 2);
        value.set("m", 3);
        let keys: Vec<&str> = value.entries().map(|(key, _)| key).collect();
        assert_eq!(keys, ["z", "a", "m"]);
        assert_eq!(Value::from("x").entries().count(), 0);
    }

    #[test]
    fn items_by_shape() {
        let object = sample();
        let keys: Vec<ItemKey<'_>> = object.items().map(|(key, _)| key).collect();
        assert_eq!(
            keys,
            [ItemKey::Key("a"), ItemKey::Key("b"), ItemKey::Key("c")]
        );

        let array = Value::parse("[true,false]").unwrap();
        let items: Vec<_> = array.items().collect();
        assert_eq!(items[1], (ItemKey::Index(1), &Value::from(false)));

        let scalar = Value::from("only");
        let items: Vec<_> = scalar.items().collect();
        assert_eq!(items, [(ItemKey::None, &scalar)]);
        assert_eq!(scalar.items().size_hint(), (1, Some(1)));
    }

    #[test]
    fn array_items_of_non_array_is_empty() {
        assert_eq!(Value::object().array_items().count(), 0);
        assert_eq!(Value::parse("[1,2]").unwrap().array_items().count(), 2);
    }

    #[test]
    fn clear_keeps_shape() {
        let mut object = sample();
        object.clear();
        assert_eq!(object, Value::object());

        let mut array = Value::parse("[1]").unwrap();
        array.clear();
        assert_eq!(array, Value::array());

        let mut scalar = Value::from(1);
        scalar.clear();
        assert_eq!(scalar, Value::from(1));
    }
}
