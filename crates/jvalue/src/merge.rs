//! Recursive structural merge.
//!
//! Merging fills empty slots of the target with copies from the source and
//! descends into slots that already hold something. When shapes conflict, or
//! the source is a scalar, the source replaces the target.

use crate::value::{Map, Value};

/// How a source array is combined with the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArrayMerge {
    /// Element `i` of the source merges into element `i` of the target. An
    /// object target receives the elements under the keys `"0"`, `"1"`, ...
    #[default]
    Positional,
    /// Source elements are appended when both sides are arrays.
    Append,
    /// The source array replaces the target.
    Replace,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeOptions {
    pub arrays: ArrayMerge,
}

impl Value {
    /// Merge `source` into this value with positional array merging.
    ///
    /// ```
    /// use jvalue::Value;
    ///
    /// let mut target = Value::parse(r#"{"a":{"b":2}}"#).unwrap();
    /// target.assign(&Value::parse(r#"{"a":{"c":3}}"#).unwrap());
    /// assert_eq!(target.to_string(), r#"{"a":{"b":2,"c":3}}"#);
    /// ```
    pub fn assign(&mut self, source: &Value) -> &mut Self {
        self.assign_with(source, &MergeOptions::default())
    }

    pub fn assign_with(&mut self, source: &Value, options: &MergeOptions) -> &mut Self {
        merge_value(self, source, options);
        self
    }
}

fn merge_value(target: &mut Value, source: &Value, options: &MergeOptions) {
    match source {
        Value::Object(entries) => merge_object(target.ensure_object(), entries, options),
        Value::Array(items) => merge_array(target, items, options),
        _ => *target = source.clone(),
    }
}

fn merge_object(map: &mut Map, entries: &Map, options: &MergeOptions) {
    for (key, item) in entries {
        match map.get_mut(key) {
            Some(slot) => fill_or_merge(slot, item, options),
            None => {
                map.insert(key.clone(), item.clone());
            }
        }
    }
}

fn merge_array(target: &mut Value, items: &[Value], options: &MergeOptions) {
    match (options.arrays, target) {
        (ArrayMerge::Replace, target) => *target = Value::Array(items.to_vec()),
        (_, Value::Object(map)) => {
            for (index, item) in items.iter().enumerate() {
                let slot = map.entry(index.to_string()).or_insert(Value::Null);
                fill_or_merge(slot, item, options);
            }
        }
        (ArrayMerge::Append, Value::Array(existing)) => existing.extend(items.iter().cloned()),
        (_, target) => {
            let existing = target.ensure_array();
            if existing.len() < items.len() {
                existing.resize(items.len(), Value::Null);
            }
            for (slot, item) in existing.iter_mut().zip(items) {
                fill_or_merge(slot, item, options);
            }
        }
    }
}

fn fill_or_merge(slot: &mut Value, item: &Value, options: &MergeOptions) {
    if slot.is_null() {
        *slot = item.clone();
    } else {
        merge_value(slot, item, options);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn json(text: &str) -> Value {
        Value::parse(text).unwrap()
    }

    fn merged(target: &str, source: &str, arrays: ArrayMerge) -> String {
        let mut value = json(target);
        value.assign_with(&json(source), &MergeOptions { arrays });
        value.to_string()
    }

    #[test]
    fn fills_missing_and_null_keys() {
        let mut value = json(r#"{"a":null,"b":1}"#);
        value.assign(&json(r#"{"a":{"x":1},"c":2}"#));
        assert_eq!(value.to_string(), r#"{"a":{"x":1},"b":1,"c":2}"#);
    }

    #[test]
    fn scalar_source_replaces() {
        let mut value = json(r#"{"a":{"b":2}}"#);
        value.assign(&json(r#"{"a":1}"#));
        assert_eq!(value.to_string(), r#"{"a":1}"#);

        let mut whole = json("[1,2]");
        whole.assign(&Value::from("s"));
        assert_eq!(whole, Value::from("s"));
    }

    #[test]
    fn object_source_converts_target() {
        let mut value = json("[1]");
        value.assign(&json(r#"{"k":true}"#));
        assert_eq!(value.to_string(), r#"{"k":true}"#);
    }

    #[test]
    fn arrays_merge_positionally() {
        assert_eq!(
            merged(r#"[{"a":1},null]"#, r#"[{"b":2},3,4]"#, ArrayMerge::Positional),
            r#"[{"a":1,"b":2},3,4]"#
        );
        assert_eq!(
            merged("[1,2,3]", "[9]", ArrayMerge::Positional),
            "[9,2,3]"
        );
    }

    #[test]
    fn array_into_object_uses_index_keys() {
        assert_eq!(
            merged(r#"{"0":{"a":1},"x":1}"#, r#"[{"b":2},5]"#, ArrayMerge::Positional),
            r#"{"0":{"a":1,"b":2},"x":1,"1":5}"#
        );
        assert_eq!(
            merged(r#"{"x":1}"#, "[5]", ArrayMerge::Append),
            r#"{"x":1,"0":5}"#
        );
    }

    #[test]
    fn array_into_scalar_becomes_array() {
        assert_eq!(merged("7", "[1,2]", ArrayMerge::Positional), "[1,2]");
    }

    #[test]
    fn append_mode() {
        assert_eq!(merged("[1,2]", "[3]", ArrayMerge::Append), "[1,2,3]");
        assert_eq!(
            merged(r#"{"l":[1]}"#, r#"{"l":[1]}"#, ArrayMerge::Append),
            r#"{"l":[1,1]}"#
        );
    }

    #[test]
    fn replace_mode() {
        assert_eq!(merged("[1,2,3]", "[9]", ArrayMerge::Replace), "[9]");
        assert_eq!(merged(r#"{"x":1}"#, "[9]", ArrayMerge::Replace), "[9]");
    }

    #[test]
    fn source_is_copied() {
        let source = json(r#"{"a":[1]}"#);
        let mut value = Value::Null;
        value.assign(&source);
        value["a"].push(2);
        assert_eq!(source.to_string(), r#"{"a":[1]}"#);
        assert_eq!(value.to_string(), r#"{"a":[1,2]}"#);
    }

    #[test]
    fn assign_chains() {
        let mut value = Value::Null;
        value
            .assign(&json(r#"{"a":1}"#))
            .assign(&json(r#"{"b":2}"#));
        assert_eq!(value.to_string(), r#"{"a":1,"b":2}"#);
    }
}
