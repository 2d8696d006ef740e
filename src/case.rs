//! Key-case conversion for dynamic values.

use serde_json::{Map, Value};

use crate::value::is_object;

/// Recursively lower-case the first character of every object key.
///
/// Arrays are mapped element-wise; scalars pass through untouched. Only the
/// first character changes: `FooBar` becomes `fooBar`, `URL` becomes `uRL`.
pub fn to_camel_case_keys(value: &Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.iter().map(to_camel_case_keys).collect()),
        Value::Object(map) => camel_case_keys_helper(map),
        other => other.clone(),
    }
}

fn camel_case_keys_helper(map: &Map<String, Value>) -> Value {
    let entries = map.iter().map(|(key, value)| {
        let value = if is_object(value) {
            to_camel_case_keys(value)
        } else {
            value.clone()
        };
        (uncapitalize(key), value)
    });
    Value::Object(entries.collect())
}

fn uncapitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
