//! Emptiness and shape predicates over dynamic values.
//!
//! Pure functions, no I/O. The contracts mirror loose dynamic-language
//! truthiness: "empty" means null or zero length, and only values that
//! actually carry a length (strings, arrays) can be empty.

use serde_json::Value;

/// True when the value is null.
pub fn is_null_or_undefined(value: &Value) -> bool {
    value.is_null()
}

/// True when the value is null or has length 0.
///
/// Only strings and arrays carry a length; objects and numbers are never
/// empty here.
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

/// True when the value carries a length at all.
pub fn has_valid_length(value: &Value) -> bool {
    matches!(value, Value::String(_) | Value::Array(_))
}

/// True for non-null values of object type. Arrays count.
pub fn is_object(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

/// True when the value is null or empty.
pub fn is_null_or_undefined_empty(value: &Value) -> bool {
    is_null_or_undefined(value) || is_empty(value)
}

/// True when every entry of an object (or array) is itself "empty":
/// `false` booleans, zero-length strings, nulls, zero-length arrays.
///
/// Nested non-null objects and all numbers count as non-empty. Null is
/// empty-in-depth; non-null scalars have no entries and vacuously are too.
pub fn is_empty_in_depth(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.values().all(entry_is_empty),
        Value::Array(items) => items.iter().all(entry_is_empty),
        _ => true,
    }
}

fn entry_is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !*b,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(_) | Value::Number(_) => false,
    }
}

/// Move the first element whose `key` field matches `search` to the front,
/// in place. Case-insensitive by default; no-op when nothing matches.
pub fn shift_to_first_with(items: &mut Vec<Value>, key: &str, search: &str, ignore_case: bool) {
    let position = items.iter().position(|item| {
        item.get(key).and_then(Value::as_str).is_some_and(|v| {
            if ignore_case {
                v.eq_ignore_ascii_case(search)
            } else {
                v == search
            }
        })
    });

    if let Some(position) = position {
        let item = items.remove(position);
        items.insert(0, item);
    }
}
