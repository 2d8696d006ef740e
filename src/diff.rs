//! Property-level diffing and structural comparison of dynamic objects.

use itertools::Itertools;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::{CompareError, CompareResult};

/// One mismatching property between two objects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyDifference {
    pub property: String,
    pub source_value: Value,
    pub destination_value: Value,
}

/// Property-by-property diff of two objects.
///
/// Scalar mismatches are reported directly. When both sides hold nested
/// objects the diff recurses, reporting nested findings with dotted
/// property paths (`parent.child`). A property present on only one side is
/// reported with a null counterpart. Non-object inputs yield no differences.
pub fn object_difference_by_props(source: &Value, destination: &Value) -> Vec<PropertyDifference> {
    let mut differences = Vec::new();
    if let (Some(source), Some(destination)) = (source.as_object(), destination.as_object()) {
        diff_objects(source, destination, "", &mut differences);
    }
    differences
}

fn diff_objects(
    source: &Map<String, Value>,
    destination: &Map<String, Value>,
    prefix: &str,
    out: &mut Vec<PropertyDifference>,
) {
    for key in source.keys().chain(destination.keys()).unique() {
        let source_value = source.get(key).unwrap_or(&Value::Null);
        let destination_value = destination.get(key).unwrap_or(&Value::Null);
        let property = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };

        match (source_value.as_object(), destination_value.as_object()) {
            (Some(nested_source), Some(nested_destination)) => {
                diff_objects(nested_source, nested_destination, &property, out);
            }
            _ if source_value != destination_value => out.push(PropertyDifference {
                property,
                source_value: source_value.clone(),
                destination_value: destination_value.clone(),
            }),
            _ => {}
        }
    }
}

/// Compare two arrays of objects for structural type-shape equality.
///
/// Checks every key of every pair and returns the first mismatch found:
/// differing lengths, non-object elements, a key present on one side only,
/// or differing value types at a key (dotted path for nested objects).
pub fn compare_object_arrays_type_safe(left: &[Value], right: &[Value]) -> CompareResult<()> {
    if left.len() != right.len() {
        return Err(CompareError::LengthMismatch {
            left: left.len(),
            right: right.len(),
        });
    }

    for (index, (a, b)) in left.iter().zip(right).enumerate() {
        let (Some(a), Some(b)) = (a.as_object(), b.as_object()) else {
            return Err(CompareError::NotAnObject { index });
        };
        compare_shapes(index, "", a, b)?;
    }

    Ok(())
}

fn compare_shapes(
    index: usize,
    prefix: &str,
    left: &Map<String, Value>,
    right: &Map<String, Value>,
) -> CompareResult<()> {
    for key in left.keys().chain(right.keys()).unique() {
        let property = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };

        let (a, b) = match (left.get(key), right.get(key)) {
            (Some(a), Some(b)) => (a, b),
            (Some(_), None) => {
                return Err(CompareError::MissingProperty {
                    index,
                    property,
                    side: "right",
                })
            }
            (None, _) => {
                return Err(CompareError::MissingProperty {
                    index,
                    property,
                    side: "left",
                })
            }
        };

        match (a.as_object(), b.as_object()) {
            (Some(nested_a), Some(nested_b)) => {
                compare_shapes(index, &property, nested_a, nested_b)?;
            }
            _ if type_name(a) != type_name(b) => {
                return Err(CompareError::TypeMismatch {
                    index,
                    property,
                    expected: type_name(a),
                    actual: type_name(b),
                });
            }
            _ => {}
        }
    }

    Ok(())
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
