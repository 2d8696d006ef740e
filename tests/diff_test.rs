//! Tests for object diffing and type-shape comparison.

use serde_json::json;

use rsutil::{compare_object_arrays_type_safe, object_difference_by_props, CompareError};

// ============================================================
// Property Diff Tests
// ============================================================

#[test]
fn given_equal_objects_when_diffing_then_no_differences() {
    let a = json!({"x": 1, "y": "same"});
    assert!(object_difference_by_props(&a, &a.clone()).is_empty());
}

#[test]
fn given_scalar_mismatch_when_diffing_then_it_is_reported() {
    let a = json!({"x": 1, "y": "same"});
    let b = json!({"x": 2, "y": "same"});

    let differences = object_difference_by_props(&a, &b);

    assert_eq!(differences.len(), 1);
    assert_eq!(differences[0].property, "x");
    assert_eq!(differences[0].source_value, json!(1));
    assert_eq!(differences[0].destination_value, json!(2));
}

#[test]
fn given_one_sided_property_when_diffing_then_counterpart_is_null() {
    let a = json!({"only_here": 1});
    let b = json!({});

    let differences = object_difference_by_props(&a, &b);

    assert_eq!(differences.len(), 1);
    assert_eq!(differences[0].property, "only_here");
    assert_eq!(differences[0].destination_value, json!(null));
}

#[test]
fn given_nested_objects_when_diffing_then_paths_are_dotted() {
    let a = json!({"outer": {"inner": 1, "same": true}});
    let b = json!({"outer": {"inner": 2, "same": true}});

    let differences = object_difference_by_props(&a, &b);

    assert_eq!(differences.len(), 1);
    assert_eq!(differences[0].property, "outer.inner");
}

#[test]
fn given_non_object_inputs_when_diffing_then_no_differences() {
    assert!(object_difference_by_props(&json!(1), &json!(2)).is_empty());
    assert!(object_difference_by_props(&json!(null), &json!({"a": 1})).is_empty());
}

// ============================================================
// Type-Shape Comparison Tests
// ============================================================

#[test]
fn given_same_shapes_when_comparing_then_ok() {
    let a = vec![json!({"id": 1, "name": "a"}), json!({"id": 2, "name": "b"})];
    let b = vec![json!({"id": 9, "name": "x"}), json!({"id": 8, "name": "y"})];

    assert!(compare_object_arrays_type_safe(&a, &b).is_ok());
}

#[test]
fn given_length_mismatch_when_comparing_then_error_reports_both_lengths() {
    let a = vec![json!({"id": 1})];
    let b = vec![];

    let err = compare_object_arrays_type_safe(&a, &b).unwrap_err();

    assert_eq!(err, CompareError::LengthMismatch { left: 1, right: 0 });
}

#[test]
fn given_non_object_element_when_comparing_then_error_reports_index() {
    let a = vec![json!({"id": 1}), json!("scalar")];
    let b = vec![json!({"id": 2}), json!({"id": 3})];

    let err = compare_object_arrays_type_safe(&a, &b).unwrap_err();

    assert_eq!(err, CompareError::NotAnObject { index: 1 });
}

#[test]
fn given_missing_property_when_comparing_then_error_names_it() {
    let a = vec![json!({"id": 1, "extra": true})];
    let b = vec![json!({"id": 2})];

    let err = compare_object_arrays_type_safe(&a, &b).unwrap_err();

    match err {
        CompareError::MissingProperty {
            index,
            property,
            side,
        } => {
            assert_eq!(index, 0);
            assert_eq!(property, "extra");
            assert_eq!(side, "right");
        }
        other => panic!("expected MissingProperty, got {other:?}"),
    }
}

#[test]
fn given_type_mismatch_when_comparing_then_error_names_both_types() {
    let a = vec![json!({"id": 1})];
    let b = vec![json!({"id": "1"})];

    let err = compare_object_arrays_type_safe(&a, &b).unwrap_err();

    assert_eq!(
        err,
        CompareError::TypeMismatch {
            index: 0,
            property: "id".to_string(),
            expected: "number",
            actual: "string",
        }
    );
}

#[test]
fn given_mismatch_past_first_key_when_comparing_then_it_is_still_found() {
    // every key of every pair is checked, not just the first
    let a = vec![json!({"a": 1, "b": 2, "c": 3})];
    let b = vec![json!({"a": 9, "b": 8, "c": "nope"})];

    let err = compare_object_arrays_type_safe(&a, &b).unwrap_err();

    match err {
        CompareError::TypeMismatch { property, .. } => assert_eq!(property, "c"),
        other => panic!("expected TypeMismatch, got {other:?}"),
    }
}

#[test]
fn given_nested_shape_mismatch_when_comparing_then_path_is_dotted() {
    let a = vec![json!({"meta": {"count": 1}})];
    let b = vec![json!({"meta": {"count": true}})];

    let err = compare_object_arrays_type_safe(&a, &b).unwrap_err();

    match err {
        CompareError::TypeMismatch { property, .. } => assert_eq!(property, "meta.count"),
        other => panic!("expected TypeMismatch, got {other:?}"),
    }
}

#[test]
fn given_empty_arrays_when_comparing_then_ok() {
    assert!(compare_object_arrays_type_safe(&[], &[]).is_ok());
}
