#![cfg(feature = "serde")]

//! Integration tests for serde support.
//!
//! These tests verify that `Value` and `Mapping` map onto plain JSON and keep
//! the enumeration order of object keys.

use rstest::rstest;
use underbar::collection::{Mapping, Value, each};

#[rstest]
fn test_mapping_serializes_in_insertion_order() {
    let mapping: Mapping<i32> = [("zeta", 1), ("alpha", 2)].into();
    let json = serde_json::to_string(&mapping).unwrap();
    assert_eq!(json, r#"{"zeta":1,"alpha":2}"#);
}

#[rstest]
fn test_mapping_deserializes_in_document_order() {
    let mapping: Mapping<i32> = serde_json::from_str(r#"{"b":1,"a":2,"c":3}"#).unwrap();
    let keys: Vec<&str> = mapping.keys().collect();
    assert_eq!(keys, vec!["b", "a", "c"]);
}

#[rstest]
fn test_value_json_roundtrip() {
    let json = r#"{"name":"ana","tags":["x",null,true],"score":1.5}"#;
    let value: Value = serde_json::from_str(json).unwrap();

    let Value::Object(object) = &value else {
        panic!("expected an object, got {value:?}");
    };
    assert_eq!(object.get("score"), Some(&Value::Number(1.5)));

    assert_eq!(serde_json::to_string(&value).unwrap(), json);
}

#[rstest]
fn test_deserialized_value_is_traversable() {
    let value: Value = serde_json::from_str("[1, 2, 3]").unwrap();
    let mut total = 0.0;
    each(&value, |element, _, _| total += element.as_f64().unwrap_or_default()).unwrap();
    assert!((total - 6.0).abs() < f64::EPSILON);
}

#[rstest]
#[case(r#"{"count":1,"ids":[2,3]}"#)]
#[case(r#"[0,-7,2.25,null,"x"]"#)]
#[case(r#"{"nested":{"depth":3,"ratio":0.5}}"#)]
fn test_value_integers_roundtrip_unchanged(#[case] json: &str) {
    let value: Value = serde_json::from_str(json).unwrap();
    assert_eq!(serde_json::to_string(&value).unwrap(), json);
}

#[rstest]
fn test_large_whole_number_serializes_as_float() {
    let value = Value::Number(1e20);
    assert_eq!(serde_json::to_string(&value).unwrap(), "1e20");
}
