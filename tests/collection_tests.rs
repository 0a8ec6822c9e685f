#![cfg(feature = "collection")]
//! Integration tests for the collection operations.
//!
//! Tests cover:
//! - Traversal order for sequences and mappings
//! - Seeded and unseeded reduction
//! - Short-circuiting of every and some
//! - Rejection of scalar values
//! - Helpers layered on the core chain

use rstest::rstest;
use std::collections::BTreeMap;
use underbar::UnderbarError;
use underbar::collection::{
    Collection, Key, Mapping, Value, contains, defaults, difference, each, every,
    every_truthy, extend, filter, flatten_values, fold, intersection, invoke, invoke_method, pluck, reduce,
    reject, some, some_truthy, sort_by, uniq, zip,
};

fn profile() -> Mapping<Value> {
    let mut profile = Mapping::new();
    profile.insert("name", Value::from("ana"));
    profile.insert("age", Value::from(34));
    profile.insert("admin", Value::from(false));
    profile
}

// =============================================================================
// each
// =============================================================================

#[rstest]
fn each_visits_sequence_indices_in_order() {
    let mut seen = Vec::new();
    each(&vec!['a', 'b', 'c'], |value, key, _| seen.push((*value, key.as_index()))).unwrap();
    assert_eq!(
        seen,
        vec![('a', Some(0)), ('b', Some(1)), ('c', Some(2))]
    );
}

#[rstest]
fn each_visits_mapping_in_insertion_order() {
    let mut keys = Vec::new();
    each(&profile(), |_, key, _| keys.push(key.to_string())).unwrap();
    assert_eq!(keys, vec!["name", "age", "admin"]);
}

#[rstest]
fn each_passes_the_collection_itself() {
    let numbers = vec![10, 20];
    let mut lengths = Vec::new();
    each(&numbers, |_, _, whole| lengths.push(whole.len())).unwrap();
    assert_eq!(lengths, vec![2, 2]);
}

#[rstest]
fn each_over_btree_map_uses_sorted_keys() {
    let map: BTreeMap<String, i32> = [("b".to_string(), 2), ("a".to_string(), 1)].into();
    let mut keys = Vec::new();
    each(&map, |_, key, _| keys.push(key.as_name().map(str::to_string))).unwrap();
    assert_eq!(keys, vec![Some("a".to_string()), Some("b".to_string())]);
}

#[rstest]
#[case(Value::Null, "null")]
#[case(Value::from(3), "number")]
#[case(Value::from("text"), "string")]
#[case(Value::from(true), "boolean")]
fn each_rejects_scalar_values(#[case] scalar: Value, #[case] found: &'static str) {
    let mut calls = 0;
    let result = each(&scalar, |_, _, _| calls += 1);
    assert_eq!(result, Err(UnderbarError::InvalidCollection { found }));
    assert_eq!(calls, 0);
}

#[rstest]
fn each_over_value_object_yields_named_keys() {
    let value = Value::from(profile());
    let mut keys = Vec::new();
    each(&value, |_, key, _| {
        if let Key::Name(name) = key {
            keys.push(name.to_string());
        }
    })
    .unwrap();
    assert_eq!(keys, vec!["name", "age", "admin"]);
}

// =============================================================================
// reduce
// =============================================================================

#[rstest]
fn reduce_single_element_without_seed_skips_combine() {
    let mut calls = 0;
    let result = reduce(
        &[5],
        |total, value, _| {
            calls += 1;
            total + value
        },
        None,
    );
    assert_eq!(result, Ok(5));
    assert_eq!(calls, 0);
}

#[rstest]
fn reduce_with_seed_visits_every_element() {
    assert_eq!(reduce(&[1, 2, 3], |total, value, _| total + value, Some(0)), Ok(6));
}

#[rstest]
fn reduce_empty_without_seed_fails() {
    assert_eq!(
        reduce(&Vec::<i32>::new(), |total, value, _| total + value, None),
        Err(UnderbarError::EmptyReductionWithoutSeed)
    );
}

#[rstest]
fn reduce_mapping_seeds_from_first_enumerated_value() {
    let lengths: Mapping<String> =
        [("first", "ab".to_string()), ("second", "cde".to_string())].into();
    let joined = reduce(&lengths, |joined, value, _| joined + value, None);
    assert_eq!(joined, Ok("abcde".to_string()));
}

#[rstest]
fn fold_changes_accumulator_type() {
    let words = Collection::from(vec!["a", "bb", "ccc"]);
    assert_eq!(fold(&words, 0, |total, word, _| total + word.len()), Ok(6));
}

#[rstest]
fn contains_uses_value_equality() {
    assert_eq!(contains(&vec![1, 2, 3], &2), Ok(true));
    assert_eq!(contains(&profile(), &Value::from("ana")), Ok(true));
    assert_eq!(contains(&profile(), &Value::from("ben")), Ok(false));
}

// =============================================================================
// every / some
// =============================================================================

#[rstest]
#[case(vec![2, 4, 6], true, 3)]
#[case(vec![2, 3, 6], false, 2)]
#[case(vec![1, 2, 4], false, 1)]
#[case(vec![], true, 0)]
fn every_short_circuits_on_first_failure(
    #[case] numbers: Vec<i32>,
    #[case] expected: bool,
    #[case] expected_calls: usize,
) {
    let mut calls = 0;
    let result = every(&numbers, |number, _| {
        calls += 1;
        number % 2 == 0
    });
    assert_eq!(result, Ok(expected));
    assert_eq!(calls, expected_calls);
}

#[rstest]
#[case(vec![1, 3, 5], false, 3)]
#[case(vec![1, 2, 3], true, 2)]
#[case(vec![], false, 0)]
fn some_stops_after_first_success(
    #[case] numbers: Vec<i32>,
    #[case] expected: bool,
    #[case] expected_calls: usize,
) {
    let mut calls = 0;
    let result = some(&numbers, |number, _| {
        calls += 1;
        number % 2 == 0
    });
    assert_eq!(result, Ok(expected));
    assert_eq!(calls, expected_calls);
}

#[rstest]
fn truthy_defaults_follow_value_truthiness() {
    let mixed = Value::from(vec![Value::from(1), Value::Null, Value::from("x")]);
    assert_eq!(every_truthy(&mixed), Ok(false));
    assert_eq!(some_truthy(&mixed), Ok(true));
    assert_eq!(some_truthy(&Value::from(Vec::<Value>::new())), Ok(false));
    assert_eq!(every_truthy(&profile()), Ok(false));
}

#[rstest]
fn predicates_reject_scalars() {
    assert_eq!(
        some_truthy(&Value::from(1)),
        Err(UnderbarError::InvalidCollection { found: "number" })
    );
}

// =============================================================================
// Helpers
// =============================================================================

#[rstest]
fn filter_and_reject_partition_a_mapping() {
    let ages: Mapping<u32> = [("ana", 34), ("ben", 17), ("cy", 52)].into();
    let adults = filter(&ages, |age| *age >= 18).unwrap();
    let minors = reject(&ages, |age| *age >= 18).unwrap();
    assert_eq!(adults, vec![34, 52]);
    assert_eq!(minors, vec![17]);
}

#[rstest]
fn pluck_reads_value_objects() {
    let people = vec![Value::from(profile()), Value::from(vec![1, 2])];
    assert_eq!(
        pluck(&people, "name"),
        Ok(vec![Some(Value::from("ana")), None])
    );
}

#[rstest]
fn invoke_reports_unknown_method() {
    let words = vec!["a".to_string()];
    assert_eq!(
        invoke_method(&words, "explode"),
        Err(UnderbarError::UnknownMethod {
            name: "explode".to_string()
        })
    );
}

#[rstest]
fn invoke_applies_function_to_elements_without_methods() {
    let doubled = invoke(&[1, 2, 3], |number: &i32| number * 2);
    assert_eq!(doubled, Ok(vec![2, 4, 6]));

    let ages: Mapping<u32> = [("ana", 34), ("ben", 17)].into();
    assert_eq!(invoke(&ages, |age: &u32| *age >= 18), Ok(vec![true, false]));
}

#[rstest]
fn extend_then_defaults_merge_left_to_right() {
    let mut settings: Mapping<i32> = [("depth", 1)].into();
    let overrides: Mapping<i32> = [("depth", 3), ("width", 4)].into();
    let fallback: Mapping<i32> = [("width", 9), ("height", 2)].into();

    extend(&mut settings, &[&overrides]);
    defaults(&mut settings, &[&fallback]);

    let expected: Mapping<i32> = [("depth", 3), ("width", 4), ("height", 2)].into();
    assert_eq!(settings, expected);
}

#[rstest]
fn sequence_combinators_compose() {
    let left = [1, 2, 2, 3, 4];
    let right = [2, 3, 5];

    assert_eq!(uniq(&left[..]), Ok(vec![1, 2, 3, 4]));
    assert_eq!(intersection(&[&left[..], &right[..]]), Ok(vec![2, 3]));
    assert_eq!(difference(&left, &[&right[..]]), Ok(vec![1, 4]));
    assert_eq!(
        sort_by(&vec![3, 1, 2], |value| -value),
        Ok(vec![3, 2, 1])
    );
    assert_eq!(
        zip(&[&[1, 2][..], &[3][..]]),
        Ok(vec![vec![Some(1), Some(3)], vec![Some(2), None]])
    );
}

#[rstest]
fn flatten_values_unwraps_nested_arrays() {
    let nested = Value::from(vec![
        Value::from(1),
        Value::from(vec![Value::from(2), Value::from(vec![3])]),
    ]);
    assert_eq!(
        flatten_values(&nested),
        Ok(vec![Value::from(1), Value::from(2), Value::from(3)])
    );
}
