mod common;

use std::cmp::Ordering;

use common::{counted, records};
use seqflow::prelude::*;
use serde_json::json;

fn ids(rows: Vec<Value>) -> Vec<i64> {
    rows.iter().filter_map(|r| r.field("id").as_i64()).collect()
}

#[test]
fn test_default_order_compares_keys_as_text() {
    let out = from(vec![10, 9, 2, 1, 100]).order_by(|x| *x).to_vec();
    assert_eq!(out, vec![1, 10, 100, 2, 9]);
}

#[test]
fn test_float_keys_use_legacy_number_text() {
    let out = from(vec![Value::Float(0.5), Value::Float(1e-7)])
        .order_by(|v| v.clone())
        .to_vec();
    assert_eq!(out, vec![Value::Float(0.5), Value::Float(1e-7)]);

    // "-Infinity" < "0" < "1e+21" < "2" < "Infinity"
    let floats = from(vec![2.0, f64::INFINITY, 1e21, -0.0, f64::NEG_INFINITY])
        .order_by(|x| *x)
        .to_vec();
    assert_eq!(floats, vec![f64::NEG_INFINITY, -0.0, 1e21, 2.0, f64::INFINITY]);

    let joined = from(vec![Value::Float(1e-7), Value::Float(f64::INFINITY)]).string_join(" ");
    assert_eq!(joined, "1e-7 Infinity");
}

#[test]
fn test_typed_order_through_comparator() {
    let out = from(vec![10, 9, 2, 1, 100])
        .order_by_with(|x| *x, i32::cmp)
        .to_vec();
    assert_eq!(out, vec![1, 2, 9, 10, 100]);

    let desc = from(vec![10, 9, 2, 1, 100])
        .order_by_descending_with(|x| *x, i32::cmp)
        .to_vec();
    assert_eq!(desc, vec![100, 10, 9, 2, 1]);
}

#[test]
fn test_sort_is_stable_in_both_directions() {
    let rows = from(vec![("b", 1), ("a", 2), ("b", 3), ("a", 4)]);
    let asc = rows.clone().order_by(|r| r.0).map(|r| r.1).to_vec();
    assert_eq!(asc, vec![2, 4, 1, 3]);

    let desc = rows.order_by_descending(|r| r.0).map(|r| r.1).to_vec();
    assert_eq!(desc, vec![1, 3, 2, 4]);
}

#[test]
fn test_absent_keys_sort_last_regardless_of_direction() {
    let rows = records(json!([
        {"id": 1, "name": "cid"},
        {"id": 2},
        {"id": 3, "name": "ann"},
        {"id": 4, "name": null},
    ]));

    let asc = ids(rows.clone().order_by(|r| r.field("name")).to_vec());
    assert_eq!(asc, vec![3, 1, 2, 4]);

    let desc = ids(rows.order_by_descending(|r| r.field("name")).to_vec());
    assert_eq!(desc, vec![1, 3, 2, 4]);
}

#[test]
fn test_optional_keys_sort_last() {
    let out = from(vec![None, Some("b"), Some("a"), None])
        .order_by_descending(|x| *x)
        .to_vec();
    assert_eq!(out, vec![Some("b"), Some("a"), None, None]);
}

#[test]
fn test_then_by_breaks_ties() {
    let people = from(vec![
        ("smith", "zoe", 30),
        ("jones", "amy", 25),
        ("smith", "al", 41),
        ("jones", "bea", 25),
    ]);

    let by_name = people
        .clone()
        .order_by(|p| p.0)
        .then_by(|p| p.1)
        .map(|p| p.1)
        .to_vec();
    assert_eq!(by_name, vec!["amy", "bea", "al", "zoe"]);

    let by_age = people
        .order_by_descending_with(|p| p.2, i32::cmp)
        .then_by_descending(|p| p.1)
        .map(|p| p.1)
        .to_vec();
    assert_eq!(by_age, vec!["al", "zoe", "bea", "amy"]);
}

#[test]
fn test_then_by_with_custom_comparator() {
    let words = from(vec!["bb", "a", "ccc", "dd", "e"])
        .order_by_with(|w| w.len(), usize::cmp)
        .then_by_descending_with(|w| w.to_string(), |a: &String, b: &String| a.cmp(b))
        .to_vec();
    assert_eq!(words, vec!["e", "a", "dd", "bb", "ccc"]);

    let reversed = from(vec![3, 1, 2])
        .order_by_with(|x| *x, |a: &i32, b: &i32| -> Ordering { b.cmp(a) })
        .to_vec();
    assert_eq!(reversed, vec![3, 2, 1]);
}

#[test]
fn test_reverse_round_trips() {
    let source = from(vec![4, 8, 15, 16, 23, 42]);
    assert_eq!(source.clone().reverse().to_vec(), vec![42, 23, 16, 15, 8, 4]);
    assert_eq!(source.clone().reverse().reverse().to_vec(), source.to_vec());
    assert!(empty::<i32>().reverse().to_vec().is_empty());
}

#[test]
fn test_materializing_operators_wait_for_first_pull() {
    let (source, pulls) = counted(vec![3, 1, 2]);
    let sorted = source.order_by(|x| *x).reverse();
    assert_eq!(pulls.get(), 0);
    assert_eq!(sorted.first().expect("first"), 3);
    assert_eq!(pulls.get(), 3);
}
