//! Collecting terminals and lockstep comparison.

use std::collections::{HashMap, HashSet};
use std::fmt::{Debug, Display};
use std::hash::Hash;

use seqflow_core::config::engine_config;
use seqflow_core::error::{Error, Result};
use seqflow_core::metrics;
use seqflow_core::sequence::Sequence;
use seqflow_operators::join::group::group_ordered;

use crate::lookup::Lookup;

pub fn to_vec<S: Sequence>(source: &S) -> Vec<S::Item> {
    let cursor = source.iterate();
    let mut out = Vec::with_capacity(engine_config().capacity_for(cursor.size_hint().0));
    out.extend(cursor);
    out
}

pub fn to_set<S>(source: &S) -> HashSet<S::Item>
where
    S: Sequence,
    S::Item: Hash + Eq,
{
    source.iterate().collect()
}

/// Key every element through `key`, projecting values through `value`.
/// Fails with `DuplicateKey` on the first repeated key.
pub fn to_map<S, K, V, FK, FV>(source: &S, key: FK, value: FV) -> Result<HashMap<K, V>>
where
    S: Sequence,
    FK: Fn(&S::Item) -> K,
    FV: Fn(S::Item) -> V,
    K: Hash + Eq + Debug,
{
    let mut out = HashMap::new();
    for item in source.iterate() {
        let k = key(&item);
        if out.contains_key(&k) {
            return Err(Error::duplicate_key(&k));
        }
        out.insert(k, value(item));
    }
    metrics::emit("to_map", &[("keys", out.len())]);
    Ok(out)
}

pub fn to_group_map<S, K, F>(source: &S, key: F) -> Lookup<K, S::Item>
where
    S: Sequence,
    F: Fn(&S::Item) -> K,
    K: Hash + Eq + Clone,
{
    let groups = group_ordered(
        source,
        &key,
        &(std::convert::identity as fn(S::Item) -> S::Item),
    );
    Lookup::from_groups(groups)
}

pub fn string_join<S>(source: &S, separator: &str) -> String
where
    S: Sequence,
    S::Item: Display,
{
    let mut out = String::new();
    for (i, item) in source.iterate().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        out.push_str(&item.to_string());
    }
    out
}

pub fn contains_by<S, F>(source: &S, value: &S::Item, eq: F) -> bool
where
    S: Sequence,
    F: Fn(&S::Item, &S::Item) -> bool,
{
    source.iterate().any(|item| eq(&item, value))
}

/// Lockstep comparison; sequences of different length are unequal.
pub fn sequence_equal_by<A, B, F>(first: &A, second: &B, eq: F) -> bool
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
    F: Fn(&A::Item, &A::Item) -> bool,
{
    let mut left = first.iterate();
    let mut right = second.iterate();
    loop {
        match (left.next(), right.next()) {
            (None, None) => return true,
            (Some(a), Some(b)) if eq(&a, &b) => continue,
            _ => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use seqflow_core::source::{from, from_iter};
    use seqflow_core::value::Value;
    use serde_json::json;

    use super::*;

    fn people() -> Vec<Value> {
        match Value::from(json!([
            {"name": "ada", "age": 36},
            {"name": "alan", "age": 41},
            {"name": "ada", "age": 12},
        ])) {
            Value::List(items) => items,
            other => vec![other],
        }
    }

    #[test]
    fn to_map_stops_at_the_first_repeated_key() {
        let err = to_map(&from(people()), |p| p.field("name"), |p| p.field("age"))
            .expect_err("ada appears twice");
        assert_eq!(
            err,
            Error::DuplicateKey {
                key: format!("{:?}", Value::from("ada")),
            }
        );

        let by_age = to_map(&from(people()), |p| p.field("age"), |p| p.field("name"))
            .expect("ages are distinct");
        assert_eq!(by_age.len(), 3);
        assert_eq!(by_age.get(&Value::Int(41)), Some(&Value::from("alan")));
    }

    #[test]
    fn string_join_coerces_each_element() {
        let mixed = from(vec![Value::Int(1), Value::Float(0.5), Value::Null, Value::from("x")]);
        assert_eq!(string_join(&mixed, ", "), "1, 0.5, null, x");
        assert_eq!(string_join(&from_iter(Vec::<i32>::new()), "-"), "");
        assert_eq!(string_join(&from(vec![Value::Float(1e21)]), ""), "1e+21");
    }

    #[test]
    fn to_group_map_keeps_every_element() {
        let lookup = to_group_map(&from(people()), |p| p.field("name"));
        assert_eq!(lookup.len(), 2);
        assert_eq!(lookup.get(&Value::from("ada")).len(), 2);
        assert!(lookup.get(&Value::from("grace")).is_empty());
    }

    #[test]
    fn sequence_equal_needs_matching_lengths() {
        let eq = |a: &i32, b: &i32| a == b;
        assert!(sequence_equal_by(&from(vec![1, 2]), &from_iter(vec![1, 2]), eq));
        assert!(!sequence_equal_by(&from(vec![1, 2]), &from(vec![1, 2, 3]), eq));
        assert!(!sequence_equal_by(&from(vec![1, 3]), &from(vec![1, 2]), eq));
    }
}
