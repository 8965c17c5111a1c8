//! The `Aggregate` extension trait: every terminal operation, available on
//! any [`Sequence`].
//!
//! Terminals borrow the sequence, drive one fresh cursor, and return a
//! concrete value. The sequence itself stays reusable.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::fmt::{Debug, Display};
use std::hash::Hash;

use seqflow_core::error::Result;
use seqflow_core::number::{AsNumber, Number};
use seqflow_core::sequence::{IntoSequence, Sequence};

use crate::collect;
use crate::element::{self, or_default};
use crate::fold;
use crate::lookup::Lookup;
use crate::numeric::{self, read_number};

pub trait Aggregate: Sequence + Sized {
    // ----- folds -----

    /// Left fold from `seed`.
    fn aggregate<A, F>(&self, seed: A, f: F) -> A
    where
        F: Fn(A, Self::Item) -> A,
    {
        fold::aggregate(self, seed, f)
    }

    /// Left fold from `seed`, finished by `result`.
    fn aggregate_with<A, R, F, G>(&self, seed: A, f: F, result: G) -> R
    where
        F: Fn(A, Self::Item) -> A,
        G: FnOnce(A) -> R,
    {
        result(fold::aggregate(self, seed, f))
    }

    /// Seedless fold; `EmptySequence` on an empty source.
    fn reduce<F>(&self, f: F) -> Result<Self::Item>
    where
        F: Fn(Self::Item, Self::Item) -> Self::Item,
    {
        fold::reduce(self, f)
    }

    // ----- quantifiers & counting -----

    fn all<P>(&self, predicate: P) -> bool
    where
        P: Fn(&Self::Item) -> bool,
    {
        fold::all(self, predicate)
    }

    fn any(&self) -> bool {
        fold::any(self)
    }

    fn any_where<P>(&self, predicate: P) -> bool
    where
        P: Fn(&Self::Item) -> bool,
    {
        fold::any_where(self, predicate)
    }

    /// Number of elements. Accepts any element type and never fails, so
    /// `TypeMismatch` does not apply here.
    fn count(&self) -> usize {
        fold::count(self)
    }

    fn count_where<P>(&self, predicate: P) -> usize
    where
        P: Fn(&Self::Item) -> bool,
    {
        fold::count_where(self, predicate)
    }

    // ----- numeric -----

    fn sum(&self) -> Result<Number>
    where
        Self::Item: AsNumber,
    {
        numeric::sum(self, |item| read_number(item, "sum"), "sum")
    }

    fn sum_by<N, F>(&self, selector: F) -> Result<Number>
    where
        F: Fn(&Self::Item) -> N,
        N: AsNumber,
    {
        numeric::sum(self, |item| read_number(&selector(item), "sum"), "sum")
    }

    fn min(&self) -> Result<Number>
    where
        Self::Item: AsNumber,
    {
        numeric::extreme(self, |item| read_number(item, "min"), Ordering::Less, "min")
    }

    fn min_by<N, F>(&self, selector: F) -> Result<Number>
    where
        F: Fn(&Self::Item) -> N,
        N: AsNumber,
    {
        numeric::extreme(
            self,
            |item| read_number(&selector(item), "min"),
            Ordering::Less,
            "min",
        )
    }

    fn max(&self) -> Result<Number>
    where
        Self::Item: AsNumber,
    {
        numeric::extreme(self, |item| read_number(item, "max"), Ordering::Greater, "max")
    }

    fn max_by<N, F>(&self, selector: F) -> Result<Number>
    where
        F: Fn(&Self::Item) -> N,
        N: AsNumber,
    {
        numeric::extreme(
            self,
            |item| read_number(&selector(item), "max"),
            Ordering::Greater,
            "max",
        )
    }

    fn average(&self) -> Result<f64>
    where
        Self::Item: AsNumber,
    {
        numeric::average(self, |item| read_number(item, "average"), "average")
    }

    fn average_by<N, F>(&self, selector: F) -> Result<f64>
    where
        F: Fn(&Self::Item) -> N,
        N: AsNumber,
    {
        numeric::average(self, |item| read_number(&selector(item), "average"), "average")
    }

    /// Element with the smallest key; the earliest one on ties.
    fn min_by_key<K, F>(&self, key: F) -> Result<Self::Item>
    where
        F: Fn(&Self::Item) -> K,
        K: Ord,
    {
        numeric::extreme_by_key(self, key, Ordering::Less, "min_by_key")
    }

    /// Element with the largest key; the earliest one on ties.
    fn max_by_key<K, F>(&self, key: F) -> Result<Self::Item>
    where
        F: Fn(&Self::Item) -> K,
        K: Ord,
    {
        numeric::extreme_by_key(self, key, Ordering::Greater, "max_by_key")
    }

    // ----- element lookups -----

    fn first(&self) -> Result<Self::Item> {
        element::first(self, "first")
    }

    fn first_where<P>(&self, predicate: P) -> Result<Self::Item>
    where
        P: Fn(&Self::Item) -> bool,
    {
        element::first_where(self, predicate, "first")
    }

    fn first_or(&self, default: Self::Item) -> Self::Item {
        or_default(element::first(self, "first"), default)
    }

    fn first_or_where<P>(&self, predicate: P, default: Self::Item) -> Self::Item
    where
        P: Fn(&Self::Item) -> bool,
    {
        or_default(element::first_where(self, predicate, "first"), default)
    }

    fn last(&self) -> Result<Self::Item> {
        element::last(self, "last")
    }

    fn last_where<P>(&self, predicate: P) -> Result<Self::Item>
    where
        P: Fn(&Self::Item) -> bool,
    {
        element::last_where(self, predicate, "last")
    }

    fn last_or(&self, default: Self::Item) -> Self::Item {
        or_default(element::last(self, "last"), default)
    }

    fn last_or_where<P>(&self, predicate: P, default: Self::Item) -> Self::Item
    where
        P: Fn(&Self::Item) -> bool,
    {
        or_default(element::last_where(self, predicate, "last"), default)
    }

    /// First element, reported under `single`. Only existence is checked: a
    /// second element does not make this fail.
    fn single(&self) -> Result<Self::Item> {
        element::first_where(self, |_| true, "single")
    }

    fn single_where<P>(&self, predicate: P) -> Result<Self::Item>
    where
        P: Fn(&Self::Item) -> bool,
    {
        element::first_where(self, predicate, "single")
    }

    fn single_or(&self, default: Self::Item) -> Self::Item {
        or_default(element::first_where(self, |_| true, "single"), default)
    }

    fn single_or_where<P>(&self, predicate: P, default: Self::Item) -> Self::Item
    where
        P: Fn(&Self::Item) -> bool,
    {
        or_default(element::first_where(self, predicate, "single"), default)
    }

    fn element_at(&self, index: i64) -> Result<Self::Item> {
        element::element_at(self, index)
    }

    /// `element_at` with a fallback past the end. Negative indices still fail.
    fn element_at_or(&self, index: i64, default: Self::Item) -> Result<Self::Item> {
        element::element_at_or(self, index, default)
    }

    // ----- membership & equality -----

    fn contains(&self, value: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        collect::contains_by(self, value, |a, b| a == b)
    }

    fn contains_by<F>(&self, value: &Self::Item, eq: F) -> bool
    where
        F: Fn(&Self::Item, &Self::Item) -> bool,
    {
        collect::contains_by(self, value, eq)
    }

    fn sequence_equal<B>(&self, other: B) -> bool
    where
        B: IntoSequence<Item = Self::Item>,
        Self::Item: PartialEq,
    {
        collect::sequence_equal_by(self, &other.into_sequence(), |a, b| a == b)
    }

    fn sequence_equal_by<B, F>(&self, other: B, eq: F) -> bool
    where
        B: IntoSequence<Item = Self::Item>,
        F: Fn(&Self::Item, &Self::Item) -> bool,
    {
        collect::sequence_equal_by(self, &other.into_sequence(), eq)
    }

    // ----- collecting -----

    fn string_join(&self, separator: &str) -> String
    where
        Self::Item: Display,
    {
        collect::string_join(self, separator)
    }

    fn to_vec(&self) -> Vec<Self::Item> {
        collect::to_vec(self)
    }

    fn to_set(&self) -> HashSet<Self::Item>
    where
        Self::Item: Hash + Eq,
    {
        collect::to_set(self)
    }

    /// Elements keyed by `key`; `DuplicateKey` when two elements share one.
    fn to_map<K, F>(&self, key: F) -> Result<HashMap<K, Self::Item>>
    where
        F: Fn(&Self::Item) -> K,
        K: Hash + Eq + Debug,
    {
        collect::to_map(self, key, std::convert::identity)
    }

    fn to_map_with<K, V, FK, FV>(&self, key: FK, value: FV) -> Result<HashMap<K, V>>
    where
        FK: Fn(&Self::Item) -> K,
        FV: Fn(Self::Item) -> V,
        K: Hash + Eq + Debug,
    {
        collect::to_map(self, key, value)
    }

    /// Every element grouped under its key, keys in first-occurrence order.
    fn to_group_map<K, F>(&self, key: F) -> Lookup<K, Self::Item>
    where
        F: Fn(&Self::Item) -> K,
        K: Hash + Eq + Clone,
    {
        collect::to_group_map(self, key)
    }

    // ----- async -----

    /// Await each pending element in iteration order.
    #[cfg(feature = "async")]
    fn resolve_all<T>(&self) -> impl std::future::Future<Output = seqflow_core::source::VecSource<T>>
    where
        Self::Item: std::future::Future<Output = T>,
    {
        crate::resolve::resolve_all(self)
    }
}

impl<S: Sequence> Aggregate for S {}
