//! Ordering descriptors: a key extractor, a key order, and a direction.

use std::cmp::Ordering;

use seqflow_core::ordering::{compare_text, OrderKey};

/// Total order over whole elements, as used by `sort_by`.
pub trait Comparer<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Order over extracted keys.
pub trait KeyOrder<K> {
    fn compare_keys(&self, a: &K, b: &K, descending: bool) -> Ordering;
}

/// Legacy default: keys coerced to text, absent keys last in both directions.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextOrder;

impl<K: OrderKey> KeyOrder<K> for TextOrder {
    fn compare_keys(&self, a: &K, b: &K, descending: bool) -> Ordering {
        compare_text(a, b, descending)
    }
}

/// Caller-supplied comparator. Descending reverses its result wholesale.
#[derive(Debug, Clone, Copy)]
pub struct CustomOrder<G>(pub G);

impl<K, G> KeyOrder<K> for CustomOrder<G>
where
    G: Fn(&K, &K) -> Ordering,
{
    fn compare_keys(&self, a: &K, b: &K, descending: bool) -> Ordering {
        let ord = (self.0)(a, b);
        if descending {
            ord.reverse()
        } else {
            ord
        }
    }
}

#[derive(Clone)]
pub struct KeyComparer<F, O> {
    key: F,
    order: O,
    descending: bool,
}

impl<F, O> KeyComparer<F, O> {
    pub fn new(key: F, order: O, descending: bool) -> Self {
        Self {
            key,
            order,
            descending,
        }
    }
}

impl<T, K, F, O> Comparer<T> for KeyComparer<F, O>
where
    F: Fn(&T) -> K,
    O: KeyOrder<K>,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.order
            .compare_keys(&(self.key)(a), &(self.key)(b), self.descending)
    }
}

/// `first`, falling back to `then` on ties.
#[derive(Clone)]
pub struct Chained<A, B> {
    first: A,
    then: B,
}

impl<A, B> Chained<A, B> {
    pub fn new(first: A, then: B) -> Self {
        Self { first, then }
    }
}

impl<T, A, B> Comparer<T> for Chained<A, B>
where
    A: Comparer<T>,
    B: Comparer<T>,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.first
            .compare(a, b)
            .then_with(|| self.then.compare(a, b))
    }
}
