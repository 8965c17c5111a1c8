//! Hash-keyed set operators: `distinct`, `union`, `except`, `intersect`.
//!
//! All of them compare elements through a key extractor (a clone of the
//! element for the plain variants). `except` and `intersect` drain the
//! secondary input into a key set on the first pull; the primary input is
//! then pulled one element at a time.

use std::collections::HashSet;
use std::hash::Hash;

use seqflow_core::metrics;
use seqflow_core::Sequence;

use crate::concat::Concat;

/// First occurrence of every key, in arrival order.
#[derive(Clone)]
pub struct Distinct<S, F> {
    source: S,
    key: F,
}

/// `union` is concat-then-distinct.
pub type Union<A, B, F> = Distinct<Concat<A, B>, F>;

impl<S, F> Distinct<S, F> {
    pub(crate) fn new(source: S, key: F) -> Self {
        Self { source, key }
    }
}

impl<S, F, K> Sequence for Distinct<S, F>
where
    S: Sequence,
    F: Fn(&S::Item) -> K,
    K: Hash + Eq,
{
    type Item = S::Item;
    type Cursor<'a>
        = DistinctCursor<'a, S::Cursor<'a>, F, K>
    where
        Self: 'a;

    fn iterate(&self) -> Self::Cursor<'_> {
        DistinctCursor {
            inner: self.source.iterate(),
            key: &self.key,
            seen: HashSet::new(),
        }
    }
}

pub struct DistinctCursor<'a, I, F, K> {
    inner: I,
    key: &'a F,
    seen: HashSet<K>,
}

impl<'a, I, F, K> Iterator for DistinctCursor<'a, I, F, K>
where
    I: Iterator,
    F: Fn(&I::Item) -> K,
    K: Hash + Eq,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        loop {
            let item = self.inner.next()?;
            if self.seen.insert((self.key)(&item)) {
                return Some(item);
            }
        }
    }
}

/// Elements of `primary` whose key does not occur in `secondary`.
#[derive(Clone)]
pub struct Except<A, B, F> {
    primary: A,
    secondary: B,
    key: F,
}

impl<A, B, F> Except<A, B, F> {
    pub(crate) fn new(primary: A, secondary: B, key: F) -> Self {
        Self {
            primary,
            secondary,
            key,
        }
    }
}

impl<A, B, F, K> Sequence for Except<A, B, F>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
    F: Fn(&A::Item) -> K,
    K: Hash + Eq,
{
    type Item = A::Item;
    type Cursor<'a>
        = KeySetCursor<'a, A::Cursor<'a>, B, F, K>
    where
        Self: 'a;

    fn iterate(&self) -> Self::Cursor<'_> {
        KeySetCursor {
            inner: self.primary.iterate(),
            secondary: &self.secondary,
            key: &self.key,
            keys: None,
            mode: KeySetMode::Exclude,
        }
    }
}

/// Elements of `primary` whose key occurs in `secondary`, at most one per key.
#[derive(Clone)]
pub struct Intersect<A, B, F> {
    primary: A,
    secondary: B,
    key: F,
}

impl<A, B, F> Intersect<A, B, F> {
    pub(crate) fn new(primary: A, secondary: B, key: F) -> Self {
        Self {
            primary,
            secondary,
            key,
        }
    }
}

impl<A, B, F, K> Sequence for Intersect<A, B, F>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
    F: Fn(&A::Item) -> K,
    K: Hash + Eq,
{
    type Item = A::Item;
    type Cursor<'a>
        = KeySetCursor<'a, A::Cursor<'a>, B, F, K>
    where
        Self: 'a;

    fn iterate(&self) -> Self::Cursor<'_> {
        KeySetCursor {
            inner: self.primary.iterate(),
            secondary: &self.secondary,
            key: &self.key,
            keys: None,
            mode: KeySetMode::Retain,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeySetMode {
    Exclude,
    Retain,
}

pub struct KeySetCursor<'a, I, B, F, K> {
    inner: I,
    secondary: &'a B,
    key: &'a F,
    keys: Option<HashSet<K>>,
    mode: KeySetMode,
}

impl<'a, I, B, F, K> KeySetCursor<'a, I, B, F, K>
where
    I: Iterator,
    B: Sequence<Item = I::Item>,
    F: Fn(&I::Item) -> K,
    K: Hash + Eq,
{
    fn load_keys(&mut self) -> &mut HashSet<K> {
        let key = self.key;
        let secondary = self.secondary;
        self.keys.get_or_insert_with(|| {
            let keys: HashSet<K> = secondary.iterate().map(|item| key(&item)).collect();
            metrics::emit("key_set_materialized", &[("keys", keys.len())]);
            keys
        })
    }
}

impl<'a, I, B, F, K> Iterator for KeySetCursor<'a, I, B, F, K>
where
    I: Iterator,
    B: Sequence<Item = I::Item>,
    F: Fn(&I::Item) -> K,
    K: Hash + Eq,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let key = self.key;
        let mode = self.mode;
        self.load_keys();
        loop {
            let item = self.inner.next()?;
            let k = key(&item);
            let keys = self.keys.as_mut()?;
            let keep = match mode {
                KeySetMode::Exclude => !keys.contains(&k),
                // Removing on first match gives set cardinality.
                KeySetMode::Retain => keys.remove(&k),
            };
            if keep {
                return Some(item);
            }
        }
    }
}
