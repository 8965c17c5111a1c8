//! Hash join (inner, first match) and group join (all matches).

use std::collections::HashMap;
use std::hash::Hash;

use seqflow_core::metrics;
use seqflow_core::source::VecSource;
use seqflow_core::Sequence;

/// Inner join pairing each outer element with the *first* inner element that
/// shares its key. Outer elements without a match are dropped.
#[derive(Clone)]
pub struct Join<O, I, FO, FI, R> {
    outer: O,
    inner: I,
    outer_key: FO,
    inner_key: FI,
    result: R,
}

impl<O, I, FO, FI, R> Join<O, I, FO, FI, R> {
    pub(crate) fn new(outer: O, inner: I, outer_key: FO, inner_key: FI, result: R) -> Self {
        Self {
            outer,
            inner,
            outer_key,
            inner_key,
            result,
        }
    }
}

impl<O, I, FO, FI, R, K, U> Sequence for Join<O, I, FO, FI, R>
where
    O: Sequence,
    I: Sequence,
    I::Item: Clone,
    FO: Fn(&O::Item) -> K,
    FI: Fn(&I::Item) -> K,
    R: Fn(O::Item, I::Item) -> U,
    K: Hash + Eq,
{
    type Item = U;
    type Cursor<'a>
        = JoinCursor<'a, O, I, FO, FI, R, K>
    where
        Self: 'a;

    fn iterate(&self) -> Self::Cursor<'_> {
        JoinCursor {
            join: self,
            outer: self.outer.iterate(),
            lookup: None,
        }
    }
}

pub struct JoinCursor<'a, O: Sequence + 'a, I: Sequence, FO, FI, R, K> {
    join: &'a Join<O, I, FO, FI, R>,
    outer: O::Cursor<'a>,
    lookup: Option<HashMap<K, I::Item>>,
}

impl<'a, O, I, FO, FI, R, K, U> Iterator for JoinCursor<'a, O, I, FO, FI, R, K>
where
    O: Sequence + 'a,
    I: Sequence,
    I::Item: Clone,
    FO: Fn(&O::Item) -> K,
    FI: Fn(&I::Item) -> K,
    R: Fn(O::Item, I::Item) -> U,
    K: Hash + Eq,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        let join = self.join;
        let lookup = self.lookup.get_or_insert_with(|| {
            let mut map = HashMap::new();
            for item in join.inner.iterate() {
                // Keep only the first inner element per key.
                map.entry((join.inner_key)(&item)).or_insert(item);
            }
            metrics::emit("join_materialized", &[("keys", map.len())]);
            map
        });
        loop {
            let outer = self.outer.next()?;
            if let Some(matched) = lookup.get(&(join.outer_key)(&outer)) {
                return Some((join.result)(outer, matched.clone()));
            }
        }
    }
}

/// Pairs each outer element with every inner element sharing its key,
/// possibly none, as a lazy sub-sequence.
#[derive(Clone)]
pub struct GroupJoin<O, I, FO, FI, R> {
    outer: O,
    inner: I,
    outer_key: FO,
    inner_key: FI,
    result: R,
}

impl<O, I, FO, FI, R> GroupJoin<O, I, FO, FI, R> {
    pub(crate) fn new(outer: O, inner: I, outer_key: FO, inner_key: FI, result: R) -> Self {
        Self {
            outer,
            inner,
            outer_key,
            inner_key,
            result,
        }
    }
}

impl<O, I, FO, FI, R, K, U> Sequence for GroupJoin<O, I, FO, FI, R>
where
    O: Sequence,
    I: Sequence,
    I::Item: Clone,
    FO: Fn(&O::Item) -> K,
    FI: Fn(&I::Item) -> K,
    R: Fn(O::Item, VecSource<I::Item>) -> U,
    K: Hash + Eq,
{
    type Item = U;
    type Cursor<'a>
        = GroupJoinCursor<'a, O, I, FO, FI, R, K>
    where
        Self: 'a;

    fn iterate(&self) -> Self::Cursor<'_> {
        GroupJoinCursor {
            join: self,
            outer: self.outer.iterate(),
            lookup: None,
        }
    }
}

pub struct GroupJoinCursor<'a, O: Sequence + 'a, I: Sequence, FO, FI, R, K> {
    join: &'a GroupJoin<O, I, FO, FI, R>,
    outer: O::Cursor<'a>,
    lookup: Option<HashMap<K, Vec<I::Item>>>,
}

impl<'a, O, I, FO, FI, R, K, U> Iterator for GroupJoinCursor<'a, O, I, FO, FI, R, K>
where
    O: Sequence + 'a,
    I: Sequence,
    I::Item: Clone,
    FO: Fn(&O::Item) -> K,
    FI: Fn(&I::Item) -> K,
    R: Fn(O::Item, VecSource<I::Item>) -> U,
    K: Hash + Eq,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        let join = self.join;
        let lookup = self.lookup.get_or_insert_with(|| {
            let mut map: HashMap<K, Vec<I::Item>> = HashMap::new();
            for item in join.inner.iterate() {
                map.entry((join.inner_key)(&item)).or_default().push(item);
            }
            metrics::emit("group_join_materialized", &[("keys", map.len())]);
            map
        });
        let outer = self.outer.next()?;
        let matches = lookup
            .get(&(join.outer_key)(&outer))
            .cloned()
            .unwrap_or_default();
        Some((join.result)(outer, VecSource::new(matches)))
    }
}
