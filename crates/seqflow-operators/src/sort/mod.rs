//! Ordering and reversal.
//!
//! Both materialize the upstream into a buffer on the first pull before
//! emitting anything. Sorting is stable; ties keep upstream order, also in
//! descending direction.

pub mod comparer;
pub mod reverse;

pub use comparer::{Chained, Comparer, CustomOrder, KeyComparer, KeyOrder, TextOrder};
pub use reverse::Reverse;

use std::cmp::Ordering;

use seqflow_core::config::engine_config;
use seqflow_core::metrics;
use seqflow_core::Sequence;

/// A sorted view of `source` under `comparer`.
///
/// Built by `order_by*`; refine with `then_by*` to break ties.
#[derive(Clone)]
pub struct OrderBy<S, C> {
    source: S,
    comparer: C,
}

impl<S, C> OrderBy<S, C> {
    pub(crate) fn new(source: S, comparer: C) -> Self {
        Self { source, comparer }
    }

    fn then<D>(self, next: D) -> OrderBy<S, Chained<C, D>> {
        OrderBy {
            source: self.source,
            comparer: Chained::new(self.comparer, next),
        }
    }
}

impl<S, C> OrderBy<S, C>
where
    S: Sequence,
    C: Comparer<S::Item>,
{
    /// Break ties by `key`, ascending, with the legacy text ordering.
    pub fn then_by<K, F>(self, key: F) -> OrderBy<S, Chained<C, KeyComparer<F, TextOrder>>>
    where
        F: Fn(&S::Item) -> K,
        TextOrder: KeyOrder<K>,
    {
        self.then(KeyComparer::new(key, TextOrder, false))
    }

    /// Break ties by `key`, descending, with the legacy text ordering.
    pub fn then_by_descending<K, F>(
        self,
        key: F,
    ) -> OrderBy<S, Chained<C, KeyComparer<F, TextOrder>>>
    where
        F: Fn(&S::Item) -> K,
        TextOrder: KeyOrder<K>,
    {
        self.then(KeyComparer::new(key, TextOrder, true))
    }

    /// Break ties by `key` under a caller-supplied comparator.
    pub fn then_by_with<K, F, G>(
        self,
        key: F,
        compare: G,
    ) -> OrderBy<S, Chained<C, KeyComparer<F, CustomOrder<G>>>>
    where
        F: Fn(&S::Item) -> K,
        G: Fn(&K, &K) -> Ordering,
    {
        self.then(KeyComparer::new(key, CustomOrder(compare), false))
    }

    pub fn then_by_descending_with<K, F, G>(
        self,
        key: F,
        compare: G,
    ) -> OrderBy<S, Chained<C, KeyComparer<F, CustomOrder<G>>>>
    where
        F: Fn(&S::Item) -> K,
        G: Fn(&K, &K) -> Ordering,
    {
        self.then(KeyComparer::new(key, CustomOrder(compare), true))
    }
}

impl<S, C> Sequence for OrderBy<S, C>
where
    S: Sequence,
    C: Comparer<S::Item>,
{
    type Item = S::Item;
    type Cursor<'a>
        = OrderByCursor<'a, S, C>
    where
        Self: 'a;

    fn iterate(&self) -> Self::Cursor<'_> {
        OrderByCursor {
            seq: self,
            state: SortState::Pending,
        }
    }
}

enum SortState<T> {
    Pending,
    Emitting(std::vec::IntoIter<T>),
}

pub struct OrderByCursor<'a, S: Sequence, C> {
    seq: &'a OrderBy<S, C>,
    state: SortState<S::Item>,
}

impl<'a, S, C> Iterator for OrderByCursor<'a, S, C>
where
    S: Sequence,
    C: Comparer<S::Item>,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        if let SortState::Pending = self.state {
            let mut buffer = materialize(&self.seq.source);
            let comparer = &self.seq.comparer;
            buffer.sort_by(|a, b| comparer.compare(a, b));
            metrics::emit("order_by_materialized", &[("rows", buffer.len())]);
            self.state = SortState::Emitting(buffer.into_iter());
        }
        match &mut self.state {
            SortState::Emitting(it) => it.next(),
            SortState::Pending => None,
        }
    }
}

/// Drain `source` into a buffer sized from the cursor's lower bound.
pub(crate) fn materialize<S: Sequence>(source: &S) -> Vec<S::Item> {
    let cursor = source.iterate();
    let mut buffer = Vec::with_capacity(engine_config().capacity_for(cursor.size_hint().0));
    buffer.extend(cursor);
    buffer
}
