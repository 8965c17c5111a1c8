//! Chain surface: the `SequenceExt` extension trait, the custom `Operator`
//! extension point, and `Borrowed` for chaining off a sequence by reference.
//!
//! Every method here is a factory: it wraps `self` (plus captured callbacks)
//! into a new sequence type and performs no iteration.

use std::cmp::Ordering;
use std::hash::Hash;

use seqflow_core::error::Result;
use seqflow_core::metrics;
use seqflow_core::ordering::OrderKey;
use seqflow_core::sequence::{IntoSequence, RandomAccess, Sequence};
use seqflow_core::source::VecSource;

use crate::concat::{Append, Concat, DefaultIfEmpty, Prepend};
use crate::filter::Filter;
use crate::join::{GroupBy, GroupJoin, Join};
use crate::map::{FlatMap, Map, MapIndexed};
use crate::set::{Distinct, Except, Intersect, Union};
use crate::slice::{Skip, SkipWhile, Take, TakeWhile};
use crate::sort::{CustomOrder, KeyComparer, OrderBy, Reverse, TextOrder};
use crate::window::{BatchIn, SkipLast, TakeLast};
use crate::zip::{pair, Zip};

/// Third-party operator that plugs into a chain through
/// [`SequenceExt::apply`].
///
/// Any `FnOnce(S) -> impl Sequence` is an operator too.
pub trait Operator<S: Sequence> {
    type Output: Sequence;

    /// Human-readable operator name (stable).
    fn name(&self) -> &'static str {
        "custom"
    }

    fn transform(self, input: S) -> Self::Output;
}

impl<S, F, Out> Operator<S> for F
where
    S: Sequence,
    F: FnOnce(S) -> Out,
    Out: Sequence,
{
    type Output = Out;

    fn name(&self) -> &'static str {
        "closure"
    }

    fn transform(self, input: S) -> Out {
        self(input)
    }
}

/// A sequence chained by reference instead of by value.
#[derive(Debug)]
pub struct Borrowed<'s, S>(&'s S);

impl<'s, S> Clone for Borrowed<'s, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'s, S> Copy for Borrowed<'s, S> {}

impl<'s, S: Sequence> Sequence for Borrowed<'s, S> {
    type Item = S::Item;
    type Cursor<'a>
        = S::Cursor<'s>
    where
        Self: 'a;

    fn iterate(&self) -> S::Cursor<'s> {
        self.0.iterate()
    }

    fn random_access(&self) -> Option<&dyn RandomAccess<Item = S::Item>> {
        self.0.random_access()
    }
}

type Key<T> = fn(&T) -> T;

/// Chain operators available on every [`Sequence`].
pub trait SequenceExt: Sequence + Sized {
    // ----- stateless -----

    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        F: Fn(Self::Item) -> U,
    {
        Map::new(self, f)
    }

    /// `map` with the zero-based position of each element.
    fn map_indexed<U, F>(self, f: F) -> MapIndexed<Self, F>
    where
        F: Fn(Self::Item, usize) -> U,
    {
        MapIndexed::new(self, f)
    }

    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        P: Fn(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    fn flat_map<R, F>(self, f: F) -> FlatMap<Self, F>
    where
        F: Fn(Self::Item) -> R,
        R: IntoIterator,
    {
        FlatMap::new(self, f)
    }

    fn concat<B>(self, other: B) -> Concat<Self, B::Seq>
    where
        B: IntoSequence<Item = Self::Item>,
    {
        Concat::new(self, other.into_sequence())
    }

    fn append(self, value: Self::Item) -> Append<Self>
    where
        Self::Item: Clone,
    {
        Append::new(self, value)
    }

    fn prepend(self, value: Self::Item) -> Prepend<Self>
    where
        Self::Item: Clone,
    {
        Prepend::new(self, value)
    }

    fn default_if_empty(self, value: Self::Item) -> DefaultIfEmpty<Self>
    where
        Self::Item: Clone,
    {
        DefaultIfEmpty::new(self, value)
    }

    /// Drop the first `n` elements; non-positive `n` drops nothing.
    fn skip(self, n: i64) -> Skip<Self> {
        Skip::new(self, n)
    }

    fn skip_while<P>(self, predicate: P) -> SkipWhile<Self, P>
    where
        P: Fn(&Self::Item) -> bool,
    {
        SkipWhile::new(self, predicate)
    }

    /// Keep the first `n` elements; non-positive `n` keeps nothing.
    fn take(self, n: i64) -> Take<Self> {
        Take::new(self, n)
    }

    fn take_while<P>(self, predicate: P) -> TakeWhile<Self, P>
    where
        P: Fn(&Self::Item) -> bool,
    {
        TakeWhile::new(self, predicate)
    }

    // ----- set & dedup -----

    fn distinct(self) -> Distinct<Self, Key<Self::Item>>
    where
        Self::Item: Clone + Hash + Eq,
    {
        Distinct::new(self, Clone::clone as Key<Self::Item>)
    }

    fn distinct_by<K, F>(self, key: F) -> Distinct<Self, F>
    where
        F: Fn(&Self::Item) -> K,
        K: Hash + Eq,
    {
        Distinct::new(self, key)
    }

    fn union<B>(self, other: B) -> Union<Self, B::Seq, Key<Self::Item>>
    where
        B: IntoSequence<Item = Self::Item>,
        Self::Item: Clone + Hash + Eq,
    {
        self.union_by(other, Clone::clone as Key<Self::Item>)
    }

    fn union_by<B, K, F>(self, other: B, key: F) -> Union<Self, B::Seq, F>
    where
        B: IntoSequence<Item = Self::Item>,
        F: Fn(&Self::Item) -> K,
        K: Hash + Eq,
    {
        Distinct::new(Concat::new(self, other.into_sequence()), key)
    }

    fn except<B>(self, other: B) -> Except<Self, B::Seq, Key<Self::Item>>
    where
        B: IntoSequence<Item = Self::Item>,
        Self::Item: Clone + Hash + Eq,
    {
        self.except_by(other, Clone::clone as Key<Self::Item>)
    }

    fn except_by<B, K, F>(self, other: B, key: F) -> Except<Self, B::Seq, F>
    where
        B: IntoSequence<Item = Self::Item>,
        F: Fn(&Self::Item) -> K,
        K: Hash + Eq,
    {
        Except::new(self, other.into_sequence(), key)
    }

    fn intersect<B>(self, other: B) -> Intersect<Self, B::Seq, Key<Self::Item>>
    where
        B: IntoSequence<Item = Self::Item>,
        Self::Item: Clone + Hash + Eq,
    {
        self.intersect_by(other, Clone::clone as Key<Self::Item>)
    }

    fn intersect_by<B, K, F>(self, other: B, key: F) -> Intersect<Self, B::Seq, F>
    where
        B: IntoSequence<Item = Self::Item>,
        F: Fn(&Self::Item) -> K,
        K: Hash + Eq,
    {
        Intersect::new(self, other.into_sequence(), key)
    }

    // ----- ordering -----

    /// Stable ascending sort under the legacy text ordering of `key`.
    fn order_by<K, F>(self, key: F) -> OrderBy<Self, KeyComparer<F, TextOrder>>
    where
        F: Fn(&Self::Item) -> K,
        K: OrderKey,
    {
        OrderBy::new(self, KeyComparer::new(key, TextOrder, false))
    }

    fn order_by_descending<K, F>(self, key: F) -> OrderBy<Self, KeyComparer<F, TextOrder>>
    where
        F: Fn(&Self::Item) -> K,
        K: OrderKey,
    {
        OrderBy::new(self, KeyComparer::new(key, TextOrder, true))
    }

    /// Stable ascending sort of `key` under a caller-supplied comparator.
    fn order_by_with<K, F, G>(self, key: F, compare: G) -> OrderBy<Self, KeyComparer<F, CustomOrder<G>>>
    where
        F: Fn(&Self::Item) -> K,
        G: Fn(&K, &K) -> Ordering,
    {
        OrderBy::new(self, KeyComparer::new(key, CustomOrder(compare), false))
    }

    fn order_by_descending_with<K, F, G>(
        self,
        key: F,
        compare: G,
    ) -> OrderBy<Self, KeyComparer<F, CustomOrder<G>>>
    where
        F: Fn(&Self::Item) -> K,
        G: Fn(&K, &K) -> Ordering,
    {
        OrderBy::new(self, KeyComparer::new(key, CustomOrder(compare), true))
    }

    fn reverse(self) -> Reverse<Self> {
        Reverse::new(self)
    }

    // ----- join & group -----

    /// Inner join pairing each element with the first `inner` element that
    /// shares its key.
    fn join<I, K, U, FO, FI, R>(
        self,
        inner: I,
        outer_key: FO,
        inner_key: FI,
        result: R,
    ) -> Join<Self, I::Seq, FO, FI, R>
    where
        I: IntoSequence,
        I::Item: Clone,
        FO: Fn(&Self::Item) -> K,
        FI: Fn(&I::Item) -> K,
        R: Fn(Self::Item, I::Item) -> U,
        K: Hash + Eq,
    {
        Join::new(self, inner.into_sequence(), outer_key, inner_key, result)
    }

    /// Pairs each element with all `inner` elements sharing its key.
    fn group_join<I, K, U, FO, FI, R>(
        self,
        inner: I,
        outer_key: FO,
        inner_key: FI,
        result: R,
    ) -> GroupJoin<Self, I::Seq, FO, FI, R>
    where
        I: IntoSequence,
        I::Item: Clone,
        FO: Fn(&Self::Item) -> K,
        FI: Fn(&I::Item) -> K,
        R: Fn(Self::Item, VecSource<I::Item>) -> U,
        K: Hash + Eq,
    {
        GroupJoin::new(self, inner.into_sequence(), outer_key, inner_key, result)
    }

    fn group_by<K, F>(self, key: F) -> GroupBy<Self, F, fn(Self::Item) -> Self::Item>
    where
        F: Fn(&Self::Item) -> K,
        K: Hash + Eq + Clone,
    {
        GroupBy::new(
            self,
            key,
            std::convert::identity as fn(Self::Item) -> Self::Item,
        )
    }

    /// `group_by` projecting each grouped element through `element`.
    fn group_by_with<K, E, F, G>(self, key: F, element: G) -> GroupBy<Self, F, G>
    where
        F: Fn(&Self::Item) -> K,
        G: Fn(Self::Item) -> E,
        K: Hash + Eq + Clone,
    {
        GroupBy::new(self, key, element)
    }

    // ----- windowing -----

    /// Everything but the last `n` elements.
    fn skip_last(self, n: i64) -> SkipLast<Self> {
        SkipLast::new(self, n)
    }

    /// Only the last `n` elements.
    fn take_last(self, n: i64) -> TakeLast<Self> {
        TakeLast::new(self, n)
    }

    /// Chunks of `size`; a size below 1 is rejected.
    fn batch_in(self, size: i64, include_incomplete: bool) -> Result<BatchIn<Self>> {
        BatchIn::new(self, size, include_incomplete)
    }

    /// `batch_in` keeping the trailing short chunk.
    fn chunk(self, size: i64) -> Result<BatchIn<Self>> {
        BatchIn::new(self, size, true)
    }

    // ----- zip -----

    #[allow(clippy::type_complexity)]
    fn zip<B>(self, other: B) -> Zip<Self, B::Seq, fn(Self::Item, B::Item) -> (Self::Item, B::Item)>
    where
        B: IntoSequence,
    {
        Zip::new(
            self,
            other.into_sequence(),
            pair as fn(Self::Item, B::Item) -> (Self::Item, B::Item),
        )
    }

    fn zip_with<B, U, R>(self, other: B, combine: R) -> Zip<Self, B::Seq, R>
    where
        B: IntoSequence,
        R: Fn(Self::Item, B::Item) -> U,
    {
        Zip::new(self, other.into_sequence(), combine)
    }

    // ----- extension -----

    /// Plug a custom operator into the chain.
    fn apply<O>(self, op: O) -> O::Output
    where
        O: Operator<Self>,
    {
        metrics::emit(op.name(), &[]);
        op.transform(self)
    }

    /// Chain off this sequence without moving it.
    fn by_ref(&self) -> Borrowed<'_, Self> {
        Borrowed(self)
    }
}

impl<S: Sequence> SequenceExt for S {}
