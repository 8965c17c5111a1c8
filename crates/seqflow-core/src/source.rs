//! Source generators: concrete collections, re-iterable enumerables, numeric
//! ranges, repeated values, and the empty sequence.
//!
//! `VecSource`, `SliceSource`, a bounded `Range`, a counted `Repeat`, and
//! `Empty` are random-access sources and expose that through
//! `Sequence::random_access`. `IterSource` and `FnSource` are opaque.

use std::marker::PhantomData;

use crate::error::{Error, Result};
use crate::sequence::{IntoSequence, RandomAccess, Sequence};

/// Wrap anything convertible into a sequence. A sequence is returned as is.
pub fn from<S: IntoSequence>(source: S) -> S::Seq {
    source.into_sequence()
}

/// Wrap a re-iterable enumerable. Each drive iterates a fresh clone.
pub fn from_iter<I>(iterable: I) -> IterSource<I>
where
    I: IntoIterator + Clone,
{
    IterSource { iterable }
}

/// Wrap a factory that produces a new iterator for every drive.
pub fn from_fn<F, I>(factory: F) -> FnSource<F>
where
    F: Fn() -> I,
    I: IntoIterator,
{
    FnSource { factory }
}

/// Integers from `start` up to (or down to) `end`, exclusive of `end`.
///
/// Direction follows the sign of `end - start`; equal bounds yield nothing.
pub fn range(start: i64, end: i64) -> Range {
    Range {
        start,
        end: Some(end),
    }
}

/// Unbounded ascending integers starting at `start`.
pub fn range_from(start: i64) -> Range {
    Range { start, end: None }
}

/// `value` repeated forever.
pub fn repeat<T: Clone>(value: T) -> Repeat<T> {
    Repeat { value, count: None }
}

/// `value` repeated `count` times. A negative count is rejected.
pub fn repeat_n<T: Clone>(value: T, count: i64) -> Result<Repeat<T>> {
    if count < 0 {
        return Err(Error::InvalidArgument(format!(
            "repeat count must be non-negative, got {count}"
        )));
    }
    Ok(Repeat {
        value,
        count: Some(usize::try_from(count).unwrap_or(usize::MAX)),
    })
}

/// A sequence that yields nothing.
pub fn empty<T>() -> Empty<T> {
    Empty {
        _marker: PhantomData,
    }
}

// ----- concrete collections -----

/// Owned, randomly indexable source. Elements are cloned out on each drive.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VecSource<T> {
    items: Vec<T>,
}

impl<T> VecSource<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}

impl<T: Clone> Sequence for VecSource<T> {
    type Item = T;
    type Cursor<'a>
        = std::iter::Cloned<std::slice::Iter<'a, T>>
    where
        Self: 'a;

    fn iterate(&self) -> Self::Cursor<'_> {
        self.items.iter().cloned()
    }

    fn random_access(&self) -> Option<&dyn RandomAccess<Item = T>> {
        Some(self)
    }
}

impl<T: Clone> RandomAccess for VecSource<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.items.len()
    }

    fn get(&self, index: usize) -> Option<T> {
        self.items.get(index).cloned()
    }
}

/// Borrowed, randomly indexable source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliceSource<'s, T> {
    items: &'s [T],
}

impl<'s, T> SliceSource<'s, T> {
    pub fn new(items: &'s [T]) -> Self {
        Self { items }
    }
}

impl<'s, T: Clone> Sequence for SliceSource<'s, T> {
    type Item = T;
    type Cursor<'a>
        = std::iter::Cloned<std::slice::Iter<'s, T>>
    where
        Self: 'a;

    fn iterate(&self) -> Self::Cursor<'_> {
        self.items.iter().cloned()
    }

    fn random_access(&self) -> Option<&dyn RandomAccess<Item = T>> {
        Some(self)
    }
}

impl<'s, T: Clone> RandomAccess for SliceSource<'s, T> {
    type Item = T;

    fn len(&self) -> usize {
        self.items.len()
    }

    fn get(&self, index: usize) -> Option<T> {
        self.items.get(index).cloned()
    }
}

impl<T: Clone> IntoSequence for Vec<T> {
    type Item = T;
    type Seq = VecSource<T>;

    fn into_sequence(self) -> VecSource<T> {
        VecSource::new(self)
    }
}

impl<T: Clone, const N: usize> IntoSequence for [T; N] {
    type Item = T;
    type Seq = VecSource<T>;

    fn into_sequence(self) -> VecSource<T> {
        VecSource::new(Vec::from(self))
    }
}

impl<'s, T: Clone> IntoSequence for &'s [T] {
    type Item = T;
    type Seq = SliceSource<'s, T>;

    fn into_sequence(self) -> SliceSource<'s, T> {
        SliceSource::new(self)
    }
}

impl<'s, T: Clone> IntoSequence for &'s Vec<T> {
    type Item = T;
    type Seq = SliceSource<'s, T>;

    fn into_sequence(self) -> SliceSource<'s, T> {
        SliceSource::new(self.as_slice())
    }
}

// ----- opaque enumerables -----

/// Re-iterable enumerable; each drive iterates a fresh clone of it.
#[derive(Debug, Clone)]
pub struct IterSource<I> {
    iterable: I,
}

impl<I> Sequence for IterSource<I>
where
    I: IntoIterator + Clone,
{
    type Item = I::Item;
    type Cursor<'a>
        = I::IntoIter
    where
        Self: 'a;

    fn iterate(&self) -> Self::Cursor<'_> {
        self.iterable.clone().into_iter()
    }
}

/// Source backed by an iterator factory.
#[derive(Clone)]
pub struct FnSource<F> {
    factory: F,
}

impl<F, I> Sequence for FnSource<F>
where
    F: Fn() -> I,
    I: IntoIterator,
{
    type Item = I::Item;
    type Cursor<'a>
        = I::IntoIter
    where
        Self: 'a;

    fn iterate(&self) -> Self::Cursor<'_> {
        (self.factory)().into_iter()
    }
}

// ----- generators -----

/// Integer range; `end == None` is unbounded ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    start: i64,
    end: Option<i64>,
}

impl Range {
    fn step(&self) -> i64 {
        match self.end {
            Some(end) if end < self.start => -1,
            _ => 1,
        }
    }
}

/// Cursor over a [`Range`].
#[derive(Debug, Clone)]
pub struct RangeCursor {
    next: i64,
    end: Option<i64>,
    step: i64,
    done: bool,
}

impl Iterator for RangeCursor {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.done {
            return None;
        }
        if self.end == Some(self.next) {
            self.done = true;
            return None;
        }
        let current = self.next;
        match current.checked_add(self.step) {
            Some(n) => self.next = n,
            // Unbounded ranges stop at the edge of i64.
            None => self.done = true,
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        match self.end {
            Some(end) => {
                let n = usize::try_from(end.abs_diff(self.next)).unwrap_or(usize::MAX);
                (n, Some(n))
            }
            None => (usize::MAX, None),
        }
    }
}

impl Sequence for Range {
    type Item = i64;
    type Cursor<'a> = RangeCursor;

    fn iterate(&self) -> RangeCursor {
        RangeCursor {
            next: self.start,
            end: self.end,
            step: self.step(),
            done: false,
        }
    }

    fn random_access(&self) -> Option<&dyn RandomAccess<Item = i64>> {
        self.end.map(|_| self as &dyn RandomAccess<Item = i64>)
    }
}

impl RandomAccess for Range {
    type Item = i64;

    fn len(&self) -> usize {
        match self.end {
            Some(end) => usize::try_from(end.abs_diff(self.start)).unwrap_or(usize::MAX),
            None => usize::MAX,
        }
    }

    fn get(&self, index: usize) -> Option<i64> {
        if index >= self.len() {
            return None;
        }
        let offset = i64::try_from(index).ok()?;
        self.start.checked_add(offset.checked_mul(self.step())?)
    }
}

/// A value repeated `count` times, or forever when `count` is `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Repeat<T> {
    value: T,
    count: Option<usize>,
}

/// Cursor over a [`Repeat`].
#[derive(Debug, Clone)]
pub struct RepeatCursor<'a, T> {
    value: &'a T,
    remaining: Option<usize>,
}

impl<'a, T: Clone> Iterator for RepeatCursor<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        match &mut self.remaining {
            Some(0) => None,
            Some(n) => {
                *n -= 1;
                Some(self.value.clone())
            }
            None => Some(self.value.clone()),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

impl<T: Clone> Sequence for Repeat<T> {
    type Item = T;
    type Cursor<'a>
        = RepeatCursor<'a, T>
    where
        Self: 'a;

    fn iterate(&self) -> Self::Cursor<'_> {
        RepeatCursor {
            value: &self.value,
            remaining: self.count,
        }
    }

    fn random_access(&self) -> Option<&dyn RandomAccess<Item = T>> {
        self.count.map(|_| self as &dyn RandomAccess<Item = T>)
    }
}

impl<T: Clone> RandomAccess for Repeat<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.count.unwrap_or(usize::MAX)
    }

    fn get(&self, index: usize) -> Option<T> {
        (index < self.len()).then(|| self.value.clone())
    }
}

/// The empty sequence.
pub struct Empty<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        empty()
    }
}

impl<T> std::fmt::Debug for Empty<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Empty")
    }
}

impl<T> Sequence for Empty<T> {
    type Item = T;
    type Cursor<'a>
        = std::iter::Empty<T>
    where
        Self: 'a;

    fn iterate(&self) -> Self::Cursor<'_> {
        std::iter::empty()
    }

    fn random_access(&self) -> Option<&dyn RandomAccess<Item = T>> {
        Some(self)
    }
}

impl<T> RandomAccess for Empty<T> {
    type Item = T;

    fn len(&self) -> usize {
        0
    }

    fn get(&self, _index: usize) -> Option<T> {
        None
    }
}
