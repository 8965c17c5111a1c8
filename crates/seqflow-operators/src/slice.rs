//! Positional and predicate-bounded slicing: `skip`, `skip_while`, `take`,
//! `take_while`.
//!
//! Counts are signed: a non-positive `take` yields nothing and a non-positive
//! `skip` skips nothing.

use seqflow_core::Sequence;

fn clamp_count(n: i64) -> usize {
    usize::try_from(n.max(0)).unwrap_or(usize::MAX)
}

#[derive(Clone)]
pub struct Skip<S> {
    source: S,
    count: usize,
}

impl<S> Skip<S> {
    pub(crate) fn new(source: S, count: i64) -> Self {
        Self {
            source,
            count: clamp_count(count),
        }
    }
}

impl<S: Sequence> Sequence for Skip<S> {
    type Item = S::Item;
    type Cursor<'a>
        = SkipCursor<S::Cursor<'a>>
    where
        Self: 'a;

    fn iterate(&self) -> Self::Cursor<'_> {
        SkipCursor {
            inner: self.source.iterate(),
            remaining: self.count,
        }
    }
}

pub struct SkipCursor<I> {
    inner: I,
    remaining: usize,
}

impl<I: Iterator> Iterator for SkipCursor<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        while self.remaining > 0 {
            self.remaining -= 1;
            self.inner.next()?;
        }
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self.inner.size_hint();
        (
            lo.saturating_sub(self.remaining),
            hi.map(|h| h.saturating_sub(self.remaining)),
        )
    }
}

#[derive(Clone)]
pub struct Take<S> {
    source: S,
    count: usize,
}

impl<S> Take<S> {
    pub(crate) fn new(source: S, count: i64) -> Self {
        Self {
            source,
            count: clamp_count(count),
        }
    }
}

impl<S: Sequence> Sequence for Take<S> {
    type Item = S::Item;
    type Cursor<'a>
        = TakeCursor<S::Cursor<'a>>
    where
        Self: 'a;

    fn iterate(&self) -> Self::Cursor<'_> {
        TakeCursor {
            inner: self.source.iterate(),
            remaining: self.count,
        }
    }
}

pub struct TakeCursor<I> {
    inner: I,
    remaining: usize,
}

impl<I: Iterator> Iterator for TakeCursor<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        // Never pull past the bound; infinite upstreams rely on this.
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self.inner.size_hint();
        let hi = match hi {
            Some(h) => h.min(self.remaining),
            None => self.remaining,
        };
        (lo.min(self.remaining), Some(hi))
    }
}

#[derive(Clone)]
pub struct SkipWhile<S, P> {
    source: S,
    predicate: P,
}

impl<S, P> SkipWhile<S, P> {
    pub(crate) fn new(source: S, predicate: P) -> Self {
        Self { source, predicate }
    }
}

impl<S, P> Sequence for SkipWhile<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    type Cursor<'a>
        = SkipWhileCursor<'a, S::Cursor<'a>, P>
    where
        Self: 'a;

    fn iterate(&self) -> Self::Cursor<'_> {
        SkipWhileCursor {
            inner: self.source.iterate(),
            predicate: &self.predicate,
            skipping: true,
        }
    }
}

pub struct SkipWhileCursor<'a, I, P> {
    inner: I,
    predicate: &'a P,
    skipping: bool,
}

impl<'a, I, P> Iterator for SkipWhileCursor<'a, I, P>
where
    I: Iterator,
    P: Fn(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if !self.skipping {
            return self.inner.next();
        }
        loop {
            let item = self.inner.next()?;
            if !(self.predicate)(&item) {
                // One-way transition: the predicate is never consulted again.
                self.skipping = false;
                return Some(item);
            }
        }
    }
}

#[derive(Clone)]
pub struct TakeWhile<S, P> {
    source: S,
    predicate: P,
}

impl<S, P> TakeWhile<S, P> {
    pub(crate) fn new(source: S, predicate: P) -> Self {
        Self { source, predicate }
    }
}

impl<S, P> Sequence for TakeWhile<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    type Cursor<'a>
        = TakeWhileCursor<'a, S::Cursor<'a>, P>
    where
        Self: 'a;

    fn iterate(&self) -> Self::Cursor<'_> {
        TakeWhileCursor {
            inner: self.source.iterate(),
            predicate: &self.predicate,
            done: false,
        }
    }
}

pub struct TakeWhileCursor<'a, I, P> {
    inner: I,
    predicate: &'a P,
    done: bool,
}

impl<'a, I, P> Iterator for TakeWhileCursor<'a, I, P>
where
    I: Iterator,
    P: Fn(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.done {
            return None;
        }
        let item = self.inner.next()?;
        if (self.predicate)(&item) {
            Some(item)
        } else {
            // Terminates for good, even if later elements would pass.
            self.done = true;
            None
        }
    }
}
