//! Lockstep combination of two sequences, stopping at the shorter one.

use seqflow_core::Sequence;

#[derive(Clone)]
pub struct Zip<A, B, R> {
    first: A,
    second: B,
    combine: R,
}

impl<A, B, R> Zip<A, B, R> {
    pub(crate) fn new(first: A, second: B, combine: R) -> Self {
        Self {
            first,
            second,
            combine,
        }
    }
}

impl<A, B, R, U> Sequence for Zip<A, B, R>
where
    A: Sequence,
    B: Sequence,
    R: Fn(A::Item, B::Item) -> U,
{
    type Item = U;
    type Cursor<'a>
        = ZipCursor<'a, A::Cursor<'a>, B::Cursor<'a>, R>
    where
        Self: 'a;

    fn iterate(&self) -> Self::Cursor<'_> {
        ZipCursor {
            first: self.first.iterate(),
            second: self.second.iterate(),
            combine: &self.combine,
        }
    }
}

pub struct ZipCursor<'a, I, J, R> {
    first: I,
    second: J,
    combine: &'a R,
}

impl<'a, I, J, R, U> Iterator for ZipCursor<'a, I, J, R>
where
    I: Iterator,
    J: Iterator,
    R: Fn(I::Item, J::Item) -> U,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        // The second source is not pulled once the first is exhausted.
        let a = self.first.next()?;
        let b = self.second.next()?;
        Some((self.combine)(a, b))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (a_lo, a_hi) = self.first.size_hint();
        let (b_lo, b_hi) = self.second.size_hint();
        let hi = match (a_hi, b_hi) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        (a_lo.min(b_lo), hi)
    }
}

/// Default zip combiner.
pub fn pair<A, B>(a: A, b: B) -> (A, B) {
    (a, b)
}
