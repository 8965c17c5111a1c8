//! Filter operator: forwards the elements a predicate accepts.

use seqflow_core::Sequence;

#[derive(Clone)]
pub struct Filter<S, P> {
    source: S,
    predicate: P,
}

impl<S, P> Filter<S, P> {
    pub(crate) fn new(source: S, predicate: P) -> Self {
        Self { source, predicate }
    }
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    type Cursor<'a>
        = FilterCursor<'a, S::Cursor<'a>, P>
    where
        Self: 'a;

    fn iterate(&self) -> Self::Cursor<'_> {
        FilterCursor {
            inner: self.source.iterate(),
            predicate: &self.predicate,
        }
    }
}

pub struct FilterCursor<'a, I, P> {
    inner: I,
    predicate: &'a P,
}

impl<'a, I, P> Iterator for FilterCursor<'a, I, P>
where
    I: Iterator,
    P: Fn(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        // Pull one upstream element at a time until one passes.
        loop {
            let item = self.inner.next()?;
            if (self.predicate)(&item) {
                return Some(item);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}
