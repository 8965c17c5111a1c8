//! Projection operators: `map`, `map_indexed`, `flat_map`.

use seqflow_core::Sequence;

/// One output element per input element.
#[derive(Clone)]
pub struct Map<S, F> {
    source: S,
    f: F,
}

impl<S, F> Map<S, F> {
    pub(crate) fn new(source: S, f: F) -> Self {
        Self { source, f }
    }
}

impl<S, F, U> Sequence for Map<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> U,
{
    type Item = U;
    type Cursor<'a>
        = MapCursor<'a, S::Cursor<'a>, F>
    where
        Self: 'a;

    fn iterate(&self) -> Self::Cursor<'_> {
        MapCursor {
            inner: self.source.iterate(),
            f: &self.f,
        }
    }
}

pub struct MapCursor<'a, I, F> {
    inner: I,
    f: &'a F,
}

impl<'a, I, F, U> Iterator for MapCursor<'a, I, F>
where
    I: Iterator,
    F: Fn(I::Item) -> U,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        self.inner.next().map(self.f)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Like [`Map`], with the zero-based position of each element.
#[derive(Clone)]
pub struct MapIndexed<S, F> {
    source: S,
    f: F,
}

impl<S, F> MapIndexed<S, F> {
    pub(crate) fn new(source: S, f: F) -> Self {
        Self { source, f }
    }
}

impl<S, F, U> Sequence for MapIndexed<S, F>
where
    S: Sequence,
    F: Fn(S::Item, usize) -> U,
{
    type Item = U;
    type Cursor<'a>
        = MapIndexedCursor<'a, S::Cursor<'a>, F>
    where
        Self: 'a;

    fn iterate(&self) -> Self::Cursor<'_> {
        MapIndexedCursor {
            inner: self.source.iterate(),
            f: &self.f,
            index: 0,
        }
    }
}

pub struct MapIndexedCursor<'a, I, F> {
    inner: I,
    f: &'a F,
    index: usize,
}

impl<'a, I, F, U> Iterator for MapIndexedCursor<'a, I, F>
where
    I: Iterator,
    F: Fn(I::Item, usize) -> U,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        let item = self.inner.next()?;
        let out = (self.f)(item, self.index);
        self.index += 1;
        Some(out)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Each input element expands into zero or more output elements.
#[derive(Clone)]
pub struct FlatMap<S, F> {
    source: S,
    f: F,
}

impl<S, F> FlatMap<S, F> {
    pub(crate) fn new(source: S, f: F) -> Self {
        Self { source, f }
    }
}

impl<S, F, R> Sequence for FlatMap<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> R,
    R: IntoIterator,
{
    type Item = R::Item;
    type Cursor<'a>
        = FlatMapCursor<'a, S::Cursor<'a>, F, R>
    where
        Self: 'a;

    fn iterate(&self) -> Self::Cursor<'_> {
        FlatMapCursor {
            inner: self.source.iterate(),
            f: &self.f,
            current: None,
        }
    }
}

pub struct FlatMapCursor<'a, I, F, R: IntoIterator> {
    inner: I,
    f: &'a F,
    current: Option<R::IntoIter>,
}

impl<'a, I, F, R> Iterator for FlatMapCursor<'a, I, F, R>
where
    I: Iterator,
    F: Fn(I::Item) -> R,
    R: IntoIterator,
{
    type Item = R::Item;

    fn next(&mut self) -> Option<R::Item> {
        loop {
            if let Some(current) = &mut self.current {
                if let Some(item) = current.next() {
                    return Some(item);
                }
                self.current = None;
            }
            let next = self.inner.next()?;
            self.current = Some((self.f)(next).into_iter());
        }
    }
}
