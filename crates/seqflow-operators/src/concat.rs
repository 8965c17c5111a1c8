//! Concatenation family: `concat`, `append`, `prepend`, `default_if_empty`.

use seqflow_core::Sequence;

/// All of `first`, then all of `second`.
#[derive(Clone)]
pub struct Concat<A, B> {
    first: A,
    second: B,
}

impl<A, B> Concat<A, B> {
    pub(crate) fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A, B> Sequence for Concat<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    type Item = A::Item;
    type Cursor<'a>
        = ConcatCursor<'a, A, B>
    where
        Self: 'a;

    fn iterate(&self) -> Self::Cursor<'_> {
        ConcatCursor {
            first: Some(self.first.iterate()),
            second: &self.second,
            second_cursor: None,
        }
    }
}

pub struct ConcatCursor<'a, A: Sequence + 'a, B: Sequence + 'a> {
    first: Option<A::Cursor<'a>>,
    second: &'a B,
    // The second drive starts only once the first is exhausted.
    second_cursor: Option<B::Cursor<'a>>,
}

impl<'a, A, B> Iterator for ConcatCursor<'a, A, B>
where
    A: Sequence + 'a,
    B: Sequence<Item = A::Item> + 'a,
{
    type Item = A::Item;

    fn next(&mut self) -> Option<A::Item> {
        if let Some(first) = &mut self.first {
            match first.next() {
                Some(item) => return Some(item),
                None => self.first = None,
            }
        }
        self.second_cursor
            .get_or_insert_with(|| self.second.iterate())
            .next()
    }
}

/// The source followed by one extra element.
#[derive(Clone)]
pub struct Append<S: Sequence> {
    source: S,
    value: S::Item,
}

impl<S: Sequence> Append<S> {
    pub(crate) fn new(source: S, value: S::Item) -> Self {
        Self { source, value }
    }
}

impl<S> Sequence for Append<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Item = S::Item;
    type Cursor<'a>
        = AppendCursor<'a, S::Cursor<'a>, S::Item>
    where
        Self: 'a;

    fn iterate(&self) -> Self::Cursor<'_> {
        AppendCursor {
            inner: Some(self.source.iterate()),
            value: Some(&self.value),
        }
    }
}

pub struct AppendCursor<'a, I, T> {
    inner: Option<I>,
    value: Option<&'a T>,
}

impl<'a, I, T> Iterator for AppendCursor<'a, I, T>
where
    I: Iterator<Item = T>,
    T: Clone,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if let Some(inner) = &mut self.inner {
            match inner.next() {
                Some(item) => return Some(item),
                None => self.inner = None,
            }
        }
        self.value.take().cloned()
    }
}

/// One extra element followed by the source.
#[derive(Clone)]
pub struct Prepend<S: Sequence> {
    source: S,
    value: S::Item,
}

impl<S: Sequence> Prepend<S> {
    pub(crate) fn new(source: S, value: S::Item) -> Self {
        Self { source, value }
    }
}

impl<S> Sequence for Prepend<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Item = S::Item;
    type Cursor<'a>
        = PrependCursor<'a, S::Cursor<'a>, S::Item>
    where
        Self: 'a;

    fn iterate(&self) -> Self::Cursor<'_> {
        PrependCursor {
            value: Some(&self.value),
            inner: self.source.iterate(),
        }
    }
}

pub struct PrependCursor<'a, I, T> {
    value: Option<&'a T>,
    inner: I,
}

impl<'a, I, T> Iterator for PrependCursor<'a, I, T>
where
    I: Iterator<Item = T>,
    T: Clone,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        match self.value.take() {
            Some(value) => Some(value.clone()),
            None => self.inner.next(),
        }
    }
}

/// The source, or a single default element when the source is empty.
#[derive(Clone)]
pub struct DefaultIfEmpty<S: Sequence> {
    source: S,
    default: S::Item,
}

impl<S: Sequence> DefaultIfEmpty<S> {
    pub(crate) fn new(source: S, default: S::Item) -> Self {
        Self { source, default }
    }
}

impl<S> Sequence for DefaultIfEmpty<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Item = S::Item;
    type Cursor<'a>
        = DefaultIfEmptyCursor<'a, S::Cursor<'a>, S::Item>
    where
        Self: 'a;

    fn iterate(&self) -> Self::Cursor<'_> {
        DefaultIfEmptyCursor {
            inner: self.source.iterate(),
            default: Some(&self.default),
            yielded: false,
        }
    }
}

pub struct DefaultIfEmptyCursor<'a, I, T> {
    inner: I,
    default: Option<&'a T>,
    yielded: bool,
}

impl<'a, I, T> Iterator for DefaultIfEmptyCursor<'a, I, T>
where
    I: Iterator<Item = T>,
    T: Clone,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        match self.inner.next() {
            Some(item) => {
                self.yielded = true;
                Some(item)
            }
            None if !self.yielded => {
                self.yielded = true;
                self.default.take().cloned()
            }
            None => None,
        }
    }
}
