//! Windowing operators over a bounded FIFO: `skip_last`, `take_last`,
//! `batch_in`.
//!
//! Each cursor owns a `WindowQueue` from `seqflow-mem`, so memory stays
//! proportional to the window, not to the upstream length.

use seqflow_core::error::{Error, Result};
use seqflow_core::Sequence;
use seqflow_mem::WindowQueue;

fn clamp_count(n: i64) -> usize {
    usize::try_from(n.max(0)).unwrap_or(usize::MAX)
}

/// Everything except the last `n` elements.
#[derive(Clone)]
pub struct SkipLast<S> {
    source: S,
    count: usize,
}

impl<S> SkipLast<S> {
    pub(crate) fn new(source: S, count: i64) -> Self {
        Self {
            source,
            count: clamp_count(count),
        }
    }
}

impl<S: Sequence> Sequence for SkipLast<S> {
    type Item = S::Item;
    type Cursor<'a>
        = SkipLastCursor<S::Cursor<'a>, S::Item>
    where
        Self: 'a;

    fn iterate(&self) -> Self::Cursor<'_> {
        SkipLastCursor {
            inner: self.source.iterate(),
            window: WindowQueue::new(),
            count: self.count,
        }
    }
}

pub struct SkipLastCursor<I, T> {
    inner: I,
    window: WindowQueue<T>,
    count: usize,
}

impl<I, T> SkipLastCursor<I, T> {
    /// Largest window held so far by this drive.
    pub fn peak_window(&self) -> usize {
        self.window.peak_len()
    }
}

impl<I, T> Iterator for SkipLastCursor<I, T>
where
    I: Iterator<Item = T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            let item = self.inner.next()?;
            self.window.push_back(item);
            // At most `count + 1` buffered; the oldest is safe to emit.
            if self.window.len() > self.count {
                return self.window.pop_front();
            }
        }
    }
}

/// Only the last `n` elements, emitted once the upstream is exhausted.
#[derive(Clone)]
pub struct TakeLast<S> {
    source: S,
    count: usize,
}

impl<S> TakeLast<S> {
    pub(crate) fn new(source: S, count: i64) -> Self {
        Self {
            source,
            count: clamp_count(count),
        }
    }
}

impl<S: Sequence> Sequence for TakeLast<S> {
    type Item = S::Item;
    type Cursor<'a>
        = TakeLastCursor<S::Cursor<'a>, S::Item>
    where
        Self: 'a;

    fn iterate(&self) -> Self::Cursor<'_> {
        TakeLastCursor {
            inner: Some(self.source.iterate()),
            window: WindowQueue::new(),
            count: self.count,
        }
    }
}

pub struct TakeLastCursor<I, T> {
    // `None` once the upstream has been drained into the window.
    inner: Option<I>,
    window: WindowQueue<T>,
    count: usize,
}

impl<I, T> TakeLastCursor<I, T> {
    pub fn peak_window(&self) -> usize {
        self.window.peak_len()
    }
}

impl<I, T> Iterator for TakeLastCursor<I, T>
where
    I: Iterator<Item = T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if let Some(inner) = self.inner.take() {
            if self.count == 0 {
                return None;
            }
            for item in inner {
                self.window.push_back(item);
                if self.window.len() > self.count {
                    self.window.pop_front();
                }
            }
        }
        self.window.pop_front()
    }
}

/// Fixed-size chunks. The trailing short chunk is kept only when
/// `include_incomplete` is set.
#[derive(Clone)]
pub struct BatchIn<S> {
    source: S,
    size: usize,
    include_incomplete: bool,
}

impl<S> BatchIn<S> {
    pub(crate) fn new(source: S, size: i64, include_incomplete: bool) -> Result<Self> {
        if size < 1 {
            return Err(Error::InvalidArgument(format!(
                "batch size must be at least 1, got {size}"
            )));
        }
        Ok(Self {
            source,
            size: clamp_count(size),
            include_incomplete,
        })
    }
}

impl<S: Sequence> Sequence for BatchIn<S> {
    type Item = Vec<S::Item>;
    type Cursor<'a>
        = BatchInCursor<S::Cursor<'a>, S::Item>
    where
        Self: 'a;

    fn iterate(&self) -> Self::Cursor<'_> {
        BatchInCursor {
            inner: self.source.iterate(),
            window: WindowQueue::new(),
            size: self.size,
            include_incomplete: self.include_incomplete,
            done: false,
        }
    }
}

pub struct BatchInCursor<I, T> {
    inner: I,
    window: WindowQueue<T>,
    size: usize,
    include_incomplete: bool,
    done: bool,
}

impl<I, T> Iterator for BatchInCursor<I, T>
where
    I: Iterator<Item = T>,
{
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if self.done {
            return None;
        }
        while self.window.len() < self.size {
            match self.inner.next() {
                Some(item) => self.window.push_back(item),
                None => {
                    self.done = true;
                    if self.include_incomplete && !self.window.is_empty() {
                        return Some(self.window.take_all());
                    }
                    return None;
                }
            }
        }
        Some(self.window.take_all())
    }
}
