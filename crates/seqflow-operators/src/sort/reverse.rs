//! Reversal: materialize once, then walk the buffer from the back.

use seqflow_core::metrics;
use seqflow_core::Sequence;

use super::materialize;

#[derive(Clone)]
pub struct Reverse<S> {
    source: S,
}

impl<S> Reverse<S> {
    pub(crate) fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S: Sequence> Sequence for Reverse<S> {
    type Item = S::Item;
    type Cursor<'a>
        = ReverseCursor<'a, S>
    where
        Self: 'a;

    fn iterate(&self) -> Self::Cursor<'_> {
        ReverseCursor {
            source: &self.source,
            buffer: None,
        }
    }
}

pub struct ReverseCursor<'a, S: Sequence> {
    source: &'a S,
    buffer: Option<Vec<S::Item>>,
}

impl<'a, S: Sequence> Iterator for ReverseCursor<'a, S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        let source = self.source;
        self.buffer
            .get_or_insert_with(|| {
                let buffer = materialize(source);
                metrics::emit("reverse_materialized", &[("rows", buffer.len())]);
                buffer
            })
            .pop()
    }
}
