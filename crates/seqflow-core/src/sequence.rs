//! The Sequence contract.
//!
//! A `Sequence` describes how to produce values; a cursor (any `Iterator`)
//! actually produces them. Every chain operator wraps its upstream sequence(s)
//! plus captured callbacks, and every terminal drives a fresh cursor.
//!
//! Invariants:
//! - `iterate(&self)` never consumes or mutates the sequence; two calls hand
//!   out independent cursors.
//! - Building a sequence performs no iteration.
//! - `random_access` is only `Some` for concrete, length-known, indexable
//!   sources. Whatever it reports must agree with what `iterate` yields.

/// A re-iterable, lazily evaluated description of a data flow.
///
/// Third-party operators plug into a chain by implementing this trait: the
/// cursor is an ordinary `Iterator` holding whatever resume state the
/// operator needs (position, flags, buffers).
pub trait Sequence {
    type Item;

    /// Stateful cursor produced per drive. Borrows the sequence so captured
    /// callbacks are shared rather than cloned.
    type Cursor<'a>: Iterator<Item = Self::Item>
    where
        Self: 'a;

    /// Start a new, independent drive of this sequence.
    fn iterate(&self) -> Self::Cursor<'_>;

    /// Direct positional access when this sequence is a concrete indexable
    /// source. Operators never forward this: only the immediate upstream of a
    /// terminal is consulted.
    fn random_access(&self) -> Option<&dyn RandomAccess<Item = Self::Item>> {
        None
    }
}

/// Known-length, randomly indexable view over a source.
pub trait RandomAccess {
    type Item;

    fn len(&self) -> usize;

    fn get(&self, index: usize) -> Option<Self::Item>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Conversion into a [`Sequence`].
///
/// Anything that already is a sequence converts to itself unchanged, so
/// wrapping is idempotent and preserves identity.
pub trait IntoSequence {
    type Item;
    type Seq: Sequence<Item = Self::Item>;

    fn into_sequence(self) -> Self::Seq;
}

impl<S: Sequence> IntoSequence for S {
    type Item = S::Item;
    type Seq = S;

    fn into_sequence(self) -> S {
        self
    }
}
