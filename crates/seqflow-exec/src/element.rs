//! Positional lookups: `first`, `last`, `single`, `element_at`.
//!
//! `first`, `last` and `element_at` (with their `_or` variants) take the fast
//! path when the sequence is directly indexable. Both paths raise the same
//! errors: `EmptySequence` for an empty source, `IndexOutOfRange` carrying the
//! source length for an index past the end, and `IndexOutOfRange` without a
//! length for a negative index.

use seqflow_core::error::{Error, Result};
use seqflow_core::sequence::Sequence;

use crate::fast_path;

pub fn first<S: Sequence>(source: &S, op: &'static str) -> Result<S::Item> {
    if let Some(view) = fast_path::random_access(source, op) {
        return view.get(0).ok_or(Error::empty(op));
    }
    source.iterate().next().ok_or(Error::empty(op))
}

/// First element satisfying `predicate`.
///
/// `EmptySequence` when the source yields nothing, `NotFound` when it yields
/// elements but none match.
pub fn first_where<S, P>(source: &S, predicate: P, op: &'static str) -> Result<S::Item>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    let mut seen = false;
    for item in source.iterate() {
        if predicate(&item) {
            return Ok(item);
        }
        seen = true;
    }
    Err(if seen {
        Error::not_found(op)
    } else {
        Error::empty(op)
    })
}

pub fn last<S: Sequence>(source: &S, op: &'static str) -> Result<S::Item> {
    if let Some(view) = fast_path::random_access(source, op) {
        let len = view.len();
        if len == 0 {
            return Err(Error::empty(op));
        }
        return view.get(len - 1).ok_or(Error::empty(op));
    }
    source.iterate().last().ok_or(Error::empty(op))
}

pub fn last_where<S, P>(source: &S, predicate: P, op: &'static str) -> Result<S::Item>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    let mut seen = false;
    let mut found = None;
    for item in source.iterate() {
        seen = true;
        if predicate(&item) {
            found = Some(item);
        }
    }
    match found {
        Some(item) => Ok(item),
        None if seen => Err(Error::not_found(op)),
        None => Err(Error::empty(op)),
    }
}

pub fn element_at<S: Sequence>(source: &S, index: i64) -> Result<S::Item> {
    let Ok(position) = usize::try_from(index) else {
        return Err(Error::IndexOutOfRange { index, len: None });
    };
    if let Some(view) = fast_path::random_access(source, "element_at") {
        return view.get(position).ok_or(Error::IndexOutOfRange {
            index,
            len: Some(view.len()),
        });
    }
    let mut seen = 0usize;
    for item in source.iterate() {
        if seen == position {
            return Ok(item);
        }
        seen += 1;
    }
    Err(Error::IndexOutOfRange {
        index,
        len: Some(seen),
    })
}

/// `element_at` that falls back to `default` past the end. A negative index
/// still fails.
pub fn element_at_or<S: Sequence>(source: &S, index: i64, default: S::Item) -> Result<S::Item> {
    match element_at(source, index) {
        Err(Error::IndexOutOfRange { len: Some(_), .. }) => Ok(default),
        other => other,
    }
}

/// Fall back to `default` on the "nothing there" errors of a lookup.
pub fn or_default<T>(found: Result<T>, default: T) -> T {
    match found {
        Ok(item) => item,
        Err(_) => default,
    }
}
