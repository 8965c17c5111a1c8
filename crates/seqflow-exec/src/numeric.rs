//! Numeric aggregates: `sum`, `min`, `max`, `average`.
//!
//! Every element is read through [`AsNumber`]; the first element that is not
//! a number aborts the aggregate with `TypeMismatch`. An empty input fails with
//! `EmptySequence`. A NaN anywhere makes `min`/`max` NaN.

use std::cmp::Ordering;

use seqflow_core::error::{Error, Result};
use seqflow_core::number::{AsNumber, Number};
use seqflow_core::sequence::Sequence;

/// Read one element as a number on behalf of `op`.
pub fn read_number<N: AsNumber + ?Sized>(value: &N, op: &'static str) -> Result<Number> {
    value
        .as_number()
        .ok_or_else(|| Error::type_mismatch(op, value.kind()))
}

pub fn sum<S, R>(source: &S, read: R, op: &'static str) -> Result<Number>
where
    S: Sequence,
    R: Fn(&S::Item) -> Result<Number>,
{
    let mut total: Option<Number> = None;
    for item in source.iterate() {
        let n = read(&item)?;
        total = Some(match total {
            Some(t) => t.sum_with(n),
            None => n,
        });
    }
    total.ok_or(Error::empty(op))
}

/// `min` when `wanted` is `Less`, `max` when it is `Greater`.
pub fn extreme<S, R>(source: &S, read: R, wanted: Ordering, op: &'static str) -> Result<Number>
where
    S: Sequence,
    R: Fn(&S::Item) -> Result<Number>,
{
    let mut best: Option<Number> = None;
    for item in source.iterate() {
        let n = read(&item)?;
        best = Some(match best {
            None => n,
            Some(b) if b.is_nan() => b,
            Some(b) if n.is_nan() || n.partial_cmp(&b) == Some(wanted) => n,
            Some(b) => b,
        });
    }
    best.ok_or(Error::empty(op))
}

pub fn average<S, R>(source: &S, read: R, op: &'static str) -> Result<f64>
where
    S: Sequence,
    R: Fn(&S::Item) -> Result<Number>,
{
    let mut total = 0.0;
    let mut count = 0usize;
    for item in source.iterate() {
        total += read(&item)?.as_f64();
        count += 1;
    }
    if count == 0 {
        return Err(Error::empty(op));
    }
    Ok(total / count as f64)
}

/// Element with the smallest (`Less`) or largest (`Greater`) key. Ties keep
/// the earliest element.
pub fn extreme_by_key<S, K, F>(source: &S, key: F, wanted: Ordering, op: &'static str) -> Result<S::Item>
where
    S: Sequence,
    F: Fn(&S::Item) -> K,
    K: Ord,
{
    let mut best: Option<(K, S::Item)> = None;
    for item in source.iterate() {
        let k = key(&item);
        let replace = match &best {
            None => true,
            Some((current, _)) => k.cmp(current) == wanted,
        };
        if replace {
            best = Some((k, item));
        }
    }
    best.map(|(_, item)| item).ok_or(Error::empty(op))
}
