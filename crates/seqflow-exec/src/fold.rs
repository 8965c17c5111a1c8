//! Folds, quantifiers and counting.

use seqflow_core::error::{Error, Result};
use seqflow_core::sequence::Sequence;

use crate::fast_path;

pub fn aggregate<S, A, F>(source: &S, seed: A, f: F) -> A
where
    S: Sequence,
    F: Fn(A, S::Item) -> A,
{
    source.iterate().fold(seed, f)
}

/// Seedless fold: the first element is the seed.
pub fn reduce<S, F>(source: &S, f: F) -> Result<S::Item>
where
    S: Sequence,
    F: Fn(S::Item, S::Item) -> S::Item,
{
    let mut cursor = source.iterate();
    let seed = cursor.next().ok_or(Error::empty("reduce"))?;
    Ok(cursor.fold(seed, f))
}

pub fn all<S, P>(source: &S, predicate: P) -> bool
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    source.iterate().all(|item| predicate(&item))
}

/// True when the sequence yields anything. Pulls at most one element.
pub fn any<S: Sequence>(source: &S) -> bool {
    source.iterate().next().is_some()
}

pub fn any_where<S, P>(source: &S, predicate: P) -> bool
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    source.iterate().any(|item| predicate(&item))
}

pub fn count<S: Sequence>(source: &S) -> usize {
    if let Some(view) = fast_path::random_access(source, "count") {
        return view.len();
    }
    source.iterate().count()
}

pub fn count_where<S, P>(source: &S, predicate: P) -> usize
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    source.iterate().filter(|item| predicate(item)).count()
}
