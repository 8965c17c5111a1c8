//! Indexable sources answer positional terminals without traversal. These
//! tests pin that the shortcut is invisible: every answer and every error
//! matches the traversing path over the same data.

use std::fmt::Debug;

use seqflow::prelude::*;

fn assert_paths_agree<A, B, T>(indexed: &A, opaque: &B, fallback: T)
where
    A: Sequence<Item = T>,
    B: Sequence<Item = T>,
    T: Clone + PartialEq + Debug,
{
    assert!(indexed.random_access().is_some());
    assert!(opaque.random_access().is_none());

    assert_eq!(indexed.count(), opaque.count());
    assert_eq!(indexed.first(), opaque.first());
    assert_eq!(indexed.last(), opaque.last());
    assert_eq!(indexed.first_or(fallback.clone()), opaque.first_or(fallback.clone()));
    assert_eq!(indexed.last_or(fallback.clone()), opaque.last_or(fallback.clone()));

    let len = opaque.count() as i64;
    for index in -2..=len + 2 {
        assert_eq!(indexed.element_at(index), opaque.element_at(index), "element_at({index})");
        assert_eq!(
            indexed.element_at_or(index, fallback.clone()),
            opaque.element_at_or(index, fallback.clone()),
            "element_at_or({index})"
        );
    }
}

#[test]
fn test_vec_source_matches_traversal() {
    for items in [vec![], vec![7], vec![3, 1, 4, 1, 5, 9, 2, 6]] {
        assert_paths_agree(&from(items.clone()), &from_iter(items), -1);
    }
}

#[test]
fn test_slice_source_matches_traversal() {
    let words = vec!["alpha".to_string(), "beta".to_string()];
    assert_paths_agree(
        &from(words.as_slice()),
        &from_fn(|| words.clone()),
        String::from("none"),
    );
}

#[test]
fn test_ranges_match_traversal() {
    assert_paths_agree(&range(0, 6), &from_iter(0..6_i64), 99);
    assert_paths_agree(&range(5, 0), &from_iter(vec![5_i64, 4, 3, 2, 1]), 99);
    assert_paths_agree(&range(4, 4), &from_iter(Vec::<i64>::new()), 99);
}

#[test]
fn test_counted_repeat_and_empty_match_traversal() {
    let three = repeat_n('x', 3).expect("count is valid");
    assert_paths_agree(&three, &from_iter(vec!['x'; 3]), '-');
    assert_paths_agree(&empty::<char>(), &from_iter(Vec::<char>::new()), '-');
}

#[test]
fn test_operators_hide_random_access() {
    let source = from(vec![1, 2, 3]);
    assert!(source.clone().filter(|_| true).random_access().is_none());
    assert!(source.clone().map(|x| x).random_access().is_none());
    assert!(source.clone().skip(1).random_access().is_none());
    assert!(source.by_ref().random_access().is_some());
    assert!(range_from(0).random_access().is_none());
    assert!(repeat(1).random_access().is_none());
}

#[test]
fn test_resolved_positions_through_the_index() {
    let source = from((0..1_000).collect::<Vec<i32>>());
    assert_eq!(source.count(), 1_000);
    assert_eq!(source.element_at(999).expect("last index"), 999);
    assert_eq!(
        source.element_at(1_000),
        Err(Error::IndexOutOfRange {
            index: 1_000,
            len: Some(1_000)
        })
    );
    assert_eq!(source.last().expect("last"), 999);
}

/// Indexable source that records how often its index is consulted.
struct Tracked {
    items: Vec<i64>,
    lookups: std::cell::Cell<usize>,
}

impl Sequence for Tracked {
    type Item = i64;
    type Cursor<'a> = std::iter::Copied<std::slice::Iter<'a, i64>>;

    fn iterate(&self) -> Self::Cursor<'_> {
        self.items.iter().copied()
    }

    fn random_access(&self) -> Option<&dyn RandomAccess<Item = i64>> {
        Some(self)
    }
}

impl RandomAccess for Tracked {
    type Item = i64;

    fn len(&self) -> usize {
        self.lookups.set(self.lookups.get() + 1);
        self.items.len()
    }

    fn get(&self, index: usize) -> Option<i64> {
        self.lookups.set(self.lookups.get() + 1);
        self.items.get(index).copied()
    }
}

#[test]
fn test_enabled_fast_path_reads_the_index() {
    let tracked = Tracked {
        items: vec![3, 1, 4],
        lookups: std::cell::Cell::new(0),
    };
    assert_eq!(tracked.element_at(2), Ok(4));
    assert!(tracked.lookups.get() > 0);

    let before = tracked.lookups.get();
    assert_eq!(tracked.by_ref().filter(|x| *x > 1).count(), 2);
    assert_eq!(tracked.lookups.get(), before);
}
