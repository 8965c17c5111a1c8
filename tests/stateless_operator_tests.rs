mod common;

use common::counted;
use seqflow::prelude::*;

#[test]
fn test_filter_then_map() {
    let out = from(vec![1, 2, 3, 4, 5])
        .filter(|x| x % 2 == 0)
        .map(|x| x * x)
        .to_vec();
    assert_eq!(out, vec![4, 16]);
}

#[test]
fn test_building_a_chain_pulls_nothing() {
    let (source, pulls) = counted(vec![1, 2, 3]);
    let chain = source
        .map(|x| x + 1)
        .filter(|x| *x > 0)
        .skip(1)
        .order_by(|x| *x)
        .take_last(2);
    assert_eq!(pulls.get(), 0);
    assert_eq!(chain.to_vec(), vec![3, 4]);
    assert_eq!(pulls.get(), 3);
}

#[test]
fn test_map_indexed_passes_positions() {
    let out = from(vec!["a", "b", "c"])
        .map_indexed(|s, i| format!("{i}:{s}"))
        .to_vec();
    assert_eq!(out, vec!["0:a", "1:b", "2:c"]);
}

#[test]
fn test_flat_map_flattens_in_order() {
    let out = from(vec![1, 2, 3])
        .flat_map(|x| vec![x; x as usize])
        .to_vec();
    assert_eq!(out, vec![1, 2, 2, 3, 3, 3]);
    assert!(from(vec![0]).flat_map(|_| Vec::<i32>::new()).to_vec().is_empty());
}

#[test]
fn test_concat_append_prepend() {
    let out = from(vec![2, 3])
        .concat(vec![4, 5])
        .append(6)
        .prepend(1)
        .to_vec();
    assert_eq!(out, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(empty::<i32>().concat(range(0, 0).map(|x| x as i32)).count(), 0);
}

#[test]
fn test_concat_starts_second_source_only_when_first_is_exhausted() {
    let (second, pulls) = counted(vec![10, 20]);
    let chain = from(vec![1_i64, 2]).concat(second);
    assert_eq!(chain.by_ref().take(2).to_vec(), vec![1, 2]);
    assert_eq!(pulls.get(), 0);
    assert_eq!(chain.to_vec(), vec![1, 2, 10, 20]);
    assert_eq!(pulls.get(), 2);
}

#[test]
fn test_default_if_empty_yields_default_once() {
    assert_eq!(empty::<i32>().default_if_empty(7).to_vec(), vec![7]);
    assert_eq!(from(vec![1, 2]).default_if_empty(7).to_vec(), vec![1, 2]);
    assert_eq!(
        from(vec![1, 2]).filter(|x| *x > 5).default_if_empty(0).to_vec(),
        vec![0]
    );
}

#[test]
fn test_skip_and_take_clamp_counts() {
    let source = from(vec![1, 2, 3, 4]);
    assert_eq!(source.clone().skip(2).to_vec(), vec![3, 4]);
    assert_eq!(source.clone().skip(-3).to_vec(), vec![1, 2, 3, 4]);
    assert_eq!(source.clone().skip(10).count(), 0);
    assert_eq!(source.clone().take(2).to_vec(), vec![1, 2]);
    assert!(source.clone().take(0).to_vec().is_empty());
    assert!(source.take(-1).to_vec().is_empty());
}

#[test]
fn test_take_count_is_min_of_n_and_len() {
    let source = range(0, 7);
    for n in 0..12_i64 {
        let expected = n.min(7) as usize;
        assert_eq!(source.take(n).count(), expected, "take({n})");
    }
}

#[test]
fn test_take_never_pulls_past_its_bound() {
    let (source, pulls) = counted(vec![1, 2, 3, 4, 5]);
    assert_eq!(source.take(2).to_vec(), vec![1, 2]);
    assert_eq!(pulls.get(), 2);
}

#[test]
fn test_take_while_stops_permanently() {
    let out = from(vec![1, 2, 5, 1, 2]).take_while(|x| *x < 3).to_vec();
    assert_eq!(out, vec![1, 2]);
}

#[test]
fn test_skip_while_switches_once() {
    let out = from(vec![1, 2, 5, 1, 2]).skip_while(|x| *x < 3).to_vec();
    assert_eq!(out, vec![5, 1, 2]);
}

#[test]
fn test_zip_stops_at_shorter_side() {
    let pairs = from(vec![1, 2, 3]).zip(vec!["a", "b"]).to_vec();
    assert_eq!(pairs, vec![(1, "a"), (2, "b")]);

    let sums = range(0, 3).zip_with(range(10, 20), |a, b| a + b).to_vec();
    assert_eq!(sums, vec![10, 12, 14]);
}

#[test]
fn test_zip_pulls_the_primary_first() {
    let (primary, primary_pulls) = counted(vec![1, 2, 3]);
    let (secondary, secondary_pulls) = counted(vec![7]);
    let out = primary.zip(secondary).to_vec();
    assert_eq!(out, vec![(1, 7)]);
    assert_eq!(primary_pulls.get(), 2);
    assert_eq!(secondary_pulls.get(), 1);
}
