use seqflow::prelude::*;

#[test]
fn test_skip_last_and_take_last() {
    let source = from(vec![1, 2, 3]);
    assert_eq!(source.clone().skip_last(1).to_vec(), vec![1, 2]);
    assert_eq!(source.clone().take_last(2).to_vec(), vec![2, 3]);

    assert_eq!(source.clone().skip_last(0).to_vec(), vec![1, 2, 3]);
    assert_eq!(source.clone().skip_last(-4).to_vec(), vec![1, 2, 3]);
    assert!(source.clone().skip_last(5).to_vec().is_empty());

    assert!(source.clone().take_last(0).to_vec().is_empty());
    assert!(source.clone().take_last(-1).to_vec().is_empty());
    assert_eq!(source.take_last(9).to_vec(), vec![1, 2, 3]);
}

#[test]
fn test_skip_last_window_stays_bounded() {
    let chain = range(0, 10_000).skip_last(3);
    let mut cursor = chain.iterate();
    let mut emitted = 0;
    let mut last = None;
    while let Some(x) = cursor.next() {
        emitted += 1;
        last = Some(x);
    }
    assert_eq!(emitted, 9_997);
    assert_eq!(last, Some(9_996));
    assert_eq!(cursor.peak_window(), 4);
}

#[test]
fn test_take_last_window_stays_bounded() {
    let chain = range(0, 50_000).take_last(5);
    let mut cursor = chain.iterate();
    let tail: Vec<i64> = cursor.by_ref().collect();
    assert_eq!(tail, vec![49_995, 49_996, 49_997, 49_998, 49_999]);
    assert!(cursor.peak_window() <= 6);
}

#[test]
fn test_batch_in_drops_or_keeps_the_short_tail() {
    let full_only = range(1, 6).batch_in(2, false).expect("valid size");
    assert_eq!(full_only.to_vec(), vec![vec![1, 2], vec![3, 4]]);

    let with_tail = range(1, 6).batch_in(2, true).expect("valid size");
    assert_eq!(with_tail.to_vec(), vec![vec![1, 2], vec![3, 4], vec![5]]);

    let exact = range(1, 5).chunk(2).expect("valid size");
    assert_eq!(exact.to_vec(), vec![vec![1, 2], vec![3, 4]]);

    let nothing = empty::<i32>().chunk(3).expect("valid size");
    assert_eq!(nothing.count(), 0);
}

#[test]
fn test_batch_in_rejects_sizes_below_one() {
    for size in [0, -2] {
        match from(vec![1, 2, 3]).batch_in(size, true) {
            Err(Error::InvalidArgument(_)) => {}
            Err(other) => panic!("unexpected error {other}"),
            Ok(_) => panic!("size {size} accepted"),
        }
    }
}

#[test]
fn test_windows_work_on_unbounded_sources_when_capped() {
    let batches = range_from(0).chunk(3).expect("valid size").take(2).to_vec();
    assert_eq!(batches, vec![vec![0, 1, 2], vec![3, 4, 5]]);

    let trimmed = range_from(0).take(6).skip_last(2).to_vec();
    assert_eq!(trimmed, vec![0, 1, 2, 3]);
}
