use criterion::{black_box, criterion_group, criterion_main, Criterion};
use seqflow::prelude::*;
use serde_json::json;

fn make_records(rows: usize) -> VecSource<Value> {
    let items = (0..rows)
        .map(|i| {
            Value::from(json!({
                "group": format!("group-{}", i % 4),
                "order": i as i64,
                "value": (i % 10) as f64,
            }))
        })
        .collect();
    VecSource::new(items)
}

fn bench_stateless_chain(c: &mut Criterion) {
    let source = range(0, 100_000);
    c.bench_function("filter_map_sum", |b| {
        b.iter(|| {
            let total = source
                .filter(|x| x % 3 == 0)
                .map(|x| x * 2)
                .sum()
                .unwrap();
            black_box(total)
        })
    });
}

fn bench_group_and_order(c: &mut Criterion) {
    let rows = make_records(4_096);
    c.bench_function("group_by_sum", |b| {
        b.iter(|| {
            let totals = rows
                .by_ref()
                .group_by(|r| r.field("group"))
                .map(|g| g.sum_by(|r| r.field("value")).unwrap())
                .to_vec();
            black_box(totals)
        })
    });
    c.bench_function("order_by_then_by", |b| {
        b.iter(|| {
            let sorted = rows
                .by_ref()
                .order_by(|r| r.field("group"))
                .then_by_descending_with(|r| r.field("order").as_i64(), Option::<i64>::cmp)
                .take(10)
                .to_vec();
            black_box(sorted)
        })
    });
}

fn bench_windows(c: &mut Criterion) {
    let source = range(0, 100_000);
    c.bench_function("skip_last_window", |b| {
        b.iter(|| black_box(source.skip_last(64).count()))
    });
    c.bench_function("batch_in", |b| {
        b.iter(|| black_box(source.chunk(256).unwrap().count()))
    });
}

fn bench_fast_path(c: &mut Criterion) {
    let indexed = from((0..100_000).collect::<Vec<i64>>());
    let opaque = from_iter((0..100_000).collect::<Vec<i64>>());
    c.bench_function("element_at_indexed", |b| {
        b.iter(|| black_box(indexed.element_at(99_999).unwrap()))
    });
    c.bench_function("element_at_traversal", |b| {
        b.iter(|| black_box(opaque.element_at(99_999).unwrap()))
    });
}

criterion_group!(
    benches,
    bench_stateless_chain,
    bench_group_and_order,
    bench_windows,
    bench_fast_path
);
criterion_main!(benches);
