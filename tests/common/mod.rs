//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use seqflow::prelude::*;

/// Heterogeneous records from a JSON array.
pub fn records(json: serde_json::Value) -> VecSource<Value> {
    match Value::from(json) {
        Value::List(items) => VecSource::new(items),
        other => VecSource::new(vec![other]),
    }
}

/// An opaque source over `items` that counts every element it hands out.
pub fn counted(items: Vec<i64>) -> (impl Sequence<Item = i64>, Rc<Cell<usize>>) {
    let pulls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&pulls);
    let source = from_fn(move || {
        let counter = Rc::clone(&counter);
        items
            .clone()
            .into_iter()
            .inspect(move |_| counter.set(counter.get() + 1))
    });
    (source, pulls)
}
