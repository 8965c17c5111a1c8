//! Await a sequence of pending values.
//!
//! Futures are polled one after another in iteration order. Nothing runs
//! concurrently: the next element is not pulled until the previous future has
//! completed.

use std::future::Future;

use futures::stream::{self, StreamExt};
use seqflow_core::metrics;
use seqflow_core::sequence::Sequence;
use seqflow_core::source::VecSource;

/// Resolve every element of `source` and hand back a plain, materialized
/// sequence of the results.
pub async fn resolve_all<S, T>(source: &S) -> VecSource<T>
where
    S: Sequence,
    S::Item: Future<Output = T>,
{
    let resolved: Vec<T> = stream::iter(source.iterate())
        .then(|pending| pending)
        .collect()
        .await;
    metrics::emit("resolve_all", &[("resolved", resolved.len())]);
    VecSource::new(resolved)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;
    use futures::future::{ready, LocalBoxFuture};
    use seqflow_core::source::{from, from_fn};

    use super::*;

    #[test]
    fn results_follow_iteration_order() {
        let pending = from(vec![ready(3), ready(1), ready(2)]);
        let resolved = block_on(resolve_all(&pending));
        assert_eq!(resolved.as_slice(), &[3, 1, 2]);
    }

    #[test]
    fn each_future_completes_before_the_next_is_pulled() {
        let log = RefCell::new(Vec::new());
        let source = from_fn(|| {
            let log = &log;
            (0..3).map(move |i| {
                log.borrow_mut().push(format!("pull {i}"));
                let fut: LocalBoxFuture<'_, i32> = Box::pin(async move {
                    log.borrow_mut().push(format!("done {i}"));
                    i * 10
                });
                fut
            })
        });
        let resolved = block_on(resolve_all(&source));
        assert_eq!(resolved.as_slice(), &[0, 10, 20]);
        assert_eq!(
            log.into_inner(),
            vec!["pull 0", "done 0", "pull 1", "done 1", "pull 2", "done 2"]
        );
    }
}
