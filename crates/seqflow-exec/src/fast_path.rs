//! Positional shortcut for concrete, indexable sources.
//!
//! Only the immediate upstream of a terminal is consulted: a `VecSource`
//! behind a `filter` is not indexable, the `filter` is what the terminal sees.

use seqflow_core::config::{engine_config, EngineConfig};
use seqflow_core::metrics;
use seqflow_core::sequence::{RandomAccess, Sequence};

/// Random access to `source` when it offers it and the fast path is enabled.
pub(crate) fn random_access<'s, S: Sequence>(
    source: &'s S,
    op: &'static str,
) -> Option<&'s dyn RandomAccess<Item = S::Item>> {
    random_access_with(engine_config(), source, op)
}

fn random_access_with<'s, S: Sequence>(
    config: &EngineConfig,
    source: &'s S,
    op: &'static str,
) -> Option<&'s dyn RandomAccess<Item = S::Item>> {
    if !config.fast_path {
        return None;
    }
    let view = source.random_access()?;
    metrics::emit(op, &[("fast_path_len", view.len())]);
    Some(view)
}
