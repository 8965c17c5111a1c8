//! Tracing hooks for materialization and fast-path events.
//!
//! This module purposefully avoids pulling heavy telemetry stacks. With the
//! `tracing` feature off every call compiles down to nothing.

#[cfg(feature = "tracing")]
pub fn emit(event: &'static str, key_values: &[(&'static str, usize)]) {
    let span = tracing::span!(tracing::Level::TRACE, "seqflow", event);
    let _entered = span.enter();
    for (k, v) in key_values {
        tracing::trace!(%event, %k, v = *v, "metric");
    }
}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
pub fn emit(_event: &'static str, _key_values: &[(&'static str, usize)]) { /* no-op */
}
