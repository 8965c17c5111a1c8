#![forbid(unsafe_code)]
//! seqflow-mem: bounded window buffers for the windowing operators.
//!
//! `skip_last`, `take_last`, and `batch_in` all hold a FIFO window over the
//! upstream. The window is an amortized queue: a contiguous buffer plus a head
//! index, compacted in one move once enough head slots are consumed, instead
//! of shifting element by element on every pop.

pub mod queue;
pub mod tracking;

pub use queue::WindowQueue;
pub use tracking::PeakTracker;
