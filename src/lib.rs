#![forbid(unsafe_code)]
//! seqflow: deferred-execution sequence composition.
//!
//! Build a chain of lazy operators over any re-iterable source, then drive it
//! with a terminal aggregate:
//!
//! ```
//! use seqflow::prelude::*;
//!
//! let squares = from(vec![1, 2, 3, 4, 5])
//!     .filter(|x| x % 2 == 0)
//!     .map(|x| x * x);
//! assert_eq!(squares.to_vec(), vec![4, 16]);
//! // Chains are descriptions; driving one again yields the same result.
//! assert_eq!(squares.count(), 2);
//! ```
//!
//! Design intent:
//! - `seqflow-core` owns the `Sequence` contract, sources, values, errors,
//!   and configuration.
//! - `seqflow-mem` owns the bounded window buffer.
//! - `seqflow-operators` owns the chain (`SequenceExt`), `seqflow-exec` the
//!   terminals (`Aggregate`).
//! - This crate only re-exports them under one roof.

pub use seqflow_core::{
    empty, engine_config, from, from_fn, from_iter, range, range_from, repeat, repeat_n,
    AsNumber, EngineConfig, Error, IntoSequence, Number, OrderKey, RandomAccess, Result,
    Sequence, Value,
};
pub use seqflow_exec::{Aggregate, Lookup};
pub use seqflow_mem::WindowQueue;
pub use seqflow_operators::{Grouping, Operator, SequenceExt};

/// Everything needed to build and drive chains.
pub mod prelude {
    pub use seqflow_core::prelude::*;
    pub use seqflow_exec::{Aggregate, Lookup};
    pub use seqflow_operators::{Borrowed, Grouping, Operator, SequenceExt};
}
