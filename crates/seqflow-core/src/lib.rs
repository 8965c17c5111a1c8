#![forbid(unsafe_code)]
//! seqflow-core: the Sequence contract, source generators, dynamic values,
//! errors, and configuration.
//!
//! Design intent:
//! - A `Sequence` is an immutable description; `iterate()` hands out a fresh
//!   cursor (a plain `Iterator`) per drive and never mutates the description.
//! - Chain operators live in `seqflow-operators`, terminals in `seqflow-exec`.
//!   Both build on the single `Sequence` contract defined here.
//! - Sources that are randomly indexable advertise it through
//!   `Sequence::random_access` so positional terminals can skip traversal.

pub mod config;
pub mod error;
pub mod metrics;
pub mod number;
pub mod ordering;
pub mod prelude;
pub mod sequence;
pub mod source;
pub mod value;

pub use config::{engine_config, EngineConfig};
pub use error::{Error, Result};
pub use number::{AsNumber, Number};
pub use ordering::OrderKey;
pub use sequence::{IntoSequence, RandomAccess, Sequence};
pub use source::{empty, from, from_fn, from_iter, range, range_from, repeat, repeat_n};
pub use value::Value;
