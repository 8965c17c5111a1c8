//! Convenient re-exports for downstream crates.

pub use crate::config::{engine_config, EngineConfig};
pub use crate::error::{Error, Result};
pub use crate::number::{AsNumber, Number};
pub use crate::ordering::OrderKey;
pub use crate::sequence::{IntoSequence, RandomAccess, Sequence};
pub use crate::source::{
    empty, from, from_fn, from_iter, range, range_from, repeat, repeat_n, Empty, FnSource,
    IterSource, Range, Repeat, SliceSource, VecSource,
};
pub use crate::value::Value;
