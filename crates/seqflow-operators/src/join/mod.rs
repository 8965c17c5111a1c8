//! Hash join and grouping operators.
//!
//! The secondary input (or, for `group_by`, the sole input) is drained into
//! a hash map on the first pull. `join` and `group_join` then pull the
//! primary input one element at a time.

pub mod group;
pub mod hash;

pub use group::{GroupBy, Grouping};
pub use hash::{GroupJoin, Join};
