#![forbid(unsafe_code)]
//! seqflow-operators: lazy chain operators (map/filter/set/sort/join/group/
//! window/zip).
//!
//! Design intent:
//! - Every operator is a plain struct wrapping its upstream sequence(s) and
//!   captured callbacks. Constructing one performs no iteration.
//! - Cursors borrow their operator, hold only the resume state they need, and
//!   pull upstream one element at a time unless the operator inherently has
//!   to materialize (sort, reverse, group, join, set lookups).
//! - Materializing operators defer the buffering to the first `next()` call.
//! - Bounded buffers (window operators) go through `seqflow-mem`.

pub mod concat;
pub mod filter;
pub mod map;
pub mod slice;
pub mod traits;
pub mod zip;

pub mod join;
pub mod set;
pub mod sort;
pub mod window;

pub use concat::{Append, Concat, DefaultIfEmpty, Prepend};
pub use filter::Filter;
pub use join::{GroupBy, GroupJoin, Grouping, Join};
pub use map::{FlatMap, Map, MapIndexed};
pub use set::{Distinct, Except, Intersect, Union};
pub use slice::{Skip, SkipWhile, Take, TakeWhile};
pub use sort::{Chained, Comparer, CustomOrder, KeyComparer, KeyOrder, OrderBy, Reverse, TextOrder};
pub use traits::{Borrowed, Operator, SequenceExt};
pub use window::{BatchIn, SkipLast, TakeLast};
pub use zip::{pair, Zip};
