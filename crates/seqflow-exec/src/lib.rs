#![forbid(unsafe_code)]
//! seqflow-exec: terminal aggregates and the positional fast path.
//!
//! Design intent:
//! - Terminals are eager: they drive exactly one cursor of the sequence they
//!   are called on and return a concrete value (scalar, collection, map).
//! - Positional terminals (`count`, `first`, `last`, `element_at`) consult
//!   `Sequence::random_access` first and skip traversal when the immediate
//!   upstream is indexable. Results and errors match the traversing path.
//! - Awaiting pending elements (`resolve_all`, feature `async`) is sequential
//!   in iteration order; there is no scheduler.

pub mod aggregate;
pub mod collect;
pub mod element;
pub mod fold;
pub mod lookup;
pub mod numeric;
#[cfg(feature = "async")]
pub mod resolve;

mod fast_path;

pub use aggregate::Aggregate;
pub use lookup::Lookup;
