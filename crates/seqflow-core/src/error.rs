use thiserror::Error;

/// Canonical result for every seqflow crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Deterministic logic errors raised while driving or aggregating a sequence.
///
/// None of these are transient; nothing in the engine retries them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("{op}: sequence contains no elements")]
    EmptySequence { op: &'static str },

    #[error("{op}: expected a numeric element, found {found}")]
    TypeMismatch { op: &'static str, found: String },

    #[error("{op}: no element satisfies the predicate")]
    NotFound { op: &'static str },

    #[error("index {index} is out of range{}", length_suffix(.len))]
    IndexOutOfRange { index: i64, len: Option<usize> },

    #[error("duplicate key: {key}")]
    DuplicateKey { key: String },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    pub fn empty(op: &'static str) -> Self {
        Error::EmptySequence { op }
    }

    pub fn not_found(op: &'static str) -> Self {
        Error::NotFound { op }
    }

    pub fn type_mismatch(op: &'static str, found: impl Into<String>) -> Self {
        Error::TypeMismatch {
            op,
            found: found.into(),
        }
    }

    pub fn duplicate_key(key: &impl std::fmt::Debug) -> Self {
        Error::DuplicateKey {
            key: format!("{key:?}"),
        }
    }
}

fn length_suffix(len: &Option<usize>) -> String {
    match len {
        Some(l) => format!(" for length {l}"),
        None => String::new(),
    }
}
