use thiserror::Error;

/// Errors raised by the interval algebra.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ArropsError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Length mismatch for {what}: expected {expected}, found {found}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Number of neighbors must be at least 1, got {0}")]
    InvalidNeighborCount(usize),
}

/// Errors raised while converting labeled input into positional sequences.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AdapterError {
    #[error("Index and values differ in length: {index} labels for {values} values")]
    LengthMismatch { index: usize, values: usize },

    #[error("Column has a non-trivial index (label {label} at position {position}) that would be discarded")]
    NonTrivialIndex { position: usize, label: usize },

    #[error(transparent)]
    Interval(#[from] ArropsError),
}
