//! # Error Types

use crate::vectors::DType;

/// Errors from wordtable operations.
///
/// Every error aborts only the call that raised it; validation runs before
/// any mutation, so the table is left in its last consistent state.
#[derive(Debug, thiserror::Error)]
pub enum WordtableError {
    /// A mandatory fallback (unk token, unk vector) is missing or unusable.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Parallel token/vector sequences have different lengths.
    #[error(
        "mismatching sizes for tokens and vectors; size of tokens: {tokens}, size of vectors: {vectors}"
    )]
    SizeMismatch {
        /// The number of tokens.
        tokens: usize,

        /// The number of vectors.
        vectors: usize,
    },

    /// A token appears more than once where tokens must be unique.
    #[error("duplicate token: {0:?}")]
    DuplicateKey(String),

    /// A vector has the wrong element type.
    #[error("vectors should be of data type {expected}, found {found}")]
    Type {
        /// The required element type.
        expected: DType,

        /// The supplied element type.
        found: DType,
    },

    /// An index is outside the valid range.
    #[error("index {index} is out of bounds for size {size}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,

        /// The size of the indexed table.
        size: usize,
    },

    /// A vector does not match the table's dimensionality.
    #[error("vector dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// The table's dimensionality.
        expected: usize,

        /// The supplied vector length.
        found: usize,
    },

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Malformed CSV input.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Parse error (numbers, record layout, etc.)
    #[error("parse error: {0}")]
    Parse(String),

    /// Serialized state could not be written or read.
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

/// Result type for wordtable operations.
pub type WTResult<T> = core::result::Result<T, WordtableError>;
