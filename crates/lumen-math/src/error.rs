//! Error types for the math kernel.

use thiserror::Error;

/// Errors raised by checked constructors and normalization.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// A matrix was built from a backing slice of the wrong length.
    #[error("matrix needs {expected} elements, got {actual}")]
    InvalidMatrixLength {
        /// Required number of elements.
        expected: usize,
        /// Number of elements supplied.
        actual: usize,
    },

    /// A zero-length vector was normalized.
    #[error("cannot normalize a zero-length vector")]
    ZeroLength,

    /// A vector with an infinite or NaN component was normalized.
    #[error("cannot normalize a vector with non-finite components")]
    NonFinite,
}

/// Result type for math operations.
pub type Result<T> = std::result::Result<T, MathError>;
