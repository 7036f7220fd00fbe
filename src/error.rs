//! The error type shared by all value types.

use thiserror::Error;

/// Result type returned by the fallible operations in this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised by constructors and operations of the value types.
///
/// Every error is returned at the point where the violation is detected. Operations never return
/// partial results.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum Error {
    /// A value lies outside of the domain accepted by a constructor.
    #[error("{value} is outside of the domain of {expected}")]
    Domain { value: f64, expected: &'static str },

    /// Operand dimensions are incompatible with the requested operation.
    #[error("dimension mismatch in {operation}: expected {expected}, found {found}")]
    DimensionMismatch {
        operation: &'static str,
        expected: usize,
        found: usize,
    },

    /// A matrix element index lies outside of the matrix.
    #[error("index ({row}, {col}) is out of range for a {height}x{width} matrix")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },

    /// A value lies outside of the inclusive range an operation is defined for.
    #[error("{value} is outside of the range [{min}, {max}]")]
    OutOfRange { value: f64, min: f64, max: f64 },

    /// A string does not match the expected pattern.
    #[error("`{input}` is not a valid percentage")]
    Format { input: String },

    /// The operation has no defined result for its operand (eg. inverting a singular matrix).
    #[error("{0} is undefined")]
    Undefined(&'static str),
}
