//! # Decimal Error Types
//!
//! All errors that can occur in fixed-point arithmetic.

use thiserror::Error;

/// Errors that can occur in fixed-point arithmetic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecimalError {
    /// Division by a zero-valued decimal.
    #[error("division by zero")]
    DivisionByZero,

    /// Factorial requested for a negative value.
    #[error("negative value does not have a factorial")]
    NegativeInput,

    /// A string could not be parsed as a decimal.
    #[error("invalid decimal string: {0}")]
    InvalidFormat(String),
}

/// Result type for decimal operations.
pub type DecimalResult<T> = Result<T, DecimalError>;
