//! # Mint Error Types
//!
//! All errors that can occur in the monetary policy engine. The host ledger
//! treats any propagated error as fatal to the epoch transition, so this
//! crate returns typed values instead of panicking on bad inputs.

use obol_decimal::{Decimal, DecimalError};
use thiserror::Error;

/// Errors that can occur in the monetary policy engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MintError {
    /// Minter carries a negative inflation rate (genesis/config check).
    #[error("mint parameter inflation should be positive, is {0}")]
    InvalidInflation(Decimal),

    /// Policy parameters failed validation.
    #[error("invalid mint params: {0}")]
    InvalidParams(String),

    /// An arithmetic step failed (division by zero in practice).
    #[error(transparent)]
    Decimal(#[from] DecimalError),
}

/// Result type for mint operations.
pub type MintResult<T> = Result<T, MintError>;
