//! # OBOL Decimal
//!
//! Deterministic fixed-point decimal arithmetic for the OBOL ledger.
//!
//! ## Design Principles
//!
//! 1. **Zero floating point** - All monetary calculations use a fixed-point
//!    decimal with 18 fractional digits over an arbitrary-precision mantissa
//! 2. **One rounding rule** - Multiplication and division truncate toward
//!    zero at the 18th digit, at every step, on every node
//! 3. **Typed errors** - Division by zero and negative factorials are error
//!    values, never panics
//!
//! ## Consensus Safety
//!
//! Every node of the ledger recomputes the inflation curve independently.
//! The arithmetic here is bit-for-bit reproducible: no hardware-dependent
//! operation exists anywhere in this crate (the single float conversion is a
//! clearly-labeled test-fixture helper).
//!
//! ## Example
//!
//! ```rust,ignore
//! use obol_decimal::{exp, Decimal};
//!
//! // 55-term Taylor approximation, identical digits on every node
//! let rate = exp(&Decimal::with_precision(-15, 1)); // e^-1.5
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod decimal;
pub mod error;
pub mod series;

pub use decimal::{Decimal, PRECISION};
pub use error::{DecimalError, DecimalResult};
pub use series::{exp, factorial};

pub use num_bigint::BigInt;
