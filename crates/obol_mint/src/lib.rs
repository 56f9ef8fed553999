//! # OBOL Mint
//!
//! Monetary policy engine for the OBOL ledger.
//!
//! ## Design Principles
//!
//! 1. **Deterministic** - every arithmetic step uses [`obol_decimal`]'s
//!    fixed-point decimals; no node can disagree on the issuance of a block
//! 2. **Pure transitions** - the host ledger owns the [`Minter`] value,
//!    calls the transition functions once per epoch, and persists the outputs
//! 3. **Typed failures** - a propagated error is fatal to the epoch
//!    transition, so invalid inputs return errors instead of panicking
//!
//! ## Thread Safety
//!
//! Everything here is a pure function over values the caller owns. The host
//! must serialize its read-compute-store cycle on the `Minter`; this crate
//! imposes no locking of its own and never spawns work.
//!
//! ## Example
//!
//! ```rust,ignore
//! use obol_mint::{Minter, Params};
//!
//! let params = Params::default();
//! let mut minter = Minter::default_initial();
//!
//! // Once per block, on the host's epoch loop:
//! minter.inflation = minter.next_inflation_rate(&params, &bonded_ratio, supply)?;
//! minter.annual_provisions = minter.next_annual_provisions(supply);
//! let minted = minter.block_provision(&params)?;
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod error;
pub mod minter;
pub mod params;

pub use error::{MintError, MintResult};
pub use minter::{Coin, Minter, BOOTSTRAP_SUPPLY_CUTOFF};
pub use params::{Params, DEFAULT_BLOCKS_PER_YEAR};

pub use obol_decimal::Decimal;
