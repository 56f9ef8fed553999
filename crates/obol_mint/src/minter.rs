//! # Minter State Machine
//!
//! The per-epoch inflation state and the pure functions that advance it.
//!
//! ## The Epoch Pipeline
//!
//! ```text
//! Host ledger (once per block) -> next_inflation_rate() ->
//!   1. Read total supply and bonded ratio from ledger state
//!   2. Pick regime: bootstrap (supply below cutoff) or stabilized
//!   3. Store the returned rate back into Minter.inflation
//!   4. next_annual_provisions() -> store into Minter.annual_provisions
//!   5. block_provision() -> Coin to mint this block
//! ```
//!
//! The host owns the `Minter` value and serializes epoch processing; nothing
//! here spawns work or blocks, and every call completes in bounded time.
//!
//! ## The Two Regimes
//!
//! **Bootstrap** (supply below 25,000,000): a two-piece cubic bump keyed to
//! absolute supply milestones, deliberately independent of staking
//! participation. The constants are fixed by construction to keep the curve
//! in bounds, so no clamping is applied here - if they ever become
//! configurable, bound checks must be added.
//!
//! **Stabilized** (supply at or above the cutoff): classic goal-bonded
//! feedback control. The rate drifts toward more inflation when staking is
//! below target and less when above, clamped into the configured
//! `[inflation_min, inflation_max]` band. Hitting a bound saturates; it is
//! never an error.

use std::fmt;

use obol_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{MintError, MintResult};
use crate::params::Params;

/// Supply threshold separating the bootstrap regime from the stabilized
/// regime, in base units.
pub const BOOTSTRAP_SUPPLY_CUTOFF: u128 = 25_000_000;

/// Supply at which the bootstrap curve peaks (100% inflation).
const BOOTSTRAP_PEAK_SUPPLY: i64 = 12_000_000;

/// Width of the bootstrap bump, in base units.
const BOOTSTRAP_CURVE_WIDTH: u64 = 10_000_000;

/// Supply at which the bootstrap curve switches from its first leg to its
/// second; the legs agree at this point by construction.
const BOOTSTRAP_SPLIT_SUPPLY: u128 = 22_000_000;

/// An amount of the mint denomination, produced once per block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    /// Asset denomination.
    pub denom: String,
    /// Whole base units; sub-unit remainders are truncated away.
    pub amount: u128,
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

/// Per-epoch monetary policy state.
///
/// A single value owned and mutated exclusively by the host ledger's
/// sequential epoch loop; the transitions below are pure and leave `self`
/// untouched - the caller persists their outputs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Minter {
    /// Current annual inflation rate (dimensionless ratio).
    pub inflation: Decimal,
    /// Projected total issuance for the current year, non-negative.
    pub annual_provisions: Decimal,
}

impl Minter {
    /// Creates a minter with the given inflation and annual provisions.
    #[must_use]
    pub fn new(inflation: Decimal, annual_provisions: Decimal) -> Self {
        Self { inflation, annual_provisions }
    }

    /// Creates a minter with the given inflation and zero provisions.
    #[must_use]
    pub fn initial(inflation: Decimal) -> Self {
        Self::new(inflation, Decimal::zero())
    }

    /// Default genesis minter: 13% inflation, zero provisions.
    #[must_use]
    pub fn default_initial() -> Self {
        Self::initial(Decimal::with_precision(13, 2))
    }

    /// Genesis/config sanity check; not invoked on every transition.
    ///
    /// # Errors
    ///
    /// Returns [`MintError::InvalidInflation`] when the inflation rate is
    /// negative.
    pub fn validate(&self) -> MintResult<()> {
        if self.inflation.is_negative() {
            return Err(MintError::InvalidInflation(self.inflation.clone()));
        }
        Ok(())
    }

    /// Computes the inflation rate for the next epoch.
    ///
    /// Below [`BOOTSTRAP_SUPPLY_CUTOFF`] the bootstrap curve applies and the
    /// bonded ratio is ignored; at or above it, goal-bonded feedback control
    /// applies with the result clamped into
    /// `[params.inflation_min, params.inflation_max]`.
    ///
    /// The caller is responsible for storing the returned rate back into
    /// [`Minter::inflation`].
    ///
    /// # Errors
    ///
    /// Returns a wrapped [`DivisionByZero`](obol_decimal::DecimalError) when
    /// `params.goal_bonded` or `params.blocks_per_year` is zero - both are
    /// rejected by [`Params::validate`], so validated parameters never fail.
    pub fn next_inflation_rate(
        &self,
        params: &Params,
        bonded_ratio: &Decimal,
        total_supply: u128,
    ) -> MintResult<Decimal> {
        if total_supply < BOOTSTRAP_SUPPLY_CUTOFF {
            tracing::debug!("supply {} below cutoff, bootstrap regime", total_supply);
            return bootstrap_inflation(total_supply);
        }

        // (1 - bonded/goal) * rate_change_per_year, spread across the year's
        // blocks, applied to the current rate.
        let bonded_gap = Decimal::one().sub(&bonded_ratio.quo(&params.goal_bonded)?);
        let annual_rate_change = bonded_gap.mul(&params.inflation_rate_change);
        let epoch_rate_change = annual_rate_change.quo_int(params.blocks_per_year)?;
        let mut inflation = self.inflation.add(&epoch_rate_change);

        // Saturate at the configured band; exceeding a bound is not an error.
        if inflation > params.inflation_max {
            tracing::debug!("inflation clamped to max {}", params.inflation_max);
            inflation = params.inflation_max.clone();
        }
        if inflation < params.inflation_min {
            tracing::debug!("inflation clamped to min {}", params.inflation_min);
            inflation = params.inflation_min.clone();
        }

        Ok(inflation)
    }

    /// Annual provisions at the current inflation rate: `inflation * supply`.
    /// No clamping; non-negative for non-negative inputs.
    #[must_use]
    pub fn next_annual_provisions(&self, total_supply: u128) -> Decimal {
        self.inflation.mul_int_u128(total_supply)
    }

    /// The coin amount to mint this block:
    /// `truncate(annual_provisions / blocks_per_year)`.
    ///
    /// Truncation (not rounding) means fractional remainders below one base
    /// unit are dropped every epoch - an accepted, cumulative sub-unit loss.
    /// Out-of-range quotients also truncate to a zero amount rather than
    /// failing: negative provisions (rejected upstream by validation) and a
    /// per-block amount above `u128::MAX` (more than 3.4e38 base units per
    /// block, unreachable for any supply this ledger can represent).
    ///
    /// # Errors
    ///
    /// Returns a wrapped [`DivisionByZero`](obol_decimal::DecimalError) when
    /// `params.blocks_per_year` is zero.
    pub fn block_provision(&self, params: &Params) -> MintResult<Coin> {
        let provision = self.annual_provisions.quo_int(params.blocks_per_year)?;
        Ok(Coin {
            denom: params.mint_denom.clone(),
            amount: provision.truncate_u128().unwrap_or(0),
        })
    }
}

impl Default for Minter {
    fn default() -> Self {
        Self::default_initial()
    }
}

/// The bootstrap hyper-inflation curve: a two-piece cubic approximating an
/// Irwin-Hall-shaped bump over absolute supply.
///
/// With `u = (supply - peak) / width`:
/// - first leg (supply <= split): `0.25 * (3|u|^3 - 6u^2 + 4)`
/// - second leg (supply > split): `0.25 * (2 - u)^3`
///
/// Pure in `total_supply`; staking participation plays no role here because
/// bootstrap issuance targets fixed supply milestones.
fn bootstrap_inflation(total_supply: u128) -> MintResult<Decimal> {
    let supply = Decimal::from_u128(total_supply);
    let u = supply
        .sub(&Decimal::new(BOOTSTRAP_PEAK_SUPPLY))
        .quo_int(BOOTSTRAP_CURVE_WIDTH)?;

    let shape = if total_supply <= BOOTSTRAP_SPLIT_SUPPLY {
        let cubic = Decimal::new(3).mul(&u.abs().pow(3));
        let quadratic = Decimal::new(6).mul(&u.pow(2));
        cubic.sub(&quadratic).add(&Decimal::new(4))
    } else {
        Decimal::new(2).sub(&u).pow(3)
    };

    Ok(Decimal::with_precision(25, 2).mul(&shape))
}
