//! # Deterministic Series Approximations
//!
//! Factorial and the exponential function, evaluated entirely in fixed-point
//! [`Decimal`] arithmetic.
//!
//! ## Why Not `f64::exp`?
//!
//! A native floating-point exponential is not bit-for-bit identical across
//! hardware and compilers, which makes it unusable in a consensus-critical
//! computation. The ledger instead evaluates a truncated Taylor series with a
//! fixed, hardcoded term count, so every node computes the exact same digits.
//!
//! ## Accuracy Envelope
//!
//! The 55-term series gives sub-percent accuracy over the inputs the
//! inflation model exercises (x roughly in [-6, 0], and comfortably up to
//! x = 10). For large |x| the series has not converged and the result
//! degrades; that is an accepted approximation error, not a bug.

use num_bigint::BigInt;
use num_traits::One;

use crate::decimal::Decimal;
use crate::error::{DecimalError, DecimalResult};

/// Total number of Taylor terms evaluated by [`exp`]: `1 + x + sum(2..55)`.
const EXP_SERIES_TERMS: u32 = 55;

/// Computes the factorial of a decimal.
///
/// Walks an integer counter upward from one while `counter < n`, multiplying
/// the accumulator by `counter + 1` at each step. For integer `n` this is the
/// standard factorial (`0! = 1! = 1`). For fractional `n` every counter below
/// `n` passes the less-than test, so the result equals the factorial of the
/// next whole number - defined behavior, kept because production callers only
/// ever pass integer-valued decimals.
///
/// # Errors
///
/// Returns [`DecimalError::NegativeInput`] when `n` is negative; the error is
/// propagated, never silently corrected.
pub fn factorial(n: &Decimal) -> DecimalResult<Decimal> {
    if n.is_negative() {
        return Err(DecimalError::NegativeInput);
    }

    let one = Decimal::one();
    let mut product = Decimal::one();
    let mut counter = Decimal::one();
    while &counter < n {
        product = product.mul(&counter.add(&one));
        counter = counter.add(&one);
    }

    Ok(product)
}

/// Computes a deterministic fixed-point approximation of `e^x`.
///
/// Evaluates the truncated Taylor series
/// `1 + x + x^2/2! + x^3/3! + ... + x^54/54!` (55 terms total). The running
/// factorial is kept as an exact [`BigInt`] integer, so each term is a single
/// truncating division of the scaled mantissa - arithmetically identical to
/// `pow(i)` divided by `factorial(i)`, with the zero-divisor case
/// structurally impossible (a factorial is never less than one).
///
/// Never fails; see the module docs for the accuracy envelope.
#[must_use]
pub fn exp(x: &Decimal) -> Decimal {
    let mut sum = Decimal::one().add(x);
    let mut factorial_acc = BigInt::one();

    for i in 2..EXP_SERIES_TERMS {
        factorial_acc *= BigInt::from(i);
        // x^i / i! at 18 fractional digits, truncated toward zero.
        let term = Decimal::from_scaled(x.pow(i).into_scaled() / &factorial_acc);
        sum = sum.add(&term);
    }

    sum
}
