//! # Fixed-Point Decimal Arithmetic
//!
//! **CRITICAL: NO FLOATING POINT IN THE ISSUANCE PATH**
//!
//! This module provides the signed fixed-point decimal used by every monetary
//! calculation on the ledger.
//!
//! ## Representation
//!
//! A [`Decimal`] is an arbitrary-precision integer mantissa scaled by 10^18,
//! i.e. exactly 18 fractional digits. The mantissa is a [`BigInt`] rather
//! than a machine word because the exponential series raises its argument to
//! the 54th power, which overflows even `i128` for the inputs the inflation
//! model exercises.
//!
//! ## Rounding Policy
//!
//! Multiplication and division **truncate toward zero** at the 18th
//! fractional digit. The same rule applies at every step of every
//! calculation; consensus depends on identical rounding on every node, so
//! this policy must never change per call site.
//!
//! ## Why Fixed-Point?
//!
//! - Deterministic: Same calculation = same result on all hardware
//! - No representation surprises: 0.1 + 0.2 == 0.3 (unlike IEEE 754 floats)
//! - Auditable: Issuance must be reproducible from the ledger alone

use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

use num_bigint::BigInt;
use num_traits::{FromPrimitive, Signed, ToPrimitive, Zero};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{DecimalError, DecimalResult};

/// Number of fractional digits carried by every [`Decimal`].
pub const PRECISION: u32 = 18;

/// The mantissa scale, 10^18.
const SCALE: u64 = 1_000_000_000_000_000_000;

/// Signed fixed-point decimal with 18 fractional digits.
///
/// Immutable value type: every operation returns a new value and re-truncates
/// the result to 18 fractional digits. No operation loses the sign silently.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Decimal(BigInt);

impl Decimal {
    /// Returns zero.
    #[must_use]
    pub fn zero() -> Self {
        Self(BigInt::zero())
    }

    /// Returns one.
    #[must_use]
    pub fn one() -> Self {
        Self(Self::unit())
    }

    /// Creates a decimal from a whole integer.
    #[must_use]
    pub fn new(whole: i64) -> Self {
        Self(BigInt::from(whole) * Self::unit())
    }

    /// Creates a decimal from a whole unsigned integer (supply values).
    #[must_use]
    pub fn from_u128(whole: u128) -> Self {
        Self(BigInt::from(whole) * Self::unit())
    }

    /// Creates a decimal from a fractional literal with an explicit number of
    /// decimal places: `with_precision(13, 2)` is `0.13`.
    ///
    /// `decimal_places` beyond 18 is clamped to 18.
    #[must_use]
    pub fn with_precision(value: i64, decimal_places: u32) -> Self {
        let places = decimal_places.min(PRECISION);
        Self(BigInt::from(value) * BigInt::from(10u64.pow(PRECISION - places)))
    }

    /// Creates a decimal from its raw scaled mantissa (value * 10^18).
    #[must_use]
    pub fn from_scaled(mantissa: BigInt) -> Self {
        Self(mantissa)
    }

    /// Returns the raw scaled mantissa (value * 10^18).
    #[must_use]
    pub fn scaled(&self) -> &BigInt {
        &self.0
    }

    /// Consumes the decimal, returning the raw scaled mantissa.
    #[must_use]
    pub fn into_scaled(self) -> BigInt {
        self.0
    }

    /// **TEST-FIXTURE ONLY**: lossy conversion from a native float.
    ///
    /// Scales the float by 10^18 in float space, then truncates toward zero
    /// to obtain the mantissa. This deliberately reproduces the truncation
    /// bias of the legacy conversion so reference fixtures match; it must
    /// never feed production issuance math. Non-finite inputs map to zero.
    #[must_use]
    pub fn from_f64(value: f64) -> Self {
        let scaled = (value * 1e18).trunc();
        Self(BigInt::from_f64(scaled).unwrap_or_default())
    }

    /// Addition. Exact at 18 fractional digits.
    #[must_use]
    pub fn add(&self, rhs: &Self) -> Self {
        Self(&self.0 + &rhs.0)
    }

    /// Subtraction. Exact at 18 fractional digits.
    #[must_use]
    pub fn sub(&self, rhs: &Self) -> Self {
        Self(&self.0 - &rhs.0)
    }

    /// Multiplication, truncating toward zero at the 18th fractional digit.
    #[must_use]
    pub fn mul(&self, rhs: &Self) -> Self {
        Self((&self.0 * &rhs.0) / Self::unit())
    }

    /// Multiplication by a plain signed integer. Exact, no truncation.
    #[must_use]
    pub fn mul_int(&self, rhs: i64) -> Self {
        Self(&self.0 * BigInt::from(rhs))
    }

    /// Multiplication by a plain unsigned integer (supply values).
    /// Exact, no truncation.
    #[must_use]
    pub fn mul_int_u128(&self, rhs: u128) -> Self {
        Self(&self.0 * BigInt::from(rhs))
    }

    /// Division, truncating toward zero at the 18th fractional digit.
    /// Returns `None` when `rhs` is zero.
    #[must_use]
    pub fn checked_quo(&self, rhs: &Self) -> Option<Self> {
        if rhs.0.is_zero() {
            return None;
        }
        Some(Self((&self.0 * Self::unit()) / &rhs.0))
    }

    /// Division, truncating toward zero at the 18th fractional digit.
    ///
    /// # Errors
    ///
    /// Returns [`DecimalError::DivisionByZero`] when `rhs` is zero.
    pub fn quo(&self, rhs: &Self) -> DecimalResult<Self> {
        self.checked_quo(rhs).ok_or(DecimalError::DivisionByZero)
    }

    /// Division by a plain integer, truncating toward zero.
    ///
    /// # Errors
    ///
    /// Returns [`DecimalError::DivisionByZero`] when `rhs` is zero.
    pub fn quo_int(&self, rhs: u64) -> DecimalResult<Self> {
        if rhs == 0 {
            return Err(DecimalError::DivisionByZero);
        }
        Ok(Self(&self.0 / BigInt::from(rhs)))
    }

    /// Raises to a non-negative integer power by repeated multiplication,
    /// truncating at every step. `pow(0)` is one by convention.
    #[must_use]
    pub fn pow(&self, exponent: u32) -> Self {
        let mut product = Self::one();
        for _ in 0..exponent {
            product = product.mul(self);
        }
        product
    }

    /// Absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Sign flip.
    #[must_use]
    pub fn negate(&self) -> Self {
        Self(-&self.0)
    }

    /// Returns true if the value is strictly negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// Returns true if the value is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Integer part, truncated toward zero.
    #[must_use]
    pub fn truncate(&self) -> BigInt {
        &self.0 / Self::unit()
    }

    /// Integer part as `u128`, truncated toward zero.
    /// Returns `None` for negative values or values above `u128::MAX`.
    #[must_use]
    pub fn truncate_u128(&self) -> Option<u128> {
        self.truncate().to_u128()
    }

    /// The scale factor 10^18 as a mantissa.
    fn unit() -> BigInt {
        BigInt::from(SCALE)
    }
}

impl Neg for Decimal {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.truncate();
        let frac = (&self.0 % Self::unit()).abs();
        // Truncation drops the sign of values in (-1, 0); restore it.
        if self.0.is_negative() && whole.is_zero() {
            write!(f, "-")?;
        }
        write!(f, "{whole}.{frac:018}")
    }
}

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Decimal({self})")
    }
}

impl FromStr for Decimal {
    type Err = DecimalError;

    /// Parses the canonical form `-?digits(.digits)?`. Fractional digits
    /// beyond the 18th are dropped (truncation toward zero).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DecimalError::InvalidFormat(s.to_owned());
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (whole, frac) = match body.split_once('.') {
            Some((w, fr)) => (w, fr),
            None => (body, ""),
        };
        if whole.is_empty() && frac.is_empty() {
            return Err(invalid());
        }
        let frac = frac.get(..frac.len().min(PRECISION as usize)).unwrap_or(frac);
        let mut digits = String::with_capacity(whole.len() + PRECISION as usize);
        digits.push_str(whole);
        digits.push_str(frac);
        for _ in frac.len()..PRECISION as usize {
            digits.push('0');
        }
        let mantissa = BigInt::parse_bytes(digits.as_bytes(), 10).ok_or_else(invalid)?;
        Ok(Self(if negative { -mantissa } else { mantissa }))
    }
}

impl Serialize for Decimal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_with_precision() {
        assert_eq!(Decimal::new(1), Decimal::one());
        assert_eq!(Decimal::with_precision(13, 2).to_string(), "0.130000000000000000");
        assert_eq!(Decimal::with_precision(25, 2).to_string(), "0.250000000000000000");
        assert_eq!(Decimal::from_u128(25_000_000), Decimal::new(25_000_000));
    }

    #[test]
    fn test_add_sub_exact() {
        let a = Decimal::with_precision(15, 1); // 1.5
        let b = Decimal::with_precision(23, 1); // 2.3
        assert_eq!(a.add(&b).to_string(), "3.800000000000000000");
        assert_eq!(a.sub(&b).to_string(), "-0.800000000000000000");
    }

    #[test]
    fn test_mul_truncates_toward_zero() {
        let a = Decimal::with_precision(15, 1);
        let b = Decimal::with_precision(23, 1);
        assert_eq!(a.mul(&b).to_string(), "3.450000000000000000");

        // 10^-18 * 10^-18 underflows the 18th digit and truncates to zero.
        let epsilon = Decimal::from_scaled(BigInt::from(1));
        assert!(epsilon.mul(&epsilon).is_zero());

        // Negative products truncate toward zero, not toward -inf.
        let c = Decimal::new(-2).quo(&Decimal::new(3)).unwrap();
        assert_eq!(c.to_string(), "-0.666666666666666666");
    }

    #[test]
    fn test_mul_int_is_exact() {
        let d = Decimal::with_precision(15, 1); // 1.5
        assert_eq!(d.mul_int(4), Decimal::new(6));
        assert_eq!(d.mul_int(-4), Decimal::new(-6));
        assert_eq!(d.mul_int(0), Decimal::zero());
        assert_eq!(d.mul_int_u128(100_000_000), Decimal::new(150_000_000));
        // The sub-unit mantissa survives integer scaling untouched.
        let epsilon = Decimal::from_scaled(BigInt::from(1));
        assert_eq!(epsilon.mul_int_u128(3), Decimal::from_scaled(BigInt::from(3)));
    }

    #[test]
    fn test_neg_operator_matches_negate() {
        let d = Decimal::with_precision(13, 2);
        assert_eq!(-d.clone(), d.negate());
        assert_eq!(-(-d.clone()), d);
        assert_eq!(-Decimal::zero(), Decimal::zero());
    }

    #[test]
    fn test_quo() {
        let q = Decimal::new(2).quo(&Decimal::new(3)).unwrap();
        assert_eq!(q.to_string(), "0.666666666666666666");
        assert_eq!(
            Decimal::one().quo(&Decimal::zero()),
            Err(DecimalError::DivisionByZero)
        );
        assert!(Decimal::one().checked_quo(&Decimal::zero()).is_none());
        assert_eq!(
            Decimal::one().quo_int(0),
            Err(DecimalError::DivisionByZero)
        );
        assert_eq!(
            Decimal::new(7).quo_int(2).unwrap().to_string(),
            "3.500000000000000000"
        );
    }

    #[test]
    fn test_pow() {
        let two = Decimal::new(2);
        assert_eq!(two.pow(0), Decimal::one());
        assert_eq!(two.pow(10), Decimal::new(1024));
        let half = Decimal::with_precision(5, 1);
        assert_eq!(half.pow(3).to_string(), "0.125000000000000000");
        assert_eq!(Decimal::new(-3).pow(3), Decimal::new(-27));
    }

    #[test]
    fn test_sign_operations() {
        let neg = Decimal::with_precision(-13, 2);
        assert!(neg.is_negative());
        assert!(!neg.is_zero());
        assert_eq!(neg.abs(), Decimal::with_precision(13, 2));
        assert_eq!(neg.negate(), Decimal::with_precision(13, 2));
        assert!(Decimal::zero().is_zero());
        assert!(!Decimal::zero().is_negative());
    }

    #[test]
    fn test_ordering() {
        assert!(Decimal::new(1) < Decimal::new(2));
        assert!(Decimal::new(-1) < Decimal::zero());
        assert!(Decimal::with_precision(5, 1) > Decimal::with_precision(4, 1));
    }

    #[test]
    fn test_truncate() {
        let d = Decimal::with_precision(79, 1); // 7.9
        assert_eq!(d.truncate(), BigInt::from(7));
        assert_eq!(d.truncate_u128(), Some(7));
        let n = Decimal::with_precision(-79, 1); // -7.9
        assert_eq!(n.truncate(), BigInt::from(-7));
        assert_eq!(n.truncate_u128(), None);
    }

    #[test]
    fn test_from_f64_fixture_conversion() {
        assert_eq!(Decimal::from_f64(0.5).to_string(), "0.500000000000000000");
        assert_eq!(Decimal::from_f64(0.0), Decimal::zero());
        assert_eq!(Decimal::from_f64(f64::NAN), Decimal::zero());
        // Within one float ulp of e, scaled: the fixture is lossy by design.
        let e = Decimal::from_f64(2.718281828459045);
        assert!(e > Decimal::with_precision(2_718_281_828, 9));
        assert!(e < Decimal::with_precision(2_718_281_829, 9));
    }

    #[test]
    fn test_display_negative_fraction() {
        let d = Decimal::with_precision(-5, 1);
        assert_eq!(d.to_string(), "-0.500000000000000000");
        let w = Decimal::with_precision(-15, 1);
        assert_eq!(w.to_string(), "-1.500000000000000000");
    }

    #[test]
    fn test_from_str_round_trip() {
        for raw in ["0.130000000000000000", "-1.500000000000000000", "42.000000000000000000"] {
            let parsed: Decimal = raw.parse().unwrap();
            assert_eq!(parsed.to_string(), raw);
        }
        assert_eq!("1.5".parse::<Decimal>().unwrap(), Decimal::with_precision(15, 1));
        assert_eq!(".5".parse::<Decimal>().unwrap(), Decimal::with_precision(5, 1));
        assert_eq!("7".parse::<Decimal>().unwrap(), Decimal::new(7));
        // Digits beyond the 18th truncate.
        assert_eq!(
            "0.1234567890123456789".parse::<Decimal>().unwrap().to_string(),
            "0.123456789012345678"
        );
        assert!("".parse::<Decimal>().is_err());
        assert!("-".parse::<Decimal>().is_err());
        assert!("1.2.3".parse::<Decimal>().is_err());
        assert!("abc".parse::<Decimal>().is_err());
    }
}
