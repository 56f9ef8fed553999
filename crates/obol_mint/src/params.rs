//! # Mint Policy Parameters
//!
//! Immutable per-epoch configuration supplied by the host ledger. Parameters
//! are validated once at genesis (or on a governance change), then threaded
//! through every transition unchanged. All balance data lives in external
//! TOML files, loaded once at startup.

use obol_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{MintError, MintResult};

/// Blocks per year at a 5 second block time over an 8766 hour mean year.
pub const DEFAULT_BLOCKS_PER_YEAR: u64 = 60 * 60 * 8766 / 5;

/// Mint policy configuration.
///
/// Invariants (enforced by [`Params::validate`]):
/// `inflation_min <= inflation_max`, `blocks_per_year > 0`, every rate in
/// `[0, 1]`, non-empty denom.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    /// Denomination of the minted asset.
    pub mint_denom: String,
    /// Maximum annual magnitude of inflation rate change.
    pub inflation_rate_change: Decimal,
    /// Hard upper bound on the stabilized-regime inflation rate.
    pub inflation_max: Decimal,
    /// Hard lower bound on the stabilized-regime inflation rate.
    pub inflation_min: Decimal,
    /// Target fraction of the supply that is staked.
    pub goal_bonded: Decimal,
    /// Number of epochs (blocks) per year, for annual-to-block conversion.
    pub blocks_per_year: u64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            mint_denom: "uobol".to_owned(),
            inflation_rate_change: Decimal::with_precision(13, 2),
            inflation_max: Decimal::with_precision(20, 2),
            inflation_min: Decimal::with_precision(7, 2),
            goal_bonded: Decimal::with_precision(67, 2),
            blocks_per_year: DEFAULT_BLOCKS_PER_YEAR,
        }
    }
}

impl Params {
    /// Validates the parameter set.
    ///
    /// # Errors
    ///
    /// Returns [`MintError::InvalidParams`] naming the offending field when
    /// any invariant is broken.
    pub fn validate(&self) -> MintResult<()> {
        if self.mint_denom.is_empty() {
            return Err(MintError::InvalidParams("mint denom cannot be blank".to_owned()));
        }
        validate_rate("inflation rate change", &self.inflation_rate_change)?;
        validate_rate("max inflation", &self.inflation_max)?;
        validate_rate("min inflation", &self.inflation_min)?;
        validate_rate("goal bonded", &self.goal_bonded)?;
        if self.inflation_min > self.inflation_max {
            return Err(MintError::InvalidParams(format!(
                "min inflation {} exceeds max inflation {}",
                self.inflation_min, self.inflation_max
            )));
        }
        if self.blocks_per_year == 0 {
            return Err(MintError::InvalidParams(
                "blocks per year must be positive".to_owned(),
            ));
        }
        Ok(())
    }

    /// Parses and validates parameters from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`MintError::InvalidParams`] when the document does not parse
    /// or the parsed parameters fail [`Params::validate`].
    pub fn from_toml_str(raw: &str) -> MintResult<Self> {
        let params: Self =
            toml::from_str(raw).map_err(|err| MintError::InvalidParams(err.to_string()))?;
        params.validate()?;
        Ok(params)
    }
}

/// Rejects rates outside `[0, 1]`.
fn validate_rate(name: &str, rate: &Decimal) -> MintResult<()> {
    if rate.is_negative() {
        return Err(MintError::InvalidParams(format!("{name} cannot be negative: {rate}")));
    }
    if *rate > Decimal::one() {
        return Err(MintError::InvalidParams(format!("{name} too large: {rate}")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params_validate() {
        let params = Params::default();
        assert!(params.validate().is_ok());
        assert_eq!(params.blocks_per_year, 6_311_520);
    }

    #[test]
    fn test_invalid_fields_rejected() {
        let blank_denom = Params { mint_denom: String::new(), ..Params::default() };
        assert!(blank_denom.validate().is_err());

        let negative_rate = Params {
            inflation_rate_change: Decimal::with_precision(-13, 2),
            ..Params::default()
        };
        assert!(negative_rate.validate().is_err());

        let oversized_rate = Params { inflation_max: Decimal::new(2), ..Params::default() };
        assert!(oversized_rate.validate().is_err());

        let inverted_bounds = Params {
            inflation_min: Decimal::with_precision(30, 2),
            ..Params::default()
        };
        assert!(inverted_bounds.validate().is_err());

        let zero_blocks = Params { blocks_per_year: 0, ..Params::default() };
        assert!(zero_blocks.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let params = Params::default();
        let encoded = toml::to_string(&params).unwrap();
        let decoded = Params::from_toml_str(&encoded).unwrap();
        assert_eq!(decoded, params);
    }

    #[test]
    fn test_toml_document() {
        let raw = r#"
            mint_denom = "uobol"
            inflation_rate_change = "0.13"
            inflation_max = "0.20"
            inflation_min = "0.07"
            goal_bonded = "0.67"
            blocks_per_year = 6311520
        "#;
        let params = Params::from_toml_str(raw).unwrap();
        assert_eq!(params, Params::default());
    }

    #[test]
    fn test_toml_rejects_invalid_rate() {
        let raw = r#"
            mint_denom = "uobol"
            inflation_rate_change = "0.13"
            inflation_max = "0.20"
            inflation_min = "0.25"
            goal_bonded = "0.67"
            blocks_per_year = 6311520
        "#;
        assert!(Params::from_toml_str(raw).is_err());
    }
}
