//! Flat sales-tax policy.

use crate::error::CommerceError;
use crate::money::Money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tax charged on every order, in percent of the subtotal.
pub const DEFAULT_TAX_PERCENT: u32 = 10;

/// A tax rate expressed as a fraction (0.10 for 10%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct TaxRate(Decimal);

impl TaxRate {
    /// Create a rate from a fraction in `[0, 1)`.
    pub fn new(rate: Decimal) -> Result<Self, CommerceError> {
        if rate < Decimal::ZERO || rate >= Decimal::ONE {
            return Err(CommerceError::InvalidTaxRate(rate.to_string()));
        }
        Ok(Self(rate))
    }

    /// Create a rate from a whole percentage.
    pub fn from_percent(percent: u32) -> Result<Self, CommerceError> {
        Self::new(Decimal::from(percent) / Decimal::ONE_HUNDRED)
    }

    pub fn rate(&self) -> Decimal {
        self.0
    }

    /// The rate as a percentage, without trailing zeros (10, 8.25).
    pub fn percent(&self) -> Decimal {
        (self.0 * Decimal::ONE_HUNDRED).normalize()
    }

    /// Tax owed on a subtotal. Exact; never rounded.
    pub fn apply(&self, subtotal: &Money) -> Money {
        subtotal.multiply_decimal(self.0)
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        Self(Decimal::from(DEFAULT_TAX_PERCENT) / Decimal::ONE_HUNDRED)
    }
}

impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

impl TryFrom<Decimal> for TaxRate {
    type Error = CommerceError;

    fn try_from(rate: Decimal) -> Result<Self, Self::Error> {
        Self::new(rate)
    }
}

impl From<TaxRate> for Decimal {
    fn from(rate: TaxRate) -> Self {
        rate.0
    }
}
