//! Money type for representing monetary values.
//!
//! Amounts are exact decimals. Tax and percentage discounts routinely produce
//! fractions of a cent (10% of $21.76 is $2.176), so nothing is rounded until
//! a value is formatted for display.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    CAD,
    EUR,
    GBP,
    JPY,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::CAD => "CAD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::CAD => "CA$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::JPY => "\u{00a5}",
        }
    }

    /// Number of decimal places shown for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "USD" => Some(Currency::USD),
            "CAD" => Some(Currency::CAD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "JPY" => Some(Currency::JPY),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Exact amount in major units (dollars, not cents).
    pub amount: Decimal,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value.
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Create a Money value from minor units (cents for USD).
    ///
    /// ```
    /// use mickeys_commerce::money::{Money, Currency};
    /// let price = Money::from_minor_units(1088, Currency::USD);
    /// assert_eq!(price.display(), "$10.88");
    /// ```
    pub fn from_minor_units(units: i64, currency: Currency) -> Self {
        Self::new(Decimal::new(units, currency.decimal_places()), currency)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(Decimal::ZERO, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Round to the currency's display precision, half away from zero.
    pub fn rounded(&self) -> Money {
        let amount = self.amount.round_dp_with_strategy(
            self.currency.decimal_places(),
            RoundingStrategy::MidpointAwayFromZero,
        );
        Money::new(amount, self.currency)
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Format as a display string without symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        let places = self.currency.decimal_places() as usize;
        format!("{:.places$}", self.rounded().amount)
    }

    /// Multiply by a quantity.
    pub fn multiply(&self, quantity: u32) -> Money {
        Money::new(self.amount * Decimal::from(quantity), self.currency)
    }

    /// Multiply by an exact decimal factor (e.g., a tax rate).
    pub fn multiply_decimal(&self, factor: Decimal) -> Money {
        Money::new(self.amount * factor, self.currency)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
