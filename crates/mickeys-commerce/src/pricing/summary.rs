//! Priced views of a cart.

use crate::ids::ItemId;
use crate::money::Money;
use crate::pricing::{PromoValidation, TaxRate};
use serde::{Deserialize, Serialize};

/// Complete pricing breakdown for a cart. Computed on demand, never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartPricing {
    /// Sum of line totals.
    pub subtotal: Money,
    /// Rate the tax was charged at.
    pub tax_rate: TaxRate,
    /// Tax on the subtotal.
    pub tax: Money,
    /// Subtotal plus tax.
    pub total: Money,
    /// Promo code outcome used for this breakdown.
    pub promo: PromoValidation,
    /// Amount taken off `total` by the promo.
    pub discount: Money,
    /// Amount due.
    pub final_total: Money,
    /// Per-line breakdown, in cart order.
    pub lines: Vec<LinePricing>,
}

impl CartPricing {
    /// Check if a promo reduced the total.
    pub fn has_discount(&self) -> bool {
        !self.discount.is_zero()
    }

    /// Number of units across all lines.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }
}

/// Pricing breakdown for a single line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinePricing {
    pub item_id: ItemId,
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
    /// unit_price * quantity.
    pub line_total: Money,
}
