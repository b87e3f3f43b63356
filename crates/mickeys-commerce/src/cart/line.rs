//! Cart line types.

use crate::ids::ItemId;
use crate::money::Money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Snapshot of a catalog entry handed to the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    pub id: ItemId,
    pub name: String,
    /// Unit price in the shop currency. Treated as non-negative.
    pub price: Decimal,
    pub image: String,
}

impl CartItem {
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        price: Decimal,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image: image.into(),
        }
    }
}

/// One item's quantity entry within the cart.
///
/// Display attributes are copied when the item is first added. Later catalog
/// price changes never reach a line already in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    pub item_id: ItemId,
    pub name: String,
    pub unit_price: Money,
    pub image: String,
    /// Always at least 1 while the line is in a cart.
    pub quantity: u32,
}

impl CartLine {
    /// unit_price * quantity.
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_line_total() {
        let line = CartLine {
            item_id: ItemId::from(7u32),
            name: "Fisherman's Platter".to_string(),
            unit_price: Money::from_minor_units(2999, Currency::USD),
            image: String::new(),
            quantity: 3,
        };
        assert_eq!(line.line_total().amount, Decimal::new(8997, 2));
    }
}
