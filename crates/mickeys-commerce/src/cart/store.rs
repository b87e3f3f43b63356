//! The cart store.
//!
//! Holds the lines for one customer session. Totals are never stored: every
//! read goes back through the pricing engine with the current lines.

use crate::cart::{CartItem, CartLine};
use crate::error::CommerceError;
use crate::ids::ItemId;
use crate::money::{Currency, Money};
use crate::pricing::{CartPricing, PricingEngine, PromoValidation};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Maximum quantity held on a single line. Larger values are clamped.
pub const MAX_QUANTITY_PER_ITEM: u32 = 9999;

/// A shopping cart bound to a pricing policy.
#[derive(Debug, Clone, PartialEq)]
pub struct CartStore {
    lines: Vec<CartLine>,
    engine: PricingEngine,
}

impl CartStore {
    /// Create an empty cart.
    pub fn new(engine: PricingEngine) -> Self {
        Self {
            lines: Vec::new(),
            engine,
        }
    }

    /// Rebuild a cart from persisted lines.
    ///
    /// Fails if the lines were priced in another currency than the engine's.
    pub fn restore(snapshot: CartSnapshot, engine: PricingEngine) -> Result<Self, CommerceError> {
        if snapshot.currency != engine.currency() {
            return Err(CommerceError::CurrencyMismatch {
                expected: engine.currency().code().to_string(),
                got: snapshot.currency.code().to_string(),
            });
        }

        let mut cart = Self::new(engine);
        for line in snapshot.lines {
            if line.quantity == 0 {
                continue;
            }
            // Merge duplicates so a hand-edited session file cannot break the
            // one-line-per-item rule.
            match cart.lines.iter_mut().find(|l| l.item_id == line.item_id) {
                Some(existing) => {
                    existing.quantity = clamp_quantity(
                        u64::from(existing.quantity) + u64::from(line.quantity),
                        &existing.item_id,
                    );
                }
                None => {
                    let quantity = clamp_quantity(u64::from(line.quantity), &line.item_id);
                    cart.lines.push(CartLine {
                        unit_price: Money::new(line.unit_price.amount, cart.engine.currency()),
                        quantity,
                        ..line
                    });
                }
            }
        }
        debug!(lines = cart.lines.len(), "Restored cart");
        Ok(cart)
    }

    /// Add one unit of an item.
    ///
    /// An existing line is incremented. Otherwise a new line is created from
    /// the snapshot with quantity 1.
    pub fn add_item(&mut self, item: CartItem) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.item_id == item.id) {
            line.quantity = clamp_quantity(u64::from(line.quantity) + 1, &line.item_id);
            debug!(item_id = %line.item_id, quantity = line.quantity, "Incremented cart line");
            return;
        }

        debug!(item_id = %item.id, "Added cart line");
        self.lines.push(CartLine {
            item_id: item.id,
            name: item.name,
            unit_price: Money::new(item.price, self.engine.currency()),
            image: item.image,
            quantity: 1,
        });
    }

    /// Add `delta` to an item's quantity.
    ///
    /// A result of zero or less removes the line. An unknown item is a no-op.
    pub fn update_quantity(&mut self, item_id: &ItemId, delta: i64) {
        let Some(index) = self.lines.iter().position(|l| &l.item_id == item_id) else {
            debug!(item_id = %item_id, delta, "Ignoring update for item not in cart");
            return;
        };

        let current = i64::from(self.lines[index].quantity);
        let updated = current.saturating_add(delta);
        if updated <= 0 {
            self.lines.remove(index);
            debug!(item_id = %item_id, "Removed cart line");
            return;
        }

        let line = &mut self.lines[index];
        line.quantity = clamp_quantity(updated as u64, item_id);
        debug!(item_id = %item_id, quantity = line.quantity, "Updated cart line");
    }

    /// Remove an item's line entirely. Returns whether a line was removed.
    pub fn remove(&mut self, item_id: &ItemId) -> bool {
        let quantity = self.quantity_of(item_id);
        if quantity == 0 {
            return false;
        }
        self.update_quantity(item_id, -i64::from(quantity));
        true
    }

    /// Current lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn get_line(&self, item_id: &ItemId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.item_id == item_id)
    }

    /// Quantity held for an item, zero when absent.
    pub fn quantity_of(&self, item_id: &ItemId) -> u32 {
        self.get_line(item_id).map(|l| l.quantity).unwrap_or(0)
    }

    pub fn subtotal(&self) -> Money {
        self.engine.compute_subtotal(&self.lines)
    }

    pub fn tax(&self) -> Money {
        self.engine.compute_tax(&self.subtotal())
    }

    pub fn total(&self) -> Money {
        self.engine.compute_total(&self.subtotal())
    }

    pub fn validate_promo(&self, code: &str) -> PromoValidation {
        self.engine.validate_promo(code)
    }

    /// Full breakdown, optionally with a promo code applied.
    pub fn pricing(&self, promo_code: Option<&str>) -> CartPricing {
        self.engine.price(&self.lines, promo_code)
    }

    pub fn engine(&self) -> &PricingEngine {
        &self.engine
    }

    pub fn currency(&self) -> Currency {
        self.engine.currency()
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
        debug!("Cleared cart");
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of units across all lines.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// The persistable part of the cart. Totals are deliberately absent.
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            currency: self.engine.currency(),
            lines: self.lines.clone(),
        }
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new(PricingEngine::standard())
    }
}

/// Lines of a cart as written to session storage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CartSnapshot {
    pub currency: Currency,
    pub lines: Vec<CartLine>,
}

fn clamp_quantity(quantity: u64, item_id: &ItemId) -> u32 {
    if quantity > u64::from(MAX_QUANTITY_PER_ITEM) {
        warn!(
            item_id = %item_id,
            requested = quantity,
            max = MAX_QUANTITY_PER_ITEM,
            "Quantity clamped"
        );
        return MAX_QUANTITY_PER_ITEM;
    }
    quantity as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn platter() -> CartItem {
        CartItem::new(1u32, "Deep Fried Veggies Platter", Decimal::new(1088, 2), "/appetizer.webp")
    }

    fn mozza_sticks() -> CartItem {
        CartItem::new(2u32, "Mozzarella Sticks", Decimal::new(699, 2), "/mozza-sticks.webp")
    }

    #[test]
    fn test_new_cart_is_empty() {
        let cart = CartStore::default();
        assert!(cart.is_empty());
        assert!(cart.subtotal().is_zero());
        assert!(cart.tax().is_zero());
        assert!(cart.total().is_zero());
    }

    #[test]
    fn test_add_item() {
        let mut cart = CartStore::default();
        cart.add_item(platter());

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.quantity_of(&ItemId::from(1u32)), 1);
        assert_eq!(cart.lines()[0].unit_price.currency, Currency::USD);
    }

    #[test]
    fn test_add_same_item_increases_quantity() {
        let mut cart = CartStore::default();
        cart.add_item(platter());
        cart.add_item(platter());

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_line_keeps_price_from_first_add() {
        let mut cart = CartStore::default();
        cart.add_item(platter());
        let mut repriced = platter();
        repriced.price = Decimal::new(1500, 2);
        cart.add_item(repriced);

        let line = cart.get_line(&ItemId::from(1u32)).unwrap();
        assert_eq!(line.quantity, 2);
        assert_eq!(line.unit_price.amount, Decimal::new(1088, 2));
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut cart = CartStore::default();
        cart.add_item(mozza_sticks());
        cart.add_item(platter());
        cart.add_item(mozza_sticks());

        let ids: Vec<&str> = cart.lines().iter().map(|l| l.item_id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = CartStore::default();
        cart.add_item(platter());
        cart.update_quantity(&ItemId::from(1u32), 4);
        assert_eq!(cart.quantity_of(&ItemId::from(1u32)), 5);

        cart.update_quantity(&ItemId::from(1u32), -2);
        assert_eq!(cart.quantity_of(&ItemId::from(1u32)), 3);
    }

    #[test]
    fn test_update_to_zero_removes_line() {
        let mut cart = CartStore::default();
        cart.add_item(platter());
        cart.update_quantity(&ItemId::from(1u32), -1);
        assert!(cart.is_empty());
        assert!(cart.get_line(&ItemId::from(1u32)).is_none());
    }

    #[test]
    fn test_update_below_zero_removes_line() {
        let mut cart = CartStore::default();
        cart.add_item(platter());
        cart.update_quantity(&ItemId::from(1u32), -50);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_absent_item_is_noop() {
        let mut cart = CartStore::default();
        cart.add_item(platter());
        let before = cart.clone();

        cart.update_quantity(&ItemId::from(99u32), 3);
        cart.update_quantity(&ItemId::from(99u32), -3);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove() {
        let mut cart = CartStore::default();
        cart.add_item(platter());
        cart.add_item(platter());

        assert!(cart.remove(&ItemId::from(1u32)));
        assert!(!cart.remove(&ItemId::from(1u32)));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_quantity_is_clamped() {
        let mut cart = CartStore::default();
        cart.add_item(platter());
        cart.update_quantity(&ItemId::from(1u32), i64::MAX);
        assert_eq!(cart.quantity_of(&ItemId::from(1u32)), MAX_QUANTITY_PER_ITEM);

        cart.add_item(platter());
        assert_eq!(cart.quantity_of(&ItemId::from(1u32)), MAX_QUANTITY_PER_ITEM);
    }

    #[test]
    fn test_totals_follow_mutations() {
        let mut cart = CartStore::default();
        cart.add_item(platter());
        cart.add_item(mozza_sticks());
        assert_eq!(cart.subtotal().amount, Decimal::new(1787, 2));

        cart.update_quantity(&ItemId::from(2u32), -1);
        assert_eq!(cart.subtotal().amount, Decimal::new(1088, 2));
        assert_eq!(cart.tax().amount, Decimal::new(1088, 3));
        assert_eq!(cart.total().amount, Decimal::new(11968, 3));
    }

    #[test]
    fn test_clear_matches_fresh_cart() {
        let mut cart = CartStore::default();
        cart.add_item(platter());
        cart.add_item(mozza_sticks());
        cart.clear();
        assert_eq!(cart, CartStore::default());
    }

    #[test]
    fn test_snapshot_restore() {
        let mut cart = CartStore::default();
        cart.add_item(platter());
        cart.add_item(platter());
        cart.add_item(mozza_sticks());

        let json = serde_json::to_string(&cart.snapshot()).unwrap();
        assert!(!json.contains("subtotal"));
        let snapshot: CartSnapshot = serde_json::from_str(&json).unwrap();
        let restored = CartStore::restore(snapshot, PricingEngine::standard()).unwrap();

        assert_eq!(restored, cart);
        assert_eq!(restored.total(), cart.total());
    }

    #[test]
    fn test_restore_merges_duplicate_lines() {
        let mut cart = CartStore::default();
        cart.add_item(platter());
        let mut snapshot = cart.snapshot();
        snapshot.lines.push(snapshot.lines[0].clone());

        let restored = CartStore::restore(snapshot, PricingEngine::standard()).unwrap();
        assert_eq!(restored.lines().len(), 1);
        assert_eq!(restored.quantity_of(&ItemId::from(1u32)), 2);
    }

    #[test]
    fn test_restore_rejects_other_currency() {
        let snapshot = CartSnapshot {
            currency: Currency::EUR,
            lines: Vec::new(),
        };
        assert!(matches!(
            CartStore::restore(snapshot, PricingEngine::standard()),
            Err(CommerceError::CurrencyMismatch { .. })
        ));
    }
}
