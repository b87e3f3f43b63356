//! Order pricing: subtotal, tax, promo discount and amount due.
//!
//! Every function here is pure. The cart calls into the engine on each read,
//! so totals always reflect the current lines.

use crate::cart::CartLine;
use crate::error::CommerceError;
use crate::money::{Currency, Money};
use crate::pricing::{CartPricing, LinePricing, PromoRegistry, PromoValidation, TaxRate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Pricing policy shared by every cart in a shop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PricingEngine {
    currency: Currency,
    tax_rate: TaxRate,
    promos: PromoRegistry,
}

impl PricingEngine {
    pub fn new(currency: Currency, tax_rate: TaxRate, promos: PromoRegistry) -> Self {
        Self {
            currency,
            tax_rate,
            promos,
        }
    }

    /// USD, 10% tax, and the advertised promo codes.
    pub fn standard() -> Self {
        Self::new(Currency::USD, TaxRate::default(), PromoRegistry::standard())
    }

    /// Replace the tax rate. Totals computed afterwards use the new rate.
    pub fn with_tax_rate(mut self, tax_rate: TaxRate) -> Self {
        self.tax_rate = tax_rate;
        self
    }

    pub fn with_promos(mut self, promos: PromoRegistry) -> Self {
        self.promos = promos;
        self
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }

    pub fn promos(&self) -> &PromoRegistry {
        &self.promos
    }

    /// Configuration check for the promo registry.
    pub fn validate(&self) -> Result<(), CommerceError> {
        self.promos.validate()
    }

    /// Sum of unit price times quantity. Zero for no lines.
    pub fn compute_subtotal(&self, lines: &[CartLine]) -> Money {
        let amount: Decimal = lines.iter().map(|l| l.line_total().amount).sum();
        Money::new(amount, self.currency)
    }

    pub fn compute_tax(&self, subtotal: &Money) -> Money {
        self.tax_rate.apply(subtotal)
    }

    /// Subtotal plus tax.
    pub fn compute_total(&self, subtotal: &Money) -> Money {
        let tax = self.compute_tax(subtotal);
        Money::new(subtotal.amount + tax.amount, subtotal.currency)
    }

    pub fn validate_promo(&self, code: &str) -> PromoValidation {
        self.promos.lookup(code)
    }

    /// `total * (1 - percent / 100)`, with the percentage capped at 100.
    pub fn apply_discount(total: &Money, discount_percent: u8) -> Money {
        let percent = Decimal::from(discount_percent.min(100));
        let factor = Decimal::ONE - percent / Decimal::ONE_HUNDRED;
        total.multiply_decimal(factor)
    }

    /// Full breakdown for a set of lines and an optional promo code.
    pub fn price(&self, lines: &[CartLine], promo_code: Option<&str>) -> CartPricing {
        let subtotal = self.compute_subtotal(lines);
        let tax = self.compute_tax(&subtotal);
        let total = Money::new(subtotal.amount + tax.amount, self.currency);

        let promo = promo_code
            .map(|code| self.validate_promo(code))
            .unwrap_or_else(PromoValidation::none);
        let final_total = Self::apply_discount(&total, promo.discount_percent);
        let discount = Money::new(total.amount - final_total.amount, self.currency);

        CartPricing {
            subtotal,
            tax_rate: self.tax_rate,
            tax,
            total,
            promo,
            discount,
            final_total,
            lines: lines
                .iter()
                .map(|l| LinePricing {
                    item_id: l.item_id.clone(),
                    name: l.name.clone(),
                    unit_price: l.unit_price,
                    quantity: l.quantity,
                    line_total: l.line_total(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ItemId;

    fn line(id: u32, cents: i64, quantity: u32) -> CartLine {
        CartLine {
            item_id: ItemId::from(id),
            name: format!("item {}", id),
            unit_price: Money::from_minor_units(cents, Currency::USD),
            image: String::new(),
            quantity,
        }
    }

    #[test]
    fn test_subtotal_of_empty_cart_is_zero() {
        let engine = PricingEngine::standard();
        assert!(engine.compute_subtotal(&[]).is_zero());
    }

    #[test]
    fn test_subtotal_sums_lines() {
        let engine = PricingEngine::standard();
        let subtotal = engine.compute_subtotal(&[line(1, 1088, 2), line(2, 699, 1)]);
        assert_eq!(subtotal.amount, Decimal::new(2875, 2));
    }

    #[test]
    fn test_tax_tracks_configured_rate() {
        let subtotal = Money::from_minor_units(10000, Currency::USD);
        let standard = PricingEngine::standard();
        assert_eq!(standard.compute_tax(&subtotal).amount, Decimal::from(10));

        let nova_scotia = standard.with_tax_rate(TaxRate::from_percent(15).unwrap());
        assert_eq!(nova_scotia.compute_tax(&subtotal).amount, Decimal::from(15));
        assert_eq!(nova_scotia.compute_total(&subtotal).amount, Decimal::from(115));
    }

    #[test]
    fn test_price_reports_tax_rate() {
        let lines = [line(1, 1088, 1)];
        assert_eq!(PricingEngine::standard().price(&lines, None).tax_rate.to_string(), "10%");

        let pricing = PricingEngine::standard()
            .with_tax_rate(TaxRate::new(Decimal::new(825, 4)).unwrap())
            .price(&lines, None);
        assert_eq!(pricing.tax_rate.percent(), Decimal::new(825, 2));
    }

    #[test]
    fn test_apply_discount() {
        let total = Money::new(Decimal::new(23936, 3), Currency::USD);
        let discounted = PricingEngine::apply_discount(&total, 20);
        assert_eq!(discounted.amount, Decimal::new(191488, 4));
    }

    #[test]
    fn test_apply_discount_clamps_percent() {
        let total = Money::from_minor_units(5000, Currency::USD);
        assert!(PricingEngine::apply_discount(&total, 250).is_zero());
        assert_eq!(PricingEngine::apply_discount(&total, 100).amount, Decimal::ZERO);
        assert_eq!(PricingEngine::apply_discount(&total, 0), total);
    }

    #[test]
    fn test_price_with_promo() {
        let engine = PricingEngine::standard();
        let pricing = engine.price(&[line(1, 1088, 2)], Some("welcome20"));

        assert_eq!(pricing.subtotal.amount, Decimal::new(2176, 2));
        assert_eq!(pricing.tax.amount, Decimal::new(2176, 3));
        assert_eq!(pricing.total.amount, Decimal::new(23936, 3));
        assert!(pricing.promo.valid);
        assert_eq!(pricing.final_total.amount, Decimal::new(191488, 4));
        assert_eq!(pricing.discount.amount, Decimal::new(47872, 4));
        assert!(pricing.has_discount());
        assert_eq!(pricing.item_count(), 2);
    }

    #[test]
    fn test_unknown_promo_prices_like_no_promo() {
        let engine = PricingEngine::standard();
        let lines = [line(3, 1149, 1)];
        let bogus = engine.price(&lines, Some("BOGUS"));
        let none = engine.price(&lines, None);
        assert_eq!(bogus, none);
        assert!(!bogus.has_discount());
        assert_eq!(bogus.final_total, bogus.total);
    }
}
