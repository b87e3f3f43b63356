//! Wholesale (truckload) supply catalog and quantity selection.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

/// Product family of a bulk item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WholesaleCategory {
    Meat,
    Seafood,
    Produce,
    Grains,
    Essentials,
}

impl WholesaleCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            WholesaleCategory::Meat => "meat",
            WholesaleCategory::Seafood => "seafood",
            WholesaleCategory::Produce => "produce",
            WholesaleCategory::Grains => "grains",
            WholesaleCategory::Essentials => "essentials",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "meat" => Some(WholesaleCategory::Meat),
            "seafood" => Some(WholesaleCategory::Seafood),
            "produce" => Some(WholesaleCategory::Produce),
            "grains" => Some(WholesaleCategory::Grains),
            "essentials" => Some(WholesaleCategory::Essentials),
            _ => None,
        }
    }
}

/// A bulk item sold by unit (kg, L) with a minimum order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WholesaleItem {
    /// Display name; also the selection key.
    pub name: String,
    pub unit: String,
    pub min_order: u32,
    /// Price per unit.
    pub price: Decimal,
    pub category: WholesaleCategory,
}

impl WholesaleItem {
    fn new(name: &str, unit: &str, min_order: u32, price_cents: i64, category: WholesaleCategory) -> Self {
        Self {
            name: name.to_string(),
            unit: unit.to_string(),
            min_order,
            price: Decimal::new(price_cents, 2),
            category,
        }
    }
}

/// The bulk supply list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WholesaleCatalog {
    items: Vec<WholesaleItem>,
}

impl WholesaleCatalog {
    pub fn new(items: Vec<WholesaleItem>) -> Self {
        Self { items }
    }

    pub fn standard() -> Self {
        use WholesaleCategory::*;
        Self::new(vec![
            WholesaleItem::new("Premium Beef", "kg", 50, 1599, Meat),
            WholesaleItem::new("Whole Chicken", "kg", 30, 899, Meat),
            WholesaleItem::new("Fresh Fish (Mixed)", "kg", 25, 1299, Seafood),
            WholesaleItem::new("Fresh Shrimp", "kg", 20, 1999, Seafood),
            WholesaleItem::new("Fresh Vegetables Mix", "kg", 40, 499, Produce),
            WholesaleItem::new("Premium Rice", "kg", 100, 299, Grains),
            WholesaleItem::new("Cooking Oil", "L", 50, 399, Essentials),
            WholesaleItem::new("Spice Mix Pack", "kg", 10, 2499, Essentials),
        ])
    }

    pub fn items(&self) -> &[WholesaleItem] {
        &self.items
    }

    pub fn find(&self, name: &str) -> Option<&WholesaleItem> {
        self.items.iter().find(|i| i.name == name)
    }

    pub fn in_category(&self, category: WholesaleCategory) -> impl Iterator<Item = &WholesaleItem> {
        self.items.iter().filter(move |i| i.category == category)
    }
}

impl Default for WholesaleCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// One selected bulk item, as sent with an inquiry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WholesaleLine {
    pub name: String,
    pub quantity: u32,
    /// Sent as a JSON number, the way the inquiry sheet expects it.
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

/// Quantities chosen against a wholesale catalog.
#[derive(Debug, Clone)]
pub struct WholesaleSelection<'a> {
    catalog: &'a WholesaleCatalog,
    quantities: HashMap<String, u32>,
}

impl<'a> WholesaleSelection<'a> {
    pub fn new(catalog: &'a WholesaleCatalog) -> Self {
        Self {
            catalog,
            quantities: HashMap::new(),
        }
    }

    /// Set the quantity for an item. Unknown names are ignored; zero clears.
    pub fn set_quantity(&mut self, name: &str, quantity: u32) -> bool {
        if self.catalog.find(name).is_none() {
            warn!(item = name, "ignoring quantity for unknown wholesale item");
            return false;
        }
        if quantity == 0 {
            self.quantities.remove(name);
        } else {
            self.quantities.insert(name.to_string(), quantity);
        }
        true
    }

    pub fn quantity(&self, name: &str) -> u32 {
        self.quantities.get(name).copied().unwrap_or(0)
    }

    /// Price of the selected quantity of one item.
    pub fn line_total(&self, item: &WholesaleItem) -> Decimal {
        item.price * Decimal::from(self.quantity(&item.name))
    }

    /// Selected items in catalog order.
    pub fn lines(&self) -> Vec<WholesaleLine> {
        self.catalog
            .items()
            .iter()
            .filter(|item| self.quantity(&item.name) > 0)
            .map(|item| WholesaleLine {
                name: item.name.clone(),
                quantity: self.quantity(&item.name),
                total: self.line_total(item),
            })
            .collect()
    }

    pub fn total(&self) -> Decimal {
        self.catalog.items().iter().map(|i| self.line_total(i)).sum()
    }

    /// Selected items ordered below their minimum.
    pub fn below_minimum(&self) -> Vec<&WholesaleItem> {
        self.catalog
            .items()
            .iter()
            .filter(|item| {
                let qty = self.quantity(&item.name);
                qty > 0 && qty < item.min_order
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog() {
        let catalog = WholesaleCatalog::standard();
        assert_eq!(catalog.items().len(), 8);
        assert_eq!(catalog.in_category(WholesaleCategory::Essentials).count(), 2);
        assert_eq!(catalog.find("Cooking Oil").unwrap().unit, "L");
    }

    #[test]
    fn test_selection_totals() {
        let catalog = WholesaleCatalog::standard();
        let mut selection = WholesaleSelection::new(&catalog);
        assert!(selection.set_quantity("Premium Beef", 50));
        assert!(selection.set_quantity("Premium Rice", 100));

        let lines = selection.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].name, "Premium Beef");
        assert_eq!(lines[0].total, Decimal::new(79950, 2));
        assert_eq!(lines[1].total, Decimal::new(29900, 2));
        assert_eq!(selection.total(), Decimal::new(109850, 2));
    }

    #[test]
    fn test_unknown_item_is_ignored() {
        let catalog = WholesaleCatalog::standard();
        let mut selection = WholesaleSelection::new(&catalog);
        assert!(!selection.set_quantity("Caviar", 5));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_zero_quantity_clears() {
        let catalog = WholesaleCatalog::standard();
        let mut selection = WholesaleSelection::new(&catalog);
        selection.set_quantity("Fresh Shrimp", 20);
        selection.set_quantity("Fresh Shrimp", 0);
        assert!(selection.lines().is_empty());
        assert_eq!(selection.total(), Decimal::ZERO);
    }

    #[test]
    fn test_below_minimum() {
        let catalog = WholesaleCatalog::standard();
        let mut selection = WholesaleSelection::new(&catalog);
        selection.set_quantity("Spice Mix Pack", 5);
        selection.set_quantity("Whole Chicken", 30);

        let short: Vec<&str> = selection
            .below_minimum()
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(short, vec!["Spice Mix Pack"]);
    }
}
