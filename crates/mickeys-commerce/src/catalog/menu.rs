//! Restaurant menu.

use crate::cart::CartItem;
use crate::ids::ItemId;
use crate::money::{Currency, Money};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Menu section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuCategory {
    Starters,
    Mains,
    Desserts,
}

impl MenuCategory {
    pub const ALL: [MenuCategory; 3] = [
        MenuCategory::Starters,
        MenuCategory::Mains,
        MenuCategory::Desserts,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MenuCategory::Starters => "starters",
            MenuCategory::Mains => "mains",
            MenuCategory::Desserts => "desserts",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MenuCategory::Starters => "Starters",
            MenuCategory::Mains => "Mains",
            MenuCategory::Desserts => "Desserts",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "starters" => Some(MenuCategory::Starters),
            "mains" => Some(MenuCategory::Mains),
            "desserts" => Some(MenuCategory::Desserts),
            _ => None,
        }
    }
}

/// A dish on the menu.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    /// Unit price in the shop currency.
    pub price: Decimal,
    /// Image path relative to the site root.
    pub image: String,
    pub category: MenuCategory,
}

impl MenuItem {
    fn new(
        id: u32,
        name: &str,
        description: &str,
        price_cents: i64,
        image: &str,
        category: MenuCategory,
    ) -> Self {
        Self {
            id: ItemId::from(id),
            name: name.to_string(),
            description: description.to_string(),
            price: Decimal::new(price_cents, 2),
            image: image.to_string(),
            category,
        }
    }

    /// Price as Money in the given currency.
    pub fn price_in(&self, currency: Currency) -> Money {
        Money::new(self.price, currency)
    }

    /// Snapshot handed to the cart when the dish is ordered.
    pub fn to_cart_item(&self) -> CartItem {
        CartItem {
            id: self.id.clone(),
            name: self.name.clone(),
            price: self.price,
            image: self.image.clone(),
        }
    }
}

/// The full menu, in display order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    /// Build a menu from arbitrary items.
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// The restaurant's current menu.
    pub fn standard() -> Self {
        use MenuCategory::*;
        Self::new(vec![
            MenuItem::new(
                1,
                "Deep Fried Veggies Platter",
                "Battered mushrooms, zucchini, mozza sticks & onion rings",
                1088,
                "/appetizer.webp",
                Starters,
            ),
            MenuItem::new(
                2,
                "Mozzarella Sticks",
                "Golden-fried mozzarella sticks with marinara sauce",
                699,
                "/mozza-sticks.webp",
                Starters,
            ),
            MenuItem::new(
                3,
                "Chicken Strips",
                "Hand-breaded chicken strips served with dipping sauce",
                1149,
                "/chicken-strips.webp",
                Starters,
            ),
            MenuItem::new(
                4,
                "Wings",
                "Crispy chicken wings with your choice of sauce",
                1288,
                "/wings.webp",
                Starters,
            ),
            MenuItem::new(
                5,
                "Munchie Platter",
                "Chicken strips, wings, mozza sticks, pepperoni, onion rings & fries",
                1949,
                "/platter.webp",
                Starters,
            ),
            MenuItem::new(
                6,
                "Mickey Special Sub",
                "Ham, roast beef, turkey, salami & pepp",
                1549,
                "/sub.webp",
                Mains,
            ),
            MenuItem::new(
                7,
                "Fisherman's Platter",
                "1pc fish, 5 scallops, 5 shrimp, bag clams",
                2999,
                "/seafood-platter.webp",
                Mains,
            ),
            MenuItem::new(
                8,
                "Roast Beef Dinner",
                "Traditional roast beef served with sides",
                1899,
                "/roast-beef.webp",
                Mains,
            ),
            MenuItem::new(
                9,
                "Special Poutine",
                "Choice of hamburger, donair, bacon, chicken strip, or veggie toppings",
                1099,
                "/poutine.webp",
                Mains,
            ),
            MenuItem::new(
                10,
                "Fish & Chips",
                "Hand-battered fish served with homemade fries",
                1699,
                "/fish-chips.webp",
                Mains,
            ),
            MenuItem::new(
                11,
                "Coconut Cream Pie",
                "Classic coconut cream pie with whipped topping",
                688,
                "/coconut-pie.webp",
                Desserts,
            ),
            MenuItem::new(
                12,
                "Butterscotch Pie",
                "Rich butterscotch filling in a flaky crust",
                688,
                "/butterscotch-pie.webp",
                Desserts,
            ),
            MenuItem::new(
                13,
                "Lemon Pie",
                "Tangy lemon pie with meringue topping",
                688,
                "/lemon-pie.webp",
                Desserts,
            ),
            MenuItem::new(
                14,
                "Ice Cream",
                "Creamy vanilla ice cream",
                399,
                "/ice-cream.webp",
                Desserts,
            ),
            MenuItem::new(
                15,
                "Milkshake",
                "Choice of chocolate, vanilla, or strawberry",
                749,
                "/milkshake.webp",
                Desserts,
            ),
        ])
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn find(&self, id: &ItemId) -> Option<&MenuItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    pub fn in_category(&self, category: MenuCategory) -> impl Iterator<Item = &MenuItem> {
        self.items.iter().filter(move |i| i.category == category)
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::standard()
    }
}
