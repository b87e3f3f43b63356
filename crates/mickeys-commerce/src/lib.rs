//! Ordering core for Mickey's restaurant.
//!
//! - **Cart**: the per-session cart store and its lines
//! - **Pricing**: subtotal, tax, promo codes and the amount due
//! - **Catalog**: menu, truckload supply list, events and gallery
//! - **Forms**: typed, validated requests for the order, wholesale,
//!   reservation, contact and event forms
//!
//! # Example
//!
//! ```rust
//! use mickeys_commerce::prelude::*;
//!
//! let menu = Menu::standard();
//! let mut cart = CartStore::new(PricingEngine::standard());
//!
//! let platter = menu.find(&ItemId::from(1u32)).unwrap();
//! cart.add_item(platter.to_cart_item());
//! cart.add_item(platter.to_cart_item());
//!
//! let pricing = cart.pricing(Some("welcome20"));
//! assert_eq!(pricing.total.display(), "$23.94");
//! assert_eq!(pricing.final_total.display(), "$19.15");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod forms;
pub mod pricing;

pub use error::{CommerceError, FormError};
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{CommerceError, FormError};
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Cart
    #[cfg(feature = "storage")]
    pub use crate::cart::CartSessions;
    pub use crate::cart::{CartItem, CartLine, CartSnapshot, CartStore};

    // Pricing
    pub use crate::pricing::{
        CartPricing, LinePricing, PricingEngine, PromoRegistry, PromoValidation, TaxRate,
    };

    // Catalog
    pub use crate::catalog::{
        Event, EventCalendar, EventKind, Gallery, GalleryImage, Menu, MenuCategory, MenuItem,
        WholesaleCatalog, WholesaleCategory, WholesaleItem, WholesaleLine, WholesaleSelection,
    };

    // Forms
    pub use crate::forms::{
        BusinessType, ContactMessage, ContactSubject, DeliveryAddress, EventBooking, FormPayload,
        Fulfillment, OrderRequest, PartySize, TableReservation, WholesaleInquiry,
    };
}
