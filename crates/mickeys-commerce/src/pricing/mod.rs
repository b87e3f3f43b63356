//! Pricing engine.
//!
//! Contains the tax policy, promo registry and the computations that turn
//! cart lines into a priced breakdown.

mod engine;
mod promo;
mod summary;
mod tax;

pub use engine::PricingEngine;
pub use promo::{normalize_code, PromoRegistry, PromoValidation};
pub use summary::{CartPricing, LinePricing};
pub use tax::{TaxRate, DEFAULT_TAX_PERCENT};
