//! Commerce error types.
//!
//! The cart and pricing engine have no error paths of their own; these cover
//! configuration, catalog integrity and form validation.

use thiserror::Error;

/// Errors raised around the ordering core.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Item not found in a catalog.
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    /// Event not found in the calendar.
    #[error("Event not found: {0}")]
    EventNotFound(String),

    /// Unknown catalog category.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Tax rate outside [0, 1).
    #[error("Invalid tax rate: {0}")]
    InvalidTaxRate(String),

    /// Promo registry entry that can never be applied correctly.
    #[error("Invalid promo code {code}: {reason}")]
    InvalidPromoCode { code: String, reason: String },

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Form failed validation.
    #[error(transparent)]
    Form(#[from] FormError),

    /// Cache error.
    #[error("Cache error: {0}")]
    CacheError(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// A form that cannot be submitted. `Display` is the message shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Please select a date")]
    MissingDate,

    #[error("Please select a time")]
    MissingTime,

    #[error("{0} is not an available time")]
    UnavailableTime(String),

    #[error("Please fill in all required delivery address fields")]
    IncompleteAddress,

    #[error("Please fill in {0}")]
    MissingField(&'static str),

    #[error("{0} is not a valid email address")]
    InvalidEmail(String),

    #[error("Party size must be at least 1")]
    InvalidPartySize,

    #[error("Please select at least one item")]
    NoItems,

    #[error("{item} has a minimum order of {minimum} {unit}")]
    BelowMinimumOrder {
        item: String,
        minimum: u32,
        unit: String,
    },

    #[error("Unknown event: {0}")]
    UnknownEvent(String),
}

#[cfg(feature = "storage")]
impl From<mickeys_cache::CacheError> for CommerceError {
    fn from(e: mickeys_cache::CacheError) -> Self {
        CommerceError::CacheError(e.to_string())
    }
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
