//! Promo code registry.
//!
//! Codes are looked up after uppercasing the customer's input. A miss is
//! not an error: it prices exactly like an order with no code at all.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Outcome of checking a promo code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PromoValidation {
    pub valid: bool,
    pub discount_percent: u8,
}

impl PromoValidation {
    /// No code, or a code that did not match.
    pub fn none() -> Self {
        Self::default()
    }

    fn hit(discount_percent: u8) -> Self {
        Self {
            valid: true,
            discount_percent,
        }
    }
}

/// Mapping from promotional code to percentage off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct PromoRegistry {
    codes: BTreeMap<String, u8>,
}

impl PromoRegistry {
    /// An empty registry; every code is invalid.
    pub fn new() -> Self {
        Self::default()
    }

    /// The codes the restaurant currently advertises.
    pub fn standard() -> Self {
        Self::new().with_code("SAVE10", 10).with_code("WELCOME20", 20)
    }

    /// Add or replace a code.
    pub fn with_code(mut self, code: impl Into<String>, discount_percent: u8) -> Self {
        self.codes.insert(code.into(), discount_percent);
        self
    }

    /// Look up a customer-entered code.
    pub fn lookup(&self, code: &str) -> PromoValidation {
        let normalized = normalize_code(code);
        if normalized.is_empty() {
            return PromoValidation::none();
        }
        match self.codes.get(&normalized) {
            Some(&percent) => PromoValidation::hit(percent),
            None => PromoValidation::none(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.codes.iter().map(|(code, pct)| (code.as_str(), *pct))
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Check that every entry can actually be matched and applied.
    ///
    /// Entries are stored verbatim, so a lowercase or padded code would never
    /// match normalized input.
    pub fn validate(&self) -> Result<(), CommerceError> {
        for (code, &percent) in &self.codes {
            if code.trim().is_empty() {
                return Err(CommerceError::InvalidPromoCode {
                    code: code.clone(),
                    reason: "code is blank".to_string(),
                });
            }
            if normalize_code(code) != *code {
                return Err(CommerceError::InvalidPromoCode {
                    code: code.clone(),
                    reason: "code must be uppercase with no surrounding spaces".to_string(),
                });
            }
            if percent > 100 {
                return Err(CommerceError::InvalidPromoCode {
                    code: code.clone(),
                    reason: format!("discount {}% is above 100%", percent),
                });
            }
        }
        Ok(())
    }
}

/// Normalize customer input for lookup.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}
