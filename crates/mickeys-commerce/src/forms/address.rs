//! Delivery address.

use serde::{Deserialize, Serialize};

/// Where a delivery order goes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct DeliveryAddress {
    pub street: String,
    /// Apartment or suite. Optional.
    pub apt: String,
    pub city: String,
    /// State or province.
    pub state: String,
    /// ZIP or postal code.
    pub zip: String,
}

impl DeliveryAddress {
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            apt: String::new(),
            city: city.into(),
            state: state.into(),
            zip: zip.into(),
        }
    }

    pub fn with_apt(mut self, apt: impl Into<String>) -> Self {
        self.apt = apt.into();
        self
    }

    /// Check that every required field is filled in. `apt` is optional.
    pub fn is_complete(&self) -> bool {
        [&self.street, &self.city, &self.state, &self.zip]
            .iter()
            .all(|field| !field.trim().is_empty())
    }

    /// Format as a single line.
    pub fn one_line(&self) -> String {
        let mut parts = vec![self.street.trim().to_string()];
        if !self.apt.trim().is_empty() {
            parts.push(self.apt.trim().to_string());
        }
        parts.push(self.city.trim().to_string());
        parts.push(format!("{} {}", self.state.trim(), self.zip.trim()));
        parts.join(", ")
    }
}
