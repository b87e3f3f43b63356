//! Delivery and pickup orders.

use crate::error::FormError;
use crate::forms::{format_long_date, DeliveryAddress, FormPayload};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Times offered on the ordering page.
pub const ORDER_TIME_SLOTS: [&str; 5] = ["11:00 AM", "11:30 AM", "12:00 PM", "12:30 PM", "1:00 PM"];

/// Label of the unselected time dropdown. Treated as no time.
pub const TIME_PLACEHOLDER: &str = "Select a time";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Fulfillment {
    Delivery(DeliveryAddress),
    Pickup,
}

impl Fulfillment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Fulfillment::Delivery(_) => "delivery",
            Fulfillment::Pickup => "pickup",
        }
    }
}

impl Default for Fulfillment {
    fn default() -> Self {
        Fulfillment::Delivery(DeliveryAddress::default())
    }
}

/// An order for delivery or pickup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct OrderRequest {
    pub fulfillment: Fulfillment,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub instructions: String,
}

impl OrderRequest {
    pub fn pickup() -> Self {
        Self {
            fulfillment: Fulfillment::Pickup,
            ..Self::default()
        }
    }

    pub fn delivery(address: DeliveryAddress) -> Self {
        Self {
            fulfillment: Fulfillment::Delivery(address),
            ..Self::default()
        }
    }

    pub fn on(mut self, date: NaiveDate, time: impl Into<String>) -> Self {
        self.date = Some(date);
        self.time = Some(time.into());
        self
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }

    fn selected_time(&self) -> Option<&str> {
        self.time
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty() && *t != TIME_PLACEHOLDER)
    }
}

impl FormPayload for OrderRequest {
    fn action(&self) -> &'static str {
        "order"
    }

    fn validate(&self) -> Result<(), FormError> {
        if self.date.is_none() {
            return Err(FormError::MissingDate);
        }
        let time = self.selected_time().ok_or(FormError::MissingTime)?;
        if !ORDER_TIME_SLOTS.contains(&time) {
            return Err(FormError::UnavailableTime(time.to_string()));
        }
        if let Fulfillment::Delivery(address) = &self.fulfillment {
            if !address.is_complete() {
                return Err(FormError::IncompleteAddress);
            }
        }
        Ok(())
    }

    fn to_params(&self) -> Vec<(&'static str, String)> {
        let address = match &self.fulfillment {
            Fulfillment::Delivery(address) => address.clone(),
            Fulfillment::Pickup => DeliveryAddress::default(),
        };
        vec![
            ("orderType", self.fulfillment.as_str().to_string()),
            ("street", address.street),
            ("apt", address.apt),
            ("city", address.city),
            ("state", address.state),
            ("zip", address.zip),
            ("date", self.date.map(format_long_date).unwrap_or_default()),
            ("time", self.selected_time().unwrap_or_default().to_string()),
            ("instructions", self.instructions.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn may_first() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 1).unwrap()
    }

    fn address() -> DeliveryAddress {
        DeliveryAddress::new("12 Main St", "Halifax", "NS", "B3H 1A1")
    }

    #[test]
    fn test_missing_date_is_checked_first() {
        let order = OrderRequest::delivery(DeliveryAddress::default());
        assert_eq!(order.validate(), Err(FormError::MissingDate));
        assert_eq!(FormError::MissingDate.to_string(), "Please select a date");
    }

    #[test]
    fn test_missing_time() {
        let mut order = OrderRequest::pickup();
        order.date = Some(may_first());
        assert_eq!(order.validate(), Err(FormError::MissingTime));

        order.time = Some(TIME_PLACEHOLDER.to_string());
        assert_eq!(order.validate(), Err(FormError::MissingTime));
        assert_eq!(FormError::MissingTime.to_string(), "Please select a time");
    }

    #[test]
    fn test_time_must_be_offered() {
        let order = OrderRequest::pickup().on(may_first(), "3:00 AM");
        assert_eq!(
            order.validate(),
            Err(FormError::UnavailableTime("3:00 AM".to_string()))
        );
    }

    #[test]
    fn test_delivery_needs_address() {
        let mut address = address();
        address.city.clear();
        let order = OrderRequest::delivery(address).on(may_first(), "12:00 PM");
        assert_eq!(order.validate(), Err(FormError::IncompleteAddress));
        assert_eq!(
            FormError::IncompleteAddress.to_string(),
            "Please fill in all required delivery address fields"
        );
    }

    #[test]
    fn test_pickup_needs_no_address() {
        let order = OrderRequest::pickup().on(may_first(), "11:30 AM");
        assert!(order.validate().is_ok());
    }

    #[test]
    fn test_params() {
        let order = OrderRequest::delivery(address().with_apt("4"))
            .on(may_first(), "1:00 PM")
            .with_instructions("Ring twice");
        assert!(order.validate().is_ok());
        assert_eq!(order.action(), "order");
        assert_eq!(
            order.to_params(),
            vec![
                ("orderType", "delivery".to_string()),
                ("street", "12 Main St".to_string()),
                ("apt", "4".to_string()),
                ("city", "Halifax".to_string()),
                ("state", "NS".to_string()),
                ("zip", "B3H 1A1".to_string()),
                ("date", "May 1st, 2025".to_string()),
                ("time", "1:00 PM".to_string()),
                ("instructions", "Ring twice".to_string()),
            ]
        );
    }

    #[test]
    fn test_pickup_params_leave_address_blank() {
        let params = OrderRequest::pickup().on(may_first(), "11:00 AM").to_params();
        assert_eq!(params[0], ("orderType", "pickup".to_string()));
        assert!(params[1..6].iter().all(|(_, v)| v.is_empty()));
    }
}
