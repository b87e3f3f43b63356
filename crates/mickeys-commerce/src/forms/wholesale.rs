//! Truckload (wholesale) inquiries.

use crate::catalog::{WholesaleLine, WholesaleSelection};
use crate::error::FormError;
use crate::forms::{require, validate_email, FormPayload};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BusinessType {
    #[default]
    Restaurant,
    Hotel,
    Catering,
    Retail,
    Other,
}

impl BusinessType {
    pub const ALL: [BusinessType; 5] = [
        BusinessType::Restaurant,
        BusinessType::Hotel,
        BusinessType::Catering,
        BusinessType::Retail,
        BusinessType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BusinessType::Restaurant => "restaurant",
            BusinessType::Hotel => "hotel",
            BusinessType::Catering => "catering",
            BusinessType::Retail => "retail",
            BusinessType::Other => "other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

/// A bulk-supply inquiry from a business.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct WholesaleInquiry {
    pub business_name: String,
    pub contact_name: String,
    pub phone: String,
    pub email: String,
    pub business_type: BusinessType,
    pub message: String,
    pub items: Vec<WholesaleLine>,
    /// Items ordered under their minimum. Reported, not blocking.
    #[serde(skip)]
    shortfalls: Vec<FormError>,
}

impl WholesaleInquiry {
    /// Take the selected items and any minimum-order shortfalls.
    pub fn with_selection(mut self, selection: &WholesaleSelection<'_>) -> Self {
        self.items = selection.lines();
        self.shortfalls = selection
            .below_minimum()
            .into_iter()
            .map(|item| FormError::BelowMinimumOrder {
                item: item.name.clone(),
                minimum: item.min_order,
                unit: item.unit.clone(),
            })
            .collect();
        self
    }

    /// Minimum-order problems the business should be told about.
    pub fn warnings(&self) -> &[FormError] {
        &self.shortfalls
    }

    fn items_json(&self) -> String {
        serde_json::to_string(&self.items).unwrap_or_else(|_| "[]".to_string())
    }
}

impl FormPayload for WholesaleInquiry {
    fn action(&self) -> &'static str {
        "wholesale"
    }

    fn validate(&self) -> Result<(), FormError> {
        require(&self.business_name, "your business name")?;
        require(&self.contact_name, "a contact name")?;
        require(&self.phone, "a phone number")?;
        validate_email(&self.email)?;
        if self.items.is_empty() {
            return Err(FormError::NoItems);
        }
        Ok(())
    }

    fn to_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("businessName", self.business_name.clone()),
            ("contactName", self.contact_name.clone()),
            ("phone", self.phone.clone()),
            ("email", self.email.trim().to_string()),
            ("businessType", self.business_type.as_str().to_string()),
            ("message", self.message.clone()),
            ("itemsOrdered", self.items_json()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::WholesaleCatalog;

    fn inquiry() -> WholesaleInquiry {
        WholesaleInquiry {
            business_name: "Harbour Grill".to_string(),
            contact_name: "Sam Doe".to_string(),
            phone: "902-555-0100".to_string(),
            email: "orders@harbourgrill.ca".to_string(),
            business_type: BusinessType::Restaurant,
            message: "Weekly delivery".to_string(),
            ..WholesaleInquiry::default()
        }
    }

    #[test]
    fn test_requires_items() {
        assert_eq!(inquiry().validate(), Err(FormError::NoItems));
    }

    #[test]
    fn test_requires_contact_fields() {
        let mut missing = inquiry();
        missing.business_name.clear();
        assert_eq!(
            missing.validate(),
            Err(FormError::MissingField("your business name"))
        );

        let mut bad_email = inquiry();
        bad_email.email = "orders".to_string();
        assert!(matches!(bad_email.validate(), Err(FormError::InvalidEmail(_))));
    }

    #[test]
    fn test_items_ordered_param() {
        let catalog = WholesaleCatalog::standard();
        let first = &catalog.items()[0];
        let mut selection = WholesaleSelection::new(&catalog);
        selection.set_quantity(&first.name, first.min_order);

        let inquiry = inquiry().with_selection(&selection);
        assert!(inquiry.validate().is_ok());
        assert!(inquiry.warnings().is_empty());

        let params = inquiry.to_params();
        let (key, json) = params.last().unwrap();
        assert_eq!(*key, "itemsOrdered");
        let parsed: serde_json::Value = serde_json::from_str(json).unwrap();
        assert_eq!(parsed[0]["name"], first.name.as_str());
        assert_eq!(parsed[0]["quantity"], first.min_order);
        assert!(parsed[0]["total"].is_number());
    }

    #[test]
    fn test_below_minimum_is_a_warning() {
        let catalog = WholesaleCatalog::standard();
        let item = catalog.items().iter().find(|i| i.min_order > 1).unwrap();
        let mut selection = WholesaleSelection::new(&catalog);
        selection.set_quantity(&item.name, 1);

        let inquiry = inquiry().with_selection(&selection);
        assert!(inquiry.validate().is_ok());
        assert_eq!(
            inquiry.warnings(),
            &[FormError::BelowMinimumOrder {
                item: item.name.clone(),
                minimum: item.min_order,
                unit: item.unit.clone(),
            }]
        );
    }

    #[test]
    fn test_business_type_parse() {
        assert_eq!(BusinessType::parse("Hotel"), Some(BusinessType::Hotel));
        assert_eq!(BusinessType::parse("bakery"), None);
    }
}
