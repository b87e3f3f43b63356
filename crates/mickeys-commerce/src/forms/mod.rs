//! Typed form requests.
//!
//! Each form the site offers is a struct that validates itself before it is
//! handed to a submitter. Validation messages are the ones shown to guests.

mod address;
mod contact;
mod event;
mod order;
mod reservation;
mod wholesale;

pub use address::DeliveryAddress;
pub use contact::{ContactMessage, ContactSubject};
pub use event::EventBooking;
pub use order::{Fulfillment, OrderRequest, ORDER_TIME_SLOTS, TIME_PLACEHOLDER};
pub use reservation::{PartySize, TableReservation, RESERVATION_TIME_SLOTS};
pub use wholesale::{BusinessType, WholesaleInquiry};

use crate::error::FormError;
use chrono::{Datelike, NaiveDate};

/// A request that can be sent to the form endpoint.
pub trait FormPayload {
    /// Value of the `action` query parameter.
    fn action(&self) -> &'static str;

    /// Check the request. The first failing field wins.
    fn validate(&self) -> Result<(), FormError>;

    /// Query parameters in submission order, without `action` or `callback`.
    fn to_params(&self) -> Vec<(&'static str, String)>;
}

/// Fail with `MissingField(label)` when `value` is blank.
pub(crate) fn require(value: &str, label: &'static str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        return Err(FormError::MissingField(label));
    }
    Ok(())
}

/// Loose shape check: one `@`, something before it, a dot in the domain.
pub(crate) fn validate_email(email: &str) -> Result<(), FormError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(FormError::MissingField("your email"));
    }
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && !email.contains(char::is_whitespace)
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    };
    if !valid {
        return Err(FormError::InvalidEmail(email.to_string()));
    }
    Ok(())
}

/// Long date as guests read it, e.g. "May 1st, 2025".
pub fn format_long_date(date: NaiveDate) -> String {
    let day = date.day();
    let suffix = match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{} {}{}, {}", date.format("%B"), day, suffix, date.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_long_date() {
        assert_eq!(format_long_date(date(2025, 5, 1)), "May 1st, 2025");
        assert_eq!(format_long_date(date(2024, 4, 2)), "April 2nd, 2024");
        assert_eq!(format_long_date(date(2024, 4, 23)), "April 23rd, 2024");
        assert_eq!(format_long_date(date(2024, 4, 11)), "April 11th, 2024");
        assert_eq!(format_long_date(date(2024, 4, 13)), "April 13th, 2024");
        assert_eq!(format_long_date(date(2024, 12, 31)), "December 31st, 2024");
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("guest@example.com").is_ok());
        assert!(validate_email(" guest@example.ca ").is_ok());
        assert_eq!(
            validate_email(""),
            Err(FormError::MissingField("your email"))
        );
        assert!(matches!(validate_email("guest"), Err(FormError::InvalidEmail(_))));
        assert!(matches!(validate_email("@example.com"), Err(FormError::InvalidEmail(_))));
        assert!(matches!(validate_email("guest@localhost"), Err(FormError::InvalidEmail(_))));
        assert!(matches!(validate_email("a b@example.com"), Err(FormError::InvalidEmail(_))));
    }

    #[test]
    fn test_require() {
        assert_eq!(require("  ", "your name"), Err(FormError::MissingField("your name")));
        assert!(require("Mickey", "your name").is_ok());
    }
}
