//! Table reservations.

use crate::error::FormError;
use crate::forms::{format_long_date, require, validate_email, FormPayload};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Seatings offered for dinner, every half hour.
pub const RESERVATION_TIME_SLOTS: [&str; 9] = [
    "5:00 PM", "5:30 PM", "6:00 PM", "6:30 PM", "7:00 PM", "7:30 PM", "8:00 PM", "8:30 PM",
    "9:00 PM",
];

/// Party size as offered by the dropdown: 1 to 8, or a large party.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PartySize {
    Guests(u8),
    /// Nine or more; the restaurant calls back to arrange.
    Large,
}

impl PartySize {
    pub const MAX_LISTED: u8 = 8;

    pub fn parse(s: &str) -> Result<Self, FormError> {
        let s = s.trim();
        if s == "9+" {
            return Ok(PartySize::Large);
        }
        match s.parse::<u8>() {
            Ok(n) if (1..=Self::MAX_LISTED).contains(&n) => Ok(PartySize::Guests(n)),
            Ok(n) if n > Self::MAX_LISTED => Ok(PartySize::Large),
            _ => Err(FormError::InvalidPartySize),
        }
    }
}

impl Default for PartySize {
    fn default() -> Self {
        PartySize::Guests(2)
    }
}

impl fmt::Display for PartySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartySize::Guests(n) => write!(f, "{}", n),
            PartySize::Large => write!(f, "9+"),
        }
    }
}

impl TryFrom<String> for PartySize {
    type Error = FormError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<PartySize> for String {
    fn from(size: PartySize) -> Self {
        size.to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct TableReservation {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub guests: PartySize,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub special_requests: String,
}

impl FormPayload for TableReservation {
    fn action(&self) -> &'static str {
        "reservation"
    }

    fn validate(&self) -> Result<(), FormError> {
        require(&self.name, "your name")?;
        validate_email(&self.email)?;
        require(&self.phone, "a phone number")?;
        if let PartySize::Guests(0) = self.guests {
            return Err(FormError::InvalidPartySize);
        }
        if self.date.is_none() {
            return Err(FormError::MissingDate);
        }
        let time = self
            .time
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(FormError::MissingTime)?;
        if !RESERVATION_TIME_SLOTS.contains(&time) {
            return Err(FormError::UnavailableTime(time.to_string()));
        }
        Ok(())
    }

    fn to_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.clone()),
            ("email", self.email.trim().to_string()),
            ("phone", self.phone.clone()),
            ("guests", self.guests.to_string()),
            ("date", self.date.map(format_long_date).unwrap_or_default()),
            ("time", self.time.clone().unwrap_or_default()),
            ("specialRequests", self.special_requests.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reservation() -> TableReservation {
        TableReservation {
            name: "Alex Martin".to_string(),
            email: "alex@example.com".to_string(),
            phone: "902-555-0199".to_string(),
            guests: PartySize::Guests(4),
            date: NaiveDate::from_ymd_opt(2025, 6, 21),
            time: Some("7:30 PM".to_string()),
            special_requests: String::new(),
        }
    }

    #[test]
    fn test_valid_reservation() {
        let r = reservation();
        assert!(r.validate().is_ok());
        assert_eq!(r.action(), "reservation");
        assert!(r.to_params().contains(&("date", "June 21st, 2025".to_string())));
        assert!(r.to_params().contains(&("guests", "4".to_string())));
    }

    #[test]
    fn test_lunch_slot_is_not_offered() {
        let mut r = reservation();
        r.time = Some("12:00 PM".to_string());
        assert_eq!(r.validate(), Err(FormError::UnavailableTime("12:00 PM".to_string())));
    }

    #[test]
    fn test_missing_date_and_time() {
        let mut r = reservation();
        r.time = None;
        assert_eq!(r.validate(), Err(FormError::MissingTime));
        r.date = None;
        assert_eq!(r.validate(), Err(FormError::MissingDate));
    }

    #[test]
    fn test_party_size_parse() {
        assert_eq!(PartySize::parse("1"), Ok(PartySize::Guests(1)));
        assert_eq!(PartySize::parse("8"), Ok(PartySize::Guests(8)));
        assert_eq!(PartySize::parse("9+"), Ok(PartySize::Large));
        assert_eq!(PartySize::parse("12"), Ok(PartySize::Large));
        assert_eq!(PartySize::parse("0"), Err(FormError::InvalidPartySize));
        assert_eq!(PartySize::parse("many"), Err(FormError::InvalidPartySize));
        assert_eq!(PartySize::Large.to_string(), "9+");
    }
}
