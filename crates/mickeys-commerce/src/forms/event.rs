//! Event bookings.

use crate::catalog::{Event, EventCalendar};
use crate::error::FormError;
use crate::forms::{format_long_date, require, validate_email, FormPayload};
use crate::ids::EventId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Seats booked for a listed event.
///
/// The event is resolved against a calendar when the booking is built, so a
/// booking for an unlisted event fails validation before submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventBooking {
    pub event_id: EventId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub guests: u32,
    pub special_requests: String,
    #[serde(skip)]
    event: Option<Event>,
}

impl EventBooking {
    pub fn new(calendar: &EventCalendar, event_id: impl Into<EventId>) -> Self {
        let event_id = event_id.into();
        let event = calendar.find(&event_id).cloned();
        Self {
            event_id,
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            guests: 1,
            special_requests: String::new(),
            event,
        }
    }

    pub fn event(&self) -> Option<&Event> {
        self.event.as_ref()
    }

    /// Price for the whole party, if the event is known.
    pub fn total_price(&self) -> Option<Decimal> {
        self.event
            .as_ref()
            .map(|e| e.price_per_person * Decimal::from(self.guests))
    }
}

impl FormPayload for EventBooking {
    fn action(&self) -> &'static str {
        "event"
    }

    fn validate(&self) -> Result<(), FormError> {
        if self.event.is_none() {
            return Err(FormError::UnknownEvent(self.event_id.to_string()));
        }
        require(&self.name, "your name")?;
        validate_email(&self.email)?;
        require(&self.phone, "a phone number")?;
        if self.guests == 0 {
            return Err(FormError::InvalidPartySize);
        }
        Ok(())
    }

    fn to_params(&self) -> Vec<(&'static str, String)> {
        let (title, date) = match &self.event {
            Some(event) => (event.title.clone(), format_long_date(event.date)),
            None => (String::new(), String::new()),
        };
        vec![
            ("eventId", self.event_id.to_string()),
            ("eventTitle", title),
            ("eventDate", date),
            ("name", self.name.clone()),
            ("email", self.email.trim().to_string()),
            ("phone", self.phone.clone()),
            ("guests", self.guests.to_string()),
            ("specialRequests", self.special_requests.clone()),
        ]
    }
}
