//! Scheduled events (music nights, tastings, chef's table).

use crate::ids::EventId;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Kind of event, used for the listing icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Music,
    Wine,
    Food,
    Party,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Music => "music",
            EventKind::Wine => "wine",
            EventKind::Food => "food",
            EventKind::Party => "party",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub date: NaiveDate,
    /// Time window as shown to guests (e.g. "7:00 PM - 10:00 PM").
    pub time: String,
    pub description: String,
    pub kind: EventKind,
    pub price_per_person: Decimal,
}

/// The published event calendar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventCalendar {
    events: Vec<Event>,
}

impl EventCalendar {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    pub fn standard() -> Self {
        let table: [(u32, &str, (i32, u32, u32), &str, &str, EventKind, i64); 4] = [
            (
                1,
                "Jazz Night",
                (2024, 4, 15),
                "7:00 PM - 10:00 PM",
                "Enjoy an evening of live jazz music with our house band while savoring our special dinner menu.",
                EventKind::Music,
                75,
            ),
            (
                2,
                "Wine Tasting",
                (2024, 4, 20),
                "6:00 PM - 8:00 PM",
                "Sample our finest wines paired with artisanal cheeses and charcuterie.",
                EventKind::Wine,
                90,
            ),
            (
                3,
                "Chef's Table Experience",
                (2024, 4, 25),
                "7:30 PM - 10:30 PM",
                "An intimate dining experience featuring a special 7-course tasting menu with our executive chef.",
                EventKind::Food,
                150,
            ),
            (
                4,
                "Spring Celebration",
                (2024, 5, 1),
                "6:30 PM - 11:00 PM",
                "Welcome spring with a special seasonal menu and cocktail pairings.",
                EventKind::Party,
                95,
            ),
        ];

        let events = table
            .into_iter()
            .filter_map(|(id, title, (y, m, d), time, description, kind, price)| {
                Some(Event {
                    id: EventId::from(id),
                    title: title.to_string(),
                    date: NaiveDate::from_ymd_opt(y, m, d)?,
                    time: time.to_string(),
                    description: description.to_string(),
                    kind,
                    price_per_person: Decimal::from(price),
                })
            })
            .collect();
        Self::new(events)
    }

    pub fn all(&self) -> &[Event] {
        &self.events
    }

    pub fn on_date(&self, date: NaiveDate) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(move |e| e.date == date)
    }

    pub fn find(&self, id: &EventId) -> Option<&Event> {
        self.events.iter().find(|e| &e.id == id)
    }
}

impl Default for EventCalendar {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_calendar() {
        let calendar = EventCalendar::standard();
        assert_eq!(calendar.all().len(), 4);
        let jazz = calendar.find(&EventId::from(1u32)).unwrap();
        assert_eq!(jazz.title, "Jazz Night");
        assert_eq!(jazz.kind, EventKind::Music);
        assert_eq!(jazz.price_per_person, Decimal::from(75));
    }

    #[test]
    fn test_on_date() {
        let calendar = EventCalendar::standard();
        let day = NaiveDate::from_ymd_opt(2024, 4, 20).unwrap();
        let titles: Vec<&str> = calendar.on_date(day).map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Wine Tasting"]);

        let quiet = NaiveDate::from_ymd_opt(2024, 4, 21).unwrap();
        assert_eq!(calendar.on_date(quiet).count(), 0);
    }
}
