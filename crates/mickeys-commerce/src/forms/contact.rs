//! Contact form.

use crate::error::FormError;
use crate::forms::{require, validate_email, FormPayload};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ContactSubject {
    Reservation,
    PrivateEvent,
    Feedback,
    #[default]
    Other,
}

impl ContactSubject {
    pub const ALL: [ContactSubject; 4] = [
        ContactSubject::Reservation,
        ContactSubject::PrivateEvent,
        ContactSubject::Feedback,
        ContactSubject::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactSubject::Reservation => "reservation",
            ContactSubject::PrivateEvent => "private-event",
            ContactSubject::Feedback => "feedback",
            ContactSubject::Other => "other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|subject| subject.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ContactMessage {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: ContactSubject,
    pub message: String,
}

impl FormPayload for ContactMessage {
    fn action(&self) -> &'static str {
        "contact"
    }

    fn validate(&self) -> Result<(), FormError> {
        require(&self.first_name, "your first name")?;
        require(&self.last_name, "your last name")?;
        validate_email(&self.email)?;
        require(&self.message, "a message")
    }

    fn to_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("firstName", self.first_name.clone()),
            ("lastName", self.last_name.clone()),
            ("email", self.email.trim().to_string()),
            ("phone", self.phone.clone().unwrap_or_default()),
            ("subject", self.subject.as_str().to_string()),
            ("message", self.message.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_validation() {
        let mut message = ContactMessage {
            first_name: "Jo".to_string(),
            last_name: "Lee".to_string(),
            email: "jo@example.com".to_string(),
            phone: None,
            subject: ContactSubject::PrivateEvent,
            message: "Birthday for 20?".to_string(),
        };
        assert!(message.validate().is_ok());
        assert!(message
            .to_params()
            .contains(&("subject", "private-event".to_string())));
        assert!(message.to_params().contains(&("phone", String::new())));

        message.message = " ".to_string();
        assert_eq!(message.validate(), Err(FormError::MissingField("a message")));
    }

    #[test]
    fn test_subject_parse() {
        assert_eq!(ContactSubject::parse("private-event"), Some(ContactSubject::PrivateEvent));
        assert_eq!(ContactSubject::parse("Feedback"), Some(ContactSubject::Feedback));
        assert_eq!(ContactSubject::parse("complaint"), None);
    }
}
