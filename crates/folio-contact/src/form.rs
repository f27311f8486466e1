//! Contact form data.
//!
//! [`FormFields`] is the mutable record the user edits one keystroke at a
//! time. [`Payload`] is the immutable snapshot handed to the delivery service
//! when a submission passes validation.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the four fixed inputs on the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    /// The sender's name.
    Name,
    /// The sender's reply address.
    Email,
    /// Subject line.
    Subject,
    /// Message body.
    Message,
}

impl FormField {
    /// All fields, in the order they appear on the form.
    pub const ALL: [FormField; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    /// Field name as used in input events and template parameters.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when an input event names a field the form does not have.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown form field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for FormField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "subject" => Ok(Self::Subject),
            "message" => Ok(Self::Message),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

/// Current contents of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    /// The sender's name.
    pub name: String,
    /// The sender's reply address.
    pub email: String,
    /// Subject line.
    pub subject: String,
    /// Message body.
    pub message: String,
}

impl FormFields {
    /// Create an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace one field's value, leaving the others untouched.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    /// Read one field's value.
    #[must_use]
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    fn slot_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Subject => &mut self.subject,
            FormField::Message => &mut self.message,
        }
    }

    /// Fields whose trimmed value is empty, in form order.
    #[must_use]
    pub fn missing(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|field| self.get(*field).trim().is_empty())
            .collect()
    }

    /// Snapshot the current values for sending.
    #[must_use]
    pub fn to_payload(&self) -> Payload {
        Payload {
            name: self.name.clone(),
            email: self.email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
        }
    }
}

/// The four-field message record sent to the delivery service.
///
/// Serializes to the template parameters the email template expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    /// The sender's name.
    pub name: String,
    /// The sender's reply address.
    pub email: String,
    /// Subject line.
    pub subject: String,
    /// Message body.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormFields {
        FormFields {
            name: "Sam".to_string(),
            email: "sam@x.com".to_string(),
            subject: "Hi".to_string(),
            message: "Test".to_string(),
        }
    }

    #[test]
    fn test_form_field_display() {
        assert_eq!(FormField::Name.to_string(), "name");
        assert_eq!(FormField::Email.to_string(), "email");
        assert_eq!(FormField::Subject.to_string(), "subject");
        assert_eq!(FormField::Message.to_string(), "message");
    }

    #[test]
    fn test_form_field_from_str() {
        assert_eq!("email".parse::<FormField>(), Ok(FormField::Email));
        assert_eq!(
            "phone".parse::<FormField>(),
            Err(UnknownField("phone".to_string()))
        );
    }

    #[test]
    fn test_new_form_misses_every_field() {
        let form = FormFields::new();
        assert_eq!(form.missing(), FormField::ALL.to_vec());
    }

    #[test]
    fn test_set_touches_one_field() {
        let mut form = filled();
        form.set(FormField::Subject, "Project inquiry");

        assert_eq!(form.subject, "Project inquiry");
        assert_eq!(form.name, "Sam");
        assert_eq!(form.email, "sam@x.com");
        assert_eq!(form.message, "Test");
    }

    #[test]
    fn test_set_is_idempotent() {
        let mut once = FormFields::new();
        once.set(FormField::Name, "Peter Parker");

        let mut twice = FormFields::new();
        twice.set(FormField::Name, "Peter Parker");
        twice.set(FormField::Name, "Peter Parker");

        assert_eq!(once, twice);
    }

    #[test]
    fn test_missing_uses_trimmed_values() {
        let mut form = filled();
        form.set(FormField::Name, "   ");
        form.set(FormField::Message, "\n\t");

        assert_eq!(form.missing(), vec![FormField::Name, FormField::Message]);
    }

    #[test]
    fn test_missing_empty_when_filled() {
        assert!(filled().missing().is_empty());
    }

    #[test]
    fn test_payload_keeps_values_as_typed() {
        let mut form = filled();
        form.set(FormField::Message, "  padded  ");
        let payload = form.to_payload();

        assert_eq!(payload.message, "  padded  ");
        assert_eq!(payload.name, form.name);
    }

    #[test]
    fn test_payload_serializes_template_params() {
        let json = serde_json::to_value(filled().to_payload()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Sam",
                "email": "sam@x.com",
                "subject": "Hi",
                "message": "Test",
            })
        );
    }
}
