use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use validator::{Validate, ValidationErrorsKind};

/// The three-field message payload held by the contact form.
///
/// A draft may be partially filled at any time; it only has to satisfy the
/// field constraints at the moment it is submitted.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ContactMessage {
    #[validate(length(min = 2, message = "Name must be at least 2 characters."))]
    pub name: String,
    #[validate(email(message = "Please enter a valid email address."))]
    pub email: String,
    #[validate(length(min = 10, message = "Message must be at least 10 characters."))]
    pub body: String,
}

impl ContactMessage {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.body.is_empty()
    }
}

/// Fields of a [`ContactMessage`], keyed in display order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumString, Display, AsRefStr,
    VariantArray,
)]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Body,
}

/// How a field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    TooShort,
    InvalidFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct FieldError {
    pub kind: ErrorKind,
    pub message: String,
}

/// Per-field validation outcome: zero or one error per field, every violating
/// field reported independently. An empty report means the draft is valid.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationReport(BTreeMap<Field, FieldError>);

impl ValidationReport {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn message(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(|error| error.message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldError)> {
        self.0.iter().map(|(field, error)| (*field, error))
    }
}

/// Validate a draft against the field constraints.
///
/// Pure check: violations are collected per field, never short-circuited,
/// and the draft itself is untouched. Calling this twice on the same draft
/// yields identical reports.
pub fn validate(draft: &ContactMessage) -> ValidationReport {
    let mut report = BTreeMap::new();

    if let Err(errors) = Validate::validate(draft) {
        for (name, kind) in errors.errors() {
            let Ok(field) = Field::from_str(name.as_ref()) else {
                continue;
            };
            let ValidationErrorsKind::Field(list) = kind else {
                continue;
            };
            if let Some(error) = list.first() {
                let kind = match error.code.as_ref() {
                    "email" => ErrorKind::InvalidFormat,
                    _ => ErrorKind::TooShort,
                };
                let message = error
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {field}."));
                report.insert(field, FieldError { kind, message });
            }
        }
    }

    ValidationReport(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> ContactMessage {
        ContactMessage {
            name: "Al".to_owned(),
            email: "al@x.co".to_owned(),
            body: "Hello there, checking in".to_owned(),
        }
    }

    #[test]
    fn valid_draft_yields_empty_report() {
        let report = validate(&valid_draft());
        assert!(report.is_empty());
    }

    #[test]
    fn short_name_reports_too_short_without_suppressing_others() {
        let draft = ContactMessage {
            name: "A".to_owned(),
            ..valid_draft()
        };
        let report = validate(&draft);
        assert_eq!(report.len(), 1);
        assert_eq!(report.get(Field::Name).unwrap().kind, ErrorKind::TooShort);
        assert!(report.get(Field::Email).is_none());
        assert!(report.get(Field::Body).is_none());
    }

    #[test]
    fn malformed_email_reports_invalid_format() {
        let draft = ContactMessage {
            email: "bad".to_owned(),
            ..valid_draft()
        };
        let report = validate(&draft);
        assert_eq!(
            report.get(Field::Email).unwrap().kind,
            ErrorKind::InvalidFormat
        );
        assert_eq!(
            report.message(Field::Email).unwrap(),
            "Please enter a valid email address."
        );
    }

    #[test]
    fn all_three_violations_are_collected() {
        let draft = ContactMessage {
            name: "A".to_owned(),
            email: "bad".to_owned(),
            body: "short".to_owned(),
        };
        let report = validate(&draft);
        assert_eq!(report.len(), 3);
        assert_eq!(report.get(Field::Name).unwrap().kind, ErrorKind::TooShort);
        assert_eq!(
            report.get(Field::Email).unwrap().kind,
            ErrorKind::InvalidFormat
        );
        assert_eq!(report.get(Field::Body).unwrap().kind, ErrorKind::TooShort);
    }

    #[test]
    fn boundary_lengths_pass() {
        let draft = ContactMessage {
            name: "Al".to_owned(),
            email: "al@x.co".to_owned(),
            body: "0123456789".to_owned(),
        };
        assert!(validate(&draft).is_empty());
    }

    #[test]
    fn empty_draft_fails_every_field() {
        let report = validate(&ContactMessage::default());
        assert_eq!(report.len(), 3);
        assert_eq!(
            report.get(Field::Email).unwrap().kind,
            ErrorKind::InvalidFormat
        );
    }

    #[test]
    fn validation_is_idempotent() {
        let draft = ContactMessage {
            name: "A".to_owned(),
            email: "bad".to_owned(),
            body: "short".to_owned(),
        };
        let first = validate(&draft);
        let second = validate(&draft);
        assert_eq!(first, second);
    }

    #[test]
    fn report_iterates_in_field_order() {
        let draft = ContactMessage {
            name: "A".to_owned(),
            email: "bad".to_owned(),
            body: "short".to_owned(),
        };
        let report = validate(&draft);
        let fields: Vec<Field> = report.iter().map(|(field, _)| field).collect();
        assert_eq!(fields, vec![Field::Name, Field::Email, Field::Body]);
    }
}
