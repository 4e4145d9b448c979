//! Contact form state types.
//!
//! This module contains the contact form fields, the per-field validation
//! state and the validator that recomputes it.

use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

/// Loose address check: something, '@', something, '.', something.
const EMAIL_PATTERN: &str = r"\S+@\S+\.\S+";

/// Shortest accepted message, counted in UTF-16 code units after trimming.
pub const MIN_MESSAGE_LENGTH: usize = 10;

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email";
pub const SUBJECT_REQUIRED: &str = "Subject is required";
pub const MESSAGE_REQUIRED: &str = "Message is required";
pub const MESSAGE_TOO_SHORT: &str = "Message must be at least 10 characters";

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"))
}

/// Specifying contact form fields.
///
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Defines the contact form values. Every field starts empty.
///
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    pub fn clear(&mut self) {
        *self = ContactForm::default();
    }

    pub fn is_blank(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}

/// Strip surrounding whitespace, including the byte order mark.
///
fn trimmed(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Return the validation message for a single field value, if any.
///
pub fn check_field(field: Field, value: &str) -> Option<&'static str> {
    let value = trimmed(value);
    match field {
        Field::Name if value.is_empty() => Some(NAME_REQUIRED),
        Field::Email if value.is_empty() => Some(EMAIL_REQUIRED),
        Field::Email if !email_regex().is_match(value) => Some(EMAIL_INVALID),
        Field::Subject if value.is_empty() => Some(SUBJECT_REQUIRED),
        Field::Message if value.is_empty() => Some(MESSAGE_REQUIRED),
        Field::Message if value.encode_utf16().count() < MIN_MESSAGE_LENGTH => Some(MESSAGE_TOO_SHORT),
        _ => None,
    }
}

/// Specifying validation state of one field.
///
/// A field is `Unchecked` until the first validation pass and again after
/// every edit, until the next pass.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub enum FieldState {
    #[default]
    Unchecked,
    Valid,
    Invalid(String),
}

impl FieldState {
    pub fn error(&self) -> Option<&str> {
        match self {
            FieldState::Invalid(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Per-field validation state for the whole form.
///
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct FieldErrors {
    name: FieldState,
    email: FieldState,
    subject: FieldState,
    message: FieldState,
}

impl FieldErrors {
    /// Recompute every field from scratch.
    ///
    pub fn validate(form: &ContactForm) -> Self {
        let mut errors = FieldErrors::default();
        for field in Field::ALL {
            *errors.state_mut(field) = match check_field(field, form.get(field)) {
                Some(message) => FieldState::Invalid(message.to_owned()),
                None => FieldState::Valid,
            };
        }
        errors
    }

    pub fn state(&self, field: Field) -> &FieldState {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    fn state_mut(&mut self, field: Field) -> &mut FieldState {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.state(field).error()
    }

    /// Drop whatever is known about the field after its value changed.
    ///
    pub fn mark_edited(&mut self, field: Field) {
        *self.state_mut(field) = FieldState::Unchecked;
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_none())
    }

    /// Return only the fields carrying an error message.
    ///
    pub fn messages(&self) -> BTreeMap<Field, String> {
        Field::ALL
            .iter()
            .filter_map(|field| self.get(*field).map(|m| (*field, m.to_owned())))
            .collect()
    }
}

/// Validate the form, returning the error map and whether it is valid.
///
pub fn validate(form: &ContactForm) -> (FieldErrors, bool) {
    let errors = FieldErrors::validate(form);
    let is_valid = errors.is_empty();
    (errors, is_valid)
}
