//! Page state management module.
//!
//! This module contains the state behind the interactive sections of the page:
//! - Project gallery filtering (`ProjectGallery`, `Facet`, `FilterSelection`)
//! - Contact form values and validation (`ContactForm`, `FieldErrors`)
//! - Contact form submission (`ContactFormState`, `SubmissionStatus`)
//! - Research list expansion (`PublicationList`)
//! - State error handling

mod error;
mod filter;
mod form;
mod research;
mod submission;

pub use error::StateError;
pub use filter::{filter_projects, Facet, FilterOutcome, FilterSelection, ProjectGallery, ALL_LABEL};
pub use form::{
    check_field, validate, ContactForm, Field, FieldErrors, FieldState, EMAIL_INVALID,
    EMAIL_REQUIRED, MESSAGE_REQUIRED, MESSAGE_TOO_SHORT, MIN_MESSAGE_LENGTH, NAME_REQUIRED,
    SUBJECT_REQUIRED,
};
pub use research::PublicationList;
pub use submission::{ContactFormState, SubmissionStatus, SubmitAttempt, ERROR_MESSAGE, SUCCESS_MESSAGE};
