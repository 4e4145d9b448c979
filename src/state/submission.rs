//! Contact form submission state machine.
//!
//! `ContactFormState` owns the field values, their validation state and the
//! submission status. A submit validates, hands the form to a `Delivery` and
//! records the outcome; at most one submission is in flight at a time.

use super::error::StateError;
use super::form::{ContactForm, Field, FieldErrors};
use crate::delivery::{Delivery, DeliveryError};
use log::*;

pub const SUCCESS_MESSAGE: &str =
    "Your message has been sent successfully! I'll get back to you soon.";
pub const ERROR_MESSAGE: &str = "Something went wrong. Please try again later.";

/// Specifying submission status.
///
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error(String),
}

impl SubmissionStatus {
    /// Banner text to show for the status, if any.
    ///
    pub fn banner(&self) -> Option<&'static str> {
        match self {
            SubmissionStatus::Success => Some(SUCCESS_MESSAGE),
            SubmissionStatus::Error(_) => Some(ERROR_MESSAGE),
            SubmissionStatus::Idle | SubmissionStatus::Submitting => None,
        }
    }

    /// Whether the submit control accepts input.
    ///
    pub fn can_submit(&self) -> bool {
        !matches!(self, SubmissionStatus::Submitting)
    }
}

/// Result of asking to start a submission.
///
#[derive(Debug, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// Validation failed; errors are populated and the status is unchanged.
    Invalid,
    /// Now submitting; the form snapshot goes to the delivery.
    Started(ContactForm),
}

/// Oversees contact form values, field errors and submission status.
///
#[derive(Debug, Clone, Default)]
pub struct ContactFormState {
    form: ContactForm,
    errors: FieldErrors,
    status: SubmissionStatus,
}

impl ContactFormState {
    pub fn new() -> Self {
        ContactFormState::default()
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    /// Update a field value. Any error on that field is dropped right away,
    /// whether or not the new value is valid.
    ///
    pub fn set_field(&mut self, field: Field, value: &str) {
        self.form.set(field, value.to_owned());
        self.errors.mark_edited(field);
    }

    /// Recompute all field errors and return whether the form is valid.
    ///
    pub fn validate(&mut self) -> bool {
        self.errors = FieldErrors::validate(&self.form);
        self.errors.is_empty()
    }

    /// Validate and, if valid, enter `Submitting`.
    ///
    /// Rejected while a submission is already in flight.
    pub fn begin_submit(&mut self) -> Result<SubmitAttempt, StateError> {
        if !self.status.can_submit() {
            warn!("Ignoring submit while a submission is in flight.");
            return Err(StateError::SubmissionInFlight);
        }
        if !self.validate() {
            debug!(
                "Contact form has {} invalid field(s).",
                self.errors.messages().len()
            );
            return Ok(SubmitAttempt::Invalid);
        }
        self.status = SubmissionStatus::Submitting;
        Ok(SubmitAttempt::Started(self.form.clone()))
    }

    /// Record the delivery outcome of the in-flight submission.
    ///
    /// Success clears every field; failure keeps them so the user can retry.
    pub fn finish_submit(&mut self, outcome: Result<(), DeliveryError>) -> Result<(), StateError> {
        if self.status != SubmissionStatus::Submitting {
            return Err(StateError::NoSubmissionInFlight);
        }
        match outcome {
            Ok(()) => {
                info!("Contact message sent.");
                self.form.clear();
                self.errors = FieldErrors::default();
                self.status = SubmissionStatus::Success;
            }
            Err(e) => {
                error!("Failed to send contact message: {}", e);
                self.status = SubmissionStatus::Error(e.to_string());
            }
        }
        Ok(())
    }

    /// Run a whole submit cycle against the delivery and return the new status.
    ///
    pub async fn submit<D>(&mut self, delivery: &D) -> Result<&SubmissionStatus, StateError>
    where
        D: Delivery + ?Sized,
    {
        let form = match self.begin_submit()? {
            SubmitAttempt::Invalid => return Ok(&self.status),
            SubmitAttempt::Started(form) => form,
        };
        let outcome = delivery.submit(&form).await;
        self.finish_submit(outcome)?;
        Ok(&self.status)
    }
}
