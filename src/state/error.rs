//! State management-specific error types.

/// Errors that can occur during state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// Submit requested while another submission is pending
    #[error("A submission is already in flight")]
    SubmissionInFlight,

    /// Submission outcome reported with nothing pending
    #[error("No submission is in flight")]
    NoSubmissionInFlight,
}
