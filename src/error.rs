//! Application-wide error types.
//!
//! This module defines the main error type hierarchy for the application,
//! allowing for type-safe error handling throughout the codebase.

pub use crate::config::ConfigError;
pub use crate::delivery::DeliveryError;
pub use crate::state::StateError;

/// Main application error type.
///
/// This is the top-level error type that encompasses all error types
/// in the application. It uses `thiserror` for automatic error derivation
/// and conversion.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Message delivery errors
    #[error("Delivery error: {0}")]
    Delivery(#[from] DeliveryError),

    /// State management errors
    #[error("State error: {0}")]
    State(#[from] StateError),

    /// Logger initialization errors
    #[error("Logger error: {0}")]
    Logger(String),

    /// JSON output errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Text output could not be written
    #[error("Render error: {0}")]
    Render(#[from] std::fmt::Error),

    /// Contact form failed validation
    #[error("Invalid contact form: {0}")]
    InvalidForm(String),

    /// Contact message could not be delivered
    #[error("Submission failed: {0}")]
    SubmissionFailed(String),

    /// Unknown facet or option value on the command line
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;
