//! Delivery-specific error types.

/// Errors that can occur while handing a contact message to a delivery service.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// Request did not complete within the configured timeout
    #[error("Delivery timed out after {millis}ms")]
    Timeout { millis: u128 },

    /// Service refused the message; retrying will not help
    #[error("Delivery rejected (status {status}): {message}")]
    Rejected { status: u16, message: String },

    /// Service failed on its side
    #[error("Delivery service error (status {status}): {message}")]
    Service { status: u16, message: String },

    /// Every attempt failed
    #[error("Delivery failed after {attempts} attempts: {last}")]
    RetriesExhausted {
        attempts: u32,
        last: Box<DeliveryError>,
    },

    /// Simulated failure
    #[error("Delivery failed: {0}")]
    Simulated(String),
}

impl DeliveryError {
    /// Return true if another attempt may succeed.
    ///
    pub fn is_transient(&self) -> bool {
        match self {
            DeliveryError::HttpRequest(e) => !e.is_builder() && !e.is_decode(),
            DeliveryError::Timeout { .. } | DeliveryError::Service { .. } => true,
            DeliveryError::Rejected { .. }
            | DeliveryError::RetriesExhausted { .. }
            | DeliveryError::Simulated(_) => false,
        }
    }
}
