//! Contact message delivery.
//!
//! The contact form hands a validated form to a `Delivery` and only cares
//! whether it succeeded. `SimulatedDelivery` waits a fixed delay and
//! `WebhookDelivery` posts the form to an HTTP endpoint.

mod error;
mod simulated;
mod webhook;

pub use error::DeliveryError;
pub use simulated::SimulatedDelivery;
pub use webhook::{RetryPolicy, WebhookDelivery};

use crate::config::{Config, DeliveryKind};
use crate::error::AppError;
use crate::state::ContactForm;
use async_trait::async_trait;
use std::time::Duration;

/// Receives contact messages on behalf of the site owner.
///
#[async_trait]
pub trait Delivery: Send + Sync {
    async fn submit(&self, form: &ContactForm) -> Result<(), DeliveryError>;
}

/// Build the delivery described by the configuration.
///
pub fn from_config(config: &Config) -> Result<Box<dyn Delivery>, AppError> {
    let settings = &config.delivery;
    match settings.kind {
        DeliveryKind::Simulated => Ok(Box::new(SimulatedDelivery::new(Duration::from_millis(
            settings.simulated_delay_ms,
        )))),
        DeliveryKind::Webhook => {
            let endpoint = config.webhook_endpoint()?;
            let policy = RetryPolicy {
                max_retries: settings.max_retries,
                backoff: Duration::from_millis(settings.backoff_ms),
            };
            let webhook = WebhookDelivery::new(
                endpoint,
                Duration::from_secs(settings.timeout_secs),
                policy,
            )?;
            Ok(Box::new(webhook))
        }
    }
}
