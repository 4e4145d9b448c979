use super::{Delivery, DeliveryError};
use crate::state::ContactForm;
use async_trait::async_trait;
use log::*;
use std::time::Duration;

/// Pretends to send the message: waits a fixed delay, then reports the
/// configured outcome.
///
#[derive(Debug, Clone)]
pub struct SimulatedDelivery {
    delay: Duration,
    failure: Option<String>,
}

impl SimulatedDelivery {
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(2000);

    /// Returns an instance that succeeds after the delay.
    ///
    pub fn new(delay: Duration) -> Self {
        SimulatedDelivery {
            delay,
            failure: None,
        }
    }

    /// Returns an instance that fails with the reason after the delay.
    ///
    pub fn failing(delay: Duration, reason: &str) -> Self {
        SimulatedDelivery {
            delay,
            failure: Some(reason.to_owned()),
        }
    }
}

impl Default for SimulatedDelivery {
    fn default() -> Self {
        SimulatedDelivery::new(Self::DEFAULT_DELAY)
    }
}

#[async_trait]
impl Delivery for SimulatedDelivery {
    async fn submit(&self, form: &ContactForm) -> Result<(), DeliveryError> {
        debug!(
            "Simulating delivery of '{}' from {} ({}ms)...",
            form.subject,
            form.email,
            self.delay.as_millis()
        );
        tokio::time::sleep(self.delay).await;
        match &self.failure {
            Some(reason) => Err(DeliveryError::Simulated(reason.clone())),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn simulated_success() {
        let delivery = SimulatedDelivery::new(Duration::ZERO);
        assert!(delivery.submit(&ContactForm::default()).await.is_ok());
    }

    #[tokio::test]
    async fn simulated_failure() {
        let delivery = SimulatedDelivery::failing(Duration::ZERO, "mailbox full");
        let error = delivery.submit(&ContactForm::default()).await.unwrap_err();
        assert!(error.to_string().contains("mailbox full"));
    }

    #[tokio::test]
    async fn simulated_waits_for_delay() {
        let delay = Duration::from_millis(30);
        let delivery = SimulatedDelivery::new(delay);
        let started = tokio::time::Instant::now();
        delivery.submit(&ContactForm::default()).await.unwrap();
        assert!(started.elapsed() >= delay);
    }
}
