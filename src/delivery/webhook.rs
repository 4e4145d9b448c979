//! HTTP delivery for contact messages.
//!
//! Posts the form as JSON to a single endpoint. Each request has its own
//! timeout; transient failures are retried with exponential backoff up to
//! the policy's bound.

use super::{Delivery, DeliveryError};
use crate::state::ContactForm;
use async_trait::async_trait;
use log::*;
use std::time::Duration;

/// Bounded retry with exponential backoff.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Attempts made after the first one fails
    pub max_retries: u32,
    /// Wait before the first retry; doubles for each one after
    pub backoff: Duration,
}

impl RetryPolicy {
    /// Return the wait before the given retry (1-based).
    ///
    pub fn delay_for(&self, retry: u32) -> Duration {
        let exponent = retry.saturating_sub(1).min(16);
        self.backoff.saturating_mul(1u32 << exponent)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy {
            max_retries: 2,
            backoff: Duration::from_millis(250),
        }
    }
}

/// Sends contact messages to a webhook endpoint.
///
pub struct WebhookDelivery {
    endpoint: String,
    timeout: Duration,
    policy: RetryPolicy,
    http_client: reqwest::Client,
}

impl WebhookDelivery {
    /// Returns a new instance posting to the endpoint.
    ///
    pub fn new(endpoint: &str, timeout: Duration, policy: RetryPolicy) -> Result<Self, DeliveryError> {
        debug!(
            "Initializing webhook delivery to {} (timeout {}ms, {} retries)...",
            endpoint,
            timeout.as_millis(),
            policy.max_retries
        );
        Ok(WebhookDelivery {
            endpoint: endpoint.to_owned(),
            timeout,
            policy,
            http_client: reqwest::Client::builder().timeout(timeout).build()?,
        })
    }

    /// Make a single request and map the response to an outcome.
    ///
    async fn attempt(&self, form: &ContactForm) -> Result<(), DeliveryError> {
        let response = self
            .http_client
            .post(&self.endpoint)
            .json(form)
            .send()
            .await
            .map_err(|e| self.classify(e))?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let message = response
            .text()
            .await
            .unwrap_or_else(|_| String::from("Unable to read response"));
        if status.is_server_error() {
            Err(DeliveryError::Service {
                status: status.as_u16(),
                message,
            })
        } else {
            Err(DeliveryError::Rejected {
                status: status.as_u16(),
                message,
            })
        }
    }

    fn classify(&self, error: reqwest::Error) -> DeliveryError {
        if error.is_timeout() {
            DeliveryError::Timeout {
                millis: self.timeout.as_millis(),
            }
        } else {
            DeliveryError::HttpRequest(error)
        }
    }
}

#[async_trait]
impl Delivery for WebhookDelivery {
    async fn submit(&self, form: &ContactForm) -> Result<(), DeliveryError> {
        let mut attempts = 0;
        loop {
            attempts += 1;
            match self.attempt(form).await {
                Ok(()) => {
                    info!("Delivered contact message after {} attempt(s).", attempts);
                    return Ok(());
                }
                Err(e) if !e.is_transient() => {
                    error!("Contact message rejected: {}", e);
                    return Err(e);
                }
                Err(e) if attempts > self.policy.max_retries => {
                    error!("Giving up on contact message: {}", e);
                    if attempts == 1 {
                        return Err(e);
                    }
                    return Err(DeliveryError::RetriesExhausted {
                        attempts,
                        last: Box::new(e),
                    });
                }
                Err(e) => {
                    let wait = self.policy.delay_for(attempts);
                    warn!(
                        "Delivery attempt {} failed ({}), retrying in {}ms...",
                        attempts,
                        e,
                        wait.as_millis()
                    );
                    tokio::time::sleep(wait).await;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::internet::en::SafeEmail;
    use fake::faker::lorem::en::Sentence;
    use fake::faker::name::en::Name;
    use fake::Fake;
    use httpmock::MockServer;
    use serde_json::json;

    fn fake_form() -> ContactForm {
        ContactForm {
            name: Name().fake(),
            email: SafeEmail().fake(),
            subject: Sentence(2..4).fake(),
            message: Sentence(8..12).fake(),
        }
    }

    fn quick_policy(max_retries: u32) -> RetryPolicy {
        RetryPolicy {
            max_retries,
            backoff: Duration::from_millis(1),
        }
    }

    #[test]
    fn test_backoff_doubles() {
        let policy = RetryPolicy {
            max_retries: 3,
            backoff: Duration::from_millis(100),
        };
        assert_eq!(policy.delay_for(1), Duration::from_millis(100));
        assert_eq!(policy.delay_for(2), Duration::from_millis(200));
        assert_eq!(policy.delay_for(3), Duration::from_millis(400));
    }

    #[tokio::test]
    async fn webhook_success() {
        let form = fake_form();
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("POST").path("/contact").json_body(json!({
                    "name": form.name,
                    "email": form.email,
                    "subject": form.subject,
                    "message": form.message,
                }));
                then.status(202);
            })
            .await;

        let delivery =
            WebhookDelivery::new(&server.url("/contact"), Duration::from_secs(5), quick_policy(2))
                .unwrap();
        assert!(delivery.submit(&form).await.is_ok());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn webhook_retries_server_errors() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("POST").path("/contact");
                then.status(503).body("maintenance");
            })
            .await;

        let delivery =
            WebhookDelivery::new(&server.url("/contact"), Duration::from_secs(5), quick_policy(2))
                .unwrap();
        let error = delivery.submit(&fake_form()).await.unwrap_err();
        match error {
            DeliveryError::RetriesExhausted { attempts, last } => {
                assert_eq!(attempts, 3);
                assert!(matches!(*last, DeliveryError::Service { status: 503, .. }));
            }
            other => panic!("unexpected error: {}", other),
        }
        mock.assert_hits_async(3).await;
    }

    #[tokio::test]
    async fn webhook_does_not_retry_rejections() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("POST").path("/contact");
                then.status(422).body("spam detected");
            })
            .await;

        let delivery =
            WebhookDelivery::new(&server.url("/contact"), Duration::from_secs(5), quick_policy(2))
                .unwrap();
        let error = delivery.submit(&fake_form()).await.unwrap_err();
        match error {
            DeliveryError::Rejected { status, message } => {
                assert_eq!(status, 422);
                assert_eq!(message, "spam detected");
            }
            other => panic!("unexpected error: {}", other),
        }
        mock.assert_hits_async(1).await;
    }

    #[tokio::test]
    async fn webhook_times_out() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method("POST").path("/contact");
                then.status(200).delay(Duration::from_millis(500));
            })
            .await;

        let delivery = WebhookDelivery::new(
            &server.url("/contact"),
            Duration::from_millis(50),
            quick_policy(0),
        )
        .unwrap();
        let error = delivery.submit(&fake_form()).await.unwrap_err();
        assert!(matches!(error, DeliveryError::Timeout { millis: 50 }));
    }
}
