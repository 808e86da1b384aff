// SPDX-License-Identifier: MPL-2.0
//! Registration relay: forwards confirmed payments to the sheet-backed
//! web-hook.
//!
//! The relay is fire-and-forget. A confirmed registration is posted as JSON
//! to the configured endpoint; failures are retried a bounded number of
//! times with linear backoff and then logged and abandoned. The user-facing
//! registration flow never waits on, and never fails because of, the relay.
//!
//! The HTTP transport sits behind a trait so the retry policy is testable
//! without a network.

use crate::config::RelayConfig;
use crate::error::RelayError;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A confirmed registration, serialized in the camelCase shape the sheet
/// backend expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub full_name: String,
    pub email: String,
    pub mobile: String,
    pub city: String,
    pub profession: String,
    pub payment_id: String,
    pub amount: String,
    /// ISO-8601 submission time.
    pub timestamp: String,
}

impl Registration {
    /// Builds a payload from form fields and a payment confirmation,
    /// stamping the current time. Blank optional fields are normalized the
    /// way the original backend expects.
    #[must_use]
    pub fn new(
        full_name: String,
        email: String,
        mobile: String,
        city: String,
        profession: String,
        payment_id: String,
        amount: String,
    ) -> Self {
        Self {
            full_name,
            email,
            mobile,
            city: default_if_blank(city),
            profession: default_if_blank(profession),
            payment_id,
            amount,
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    /// A form is submittable once the required fields are non-blank.
    #[must_use]
    pub fn has_required_fields(&self) -> bool {
        !self.full_name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.mobile.trim().is_empty()
    }
}

fn default_if_blank(value: String) -> String {
    if value.trim().is_empty() {
        "Not provided".to_string()
    } else {
        value
    }
}

/// Retry policy for the relay: number of retries after the first attempt
/// and the base delay of the linear backoff (attempt `n` waits `n × delay`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub base_delay: Duration,
}

impl From<&RelayConfig> for RetryPolicy {
    fn from(config: &RelayConfig) -> Self {
        Self {
            max_retries: config.max_retries(),
            base_delay: Duration::from_millis(config.retry_delay_ms()),
        }
    }
}

/// Outcome of a successful relay, reporting how many retries were needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelayOutcome {
    /// Retries issued after the initial attempt (0 = first try succeeded).
    pub retries: u32,
}

/// Transport seam for posting a payload to the web-hook.
pub trait RelayTransport {
    /// Posts the payload once.
    fn post(
        &self,
        payload: &Registration,
    ) -> impl std::future::Future<Output = Result<(), RelayError>> + Send;
}

/// Production transport over reqwest.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    url: String,
}

impl HttpTransport {
    /// Builds a transport for the given web-hook URL.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::ClientBuild`] when the HTTP client cannot be
    /// constructed.
    pub fn new(url: String) -> Result<Self, RelayError> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(concat!("Vernissage/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| RelayError::ClientBuild(e.to_string()))?;
        Ok(Self { client, url })
    }
}

impl RelayTransport for HttpTransport {
    async fn post(&self, payload: &Registration) -> Result<(), RelayError> {
        let response = self
            .client
            .post(&self.url)
            .json(payload)
            .send()
            .await
            .map_err(|e| RelayError::Network(e.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(RelayError::HttpStatus(response.status().as_u16()))
        }
    }
}

/// Posts the payload, retrying per the policy with linear backoff.
///
/// The first attempt is immediate; retry `n` waits `n × base_delay` first.
/// Failures along the way are logged, never surfaced mid-flight.
///
/// # Errors
///
/// Returns [`RelayError::RetriesExhausted`] once every attempt has failed.
pub async fn send_with_retry<T: RelayTransport>(
    transport: &T,
    policy: RetryPolicy,
    payload: &Registration,
) -> Result<RelayOutcome, RelayError> {
    let attempts = policy.max_retries + 1;
    for attempt in 0..attempts {
        if attempt > 0 {
            tokio::time::sleep(policy.base_delay * attempt).await;
        }
        match transport.post(payload).await {
            Ok(()) => {
                return Ok(RelayOutcome { retries: attempt });
            }
            Err(err) => {
                eprintln!(
                    "Relay attempt {}/{} failed for payment {}: {}",
                    attempt + 1,
                    attempts,
                    payload.payment_id,
                    err
                );
            }
        }
    }
    Err(RelayError::RetriesExhausted { attempts })
}
