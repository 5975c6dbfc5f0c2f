//! Blocking page fetches with a small retry policy
//!
//! OMS Central occasionally refuses a burst of requests, so every GET goes through [`retry`]:
//! a failed attempt is retried after a delay, and the last failure is handed back to the caller.

use std::thread;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, warn};

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} responded with {status}")]
    Status { url: String, status: StatusCode },
    #[error("no page available for {0}")]
    NotFound(String),
}

/// Errors that know whether trying again could help
pub trait Retryable {
    fn is_retryable(&self) -> bool;
}

impl Retryable for FetchError {
    fn is_retryable(&self) -> bool {
        match self {
            FetchError::Transport { .. } | FetchError::Status { .. } => true,
            FetchError::NotFound(_) => false,
        }
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Backoff {
    Fixed,
    Exponential,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
    pub backoff: Backoff,
}

impl RetryPolicy {
    /// Delay to wait after the `attempt`th failure (1-based)
    pub fn delay_after(&self, attempt: u32) -> Duration {
        match self.backoff {
            Backoff::Fixed => self.delay,
            Backoff::Exponential => self
                .delay
                .saturating_mul(2u32.saturating_pow(attempt.saturating_sub(1))),
        }
    }
}

/// Runs `op` until it succeeds, fails with a non-retryable error, or runs out of attempts
pub fn retry<T, E, F>(policy: &RetryPolicy, mut op: F) -> Result<T, E>
where
    E: Retryable + std::fmt::Display,
    F: FnMut(u32) -> Result<T, E>,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;
    loop {
        match op(attempt) {
            Ok(value) => return Ok(value),
            Err(err) if err.is_retryable() && attempt < max_attempts => {
                let delay = policy.delay_after(attempt);
                warn!(
                    attempt,
                    delay_secs = delay.as_secs_f64(),
                    error = %err,
                    "Fetch failed, retrying"
                );
                thread::sleep(delay);
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}

/// Anything that can hand back the body of a page
pub trait PageSource {
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Fetches pages over HTTP with a browser User-Agent
pub struct HttpSource {
    client: Client,
    policy: RetryPolicy,
}

impl HttpSource {
    pub fn new(
        user_agent: &str,
        timeout: Option<Duration>,
        policy: RetryPolicy,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(HttpSource { client, policy })
    }

    fn get_once(&self, url: &str) -> Result<String, FetchError> {
        let transport = |source: reqwest::Error| FetchError::Transport {
            url: url.to_string(),
            source,
        };
        let response = self.client.get(url).send().map_err(transport)?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(url.to_string()));
        }
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }
        response.text().map_err(transport)
    }
}

impl PageSource for HttpSource {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        retry(&self.policy, |attempt| {
            debug!(url, attempt, "GET");
            self.get_once(url)
        })
    }
}
