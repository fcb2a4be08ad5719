use crate::{Error, Result};
use log::warn;
use reqwest::StatusCode;
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

const MAX_RETRIES: u32 = 3;
pub(crate) const BASE_DELAY: Duration = Duration::from_secs(1);

/// Anything carrying an HTTP status the policy can classify.
pub trait Retryable {
    fn status(&self) -> StatusCode;
}

impl Retryable for reqwest::Response {
    fn status(&self) -> StatusCode {
        reqwest::Response::status(self)
    }
}

/// Retries non-success responses with exponential backoff.
///
/// The delay before retry `n` (starting at 1) is `base_delay * 2^n`, so the
/// defaults wait 2s, 4s and 8s. Errors returned by the request itself are
/// never retried. Once the retries are used up the last response is handed
/// back as is, whatever its status.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    max_retries: u32,
    base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(MAX_RETRIES, BASE_DELAY)
    }
}

impl RetryPolicy {
    pub fn new(max_retries: u32, base_delay: Duration) -> Self {
        Self {
            max_retries,
            base_delay,
        }
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    pub fn delay(&self, retry: u32) -> Duration {
        self.base_delay.saturating_mul(2u32.saturating_pow(retry))
    }

    pub async fn execute<T, F, Fut>(&self, cancel: &CancellationToken, mut send: F) -> Result<T>
    where
        T: Retryable,
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let mut retry = 0;

        loop {
            let response = tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(Error::Cancelled),
                response = send() => response?,
            };

            let status = response.status();
            if status.is_success() || retry >= self.max_retries {
                return Ok(response);
            }

            retry += 1;
            let delay = self.delay(retry);
            warn!(
                "Request failed with {status}. Waiting {delay:?} before next retry. Retry attempt {retry}."
            );

            tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(Error::Cancelled),
                _ = sleep(delay) => {}
            }
        }
    }
}
