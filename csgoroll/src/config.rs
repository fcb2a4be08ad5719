use crate::http::BASE_URL;
use crate::retry::{RetryPolicy, BASE_DELAY};
use crate::{Error, Result};
use std::env;
use std::str::FromStr;
use std::time::Duration;
use strum_macros::{Display, EnumString};
use url::Url;

pub const API_TOKEN: &str = "CSGOROLL_API_TOKEN";
pub const API_URL: &str = "CSGOROLL_API_URL";
pub const POLL_INTERVAL_SECS: &str = "CSGOROLL_POLL_INTERVAL_SECS";
pub const REQUEST_TIMEOUT_SECS: &str = "CSGOROLL_REQUEST_TIMEOUT_SECS";
pub const MAX_RETRIES: &str = "CSGOROLL_MAX_RETRIES";
pub const PAGINATION: &str = "CSGOROLL_PAGINATION";

const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// How the cursor moves between polls.
#[derive(EnumString, Display, Debug, Default, Clone, Copy, PartialEq)]
#[strum(serialize_all = "kebab-case")]
pub enum Pagination {
    /// Walk the `endCursor` chain, starting over once the last page is reached.
    #[default]
    Follow,
    /// Always request the first page.
    FirstPage,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub url: Url,
    pub api_token: Option<String>,
    pub poll_interval: Duration,
    /// `None` disables the per-request timeout.
    pub request_timeout: Option<Duration>,
    pub max_retries: u32,
    pub pagination: Pagination,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let url = match var(API_URL) {
            Some(url) => Url::parse(url.trim())?,
            None => Url::parse(BASE_URL)?,
        };

        let poll_interval = match var(POLL_INTERVAL_SECS) {
            Some(value) => parse_secs(POLL_INTERVAL_SECS, &value)?,
            None => DEFAULT_POLL_INTERVAL,
        };

        let request_timeout = match var(REQUEST_TIMEOUT_SECS) {
            Some(value) => Some(parse_secs(REQUEST_TIMEOUT_SECS, &value)?),
            None => Some(DEFAULT_REQUEST_TIMEOUT),
        }
        .filter(|timeout| !timeout.is_zero());

        let max_retries = match var(MAX_RETRIES) {
            Some(value) => parse(MAX_RETRIES, &value)?,
            None => RetryPolicy::default().max_retries(),
        };

        let pagination = match var(PAGINATION) {
            Some(value) => parse(PAGINATION, &value)?,
            None => Pagination::default(),
        };

        Ok(Self {
            url,
            api_token: var(API_TOKEN).map(|token| token.trim().to_string()),
            poll_interval,
            request_timeout,
            max_retries,
            pagination,
        })
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_retries, BASE_DELAY)
    }
}

fn parse<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::Config(format!("{key} has an invalid value: {value:?}")))
}

fn parse_secs(key: &str, value: &str) -> Result<Duration> {
    Duration::try_from_secs_f64(parse(key, value)?)
        .map_err(|_| Error::Config(format!("{key} must be a non-negative number of seconds")))
}
