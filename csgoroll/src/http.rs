use crate::config::Config;
use crate::retry::RetryPolicy;
use crate::{Error, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::Response;
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use url::Url;

pub const BASE_URL: &str = "https://api.csgoroll.com/graphql";
const BROWSER_USER_AGENT: &str = "Mozilla/5.0";

pub struct HttpClient {
    client: reqwest::Client,
    url: Url,
    retry: RetryPolicy,
}

impl HttpClient {
    pub fn new(config: &Config, retry: RetryPolicy) -> Result<Self> {
        let mut builder = reqwest::Client::builder().default_headers(headers(config)?);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            url: config.url.clone(),
            retry,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Posts `body`, retrying non-success statuses according to the retry
    /// policy. The returned response may still carry a failing status.
    pub async fn post(&self, body: &Value, cancel: &CancellationToken) -> Result<Response> {
        let (client, url) = (&self.client, &self.url);

        self.retry
            .execute(cancel, || async move {
                Ok::<_, Error>(client.post(url.clone()).json(body).send().await?)
            })
            .await
    }

    /// Reads the body of a response, giving up when `cancel` fires.
    pub async fn text(response: Response, cancel: &CancellationToken) -> Result<String> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(Error::Cancelled),
            text = response.text() => Ok(text?),
        }
    }
}

fn headers(config: &Config) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    if let Some(token) = &config.api_token {
        let mut value = HeaderValue::from_str(&format!("Bearer {token}"))?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }

    Ok(headers)
}
