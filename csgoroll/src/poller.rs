use crate::config::{Config, Pagination};
use crate::decode::decode_trades;
use crate::http::HttpClient;
use crate::printer::print_page;
use crate::query;
use crate::retry::RetryPolicy;
use crate::schema::TradePage;
use crate::{Error, Result};
use log::{debug, error, info, warn};
use std::io::Write;
use std::time::Duration;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

/// Fetches one page of trades per tick and prints it until cancelled or
/// until anything goes wrong. Failures are not skipped: the first one ends
/// the run.
pub struct Poller {
    client: HttpClient,
    poll_interval: Duration,
    pagination: Pagination,
}

impl Poller {
    pub fn new(config: &Config, retry: RetryPolicy) -> Result<Self> {
        Ok(Self {
            client: HttpClient::new(config, retry)?,
            poll_interval: config.poll_interval,
            pagination: config.pagination,
        })
    }

    /// Returns `Ok(())` when stopped through `cancel`, otherwise the error
    /// that ended the loop.
    pub async fn run<W: Write>(&self, out: &mut W, cancel: &CancellationToken) -> Result<()> {
        info!("Poller started for {}", self.client.url());

        let result = match self.poll(out, cancel).await {
            Err(Error::Cancelled) => Ok(()),
            result => result,
        };

        if let Err(e) = &result {
            log_termination(e);
        }
        info!("Poller stopped");

        result
    }

    async fn poll<W: Write>(&self, out: &mut W, cancel: &CancellationToken) -> Result<()> {
        let mut cursor: Option<String> = None;

        while !cancel.is_cancelled() {
            let page = self.fetch_page(cursor.as_deref(), cancel).await?;
            print_page(out, &page)?;
            cursor = self.next_cursor(page);

            tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                _ = sleep(self.poll_interval) => {}
            }
        }

        Ok(())
    }

    /// One request/decode round trip. A response that still fails after
    /// the retries is returned as [`Error::Response`].
    pub async fn fetch_page(
        &self,
        cursor: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<TradePage> {
        let body = query::trade_list(cursor);
        let response = self.client.post(&body, cancel).await?;
        let status = response.status();
        let text = HttpClient::text(response, cancel).await?;

        if !status.is_success() {
            return Err(Error::Response(status, text));
        }

        let page = decode_trades(&text)?;
        debug!(
            "Fetched {} trades (next cursor: {:?})",
            page.edges.len(),
            page.end_cursor
        );
        Ok(page)
    }

    fn next_cursor(&self, page: TradePage) -> Option<String> {
        match self.pagination {
            Pagination::Follow if page.has_next_page => page.end_cursor,
            Pagination::Follow | Pagination::FirstPage => None,
        }
    }
}

fn log_termination(e: &Error) {
    match e {
        Error::Request(e) => error!("An error occurred while sending the request: {e}"),
        Error::Response(status, text) => error!("Request failed with status code {status}: {text}"),
        Error::UnexpectedShape(_) => warn!("{e}"),
        _ => error!("{e}"),
    }
}
