//! Page fetching over HTTP.

use std::time::Duration;

use anyhow::Result;
use reqwest::{Client, StatusCode};
use tracing::error;

use crate::config::FetchConfig;

/// Result of fetching one page.
///
/// Distinguishes an absent page (404, a valid "no data for this
/// period") from a failed request (any other non-200 status).
#[derive(Debug)]
pub enum FetchOutcome {
    Page(String),
    NoData,
    Failed(StatusCode),
}

/// HTTP fetcher shared by both pipelines.
///
/// One client, one User-Agent policy. No retries.
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client })
    }

    /// Fetch one page.
    ///
    /// Transport-level errors (connection, DNS, timeout) propagate and
    /// terminate the run; HTTP-level failures are folded into the
    /// outcome so callers can continue with an empty contribution.
    pub async fn fetch(&self, url: &str) -> Result<FetchOutcome> {
        let response = self.client.get(url).send().await?;

        match response.status() {
            StatusCode::OK => Ok(FetchOutcome::Page(response.text().await?)),
            StatusCode::NOT_FOUND => Ok(FetchOutcome::NoData),
            status => {
                error!("Request for {} failed with status {}", url, status);
                Ok(FetchOutcome::Failed(status))
            }
        }
    }
}
