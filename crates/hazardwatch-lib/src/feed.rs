//! Outbound client for the upstream natural-hazard event feed.
//!
//! The fetcher issues a single GET per call under a fixed timeout and
//! reports failures as a closed set of [`FetchError`] variants so callers
//! can discriminate causes without parsing error text. It never retries;
//! retry policy belongs to the caller.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::event::RawEventRecord;

/// Default upstream hazard-event endpoint (NASA EONET v3).
pub const DEFAULT_FEED_URL: &str = "https://eonet.gsfc.nasa.gov/api/v3/events";

/// Fixed request timeout for feed fetches.
pub const FEED_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the feed client.
///
/// Passed in explicitly at construction; there is no process-wide feed URL.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Base URL of the upstream events endpoint.
    pub base_url: String,
    /// Request timeout applied to every fetch.
    pub timeout: Duration,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_FEED_URL.to_string(),
            timeout: FEED_TIMEOUT,
        }
    }
}

impl FeedConfig {
    /// Config pointing at a non-default endpoint, keeping the fixed timeout.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

/// Failure modes of a single feed fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The upstream did not respond within the fixed request timeout.
    #[error("request to the upstream feed timed out")]
    Timeout,

    /// The upstream answered with a non-success status code.
    #[error("upstream feed returned HTTP {status}")]
    Status { status: StatusCode },

    /// The response body could not be decoded as a feed document.
    #[error("upstream feed returned a malformed body: {message}")]
    MalformedBody { message: String },

    /// Connection-level failure reaching the upstream.
    #[error("failed to reach the upstream feed: {message}")]
    Transport { message: String },
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else if let Some(status) = err.status() {
            FetchError::Status { status }
        } else if err.is_decode() {
            FetchError::MalformedBody {
                message: err.to_string(),
            }
        } else {
            FetchError::Transport {
                message: err.to_string(),
            }
        }
    }
}

/// Successful response envelope; the event list may be absent entirely.
#[derive(Debug, Default, Deserialize)]
struct FeedDocument {
    #[serde(default)]
    events: Vec<serde_json::Value>,
}

/// HTTP client for the upstream hazard feed.
pub struct FeedClient {
    client: Client,
    base_url: String,
}

impl FeedClient {
    /// Build a client with the configured endpoint and fixed timeout.
    pub fn new(config: FeedConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(user_agent())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    /// Fetch one batch of raw event records from the upstream feed.
    ///
    /// Issues a single GET with `status`, `limit`, and `days` query
    /// parameters. A 2xx body without an `events` key yields an empty list,
    /// not an error; each listed record decodes leniently so one bad record
    /// cannot fail the batch.
    pub async fn fetch_raw_events(
        &self,
        status: &str,
        days: u32,
        limit: u32,
    ) -> Result<Vec<RawEventRecord>, FetchError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("status", status.to_string()),
                ("limit", limit.to_string()),
                ("days", days.to_string()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let document = response.json::<FeedDocument>().await?;
        debug!(records = document.events.len(), "fetched feed document");

        Ok(document
            .events
            .into_iter()
            .map(RawEventRecord::from_value)
            .collect())
    }
}

fn user_agent() -> String {
    format!(
        "hazardwatch-lib/{version} ({repo})",
        version = env!("CARGO_PKG_VERSION"),
        repo = "https://github.com/hazardwatch/hazardwatch-rs"
    )
}
