//! Fetch boundary: how a poller reads its endpoint.
//!
//! `Fetch` is the injection seam; production code uses `HttpFetcher`
//! over a shared reqwest client, tests substitute scripted fakes.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

/// Per-request timeout in seconds. A hung request degrades into a
/// failed cycle instead of stalling the poller forever.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },
}

/// Asynchronous text fetch against an endpoint.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// GET `url` and return the full response body as text.
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError>;
}

/// reqwest-backed fetcher used by the daemon. Cheap to clone; clones
/// share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build a fetcher with the default request timeout.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.text().await?)
    }
}
