//! The search backend trait and its HTTP implementation.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::{FetchError, SearchRequest, SearchResponse};

/// Anything that can answer a search request.
///
/// The storefront controller talks to this trait so tests and the offline
/// demo can swap in [`crate::FixtureBackend`].
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Execute one search request.
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, FetchError>;
}

/// HTTP client for the remote search endpoint.
///
/// Thin wrapper over reqwest with a base URL, an optional API key header and a
/// per-request timeout. Failures surface as [`FetchError`]; there is no retry
/// here — the storefront renders the error and the user re-triggers.
pub struct HttpSearchClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl HttpSearchClient {
    /// Create a client for an endpoint base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: None,
            timeout: Duration::from_secs(10),
        }
    }

    /// Attach an API key, sent as `x-api-key` on every request.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn url_for(&self, request: &SearchRequest) -> String {
        format!(
            "{}/search?{}",
            self.base_url.trim_end_matches('/'),
            request.query_string()
        )
    }
}

#[async_trait]
impl SearchBackend for HttpSearchClient {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, FetchError> {
        let url = self.url_for(request);
        debug!(term = %request.term, sort = request.sort.as_str(), %url, "fetching search results");

        let mut builder = self
            .http
            .get(&url)
            .header("accept", "application/json")
            .timeout(self.timeout);
        if let Some(key) = &self.api_key {
            builder = builder.header("x-api-key", key);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(FetchError::Http {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await?;
        let parsed: SearchResponse = serde_json::from_slice(&body)?;
        debug!(results = parsed.len(), "search response decoded");
        Ok(parsed)
    }
}
