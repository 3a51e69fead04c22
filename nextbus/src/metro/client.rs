//! NexTrip HTTP client.
//!
//! Issues one GET per call, always asking for JSON. There is no caching and
//! no retry: every lookup sees the vendor's current data or fails.

use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use tracing::debug;

use super::error::TransportError;
use super::gateway::Gateway;

/// Default base URL for the NexTrip service.
pub const DEFAULT_BASE_URL: &str = "https://svc.metrotransit.org/NexTrip";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the NexTrip client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetroTransitConfig {
    /// Base URL; relative endpoint paths are appended to it
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl MetroTransitConfig {
    /// Create a config pointing at the production service.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing or a proxy).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for MetroTransitConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// NexTrip API client.
#[derive(Debug, Clone)]
pub struct MetroTransitClient {
    http: reqwest::Client,
    base_url: String,
}

impl MetroTransitClient {
    /// Create a new client with the given configuration.
    pub fn new(config: MetroTransitConfig) -> Result<Self, TransportError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Absolute URL for a relative endpoint path.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Gateway for MetroTransitClient {
    async fn fetch_json(&self, path: &str) -> Result<serde_json::Value, TransportError> {
        let url = self.url_for(path);
        debug!(%url, "fetching NexTrip document");

        let response = self
            .http
            .get(&url)
            .query(&[("format", "json")])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Status {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| TransportError::json(&e, &body))
    }
}
