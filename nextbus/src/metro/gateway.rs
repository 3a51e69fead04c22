//! The gateway abstraction used by the resolution pipeline.

use std::future::Future;

use crate::config::BackendConfig;

use super::client::MetroTransitClient;
use super::error::TransportError;
use super::fixture::FixtureGateway;

/// Fetches a NexTrip JSON document for a relative endpoint path.
///
/// This abstraction allows the pipeline to be tested with canned data.
pub trait Gateway {
    /// Fetch the document at `path` (e.g. `/Stops/21/2`).
    fn fetch_json(
        &self,
        path: &str,
    ) -> impl Future<Output = Result<serde_json::Value, TransportError>> + Send;
}

impl<G: Gateway + Sync> Gateway for &G {
    async fn fetch_json(&self, path: &str) -> Result<serde_json::Value, TransportError> {
        (**self).fetch_json(path).await
    }
}

/// The gateway selected at startup: the live service or a fixture directory.
#[derive(Debug, Clone)]
pub enum Backend {
    Live(MetroTransitClient),
    Fixtures(FixtureGateway),
}

impl Backend {
    /// Build the backend described by `config`.
    pub fn new(config: BackendConfig) -> Result<Self, TransportError> {
        match config.fixtures {
            Some(dir) => Ok(Backend::Fixtures(FixtureGateway::new(dir)?)),
            None => Ok(Backend::Live(MetroTransitClient::new(config.metro)?)),
        }
    }
}

impl Gateway for Backend {
    async fn fetch_json(&self, path: &str) -> Result<serde_json::Value, TransportError> {
        match self {
            Backend::Live(client) => client.fetch_json(path).await,
            Backend::Fixtures(fixtures) => fixtures.fetch_json(path).await,
        }
    }
}
