//! Runtime configuration shared by the CLI and the HTTP front end.

use std::path::PathBuf;

use crate::metro::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, MetroTransitConfig};

/// Which gateway to build and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Settings for the live NexTrip client.
    pub metro: MetroTransitConfig,

    /// When set, serve canned responses from this directory instead of
    /// contacting the live service.
    pub fixtures: Option<PathBuf>,
}

impl BackendConfig {
    /// Create a config for the live service.
    pub fn new(metro: MetroTransitConfig) -> Self {
        Self {
            metro,
            fixtures: None,
        }
    }

    /// Serve fixtures from `dir` instead of the live service.
    pub fn with_fixtures(mut self, dir: impl Into<PathBuf>) -> Self {
        self.fixtures = Some(dir.into());
        self
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::new(MetroTransitConfig::default())
    }
}

/// Command-line flags selecting the backend.
///
/// Every flag falls back to an environment variable.
#[derive(Debug, Clone, clap::Args)]
pub struct BackendArgs {
    /// Base URL of the NexTrip service.
    #[arg(long, env = "NEXTBUS_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[arg(long, env = "NEXTBUS_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Serve NexTrip responses from this directory instead of the network.
    #[arg(long, env = "NEXTBUS_FIXTURES")]
    pub fixtures: Option<PathBuf>,
}

impl From<BackendArgs> for BackendConfig {
    fn from(args: BackendArgs) -> Self {
        let metro = MetroTransitConfig::new()
            .with_base_url(args.base_url)
            .with_timeout(args.timeout);
        Self {
            metro,
            fixtures: args.fixtures,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = BackendConfig::default();

        assert_eq!(config.metro.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.metro.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(config.fixtures.is_none());
    }

    #[test]
    fn from_args() {
        let args = BackendArgs {
            base_url: "http://localhost:8080/NexTrip".to_string(),
            timeout: 4,
            fixtures: Some(PathBuf::from("data/nextrip")),
        };

        let config = BackendConfig::from(args);
        assert_eq!(config.metro.base_url, "http://localhost:8080/NexTrip");
        assert_eq!(config.metro.timeout_secs, 4);
        assert_eq!(config.fixtures, Some(PathBuf::from("data/nextrip")));
    }
}
