//! Fixture gateway for running without network access.
//!
//! Serves NexTrip documents from JSON files laid out like the endpoint
//! paths: `/Routes` is `Routes.json`, `/Stops/21/2` is `Stops/21/2.json`
//! and the departures for `/21/2/SNUN` live in `21/2/SNUN.json`.
//!
//! Files are read on every call; nothing is held in memory between lookups.

use std::path::{Component, Path, PathBuf};

use tracing::debug;

use super::error::TransportError;
use super::gateway::Gateway;

/// Gateway backed by a directory of JSON files.
#[derive(Debug, Clone)]
pub struct FixtureGateway {
    root: PathBuf,
}

impl FixtureGateway {
    /// Create a fixture gateway rooted at `dir`.
    ///
    /// Fails if `dir` is not an existing directory.
    pub fn new(dir: impl AsRef<Path>) -> Result<Self, TransportError> {
        let root = dir.as_ref().to_path_buf();
        if !root.is_dir() {
            return Err(TransportError::Fixture {
                message: format!("not a directory: {}", root.display()),
            });
        }
        Ok(Self { root })
    }

    /// The directory fixtures are served from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File backing a relative endpoint path.
    fn file_for(&self, path: &str) -> Result<PathBuf, TransportError> {
        let relative = Path::new(path.trim_start_matches('/'));

        let mut file = self.root.clone();
        for component in relative.components() {
            match component {
                Component::Normal(part) => file.push(part),
                _ => {
                    return Err(TransportError::Fixture {
                        message: format!("invalid fixture path: {path}"),
                    });
                }
            }
        }

        if file == self.root {
            return Err(TransportError::Fixture {
                message: format!("invalid fixture path: {path}"),
            });
        }

        // Identifiers may contain dots, so append rather than set_extension.
        let mut file = file.into_os_string();
        file.push(".json");
        Ok(PathBuf::from(file))
    }
}

impl Gateway for FixtureGateway {
    async fn fetch_json(&self, path: &str) -> Result<serde_json::Value, TransportError> {
        let file = self.file_for(path)?;
        debug!(file = %file.display(), "reading NexTrip fixture");

        let body = match tokio::fs::read_to_string(&file).await {
            Ok(body) => body,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(TransportError::Status {
                    status: 404,
                    message: format!("no fixture for {path}"),
                });
            }
            Err(e) => {
                return Err(TransportError::Fixture {
                    message: format!("failed to read {}: {e}", file.display()),
                });
            }
        };

        serde_json::from_str(&body).map_err(|e| TransportError::json(&e, &body))
    }
}
