//! Gateway error types.

/// Errors from fetching a NexTrip document.
///
/// The resolution pipeline collapses every variant into the same
/// `NETWORK ERROR` outcome; the variants exist for logging.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// HTTP request failed (connection refused, DNS, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status code
    #[error("API error {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body was not valid JSON
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Fixture directory could not be read
    #[error("fixture error: {message}")]
    Fixture { message: String },
}

impl TransportError {
    pub(crate) fn json(err: &serde_json::Error, body: &str) -> Self {
        TransportError::Json {
            message: err.to_string(),
            body: Some(body.chars().take(500).collect()),
        }
    }
}
