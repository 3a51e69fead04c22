//! Lookup outcomes that end the pipeline early.

use std::fmt;

use serde::Serialize;

use crate::domain::InvalidTimestamp;
use crate::metro::TransportError;

/// The matching stage a lookup failed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Route,
    Direction,
    Stop,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Route => "ROUTE",
            Stage::Direction => "DIRECTION",
            Stage::Stop => "STOP",
        })
    }
}

/// Vendor data that could not be interpreted.
#[derive(Debug, thiserror::Error)]
pub enum UnexpectedData {
    /// A response did not have the expected record shape
    #[error("malformed {what}: {source}")]
    Malformed {
        what: &'static str,
        source: serde_json::Error,
    },

    /// A departure carried an unparseable timestamp
    #[error(transparent)]
    Timestamp(#[from] InvalidTimestamp),
}

/// Why a lookup produced no departure.
///
/// The `Display` output is the exact line printed to users and scripts.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// The pattern matched nothing at this stage
    #[error("NO MATCH ON {0}")]
    NoMatch(Stage),

    /// The pattern matched several records; their labels in vendor order
    #[error("MULTIPLE MATCHES ON {stage}: {}", .candidates.join(", "))]
    Ambiguous {
        stage: Stage,
        candidates: Vec<String>,
    },

    /// Any failure to fetch a document, whichever stage issued it
    #[error("NETWORK ERROR")]
    Transport(#[from] TransportError),

    /// Anything else
    #[error("UNKNOWN ERROR")]
    Unknown(#[source] UnexpectedData),
}

impl LookupError {
    /// The stage a match failure happened at, if this is a match failure.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            LookupError::NoMatch(stage) | LookupError::Ambiguous { stage, .. } => Some(*stage),
            LookupError::Transport(_) | LookupError::Unknown(_) => None,
        }
    }
}

impl From<UnexpectedData> for LookupError {
    fn from(err: UnexpectedData) -> Self {
        LookupError::Unknown(err)
    }
}

impl From<InvalidTimestamp> for LookupError {
    fn from(err: InvalidTimestamp) -> Self {
        LookupError::Unknown(UnexpectedData::Timestamp(err))
    }
}
