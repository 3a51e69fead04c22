//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::resolve::{LookupError, Query, Resolution, Stage, render};

/// Query string of `GET /next`.
#[derive(Debug, Default, Deserialize)]
pub struct NextBusRequest {
    /// Route pattern, e.g. "#21" or "lake st"
    pub route: Option<String>,

    /// Stop pattern
    pub stop: Option<String>,

    /// Direction pattern, e.g. "east"
    pub direction: Option<String>,

    /// Report the vendor's departure text instead of the countdown
    #[serde(default)]
    pub verbose: bool,
}

impl NextBusRequest {
    /// The lookup to run. Fails with the name of the first missing or empty
    /// pattern.
    pub fn to_query(&self) -> Result<Query, &'static str> {
        let route = required(&self.route, "route")?;
        let stop = required(&self.stop, "stop")?;
        let direction = required(&self.direction, "direction")?;
        Ok(Query::new(route, stop, direction))
    }
}

fn required<'a>(value: &'a Option<String>, name: &'static str) -> Result<&'a str, &'static str> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(name),
    }
}

/// How a lookup ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    Arriving,
    NoFurtherService,
    NoMatch,
    Ambiguous,
    NetworkError,
    UnknownError,
}

/// Response of `GET /next`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NextBusResponse {
    pub outcome: OutcomeKind,

    /// The line the command-line tool would print
    pub result: String,

    /// Stage a match failure happened at
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<Stage>,

    /// Labels of every matching record, in vendor order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidates: Option<Vec<String>>,

    /// Unrounded wait in minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes: Option<f64>,

    /// Vendor display text, e.g. "4 Min" or "10:08"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departure_text: Option<String>,

    /// Whether the departure is tracked in real time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<bool>,

    /// Where the departing vehicle is headed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,

    /// Vendor direction of the departing vehicle, e.g. "EASTBOUND"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_direction: Option<String>,

    /// Route variant letter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminal: Option<String>,
}

impl NextBusResponse {
    pub fn from_result(result: &Result<Resolution, LookupError>, verbose: bool) -> Self {
        let line = render(result, verbose);

        match result {
            Ok(Resolution::Arriving(next)) => {
                let departure = &next.departure;
                Self {
                    minutes: Some(next.minutes),
                    departure_text: Some(departure.departure_text.clone()),
                    actual: Some(departure.actual),
                    destination: departure.description.clone(),
                    route_direction: departure.route_direction.clone(),
                    terminal: departure.terminal.clone(),
                    ..Self::bare(OutcomeKind::Arriving, line)
                }
            }
            Ok(Resolution::NoFurtherService) => Self::bare(OutcomeKind::NoFurtherService, line),
            Err(err) => {
                let outcome = match err {
                    LookupError::NoMatch(_) => OutcomeKind::NoMatch,
                    LookupError::Ambiguous { .. } => OutcomeKind::Ambiguous,
                    LookupError::Transport(_) => OutcomeKind::NetworkError,
                    LookupError::Unknown(_) => OutcomeKind::UnknownError,
                };
                let candidates = match err {
                    LookupError::Ambiguous { candidates, .. } => Some(candidates.clone()),
                    _ => None,
                };
                Self {
                    stage: err.stage(),
                    candidates,
                    ..Self::bare(outcome, line)
                }
            }
        }
    }

    fn bare(outcome: OutcomeKind, result: String) -> Self {
        Self {
            outcome,
            result,
            stage: None,
            candidates: None,
            minutes: None,
            departure_text: None,
            actual: None,
            destination: None,
            route_direction: None,
            terminal: None,
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
