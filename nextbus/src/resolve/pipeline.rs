//! The four-stage lookup.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::arrival::{NextDeparture, select_next};
use crate::domain::{Departure, Direction, Route, Stop};
use crate::matcher::{MatchOutcome, extract_matches};
use crate::metro::{Endpoint, Gateway};

use super::error::{LookupError, Stage, UnexpectedData};

/// The three user patterns for one lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Matched against route descriptions.
    pub route: String,
    /// Matched against stop names.
    pub stop: String,
    /// Matched against direction names ("NORTHBOUND", ...).
    pub direction: String,
}

impl Query {
    pub fn new(
        route: impl Into<String>,
        stop: impl Into<String>,
        direction: impl Into<String>,
    ) -> Self {
        Self {
            route: route.into(),
            stop: stop.into(),
            direction: direction.into(),
        }
    }
}

/// A lookup that got all the way to the departure list.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// A vehicle is still coming.
    Arriving(NextDeparture),
    /// Every listed departure has already left.
    NoFurtherService,
}

impl Resolution {
    /// The result line: the computed countdown, or the vendor's own text when
    /// `verbose`, or an empty line when service has ended.
    pub fn render(&self, verbose: bool) -> String {
        match self {
            Resolution::Arriving(next) if verbose => next.departure.departure_text.clone(),
            Resolution::Arriving(next) => next.countdown(),
            Resolution::NoFurtherService => String::new(),
        }
    }
}

/// Render any lookup result as the single line the program prints.
pub fn render(result: &Result<Resolution, LookupError>, verbose: bool) -> String {
    match result {
        Ok(resolution) => resolution.render(verbose),
        Err(err) => err.to_string(),
    }
}

/// Resolves queries against a NexTrip gateway.
///
/// Holds no state besides the gateway: every call refetches every list.
#[derive(Debug, Clone)]
pub struct NextBus<G> {
    gateway: G,
}

impl<G: Gateway> NextBus<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// Run the full lookup for `query`, measuring waits from `now`.
    pub async fn resolve(
        &self,
        query: &Query,
        now: DateTime<Utc>,
    ) -> Result<Resolution, LookupError> {
        let routes: Vec<Route> = self.fetch(Endpoint::Routes).await?;
        let route = unique(Stage::Route, routes, Route::label, &query.route)?;
        debug!(route = route.id(), "resolved route");

        let directions: Vec<Direction> = self
            .fetch(Endpoint::Directions { route: route.id() })
            .await?;
        let direction = unique(
            Stage::Direction,
            directions,
            Direction::label,
            &query.direction,
        )?;
        debug!(direction = direction.id(), "resolved direction");

        let stops: Vec<Stop> = self
            .fetch(Endpoint::Stops {
                route: route.id(),
                direction: direction.id(),
            })
            .await?;
        let stop = unique(Stage::Stop, stops, Stop::label, &query.stop)?;
        debug!(stop = stop.id(), "resolved stop");

        let departures: Vec<Departure> = self
            .fetch(Endpoint::Departures {
                route: route.id(),
                direction: direction.id(),
                stop: stop.id(),
            })
            .await?;

        match select_next(departures, now)? {
            Some(next) => Ok(Resolution::Arriving(next)),
            None => Ok(Resolution::NoFurtherService),
        }
    }

    /// Run a lookup and render its result line.
    pub async fn next_bus(&self, query: &Query, now: DateTime<Utc>, verbose: bool) -> String {
        let result = self.resolve(query, now).await;
        if let Err(err) = &result {
            log_failure(err);
        }
        render(&result, verbose)
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint<'_>,
    ) -> Result<Vec<T>, LookupError> {
        let value = self.gateway.fetch_json(&endpoint.path()).await?;
        let records = serde_json::from_value(value).map_err(|source| UnexpectedData::Malformed {
            what: endpoint.describe(),
            source,
        })?;
        Ok(records)
    }
}

/// Reduce `records` to the single one matching `pattern`.
fn unique<T, F>(stage: Stage, records: Vec<T>, label: F, pattern: &str) -> Result<T, LookupError>
where
    F: Fn(&T) -> &str,
{
    match MatchOutcome::from_matches(extract_matches(records, &label, pattern)) {
        MatchOutcome::Unique(record) => Ok(record),
        MatchOutcome::NoMatch => Err(LookupError::NoMatch(stage)),
        MatchOutcome::Multiple(records) => Err(LookupError::Ambiguous {
            stage,
            candidates: records.iter().map(|r| label(r).to_string()).collect(),
        }),
    }
}

/// Emit the underlying cause of a failed lookup.
fn log_failure(err: &LookupError) {
    match err {
        LookupError::Transport(cause) => debug!(error = %cause, "lookup failed in transport"),
        LookupError::Unknown(cause) => debug!(error = %cause, "lookup failed on vendor data"),
        LookupError::NoMatch(_) | LookupError::Ambiguous { .. } => {
            debug!(outcome = %err, "lookup ended at a matching stage")
        }
    }
}
