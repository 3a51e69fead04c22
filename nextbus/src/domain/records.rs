//! NexTrip record types.
//!
//! These map directly onto the vendor's JSON objects (PascalCase keys). Each
//! entity exposes `id()` and `label()` accessors so the matcher and pipeline
//! can treat them uniformly without string field lookups.

use serde::Deserialize;

/// A transit route, e.g. `{"Description":"21 - Uptown - Lake St - Selby Av","ProviderID":"8","Route":"21"}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Route {
    /// Human-readable description; patterns match against this.
    pub description: String,

    /// Opaque route identifier.
    pub route: String,
}

impl Route {
    pub fn id(&self) -> &str {
        &self.route
    }

    pub fn label(&self) -> &str {
        &self.description
    }
}

/// A direction of travel on one route, e.g. `{"Text":"EASTBOUND","Value":"2"}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Direction {
    pub text: String,
    pub value: String,
}

impl Direction {
    pub fn id(&self) -> &str {
        &self.value
    }

    pub fn label(&self) -> &str {
        &self.text
    }
}

/// A stop on a route+direction, e.g. `{"Text":"Snelling Ave and University Ave","Value":"SNUN"}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Stop {
    pub text: String,
    pub value: String,
}

impl Stop {
    pub fn id(&self) -> &str {
        &self.value
    }

    pub fn label(&self) -> &str {
        &self.text
    }
}

/// One upcoming vehicle at a stop.
///
/// Only the two departure fields are required. Vehicle position and block
/// fields in the vendor record are not read.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Departure {
    /// Vendor timestamp, `/Date(<millis>-0500)/`.
    pub departure_time: String,

    /// Vendor display text: "2 Min", "10:08", "Due".
    pub departure_text: String,

    /// True when the time is a real-time estimate rather than the schedule.
    #[serde(default)]
    pub actual: bool,

    /// Where the vehicle is headed, e.g. "Selby Av / Union Depot".
    pub description: Option<String>,

    /// e.g. "EASTBOUND".
    pub route_direction: Option<String>,

    /// Route variant letter.
    pub terminal: Option<String>,
}

impl Departure {
    /// Create a departure with only the required fields set.
    pub fn new(departure_time: impl Into<String>, departure_text: impl Into<String>) -> Self {
        Self {
            departure_time: departure_time.into(),
            departure_text: departure_text.into(),
            actual: false,
            description: None,
            route_direction: None,
            terminal: None,
        }
    }
}
