//! NexTrip endpoint paths.

/// A NexTrip endpoint, relative to the service base URL.
///
/// Each scoped variant carries the full chain of ancestor identifiers, so a
/// path for a stop list cannot be built without a resolved route and
/// direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    /// All known routes.
    Routes,
    /// Directions served by a route.
    Directions { route: &'a str },
    /// Stops for a route travelling in one direction.
    Stops { route: &'a str, direction: &'a str },
    /// Upcoming departures at one stop.
    Departures {
        route: &'a str,
        direction: &'a str,
        stop: &'a str,
    },
}

impl Endpoint<'_> {
    /// Relative path, starting with `/`.
    pub fn path(&self) -> String {
        match self {
            Endpoint::Routes => "/Routes".to_string(),
            Endpoint::Directions { route } => format!("/Directions/{route}"),
            Endpoint::Stops { route, direction } => format!("/Stops/{route}/{direction}"),
            Endpoint::Departures {
                route,
                direction,
                stop,
            } => format!("/{route}/{direction}/{stop}"),
        }
    }

    /// Short description used in log events and error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            Endpoint::Routes => "route list",
            Endpoint::Directions { .. } => "direction list",
            Endpoint::Stops { .. } => "stop list",
            Endpoint::Departures { .. } => "departure list",
        }
    }
}
