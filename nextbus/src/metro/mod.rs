//! Metro Transit NexTrip gateway.
//!
//! This module provides the transport boundary for the NexTrip real-time
//! departure service. It knows how to fetch a JSON document for a relative
//! path and nothing else: matching and interpretation of the records happen
//! in [`crate::resolve`].
//!
//! Key characteristics of NexTrip:
//! - Every endpoint answers XML by default; `format=json` is always appended
//! - Identifiers (route, direction, stop) are opaque strings and are only
//!   meaningful together with their ancestors
//! - Departure times are `/Date(<millis>-0500)/` strings

mod client;
mod endpoint;
mod error;
mod fixture;
mod gateway;

pub use client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, MetroTransitClient, MetroTransitConfig};
pub use endpoint::Endpoint;
pub use error::TransportError;
pub use fixture::FixtureGateway;
pub use gateway::{Backend, Gateway};
