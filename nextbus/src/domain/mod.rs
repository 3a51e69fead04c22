//! Domain types for NexTrip lookups.
//!
//! Records are deserialized straight from the vendor's JSON and are never
//! stored beyond a single lookup.

mod records;
mod timestamp;

pub use records::{Departure, Direction, Route, Stop};
pub use timestamp::{InvalidTimestamp, VendorTimestamp};
