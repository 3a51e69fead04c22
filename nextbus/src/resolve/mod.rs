//! Resolution of fuzzy route/stop/direction patterns to the next departure.
//!
//! A lookup runs four dependent stages, strictly one after another:
//!
//! 1. route list → exactly one route matching the route pattern
//! 2. directions for that route → exactly one matching direction
//! 3. stops for that route+direction → exactly one matching stop
//! 4. departures at that stop → the first one still in the future
//!
//! The first stage that fails ends the lookup with a [`LookupError`] whose
//! `Display` form is the program's fixed result vocabulary.

mod error;
mod pipeline;

#[cfg(test)]
mod pipeline_tests;

pub use error::{LookupError, Stage, UnexpectedData};
pub use pipeline::{NextBus, Query, Resolution, render};
