//! Next bus lookup for Metro Transit.
//!
//! Answers "how long until the next bus on this route, at this stop, going
//! this way?" from loose fragments like `#21`, `snelling` and `east`. The
//! fragments are matched against the NexTrip route, direction and stop
//! lists in turn, then the first departure still in the future is turned
//! into a countdown.

pub mod arrival;
pub mod cli;
pub mod config;
pub mod domain;
pub mod logging;
pub mod matcher;
pub mod metro;
pub mod resolve;
pub mod web;
