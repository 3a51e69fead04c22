//! Arrival time calculation.
//!
//! Turns NexTrip departure records into "minutes from now". All functions
//! take the reference instant explicitly; only the entry points read the
//! wall clock.

use chrono::{DateTime, Utc};

use crate::domain::{Departure, InvalidTimestamp, VendorTimestamp};

/// Signed minutes from `now` until `departure`. Negative when it has left.
pub fn minutes_until(departure: &Departure, now: DateTime<Utc>) -> Result<f64, InvalidTimestamp> {
    let at = VendorTimestamp::parse(&departure.departure_time)?.instant();
    let delta = at.signed_duration_since(now);
    let seconds = delta.num_seconds() as f64 + f64::from(delta.subsec_nanos()) / 1_000_000_000.0;
    Ok(seconds / 60.0)
}

/// The departure picked by [`select_next`], with its computed wait.
#[derive(Debug, Clone, PartialEq)]
pub struct NextDeparture {
    pub departure: Departure,
    pub minutes: f64,
}

impl NextDeparture {
    /// Locally formatted wait, e.g. "4 Minutes".
    pub fn countdown(&self) -> String {
        format_minutes(self.minutes)
    }
}

/// First departure, in list order, that is still in the future.
///
/// NexTrip lists are not guaranteed to be sorted, so this is deliberately
/// the first qualifying entry rather than the minimum. Returns `None` when
/// every departure has already left. Timestamps after the chosen entry are
/// never parsed.
pub fn select_next(
    departures: Vec<Departure>,
    now: DateTime<Utc>,
) -> Result<Option<NextDeparture>, InvalidTimestamp> {
    for departure in departures {
        let minutes = minutes_until(&departure, now)?;
        if minutes > 0.0 {
            return Ok(Some(NextDeparture { departure, minutes }));
        }
    }
    Ok(None)
}

/// Render a wait as "1 Minute" or "<N> Minutes".
///
/// Rounds half to even. The sign is not checked.
///
/// # Examples
///
/// ```
/// use nextbus::arrival::format_minutes;
///
/// assert_eq!(format_minutes(1.007), "1 Minute");
/// assert_eq!(format_minutes(1.5), "2 Minutes");
/// assert_eq!(format_minutes(0.2), "0 Minutes");
/// ```
pub fn format_minutes(minutes: f64) -> String {
    let rounded = minutes.round_ties_even() as i64;
    if rounded == 1 {
        "1 Minute".to_string()
    } else {
        format!("{rounded} Minutes")
    }
}
