//! NexTrip timestamp parsing.
//!
//! NexTrip encodes times as `/Date(1533074640000-0500)/`: milliseconds since
//! the Unix epoch followed by a UTC offset. The millisecond value is already
//! absolute, so the offset never feeds the instant. A suffix that does not
//! read as `±HHMM` is logged and skipped rather than failing the departure.

use chrono::{DateTime, Utc};
use tracing::debug;

/// Error returned when a vendor timestamp cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid vendor timestamp {input:?}: {reason}")]
pub struct InvalidTimestamp {
    input: String,
    reason: &'static str,
}

impl InvalidTimestamp {
    fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }
}

/// A parsed `/Date(<millis>±HHMM)/` value.
///
/// # Examples
///
/// ```
/// use nextbus::domain::VendorTimestamp;
///
/// let ts = VendorTimestamp::parse("/Date(1533074640000-0500)/").unwrap();
/// assert_eq!(ts.instant().timestamp_millis(), 1_533_074_640_000);
///
/// assert!(VendorTimestamp::parse("2018-07-31T17:04:00").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VendorTimestamp {
    instant: DateTime<Utc>,
}

impl VendorTimestamp {
    /// Parse a vendor timestamp.
    ///
    /// The millisecond value may carry a sign. Anything after it must start
    /// like an offset (`+`, `-` or `Z`).
    pub fn parse(s: &str) -> Result<Self, InvalidTimestamp> {
        let inner = s
            .strip_prefix("/Date(")
            .and_then(|rest| rest.strip_suffix(")/"))
            .ok_or_else(|| InvalidTimestamp::new(s, "expected /Date(...)/ wrapper"))?;

        let bytes = inner.as_bytes();
        let sign_len = usize::from(matches!(bytes.first(), Some(b'-' | b'+')));
        let digits = bytes[sign_len..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if digits == 0 {
            return Err(InvalidTimestamp::new(s, "missing millisecond value"));
        }

        // Sign and digits are ASCII, so this is a char boundary.
        let (millis, suffix) = inner.split_at(sign_len + digits);
        let millis: i64 = millis
            .parse()
            .map_err(|_| InvalidTimestamp::new(s, "millisecond value out of range"))?;

        if !suffix.is_empty() {
            if !suffix.starts_with(['+', '-', 'Z']) {
                return Err(InvalidTimestamp::new(s, "unexpected text after millisecond value"));
            }
            if !is_offset(suffix) {
                debug!(input = s, suffix, "ignoring malformed offset suffix");
            }
        }

        let instant = DateTime::from_timestamp_millis(millis)
            .ok_or_else(|| InvalidTimestamp::new(s, "millisecond value out of range"))?;

        Ok(Self { instant })
    }

    /// The absolute instant encoded by the millisecond value.
    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }
}

/// Whether `s` is a `±HHMM` offset with hours up to 23.
fn is_offset(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != 5 || !matches!(bytes[0], b'+' | b'-') {
        return false;
    }
    if !bytes[1..].iter().all(u8::is_ascii_digit) {
        return false;
    }

    let hours = (bytes[1] - b'0') * 10 + (bytes[2] - b'0');
    let minutes = (bytes[3] - b'0') * 10 + (bytes[4] - b'0');
    hours <= 23 && minutes <= 59
}
