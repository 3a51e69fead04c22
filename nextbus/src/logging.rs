//! Tracing setup shared by both binaries.
//!
//! Events go to stderr so that stdout carries nothing but result lines.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding filter directives, e.g. `nextbus=debug`.
pub const LOG_ENV: &str = "NEXTBUS_LOG";

/// Install the global subscriber.
///
/// `default_directives` applies when `NEXTBUS_LOG` is unset or invalid.
/// Calling this twice is harmless; the second call is ignored.
pub fn init(default_directives: &str) {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directives));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}
