//! Tracing setup shared by the binaries.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "SMART_COMMITS_LOG";

/// Initialize the tracing subscriber.
///
/// Logs go to stderr. The filter comes from `SMART_COMMITS_LOG` and defaults
/// to `warn`, so a normal run adds no output of its own.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
