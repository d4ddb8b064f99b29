//! Logging setup for the viewer binary.
//!
//! The subscriber writes to stderr and only activates when `ARV_LOG` is set,
//! so the terminal UI stays clean in normal use.

use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "ARV_LOG";

/// Install the global tracing subscriber if logging was requested.
pub fn init() {
    if std::env::var_os(LOG_ENV).is_none() {
        return;
    }

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
