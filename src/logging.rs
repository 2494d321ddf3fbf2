//! Logging setup.
//!
//! Logs go to stderr so stdout stays clean for command output. `RUST_LOG`
//! takes precedence over the `-v` count.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Map a `-v` count to a log level.
#[must_use]
pub const fn level_for_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global subscriber.
///
/// Calling this more than once keeps the first subscriber.
pub fn init(verbosity: u8) {
    let level = level_for_verbosity(verbosity);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));

    let installed = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(filter)
        .try_init();

    if installed.is_ok() {
        tracing::debug!(%level, "logging initialized");
    }
}
