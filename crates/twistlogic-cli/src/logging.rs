//! Logging setup: a `tracing-subscriber` fmt layer writing to stderr.

use tracing_subscriber::EnvFilter;

/// Level for a `-v` count; `None` leaves the choice to the config file.
pub fn verbosity_level(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Build the filter: `RUST_LOG` wins, then `-v`, then the configured level.
pub fn filter(verbose: u8, configured: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let level = verbosity_level(verbose).unwrap_or(configured);
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber. Calling this twice is harmless.
pub fn init(verbose: u8, configured: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose, configured))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
