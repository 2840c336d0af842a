//! Tracing subscriber setup

use at_shared::config::{LogFormat, LoggingConfig};
use tracing_subscriber::EnvFilter;

/// Build the filter for a logging configuration. `RUST_LOG` wins when set.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global fmt subscriber
///
/// Returns `false` when a global subscriber was already installed, in which
/// case the existing one is left in place.
pub fn init_tracing(config: &LoggingConfig) -> bool {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_ansi(config.colored)
        .with_file(config.source_location)
        .with_line_number(config.source_location);

    let result = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };

    result.is_ok()
}
