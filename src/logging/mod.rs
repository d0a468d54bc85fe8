//! Diagnostic logging setup.
//!
//! Installs a `tracing` subscriber writing to stderr. `RUST_LOG` wins over
//! the configured level so a single run can be made chattier without
//! touching the config file.

use crate::config::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Build the filter: `RUST_LOG` if set and valid, else the configured level.
pub fn filter_for(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(config: &LoggingConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_for(config))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
