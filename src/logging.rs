//! Tracing subscriber setup.
//!
//! Logs always go to stderr so stdout only carries session output. `RUST_LOG`
//! takes precedence over the level chosen from `--verbose`.

use crate::config::Config;
use crate::constants::{DEFAULT_LOG_LEVEL, VERBOSE_LOG_LEVEL};
use crate::errors::{AppError, AppResult};
use tracing_subscriber::EnvFilter;

/// Picks the filter directive used when `RUST_LOG` is not set.
pub fn default_level(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_LOG_LEVEL
    } else {
        DEFAULT_LOG_LEVEL
    }
}

/// Installs the global subscriber. Fails if one is already installed.
pub fn init(config: &Config, verbose: bool) -> AppResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let result = if config.json_logs() {
        builder.json().with_current_span(true).try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| AppError::Config(format!("Failed to initialize logging: {}", e)))
}
