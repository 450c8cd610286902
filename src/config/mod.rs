//! Configuration management for the mooddiary application.
//!
//! This module handles loading and validating configuration settings from environment
//! variables, with sensible defaults. Command-line flags are applied on top of the
//! loaded values before validation.
//!
//! # Environment Variables
//!
//! - `MOODDIARY_LOG_FORMAT`: Log output format, `text` (default) or `json`
//! - `MOODDIARY_TIP_SEED`: Optional unsigned integer seeding mood-boosting tip selection

use crate::cli::CliArgs;
use crate::constants::{ENV_VAR_LOG_FORMAT, ENV_VAR_TIP_SEED, LOG_FORMAT_JSON, LOG_FORMAT_TEXT};
use crate::errors::{AppError, AppResult};
use std::env;

/// Configuration for the mooddiary application.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use mooddiary::Config;
///
/// let config = Config {
///     log_format: "json".to_string(),
///     tip_seed: Some(42),
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Log output format, either "text" or "json".
    pub log_format: String,

    /// Seed for tip selection. `None` seeds from system entropy.
    pub tip_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_format: LOG_FORMAT_TEXT.to_string(),
            tip_seed: None,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `MOODDIARY_TIP_SEED` is set but is not an
    /// unsigned integer.
    pub fn load() -> AppResult<Self> {
        let log_format = env::var(ENV_VAR_LOG_FORMAT)
            .map(|v| v.trim().to_lowercase())
            .unwrap_or_else(|_| LOG_FORMAT_TEXT.to_string());

        let tip_seed = match env::var(ENV_VAR_TIP_SEED) {
            Ok(raw) => Some(raw.trim().parse::<u64>().map_err(|_| {
                AppError::Config(format!(
                    "{} must be an unsigned integer, got '{}'",
                    ENV_VAR_TIP_SEED, raw
                ))
            })?),
            Err(_) => None,
        };

        Ok(Config {
            log_format,
            tip_seed,
        })
    }

    /// Applies command-line overrides. Flags win over environment variables.
    pub fn apply_cli(mut self, args: &CliArgs) -> Self {
        if let Some(format) = &args.log_format {
            self.log_format = format.trim().to_lowercase();
        }
        if args.seed.is_some() {
            self.tip_seed = args.seed;
        }
        self
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the log format is neither "text" nor "json".
    pub fn validate(&self) -> AppResult<()> {
        if self.log_format != LOG_FORMAT_TEXT && self.log_format != LOG_FORMAT_JSON {
            return Err(AppError::Config(format!(
                "Unknown log format '{}'. Expected '{}' or '{}'",
                self.log_format, LOG_FORMAT_TEXT, LOG_FORMAT_JSON
            )));
        }
        Ok(())
    }

    pub fn json_logs(&self) -> bool {
        self.log_format == LOG_FORMAT_JSON
    }
}
