//! Constants used throughout the application.
//!
//! This module contains all constants used in the mooddiary application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "mooddiary";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "A mood-aware diary with goals and achievement badges";

// CLI Arguments & Defaults
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Log level used when `--verbose` is passed.
pub const VERBOSE_LOG_LEVEL: &str = "debug";

// Configuration Keys & Environment Variables
/// Environment variable selecting the log output format (`text` or `json`).
pub const ENV_VAR_LOG_FORMAT: &str = "MOODDIARY_LOG_FORMAT";
/// Environment variable holding an optional seed for tip selection.
pub const ENV_VAR_TIP_SEED: &str = "MOODDIARY_TIP_SEED";

// Badge Thresholds
/// Entries needed for the Consistent Journaler badge.
pub const CONSISTENT_JOURNALER_MIN_ENTRIES: usize = 7;
/// Positive-mood entries needed for the Positive Streak badge.
pub const POSITIVE_STREAK_MIN_POSITIVE: usize = 5;

// Date/Time Formats
/// Timestamp format shown for diary entries.
pub const ENTRY_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Date format shown for goals.
pub const GOAL_DATE_FORMAT: &str = "%Y-%m-%d";

// Rendering
/// Width of the dashed separator between listing records.
pub const SEPARATOR_WIDTH: usize = 40;
/// Character repeated once per entry in the mood graph.
pub const GRAPH_MARKER: char = '*';
/// Prompt shown before each session command.
pub const COMMAND_PROMPT: &str = "> ";

// Logging Configuration
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "mooddiary";
