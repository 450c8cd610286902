/*!
# mooddiary

mooddiary is a small diary that tags every entry with a coarse mood, keeps a list
of personal goals, and awards achievement badges as entries accumulate. All
state is held in memory for a single session.

## Architecture

- `sentiment`: keyword-count mood classifier
- `diary_core`: entry and goal stores, badges, reminder check, mood counts
- `report`: message and listing rendering
- `session`: interactive command loop
- `cli`: command-line interface handling using clap
- `config`: configuration loading and validation
- `errors`: error handling infrastructure
- `logging`: tracing subscriber setup

## Usage Example

```rust
use mooddiary::diary_core::DiaryState;
use mooddiary::report;
use chrono::Local;

let mut diary = DiaryState::new();
let added = diary.add_entry("A great walk in the park", Local::now().naive_local());
println!("{}", report::entry_added(&added));
println!("{}", report::mood_graph(diary.list_entries()));
```
*/

/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Constants used throughout the application
pub mod constants;
/// Diary state and the logic operating on it
pub mod diary_core;
/// Error types and utilities for error handling
pub mod errors;
/// Tracing subscriber setup
pub mod logging;
/// Rendering of messages and listings
pub mod report;
/// Keyword-based mood classification
pub mod sentiment;
/// Interactive command loop
pub mod session;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use diary_core::DiaryState;
pub use errors::{AppError, AppResult};
pub use sentiment::Mood;
