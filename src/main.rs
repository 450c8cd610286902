/*!
# mooddiary - A Mood-Aware Diary

mooddiary is an interactive terminal diary. Each entry is tagged with a mood
(Positive, Neutral or Negative) from a small keyword classifier, goals can be
jotted down alongside, and two achievement badges are awarded as the diary grows.

Everything lives in memory for the length of one session.

## Usage

```
mooddiary [OPTIONS] [COMMAND]

Commands:
  classify  Print the mood of the given text and exit

Options:
  -v, --verbose              Enable debug logging
      --log-format <FORMAT>  Log output format: text or json
      --seed <N>             Seed for mood-boosting tip selection
  -h, --help                 Print help
  -V, --version              Print version
```

## Configuration

- `MOODDIARY_LOG_FORMAT`: `text` (default) or `json`
- `MOODDIARY_TIP_SEED`: seed for tip selection
- `RUST_LOG`: overrides the log level
*/

use clap::Parser;
use mooddiary::cli::{CliArgs, Command};
use mooddiary::config::Config;
use mooddiary::constants::TRACING_SERVICE_NAME;
use mooddiary::errors::AppResult;
use mooddiary::logging;
use mooddiary::sentiment;
use mooddiary::session::Session;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;
use tracing::{debug, error, info, info_span};
use uuid::Uuid;

fn main() {
    let args = CliArgs::parse();

    if let Err(e) = run(args) {
        // Single point where errors are reported.
        error!(error = %e, "Application error");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Loads configuration, sets up logging, then either classifies the given text
/// or runs an interactive session on stdin/stdout.
fn run(args: CliArgs) -> AppResult<()> {
    let config = Config::load()?.apply_cli(&args);
    config.validate()?;

    logging::init(&config, args.verbose)?;

    let correlation_id = Uuid::new_v4();
    let span = info_span!(
        "app_invocation",
        service = TRACING_SERVICE_NAME,
        correlation_id = %correlation_id
    );
    let _guard = span.enter();

    info!("Starting mooddiary");
    debug!(
        verbose = args.verbose,
        seeded = config.tip_seed.is_some(),
        json_logs = config.json_logs(),
        "CLI arguments parsed"
    );

    match args.command {
        Some(Command::Classify { text }) => {
            let mood = sentiment::classify(&text.join(" "));
            println!("{}", mood);
        }
        None => {
            let rng = match config.tip_seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let stdin = io::stdin();
            let mut session = Session::new(stdin.lock(), io::stdout(), rng);
            session.run()?;
        }
    }

    info!("mooddiary finished");
    Ok(())
}
