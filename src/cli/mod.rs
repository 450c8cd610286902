use crate::constants::{APP_DESCRIPTION, APP_NAME};
use clap::{Parser, Subcommand};

/// A mood-aware diary with goals and achievement badges
#[derive(Parser, Debug)]
#[clap(name = APP_NAME, about = APP_DESCRIPTION)]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    /// Enable debug logging
    #[clap(short = 'v', long)]
    pub verbose: bool,

    /// Log output format: text or json
    #[clap(long, value_name = "FORMAT")]
    pub log_format: Option<String>,

    /// Seed for mood-boosting tip selection
    #[clap(long, value_name = "N")]
    pub seed: Option<u64>,

    #[clap(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Print the mood of the given text and exit
    Classify {
        /// Text to classify
        #[clap(required = true)]
        text: Vec<String>,
    },
}
