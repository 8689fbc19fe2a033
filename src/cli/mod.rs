use std::path::PathBuf;

use chrono::NaiveDate;

use crate::{framework::config::DEFAULT_CONFIG_FILE, games::wordle::GuessRequest};

/// A daily word-guessing puzzle.
#[derive(clap::Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Config file (TOML). Missing files are fine; defaults apply.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Submit a guess for the day's puzzle and print the board.
    Play(PlayArgs),

    /// Show which puzzle a date maps to.
    Today {
        /// Defaults to the current UTC date.
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Print the resolved configuration.
    Config,
}

#[derive(clap::Args, Debug)]
pub struct PlayArgs {
    /// Defaults to the current UTC date.
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// A previously accepted attempt; repeat in order.
    #[arg(long = "attempt")]
    pub attempts: Vec<String>,

    /// The new guess.
    #[arg(long)]
    pub word: Option<String>,

    /// Read the request as JSON from stdin instead.
    #[arg(long, conflicts_with_all = ["attempts", "word"])]
    pub stdin: bool,

    /// Print the response as JSON.
    #[arg(long)]
    pub json: bool,
}

impl PlayArgs {
    pub fn request(&self) -> GuessRequest {
        GuessRequest {
            attempts: self.attempts.clone(),
            word: self.word.clone(),
        }
    }
}
