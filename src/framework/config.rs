use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use rand::seq::IteratorRandom;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::games::wordle::{core::Scoring, puzzle, DayCounting, PuzzleSelector};

pub const DEFAULT_CONFIG_FILE: &str = "wordle-remix.toml";
const ENV_PREFIX: &str = "WORDLE_REMIX";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("file read error: {0}")]
    Read(config::ConfigError),

    #[error("parsing error: {0}")]
    Parse(config::ConfigError),
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub wordle: WordleConfig,
    #[serde(default)]
    pub logs: LogsConfig,
}

impl Config {
    /// Reads `path` (if it exists) and overrides from `WORDLE_REMIX__*` variables.
    #[tracing::instrument]
    pub fn load(path: &Path) -> Result<Self, Error> {
        debug!("loading config");

        ::config::Config::builder()
            .add_source(::config::File::from(path).required(false))
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()
            .map_err(Error::Read)?
            .try_deserialize()
            .map_err(Error::Parse)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct WordleConfig {
    pub guesses_file: Option<PathBuf>,
    pub answers_file: Option<PathBuf>,
    pub epoch: NaiveDate,
    pub day_counting: DayCounting,
    pub scoring: Scoring,
}

impl Default for WordleConfig {
    fn default() -> Self {
        Self {
            guesses_file: None,
            answers_file: None,
            epoch: puzzle::default_epoch(),
            day_counting: DayCounting::default(),
            scoring: Scoring::default(),
        }
    }
}

impl WordleConfig {
    pub fn selector(&self) -> PuzzleSelector {
        PuzzleSelector::new(self.epoch, self.day_counting)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct LogsConfig {
    filter: Option<String>,
    flavor_texts: Vec<String>,
}

impl LogsConfig {
    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    pub fn flavor_text(&self) -> Option<&str> {
        let flavor_text = self
            .flavor_texts
            .iter()
            .choose(&mut rand::thread_rng())
            .map(|s| s.as_str());

        if flavor_text.is_none() {
            debug!("no flavor texts provided in config");
        }

        flavor_text
    }
}
