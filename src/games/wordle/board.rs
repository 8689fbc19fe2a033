use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace};

use super::{
    core::{AsEmoji, Guess, Scoring, Word},
    WordsList,
};

pub const MAX_GUESSES: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameStatus {
    InProgress,
    Solved,
    Exhausted,
}

impl GameStatus {
    pub fn is_finished(self) -> bool {
        matches!(self, Self::Solved | Self::Exhausted)
    }
}

/// Why a submitted word was not added to the board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("no word submitted")]
    Missing,

    #[error("`{0}` is not a valid guess")]
    Invalid(String),
}

impl GuessError {
    /// The word shown back to the player; `missing` when nothing was sent.
    pub fn invalid_word(&self) -> &str {
        match self {
            Self::Missing => "missing",
            Self::Invalid(word) => word,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    attempts: Vec<Word>,
    guesses: Vec<Guess>,
    pub status: GameStatus,
    pub last_error: Option<GuessError>,
}

impl Board {
    /// Scores the prior attempts and, if the game is still open, the submitted word.
    pub fn evaluate(
        attempts: &[Word],
        submitted: Option<&str>,
        solution: &Word,
        words: &WordsList,
        scoring: Scoring,
    ) -> Self {
        let submitted = submitted.map(str::to_lowercase);
        debug!(attempts = attempts.len(), ?submitted);

        let attempts = &attempts[..attempts.len().min(MAX_GUESSES)];

        if attempts.contains(solution) {
            trace!("already solved, ignoring submission");
            return Self::new(attempts.to_vec(), solution, scoring, GameStatus::Solved, None);
        }

        if attempts.len() >= MAX_GUESSES {
            trace!("out of guesses, ignoring submission");
            return Self::new(
                attempts.to_vec(),
                solution,
                scoring,
                GameStatus::Exhausted,
                None,
            );
        }

        let Some(submitted) = submitted else {
            return Self::new(
                attempts.to_vec(),
                solution,
                scoring,
                GameStatus::InProgress,
                Some(GuessError::Missing),
            );
        };

        match submitted.parse::<Word>() {
            Ok(word) if word == *solution || words.is_valid_guess(&word) => {
                let mut extended = attempts.to_vec();
                extended.push(word);

                let status = if word == *solution {
                    GameStatus::Solved
                } else if extended.len() >= MAX_GUESSES {
                    GameStatus::Exhausted
                } else {
                    GameStatus::InProgress
                };

                Self::new(extended, solution, scoring, status, None)
            }
            _ => {
                debug!(%submitted, "rejected guess");
                Self::new(
                    attempts.to_vec(),
                    solution,
                    scoring,
                    GameStatus::InProgress,
                    Some(GuessError::Invalid(submitted)),
                )
            }
        }
    }

    fn new(
        attempts: Vec<Word>,
        solution: &Word,
        scoring: Scoring,
        status: GameStatus,
        last_error: Option<GuessError>,
    ) -> Self {
        let guesses = attempts
            .iter()
            .map(|attempt| solution.guess(attempt, scoring))
            .collect();

        Self {
            attempts,
            guesses,
            status,
            last_error,
        }
    }

    pub fn attempts(&self) -> &[Word] {
        &self.attempts
    }

    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    pub fn count_guesses(&self) -> usize {
        self.guesses.len()
    }

    /// Every row of the grid, padded with pending rows up to the guess limit.
    pub fn rows(&self) -> Vec<Guess> {
        let pending = MAX_GUESSES.saturating_sub(self.guesses.len());

        self.guesses
            .iter()
            .cloned()
            .chain(std::iter::repeat_with(Guess::pending).take(pending))
            .collect()
    }

    pub fn score(&self) -> String {
        match self.status {
            GameStatus::Exhausted => format!("X/{MAX_GUESSES}"),
            _ => format!("{}/{MAX_GUESSES}", self.count_guesses()),
        }
    }

    pub fn share(&self, title: &str) -> String {
        format!("{title} {}\n\n{}", self.score(), self.rows().as_emoji())
    }
}
