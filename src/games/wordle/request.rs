use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use super::{
    board::{Board, GameStatus},
    core::{Guess, Scoring, Word},
    puzzle::{DailyPuzzle, PuzzleSelector},
    Error, WordsList,
};

/// A submission: the attempts the client echoed back plus the new word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GuessRequest {
    #[serde(default)]
    pub attempts: Vec<String>,
    #[serde(default)]
    pub word: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastError {
    pub invalid_word: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessResponse {
    pub puzzle: i64,
    pub board: Vec<Guess>,
    pub status: GameStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_error: Option<LastError>,
    pub attempts: Vec<String>,
    #[serde(skip)]
    pub share: String,
}

impl GuessResponse {
    fn new(puzzle: &DailyPuzzle, board: &Board) -> Self {
        Self {
            puzzle: puzzle.number,
            board: board.guesses().to_vec(),
            status: board.status,
            last_error: board.last_error.as_ref().map(|error| LastError {
                invalid_word: error.invalid_word().to_owned(),
            }),
            attempts: board.attempts().iter().map(Word::to_string).collect(),
            share: board.share(&puzzle.title()),
        }
    }
}

/// Shared, read-only state for handling requests.
#[derive(Debug, Clone)]
pub struct RequestHandler<'a> {
    words: &'a WordsList,
    selector: PuzzleSelector,
    scoring: Scoring,
}

impl<'a> RequestHandler<'a> {
    pub fn new(words: &'a WordsList, selector: PuzzleSelector, scoring: Scoring) -> Self {
        Self {
            words,
            selector,
            scoring,
        }
    }

    /// Handles one submission for the puzzle of `today`.
    ///
    /// Problems with the submitted word are reported in the response. Only a
    /// date without a puzzle fails the request.
    #[instrument(skip(self, request), fields(attempts = request.attempts.len()))]
    pub fn handle(&self, request: &GuessRequest, today: NaiveDate) -> Result<GuessResponse, Error> {
        let puzzle = self.selector.daily(today, self.words)?;
        let attempts = parse_attempts(&request.attempts);

        let board = Board::evaluate(
            &attempts,
            request.word.as_deref(),
            puzzle.answer(),
            self.words,
            self.scoring,
        );

        info!(
            puzzle = puzzle.number,
            status = ?board.status,
            guesses = board.count_guesses(),
            rejected = board.last_error.is_some(),
            "handled guess"
        );

        Ok(GuessResponse::new(&puzzle, &board))
    }
}

fn parse_attempts(attempts: &[String]) -> Vec<Word> {
    attempts
        .iter()
        .filter_map(|attempt| match attempt.parse::<Word>() {
            Ok(word) => Some(word),
            Err(error) => {
                warn!(%error, "dropping unreadable attempt");
                None
            }
        })
        .collect()
}
