use std::path::PathBuf;

use thiserror::Error;

use super::core::ParseWordError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no puzzle for day {day_index} (schedule has {available} answers)")]
    OutOfRange { day_index: i64, available: usize },

    #[error("couldn't read words file {}: {source}", path.display())]
    WordsFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{list} line {line}: {source}")]
    BadWord {
        list: String,
        line: usize,
        source: ParseWordError,
    },

    #[error("answers list is empty")]
    NoAnswers,
}

impl Error {
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}
