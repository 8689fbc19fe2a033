use std::{collections::HashSet, fs, path::Path};

use tracing::{debug, info, instrument};

use super::{core::Word, Error};
use crate::framework::config::WordleConfig;

const EMBEDDED_GUESSES: &str = include_str!("../../../wordle/guesses.txt");
const EMBEDDED_ANSWERS: &str = include_str!("../../../wordle/answers.txt");

/// The accepted guesses and the daily answer schedule.
///
/// Loaded once at startup and only read afterwards.
#[derive(Debug, Clone)]
pub struct WordsList {
    dictionary: HashSet<Word>,
    answers: Vec<Word>,
}

impl WordsList {
    #[instrument(skip_all)]
    pub fn load(cfg: &WordleConfig) -> Result<Self, Error> {
        let guesses = read_list("guesses", cfg.guesses_file.as_deref(), EMBEDDED_GUESSES)?;
        let answers = read_list("answers", cfg.answers_file.as_deref(), EMBEDDED_ANSWERS)?;

        let list = Self::from_lists(guesses, answers)?;
        info!(
            guesses = list.len_guesses(),
            answers = list.len_answers(),
            "loaded words"
        );

        Ok(list)
    }

    pub fn from_lists(
        guesses: impl IntoIterator<Item = Word>,
        answers: Vec<Word>,
    ) -> Result<Self, Error> {
        if answers.is_empty() {
            return Err(Error::NoAnswers);
        }

        let dictionary = guesses
            .into_iter()
            .chain(answers.iter().copied())
            .collect::<HashSet<Word>>();

        Ok(Self {
            dictionary,
            answers,
        })
    }

    pub fn is_valid_guess(&self, word: &Word) -> bool {
        self.dictionary.contains(word)
    }

    pub fn solution_for_day(&self, day_index: i64) -> Result<Word, Error> {
        usize::try_from(day_index)
            .ok()
            .and_then(|index| self.answers.get(index))
            .copied()
            .ok_or(Error::OutOfRange {
                day_index,
                available: self.answers.len(),
            })
    }

    pub fn len_answers(&self) -> usize {
        self.answers.len()
    }

    /// Size of the whole dictionary, answers included.
    pub fn len_guesses(&self) -> usize {
        self.dictionary.len()
    }
}

fn read_list(name: &str, path: Option<&Path>, embedded: &str) -> Result<Vec<Word>, Error> {
    let contents = match path {
        Some(path) => {
            debug!(list = name, path = %path.display(), "reading words file");
            fs::read_to_string(path).map_err(|source| Error::WordsFile {
                path: path.to_owned(),
                source,
            })?
        }
        None => {
            debug!(list = name, "using embedded words");
            embedded.to_owned()
        }
    };

    parse_list(name, &contents)
}

fn parse_list(name: &str, contents: &str) -> Result<Vec<Word>, Error> {
    contents
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line, word)| {
            word.parse::<Word>().map_err(|source| Error::BadWord {
                list: name.to_owned(),
                line,
                source,
            })
        })
        .collect()
}
