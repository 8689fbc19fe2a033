use std::{collections::HashMap, fmt, ops::Index, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace};

use super::guess::{Guess, LetterState};

pub const WORD_LENGTH: usize = 5;

/// Five lowercase ASCII letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word {
    letters: [char; WORD_LENGTH],
}

/// How repeated letters in a guess are scored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scoring {
    /// Any letter found somewhere in the answer is marked as in the wrong place,
    /// no matter how many times the guess repeats it.
    #[default]
    Lenient,

    /// Each occurrence in the answer can only satisfy one letter of the guess.
    Canonical,
}

impl Word {
    pub fn iter(&self) -> impl Iterator<Item = &char> + '_ {
        self.letters.iter()
    }

    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    fn letter_counts(&self) -> HashMap<char, usize> {
        let mut counts = HashMap::new();
        for letter in self.iter() {
            *counts.entry(*letter).or_insert(0) += 1;
        }
        counts
    }

    /// Scores `word` against `self` as the answer.
    pub fn guess(&self, word: &Word, scoring: Scoring) -> Guess {
        let mut guess = Guess::new(word);
        debug!(%word, answer = %self, ?scoring);

        for (index, cell) in guess.iter_mut().enumerate() {
            if self[index] == cell.letter {
                cell.state = LetterState::Correct;
            }
        }

        match scoring {
            Scoring::Lenient => {
                for cell in guess.iter_mut() {
                    if cell.state != LetterState::Correct && self.contains(cell.letter) {
                        trace!("{}: wrong place", cell.letter);
                        cell.state = LetterState::WrongPlace;
                    }
                }
            }
            Scoring::Canonical => {
                let mut letter_counts = self.letter_counts();

                for cell in guess.iter() {
                    if cell.state == LetterState::Correct {
                        if let Some(count) = letter_counts.get_mut(&cell.letter) {
                            *count = count.saturating_sub(1);
                        }
                    }
                }

                for cell in guess.iter_mut() {
                    if cell.state == LetterState::Correct {
                        continue;
                    }

                    if let Some(count) = letter_counts
                        .get_mut(&cell.letter)
                        .filter(|count| **count > 0)
                    {
                        trace!("{}: wrong place", cell.letter);
                        cell.state = LetterState::WrongPlace;
                        *count -= 1;
                    }
                }
            }
        }

        guess
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseWordError {
    #[error("word `{0}` must have 5 letters but has {}", .0.chars().count())]
    Length(String),

    #[error("word `{0}` must only contain the letters a to z")]
    Letters(String),
}

impl FromStr for Word {
    type Err = ParseWordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().count() != WORD_LENGTH {
            return Err(ParseWordError::Length(s.to_owned()));
        }

        if !s.is_ascii() {
            return Err(ParseWordError::Letters(s.to_owned()));
        }

        let lowercase = s.to_ascii_lowercase();
        if !lowercase.chars().all(|ch| ch.is_ascii_lowercase()) {
            return Err(ParseWordError::Letters(s.to_owned()));
        }

        let mut letters = ['a'; WORD_LENGTH];
        for (slot, letter) in letters.iter_mut().zip(lowercase.chars()) {
            *slot = letter;
        }

        Ok(Self { letters })
    }
}

impl TryFrom<String> for Word {
    type Error = ParseWordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(&value)
    }
}

impl From<Word> for String {
    fn from(value: Word) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letters.iter().collect::<String>())
    }
}

impl Index<usize> for Word {
    type Output = char;

    fn index(&self, index: usize) -> &Self::Output {
        self.letters.index(index)
    }
}
