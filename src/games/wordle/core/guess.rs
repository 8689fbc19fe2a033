use std::{borrow::Cow, fmt};

use serde::{Deserialize, Serialize};

use super::{AsEmoji, Word, WORD_LENGTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub letter: char,
    pub state: LetterState,
}

/// One scored row of the board.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Guess {
    cells: Vec<Cell>,
}

impl Guess {
    pub fn new(word: &Word) -> Self {
        let cells = word
            .iter()
            .map(|letter| Cell {
                letter: *letter,
                state: LetterState::NotPresent,
            })
            .collect();

        Self { cells }
    }

    /// A row that hasn't been guessed yet.
    pub fn pending() -> Self {
        Self {
            cells: vec![
                Cell {
                    letter: ' ',
                    state: LetterState::Pending,
                };
                WORD_LENGTH
            ],
        }
    }

    pub fn is_correct(&self) -> bool {
        self.cells
            .iter()
            .all(|cell| cell.state == LetterState::Correct)
    }

    pub fn is_pending(&self) -> bool {
        self.cells
            .iter()
            .all(|cell| cell.state == LetterState::Pending)
    }

    pub fn states(&self) -> Vec<LetterState> {
        self.cells.iter().map(|cell| cell.state).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Cell> + '_ {
        self.cells.iter_mut()
    }
}

impl AsEmoji for Guess {
    fn as_emoji(&self) -> Cow<str> {
        self.states().as_emoji().into_owned().into()
    }

    fn emoji_with_letters(&self) -> String {
        let (letters, states) = self.cells.iter().fold(
            (String::new(), String::new()),
            |(letters, states), cell| {
                (
                    letters + " " + &cell.letter.to_ascii_uppercase().to_string(),
                    states + &cell.state.as_emoji(),
                )
            },
        );

        letters.trim().to_owned() + "\n" + &states
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell.state)?;
        }
        Ok(())
    }
}

impl PartialEq<&str> for Guess {
    fn eq(&self, other: &&str) -> bool {
        &self.to_string() == other
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum LetterState {
    #[default]
    #[serde(rename = "absent")]
    NotPresent,
    #[serde(rename = "presentWrongPosition")]
    WrongPlace,
    #[serde(rename = "correctPosition")]
    Correct,
    #[serde(rename = "pendingInput")]
    Pending,
}

impl AsEmoji for LetterState {
    fn as_emoji(&self) -> Cow<str> {
        match self {
            Self::Correct => "🟩",    // green square
            Self::WrongPlace => "🟨", // yellow square
            Self::NotPresent => "⬛", // black square
            Self::Pending => "⬜",    // white square
        }
        .into()
    }
}

impl fmt::Display for LetterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Correct => "O",
            Self::WrongPlace => "o",
            Self::NotPresent => ".",
            Self::Pending => "_",
        })
    }
}

#[cfg(test)]
mod tests {
    use paste::paste;

    use super::super::{Scoring, Word};

    macro_rules! string_match {
        ($scoring:ident: $($word:ident, $guess:ident => $result:expr;)+) => {
            paste! {
                $(
                    #[test]
                    fn [<$scoring:lower _ $word _ $guess>]() {
                        let word: Word = stringify!($word).parse().unwrap();
                        let guess: Word = stringify!($guess).parse().unwrap();
                        pretty_assertions::assert_eq!(
                            word.guess(&guess, Scoring::$scoring), $result
                        )
                    }
                )+
            }
        };
    }

    string_match! { Lenient:
        words, words => "OOOOO";
        words, weary => "O..o.";
        words, teary => "...o.";
        words, pluto => "....o";
        words, rebus => "o...O";
        words, sassy => "o.oo.";
        words, color => ".O.oo";
        amber, handy => ".o...";
        mummy, tummy => ".OOOO";
        today, level => ".....";
        level, eerie => "oO..o";
    }

    string_match! { Canonical:
        words, words => "OOOOO";
        words, weary => "O..o.";
        words, sassy => "o....";
        words, color => ".O..o";
        amber, arbor => "O.O.O";
        addra, opals => "..o..";
        scene, eager => "o..o.";
        royal, newly => "...oo";
        spend, super => "O.oo.";
        solve, shoot => "O.o..";
        flash, death => "..O.O";
        event, dealt => ".o..O";
        level, eerie => "oO...";
    }

    #[test]
    fn pending_row() {
        let row = super::Guess::pending();
        assert!(row.is_pending());
        assert!(!row.is_correct());
        pretty_assertions::assert_eq!(row.to_string(), "_____");
    }

    #[test]
    fn serializes_with_wire_names() {
        let word: Word = "words".parse().unwrap();
        let guess = word.guess(&"weary".parse().unwrap(), Scoring::Lenient);
        let json = serde_json::to_value(&guess).unwrap();

        pretty_assertions::assert_eq!(
            json,
            serde_json::json!([
                { "letter": "w", "state": "correctPosition" },
                { "letter": "e", "state": "absent" },
                { "letter": "a", "state": "absent" },
                { "letter": "r", "state": "presentWrongPosition" },
                { "letter": "y", "state": "absent" },
            ])
        );
    }
}
