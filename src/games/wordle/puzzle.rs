use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::{core::Word, Error, WordsList};

/// The date of puzzle 0.
pub fn default_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2022, 1, 28).expect("hard-coded epoch should be a valid date")
}

/// How the distance from the epoch is measured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayCounting {
    /// Calendar days since the epoch.
    #[default]
    Elapsed,

    /// Difference of the dates written as `YYYYMMDD` numbers. Skips ahead at
    /// every month and year boundary; kept for compatibility with old puzzle
    /// numbers.
    Numeric,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleSelector {
    epoch: NaiveDate,
    counting: DayCounting,
}

impl Default for PuzzleSelector {
    fn default() -> Self {
        Self::new(default_epoch(), DayCounting::default())
    }
}

impl PuzzleSelector {
    pub const fn new(epoch: NaiveDate, counting: DayCounting) -> Self {
        Self { epoch, counting }
    }

    pub fn day_index(&self, date: NaiveDate) -> i64 {
        match self.counting {
            DayCounting::Elapsed => (date - self.epoch).num_days(),
            DayCounting::Numeric => numeric_date(date) - numeric_date(self.epoch),
        }
    }

    #[instrument(skip(self, words))]
    pub fn daily(&self, date: NaiveDate, words: &WordsList) -> Result<DailyPuzzle, Error> {
        let number = self.day_index(date);
        debug!(number, counting = ?self.counting);

        let answer = words.solution_for_day(number)?;

        Ok(DailyPuzzle {
            number,
            date,
            answer,
        })
    }
}

/// Packs a date as `year * 10000 + month * 100 + day`.
pub fn numeric_date(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 10_000 + i64::from(date.month()) * 100 + i64::from(date.day())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyPuzzle {
    pub number: i64,
    pub date: NaiveDate,
    answer: Word,
}

impl DailyPuzzle {
    pub fn answer(&self) -> &Word {
        &self.answer
    }

    pub fn title(&self) -> String {
        format!("wordle-remix {}", self.number)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::{default_epoch, numeric_date, DayCounting, PuzzleSelector};
    use crate::games::wordle::{core::Word, Error, WordsList};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn packs_dates() {
        assert_eq!(numeric_date(date(2022, 1, 28)), 20220128);
        assert_eq!(numeric_date(date(1999, 12, 31)), 19991231);
    }

    #[test]
    fn epoch_is_day_zero_every_time() {
        for counting in [DayCounting::Elapsed, DayCounting::Numeric] {
            let first = PuzzleSelector::new(default_epoch(), counting);
            let second = PuzzleSelector::new(date(2022, 1, 28), counting);

            assert_eq!(first.day_index(default_epoch()), 0);
            assert_eq!(second.day_index(default_epoch()), 0);

            let later = date(2022, 3, 14);
            assert_eq!(first.day_index(later), second.day_index(later));
            assert_eq!(first.day_index(later), first.day_index(later));
        }
    }

    #[test]
    fn numeric_skips_at_month_boundary() {
        let selector = PuzzleSelector::new(default_epoch(), DayCounting::Numeric);

        assert_eq!(selector.day_index(date(2022, 1, 31)), 3);
        assert_eq!(selector.day_index(date(2022, 2, 1)), 73);
        assert_eq!(selector.day_index(date(2023, 1, 28)), 10000);
    }

    #[test]
    fn elapsed_counts_days() {
        let selector = PuzzleSelector::default();

        assert_eq!(selector.day_index(date(2022, 1, 31)), 3);
        assert_eq!(selector.day_index(date(2022, 2, 1)), 4);
        assert_eq!(selector.day_index(date(2023, 1, 28)), 365);
        assert_eq!(selector.day_index(date(2022, 1, 27)), -1);
    }

    #[test]
    fn daily_resolves_answer() {
        let words = WordsList::from_lists(
            Vec::<Word>::new(),
            ["words", "amber", "today"]
                .iter()
                .map(|s| s.parse().unwrap())
                .collect(),
        )
        .unwrap();
        let selector = PuzzleSelector::default();

        let puzzle = selector.daily(date(2022, 1, 30), &words).unwrap();
        assert_eq!(puzzle.number, 2);
        assert_eq!(puzzle.answer().to_string(), "today");
        assert_eq!(puzzle.title(), "wordle-remix 2");

        assert!(matches!(
            selector.daily(date(2022, 1, 31), &words),
            Err(Error::OutOfRange { day_index: 3, .. })
        ));
        assert!(matches!(
            selector.daily(date(2022, 1, 27), &words),
            Err(Error::OutOfRange { day_index: -1, .. })
        ));
    }
}
