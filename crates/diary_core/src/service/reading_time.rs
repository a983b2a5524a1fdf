//! Reading-time based entry selection.
//!
//! # Responsibility
//! - Estimate whole-minute reading time for entries at a fixed speed.
//! - Pick the longest entry that fits a reading budget.
//!
//! # Invariants
//! - Words-per-minute is validated once, at construction, and is always > 0.
//! - Reading time is `ceil(words / wpm)`; empty contents read in 0 minutes.
//! - Budget is inclusive; ties on word count resolve to the earliest entry.

use crate::model::diary::Diary;
use crate::model::entry::Entry;
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ReadingTimeResult<T> = Result<T, ReadingTimeError>;

/// Configuration error for reading-time selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadingTimeError {
    /// Reading speed is zero or negative.
    InvalidConfiguration { words_per_minute: i64 },
}

impl Display for ReadingTimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfiguration { words_per_minute } => write!(
                f,
                "invalid configuration: WPM must be above 0 (got {words_per_minute})"
            ),
        }
    }
}

impl Error for ReadingTimeError {}

/// Selects diary entries by how long they take to read.
#[derive(Debug, Clone, Copy)]
pub struct ReadingTimeSelector<'d> {
    words_per_minute: u64,
    diary: &'d Diary,
}

impl<'d> ReadingTimeSelector<'d> {
    /// Creates a selector reading `diary` at `words_per_minute`.
    ///
    /// # Errors
    /// - `InvalidConfiguration` when `words_per_minute <= 0`.
    pub fn new(words_per_minute: i64, diary: &'d Diary) -> ReadingTimeResult<Self> {
        let words_per_minute = u64::try_from(words_per_minute)
            .ok()
            .filter(|value| *value > 0)
            .ok_or(ReadingTimeError::InvalidConfiguration { words_per_minute })?;
        Ok(Self {
            words_per_minute,
            diary,
        })
    }

    /// Whole minutes needed to read `entry`, rounded up.
    pub fn reading_time(&self, entry: &Entry) -> u64 {
        (count_words(entry.contents()) as u64).div_ceil(self.words_per_minute)
    }

    /// Returns the entry with the most words readable within `budget` minutes.
    ///
    /// Returns `None` when no entry fits, including for an empty diary.
    pub fn find_most_readable_in_time(&self, budget: u64) -> Option<&'d Entry> {
        let entries = self.diary.entries();
        // `max_by_key` keeps the last maximum; scan backwards so the earliest
        // entry wins ties.
        let found = entries
            .iter()
            .rev()
            .filter(|entry| self.reading_time(entry) <= budget)
            .max_by_key(|entry| count_words(entry.contents()));

        debug!(
            "event=find_readable module=reading_time status=ok wpm={} budget={} entries={} found={}",
            self.words_per_minute,
            budget,
            entries.len(),
            found.is_some()
        );
        found
    }
}

/// Counts tokens separated by ASCII whitespace; empty text has zero words.
///
/// Non-ASCII spaces such as U+00A0 do not split words.
pub fn count_words(contents: &str) -> usize {
    contents.split_ascii_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::{count_words, ReadingTimeError, ReadingTimeSelector};
    use crate::model::diary::Diary;
    use crate::model::entry::Entry;

    #[test]
    fn count_words_ignores_repeated_whitespace() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("   "), 0);
        assert_eq!(count_words(" one\ttwo \n three "), 3);
    }

    #[test]
    fn count_words_does_not_split_on_non_ascii_space() {
        assert_eq!(count_words("one\u{a0}two"), 1);
        assert_eq!(count_words("one\u{2003}two three"), 2);
    }

    #[test]
    fn reading_time_rounds_up() {
        let diary = Diary::new();
        let selector = ReadingTimeSelector::new(2, &diary).unwrap();

        assert_eq!(selector.reading_time(&Entry::new("t", "")), 0);
        assert_eq!(selector.reading_time(&Entry::new("t", "one")), 1);
        assert_eq!(selector.reading_time(&Entry::new("t", "one two")), 1);
        assert_eq!(selector.reading_time(&Entry::new("t", "one two three")), 2);
    }

    #[test]
    fn reading_time_rounds_up_at_other_speeds() {
        let diary = Diary::new();
        let one = ReadingTimeSelector::new(1, &diary).unwrap();
        let three = ReadingTimeSelector::new(3, &diary).unwrap();
        let four_words = Entry::new("t", "a b c d");
        let six_words = Entry::new("t", "a b c d e f");

        assert_eq!(one.reading_time(&four_words), 4);
        assert_eq!(one.reading_time(&Entry::new("t", "")), 0);
        assert_eq!(three.reading_time(&Entry::new("t", "a b c")), 1);
        assert_eq!(three.reading_time(&four_words), 2);
        assert_eq!(three.reading_time(&six_words), 2);
        assert_eq!(three.reading_time(&Entry::new("t", "a b c d e f g")), 3);
    }

    #[test]
    fn new_rejects_non_positive_speed() {
        let diary = Diary::new();
        for wpm in [0, -1, i64::MIN] {
            let err = ReadingTimeSelector::new(wpm, &diary).unwrap_err();
            assert_eq!(
                err,
                ReadingTimeError::InvalidConfiguration {
                    words_per_minute: wpm
                }
            );
        }
        assert!(err_text(0).contains("WPM must be above 0"));
    }

    #[test]
    fn ties_resolve_to_first_inserted_entry() {
        let mut diary = Diary::new();
        diary.add(Entry::new("first", "alpha beta"));
        diary.add(Entry::new("second", "gamma delta"));
        diary.add(Entry::new("third", "one"));

        let selector = ReadingTimeSelector::new(1, &diary).unwrap();
        let found = selector.find_most_readable_in_time(2).unwrap();
        assert_eq!(found.title(), "first");
    }

    #[test]
    fn budget_is_inclusive() {
        let mut diary = Diary::new();
        diary.add(Entry::new("exact", "one two three four"));

        let selector = ReadingTimeSelector::new(2, &diary).unwrap();
        assert_eq!(
            selector.find_most_readable_in_time(2).map(Entry::title),
            Some("exact")
        );
        assert_eq!(selector.find_most_readable_in_time(1), None);
    }

    #[test]
    fn empty_entry_fits_zero_budget() {
        let mut diary = Diary::new();
        diary.add(Entry::new("blank", ""));
        diary.add(Entry::new("short", "one"));

        let selector = ReadingTimeSelector::new(5, &diary).unwrap();
        assert_eq!(
            selector.find_most_readable_in_time(0).map(Entry::title),
            Some("blank")
        );
    }

    fn err_text(wpm: i64) -> String {
        let diary = Diary::new();
        ReadingTimeSelector::new(wpm, &diary)
            .unwrap_err()
            .to_string()
    }
}
