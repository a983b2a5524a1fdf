//! Phone number extraction over diary contents.
//!
//! # Responsibility
//! - Find UK-style mobile numbers (`07` plus nine digits) in entry bodies.
//! - Return each distinct number once, in first-seen order.
//!
//! # Invariants
//! - Only whole digit runs of exactly 11 digits starting with `07` match.
//! - Longer or shorter runs never yield a partial match. Two numbers written
//!   back to back with no separator form one 22-digit run and yield nothing.
//! - Output order follows diary order, then left-to-right within an entry.

use crate::model::diary::Diary;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

const PHONE_NUMBER_DIGITS: usize = 11;
const PHONE_NUMBER_PREFIX: &str = "07";

static DIGIT_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+").expect("valid digit run regex"));

/// Collects phone numbers mentioned anywhere in a diary.
#[derive(Debug, Clone, Copy)]
pub struct PhoneNumberExtractor<'d> {
    diary: &'d Diary,
}

impl<'d> PhoneNumberExtractor<'d> {
    pub fn new(diary: &'d Diary) -> Self {
        Self { diary }
    }

    /// Returns distinct phone numbers across all entries in first-seen order.
    pub fn extract_numbers(&self) -> Vec<String> {
        let mut seen = BTreeSet::<&str>::new();
        let mut numbers = Vec::new();
        let mut matched = 0usize;

        for entry in self.diary.entries() {
            for number in extract_numbers_from_contents(entry.contents()) {
                matched += 1;
                if seen.insert(number) {
                    numbers.push(number.to_string());
                }
            }
        }

        debug!(
            "event=extract_numbers module=phone_numbers status=ok entries={} matched={} distinct={}",
            self.diary.len(),
            matched,
            numbers.len()
        );
        numbers
    }
}

/// Scans one body of text for phone numbers, left to right.
///
/// Duplicates within `contents` are kept; deduplication happens per diary.
pub fn extract_numbers_from_contents(contents: &str) -> Vec<&str> {
    DIGIT_RUN_RE
        .find_iter(contents)
        .map(|run| run.as_str())
        .filter(|run| is_phone_number(run))
        .collect()
}

fn is_phone_number(digits: &str) -> bool {
    digits.len() == PHONE_NUMBER_DIGITS && digits.starts_with(PHONE_NUMBER_PREFIX)
}
