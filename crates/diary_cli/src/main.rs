//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `diary_core` linkage with a deterministic sample run.
//! - Optionally start file logging when `DIARY_LOG_DIR` is set; the level
//!   comes from `DIARY_LOG_LEVEL` or the build default.

use diary_core::{Diary, Entry, LogLevel, PhoneNumberExtractor, ReadingTimeSelector};
use std::process::ExitCode;

const SAMPLE_WPM: i64 = 2;
const SAMPLE_BUDGET_MINUTES: u64 = 2;

fn main() -> ExitCode {
    if let Ok(log_dir) = std::env::var("DIARY_LOG_DIR") {
        let level = match std::env::var("DIARY_LOG_LEVEL") {
            Ok(value) => value.parse::<LogLevel>(),
            Err(_) => Ok(diary_core::default_log_level()),
        };
        if let Err(err) = level.and_then(|level| diary_core::init_logging(level, &log_dir)) {
            eprintln!("diary_cli logging disabled: {err}");
        }
    }

    let mut diary = Diary::new();
    diary.add(Entry::new("monday", "met sam, number is 07000000001"));
    diary.add(Entry::new("tuesday", "quiet day"));
    diary.add(Entry::new(
        "wednesday",
        "long walk by the river then dinner with friends, call 07000000002",
    ));

    let selector = match ReadingTimeSelector::new(SAMPLE_WPM, &diary) {
        Ok(selector) => selector,
        Err(err) => {
            eprintln!("diary_cli error: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("diary_core version={}", diary_core::core_version());
    println!("entries={}", diary.len());
    match selector.find_most_readable_in_time(SAMPLE_BUDGET_MINUTES) {
        Some(entry) => println!("most_readable={}", entry.title()),
        None => println!("most_readable=none"),
    }
    let numbers = PhoneNumberExtractor::new(&diary).extract_numbers();
    println!("phone_numbers={}", numbers.join(","));
    ExitCode::SUCCESS
}
