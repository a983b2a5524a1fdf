//! Read-only analyses over a diary.
//!
//! # Responsibility
//! - Answer queries against a borrowed `Diary` without mutating it.
//! - Represent "nothing found" as empty results, never as errors.

pub mod phone_numbers;
pub mod reading_time;
