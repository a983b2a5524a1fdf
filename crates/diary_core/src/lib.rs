//! Core domain logic for the diary.
//! This crate owns the entry model and every analysis run over it.

pub mod logging;
pub mod model;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::diary::Diary;
pub use model::entry::Entry;
pub use model::task::{Task, TaskList};
pub use service::phone_numbers::{extract_numbers_from_contents, PhoneNumberExtractor};
pub use service::reading_time::{
    count_words, ReadingTimeError, ReadingTimeResult, ReadingTimeSelector,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
