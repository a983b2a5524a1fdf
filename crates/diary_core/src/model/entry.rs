//! Diary entry value type.
//!
//! # Responsibility
//! - Hold one titled block of free text.
//!
//! # Invariants
//! - `title` and `contents` are fixed after construction; no setters exist.
//! - `contents` may be empty.

use serde::{Deserialize, Serialize};

/// One diary record.
///
/// Titles are opaque to the analysis services; only `contents` is scanned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    title: String,
    contents: String,
}

impl Entry {
    /// Creates an entry from title and body text.
    pub fn new(title: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            contents: contents.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Free-text body used for word counting and phone number scanning.
    pub fn contents(&self) -> &str {
        &self.contents
    }
}
