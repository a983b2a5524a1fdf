//! Ordered diary container.
//!
//! # Responsibility
//! - Keep entries in insertion order for every downstream scan.
//!
//! # Invariants
//! - The only mutation is `add`, which appends.
//! - Duplicate entries are kept.

use crate::model::entry::Entry;

/// Append-only collection of diary entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diary {
    entries: Vec<Entry>,
}

impl Diary {
    /// Creates an empty diary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one entry to the end of the diary.
    pub fn add(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Returns all entries in insertion order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::Diary;
    use crate::model::entry::Entry;

    #[test]
    fn new_diary_is_empty() {
        let diary = Diary::new();
        assert!(diary.is_empty());
        assert!(diary.entries().is_empty());
    }

    #[test]
    fn add_keeps_duplicates_in_order() {
        let mut diary = Diary::new();
        let entry = Entry::new("same", "same body");
        diary.add(entry.clone());
        diary.add(Entry::new("other", ""));
        diary.add(entry.clone());

        assert_eq!(diary.len(), 3);
        assert_eq!(diary.entries()[0], entry);
        assert_eq!(diary.entries()[1].title(), "other");
        assert_eq!(diary.entries()[2], entry);
    }
}
