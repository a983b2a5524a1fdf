//! To-do list model kept alongside the diary.
//!
//! # Invariants
//! - `TaskList` is append-only and preserves insertion order.

use serde::{Deserialize, Serialize};

/// One to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    description: String,
}

impl Task {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Ordered list of tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one task to the end of the list.
    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Returns every task in insertion order.
    pub fn all(&self) -> &[Task] {
        &self.tasks
    }
}
