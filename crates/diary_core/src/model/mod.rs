//! Domain model for diary records and the to-do list.
//!
//! # Responsibility
//! - Define the value types analysed by core services.
//! - Own ordered, append-only collections of those values.
//!
//! # Invariants
//! - Records are immutable once constructed.
//! - Collections only grow; insertion order is iteration order.

pub mod diary;
pub mod entry;
pub mod task;
