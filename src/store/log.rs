//! Append-only entry log
//!
//! An explicit, injectable ordered container that only grows. Entries are
//! never mutated or removed once pushed; the public surface hands out
//! shared references only, so insertion order is the iteration order for
//! aggregation and export alike.

use serde::{Deserialize, Serialize};

/// An ordered, append-only collection of entries
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryLog<T> {
    entries: Vec<T>,
}

impl<T> EntryLog<T> {
    /// Create an empty log
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry to the end of the log
    pub fn push(&mut self, entry: T) {
        self.entries.push(entry);
    }

    /// Number of entries logged so far
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    /// All entries, in insertion order
    pub fn as_slice(&self) -> &[T] {
        &self.entries
    }

    /// The most recently appended entry, if any
    pub fn last(&self) -> Option<&T> {
        self.entries.last()
    }
}

impl<T> Default for EntryLog<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a EntryLog<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
