//! Prepend-ordered action log.

use im::Vector;
use serde::{Deserialize, Serialize};

/// Separator placed between entries by [`ActionLog::render`].
pub const ENTRY_SEPARATOR: &str = "\n-------------------\n";

/// Log of derivation traces, newest first.
///
/// Unbounded by default. With a capacity, pushing past it drops the
/// oldest entries.
///
/// ```
/// use ccg_counters::log::ActionLog;
///
/// let mut log = ActionLog::new();
/// log.push("first");
/// log.push("second");
///
/// assert_eq!(log.latest(), Some("second"));
/// assert_eq!(log.render(), "second\n-------------------\nfirst");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionLog {
    entries: Vector<String>,
    capacity: Option<usize>,
}

impl ActionLog {
    /// Create an unbounded log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a log that keeps at most `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vector::new(),
            capacity: Some(capacity),
        }
    }

    /// Maximum retained entries, if bounded.
    #[must_use]
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Prepend an entry.
    pub fn push(&mut self, entry: impl Into<String>) {
        self.entries.push_front(entry.into());
        if let Some(capacity) = self.capacity {
            self.entries.truncate(capacity);
        }
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// The newest entry.
    #[must_use]
    pub fn latest(&self) -> Option<&str> {
        self.entries.front().map(String::as_str)
    }

    /// Entry at `index`, 0 being newest.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate newest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// All entries joined by [`ENTRY_SEPARATOR`], newest first.
    #[must_use]
    pub fn render(&self) -> String {
        self.iter().collect::<Vec<_>>().join(ENTRY_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_first() {
        let mut log = ActionLog::new();
        log.push("a");
        log.push("b");
        log.push("c");

        let entries: Vec<_> = log.iter().collect();
        assert_eq!(entries, vec!["c", "b", "a"]);
        assert_eq!(log.get(0), Some("c"));
    }

    #[test]
    fn test_clear() {
        let mut log = ActionLog::new();
        log.push("a");
        log.clear();

        assert!(log.is_empty());
        assert_eq!(log.latest(), None);
        assert_eq!(log.render(), "");
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut log = ActionLog::with_capacity(2);
        log.push("a");
        log.push("b");
        log.push("c");

        assert_eq!(log.len(), 2);
        assert_eq!(log.iter().collect::<Vec<_>>(), vec!["c", "b"]);
    }

    #[test]
    fn test_unbounded_by_default() {
        let mut log = ActionLog::new();
        for i in 0..500 {
            log.push(i.to_string());
        }
        assert_eq!(log.len(), 500);
        assert_eq!(log.capacity(), None);
    }
}
