//! Bounded computation history.
//!
//! Tracks completed computations as `(input, result)` pairs. The history
//! is capacity-bounded: recording beyond capacity evicts the oldest entry
//! (FIFO), so it always holds the most recent computations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of entries a [`History`] retains.
pub const HISTORY_CAPACITY: usize = 3;

/// Record of one completed computation.
///
/// # Example
///
/// ```rust
/// use reckon::HistoryEntry;
///
/// let entry = HistoryEntry::new("2+3*4", "14");
/// assert_eq!(entry.to_string(), "2+3*4 = 14");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The expression or function display string that was computed
    pub input: String,
    /// The stringified value it produced
    pub result: String,
}

impl HistoryEntry {
    /// Create an entry from an input expression and its result.
    pub fn new(input: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            result: result.into(),
        }
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.input, self.result)
    }
}

/// Ordered, capacity-bounded history of computations.
///
/// `record` is a pure method - it returns a new history with the entry
/// added rather than mutating in place, which keeps stored snapshots
/// independent of the live history.
///
/// # Example
///
/// ```rust
/// use reckon::{History, HistoryEntry};
///
/// let history = History::new();
/// let history = history.record(HistoryEntry::new("1+1", "2"));
/// let history = history.record(HistoryEntry::new("2+2", "4"));
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.latest().unwrap().result, "4");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record an entry, returning a new history.
    ///
    /// At [`HISTORY_CAPACITY`] the oldest entry is evicted first, so the
    /// returned history never exceeds capacity.
    ///
    /// # Example
    ///
    /// ```rust
    /// use reckon::{History, HistoryEntry};
    ///
    /// let mut history = History::new();
    /// for n in 1..=4 {
    ///     history = history.record(HistoryEntry::new(format!("{n}"), format!("{n}")));
    /// }
    ///
    /// // Capacity is 3: the first entry was evicted.
    /// assert_eq!(history.len(), 3);
    /// assert_eq!(history.entries()[0].input, "2");
    /// ```
    pub fn record(&self, entry: HistoryEntry) -> Self {
        let mut entries = self.entries.clone();
        if entries.len() >= HISTORY_CAPACITY {
            entries.remove(0);
        }
        entries.push(entry);
        Self { entries }
    }

    /// Get all entries, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Get the most recent entry, if any.
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_history_is_empty() {
        let history = History::new();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
        assert!(history.latest().is_none());
    }

    #[test]
    fn record_adds_entry() {
        let history = History::new().record(HistoryEntry::new("1+2", "3"));
        assert_eq!(history.len(), 1);
        assert_eq!(history.latest().unwrap().input, "1+2");
    }

    #[test]
    fn record_is_pure() {
        let history = History::new();
        let new_history = history.record(HistoryEntry::new("1+2", "3"));

        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn record_evicts_oldest_at_capacity() {
        let mut history = History::new();
        for n in 1..=4 {
            history = history.record(HistoryEntry::new(n.to_string(), n.to_string()));
        }

        assert_eq!(history.len(), HISTORY_CAPACITY);
        let inputs: Vec<&str> = history.entries().iter().map(|e| e.input.as_str()).collect();
        assert_eq!(inputs, vec!["2", "3", "4"]);
    }

    #[test]
    fn latest_returns_most_recent() {
        let history = History::new()
            .record(HistoryEntry::new("1+1", "2"))
            .record(HistoryEntry::new("2+2", "4"));

        assert_eq!(history.latest().unwrap().to_string(), "2+2 = 4");
    }

    #[test]
    fn entry_displays_as_equation() {
        let entry = HistoryEntry::new("sin(30)", "0.5");
        assert_eq!(entry.to_string(), "sin(30) = 0.5");
    }

    #[test]
    fn history_serializes_correctly() {
        let history = History::new().record(HistoryEntry::new("2+3*4", "14"));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: History = serde_json::from_str(&json).unwrap();

        assert_eq!(history, deserialized);
    }
}
