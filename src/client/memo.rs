//! In-memory request memo
//!
//! Keeps the most recently used GET responses keyed by their full URL. The
//! memo lives as long as its client and is never invalidated on its own.

use std::collections::VecDeque;

/// A fixed-capacity, least-recently-used store for cloneable values
///
/// Entries are kept in recency order, most recent at the back. Capacities are
/// small, so lookups scan linearly.
pub(crate) struct RequestMemo<T> {
    /// Maximum number of entries; 0 disables storage entirely
    capacity: usize,
    /// Entries ordered from least to most recently used
    entries: VecDeque<(String, T)>,
}

impl<T: Clone> RequestMemo<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    /// Returns a copy of the value stored under `key`, marking it as most
    /// recently used.
    pub fn load(&mut self, key: &str) -> Option<T> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        let entry = self.entries.remove(index)?;
        let value = entry.1.clone();
        self.entries.push_back(entry);
        Some(value)
    }

    /// Stores `value` under `key`, evicting the least recently used entry
    /// when the memo is full.
    pub fn store(&mut self, key: String, value: T) {
        if self.capacity == 0 {
            return;
        }

        if let Some(index) = self.entries.iter().position(|(k, _)| *k == key) {
            self.entries.remove(index);
        }

        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }

        self.entries.push_back((key, value));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_and_store() {
        let mut memo = RequestMemo::new(2);
        assert_eq!(memo.load("a"), None);

        memo.store("a".to_string(), 1);
        assert_eq!(memo.load("a"), Some(1));
        assert_eq!(memo.len(), 1);
    }

    #[test]
    fn test_evicts_least_recently_used() {
        let mut memo = RequestMemo::new(2);
        memo.store("a".to_string(), 1);
        memo.store("b".to_string(), 2);

        // Touch "a" so "b" becomes the eviction candidate
        assert_eq!(memo.load("a"), Some(1));
        memo.store("c".to_string(), 3);

        assert_eq!(memo.load("b"), None);
        assert_eq!(memo.load("a"), Some(1));
        assert_eq!(memo.load("c"), Some(3));
        assert_eq!(memo.len(), 2);
    }

    #[test]
    fn test_store_replaces_existing_key() {
        let mut memo = RequestMemo::new(2);
        memo.store("a".to_string(), 1);
        memo.store("a".to_string(), 5);
        assert_eq!(memo.len(), 1);
        assert_eq!(memo.load("a"), Some(5));
    }

    #[test]
    fn test_zero_capacity_stores_nothing() {
        let mut memo = RequestMemo::new(0);
        memo.store("a".to_string(), 1);
        assert_eq!(memo.len(), 0);
        assert_eq!(memo.load("a"), None);
    }
}
