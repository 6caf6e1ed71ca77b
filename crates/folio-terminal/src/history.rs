//! Bounded command history with circular up/down navigation.
//!
//! Entries are stored newest first. Navigation wraps around at both ends
//! instead of stopping, so repeated up-arrow presses cycle through the ring.

use std::collections::VecDeque;

use folio_types::config::DEFAULT_HISTORY_CAPACITY;

/// Previously submitted raw commands plus a navigation cursor.
#[derive(Debug, Clone)]
pub struct HistoryRing {
    entries: VecDeque<String>,
    capacity: usize,
    /// `None` while the user edits fresh input.
    cursor: Option<usize>,
}

impl HistoryRing {
    /// Create an empty ring holding at most `capacity` commands.
    ///
    /// A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            cursor: None,
        }
    }

    /// Record a submitted command.
    ///
    /// Blank commands and repeats of the newest entry are ignored. The raw
    /// string is stored untouched. Returns whether an entry was added.
    pub fn record(&mut self, command: &str) -> bool {
        if command.trim().is_empty() || self.newest() == Some(command) {
            return false;
        }
        self.entries.push_front(command.to_string());
        self.entries.truncate(self.capacity);
        true
    }

    /// Step towards older entries, wrapping to the newest past the end.
    pub fn navigate_up(&mut self) -> String {
        if self.entries.is_empty() {
            return String::new();
        }
        let next = match self.cursor {
            Some(i) if i + 1 < self.entries.len() => i + 1,
            _ => 0,
        };
        self.select(next)
    }

    /// Step towards newer entries, wrapping to the oldest below zero.
    pub fn navigate_down(&mut self) -> String {
        if self.entries.is_empty() {
            return String::new();
        }
        let next = match self.cursor {
            Some(i) if i > 0 => i - 1,
            _ => self.entries.len() - 1,
        };
        self.select(next)
    }

    fn select(&mut self, index: usize) -> String {
        self.cursor = Some(index);
        log::trace!("history cursor -> {index}");
        self.entries[index].clone()
    }

    /// Stop navigating.
    pub fn reset_cursor(&mut self) {
        self.cursor = None;
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn is_navigating(&self) -> bool {
        self.cursor.is_some()
    }

    /// Most recently recorded command.
    pub fn newest(&self) -> Option<&str> {
        self.entries.front().map(String::as_str)
    }

    /// All entries, newest first.
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator {
        self.entries.iter().map(String::as_str)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for HistoryRing {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}
