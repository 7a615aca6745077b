//! In-memory history of generated passwords.
//!
//! Entries are held as [`SecretString`] and zeroized when evicted or
//! cleared. Nothing is written to disk.

use std::collections::VecDeque;

use secrecy::SecretString;

pub const DEFAULT_CAPACITY: usize = 5;

/// Bounded list of the most recently generated passwords.
#[derive(Debug)]
pub struct PasswordHistory {
    entries: VecDeque<SecretString>,
    capacity: usize,
}

impl Default for PasswordHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl PasswordHistory {
    /// Creates a history keeping at most `capacity` entries.
    ///
    /// A capacity of 0 keeps nothing.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends a password, evicting the oldest one when full.
    pub fn push(&mut self, password: SecretString) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(password);
    }

    /// Iterates from oldest to newest.
    pub fn recent(&self) -> impl Iterator<Item = &SecretString> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&SecretString> {
        self.entries.back()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
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
