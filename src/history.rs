//! Bounded history of passwords already used in a session.

use std::collections::VecDeque;

use secrecy::{ExposeSecret, SecretString};

/// Maximum number of remembered passwords.
pub const HISTORY_CAPACITY: usize = 10;

/// Result of [`HistoryTracker::try_insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The password was already remembered; nothing changed.
    AlreadyPresent,
    Inserted,
}

/// Set of previously accepted passwords, at most [`HISTORY_CAPACITY`] long.
///
/// Members are unique by exact string equality. When the tracker is full,
/// inserting a new password evicts the oldest one (FIFO). A lookup of an
/// existing member does not refresh its position.
///
/// One tracker belongs to one session; nothing is persisted.
#[derive(Debug, Default)]
pub struct HistoryTracker {
    entries: VecDeque<SecretString>,
}

impl HistoryTracker {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(HISTORY_CAPACITY),
        }
    }

    /// Remembers `password` unless it is already known.
    pub fn try_insert(&mut self, password: &SecretString) -> InsertOutcome {
        if self.contains(password) {
            #[cfg(feature = "tracing")]
            tracing::debug!("password already in history");
            return InsertOutcome::AlreadyPresent;
        }

        if self.entries.len() >= HISTORY_CAPACITY {
            self.entries.pop_front();
            #[cfg(feature = "tracing")]
            tracing::debug!("history full, evicted oldest entry");
        }

        self.entries
            .push_back(SecretString::new(password.expose_secret().into()));

        #[cfg(feature = "tracing")]
        tracing::info!("history now holds {} passwords", self.entries.len());

        InsertOutcome::Inserted
    }

    pub fn contains(&self, password: &SecretString) -> bool {
        let candidate = password.expose_secret();
        self.entries
            .iter()
            .any(|entry| entry.expose_secret() == candidate)
    }

    /// Number of remembered passwords, always within `0..=HISTORY_CAPACITY`.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn capacity(&self) -> usize {
        HISTORY_CAPACITY
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= HISTORY_CAPACITY
    }
}
