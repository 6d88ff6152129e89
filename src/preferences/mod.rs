// ABOUTME: Key-value preference storage injected into the application state
// ABOUTME: Defines the PreferenceStore trait plus in-memory and JSON file implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Preferences
//!
//! The presentation layer remembers the last selected mode and distance
//! between sessions. Storage is a capability handed to `AppState`, never
//! something the conversion engine touches.

/// JSON file-backed store
pub mod file;

pub use file::FilePreferenceStore;

use pace_core::AppResult;
use std::collections::HashMap;

/// Minimal string key-value store
pub trait PreferenceStore {
    /// Value stored under `key`, if any
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be persisted
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
}

/// Volatile store for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: HashMap<String, String>,
}

impl MemoryPreferenceStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `entries`
    #[must_use]
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
