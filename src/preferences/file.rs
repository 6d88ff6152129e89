// ABOUTME: JSON file-backed preference store
// ABOUTME: Loads a flat string map on open and rewrites the file on every change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::PreferenceStore;
use pace_core::{AppError, AppResult};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Preferences persisted as a JSON object of strings
///
/// A missing file is an empty store. A corrupt file is logged and replaced
/// on the next write.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FilePreferenceStore {
    /// Open the store at `path`
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read
    pub fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "Ignoring corrupt preferences file");
                BTreeMap::new()
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                return Err(AppError::storage(format!(
                    "Failed to read preferences {}: {e}",
                    path.display()
                )))
            }
        };
        debug!(path = %path.display(), entries = values.len(), "Opened preferences");
        Ok(Self { path, values })
    }

    /// File backing this store
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `values` to disk, creating parent directories as needed
    ///
    /// The file is written beside the target and renamed over it. A failed
    /// rename removes the staging file.
    fn persist(&self, values: &BTreeMap<String, String>) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(values)?;

        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, json)?;
        if let Err(e) = fs::rename(&staging, &self.path) {
            if let Err(cleanup) = fs::remove_file(&staging) {
                warn!(path = %staging.display(), error = %cleanup, "Failed to remove staging file");
            }
            return Err(AppError::storage(format!(
                "Failed to save preferences {}: {e}",
                self.path.display()
            )));
        }
        Ok(())
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        if self.values.get(key).map(String::as_str) == Some(value) {
            return Ok(());
        }
        let mut updated = self.values.clone();
        updated.insert(key.to_owned(), value.to_owned());
        self.persist(&updated)?;
        self.values = updated;
        debug!(key, value, "Saved preference");
        Ok(())
    }
}
