// ABOUTME: Environment configuration for catalog selection, preference storage, and log level
// ABOUTME: Parses environment variables into a typed CalculatorConfig and loads the catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use crate::constants::{defaults, env_config};
use anyhow::{Context, Result};
use pace_core::DistanceCatalog;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, Level};

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    #[default]
    Warn,
    /// Informational messages
    Info,
    /// Debug output, including every calculation
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(&self) -> Level {
        match self {
            Self::Error => Level::ERROR,
            Self::Warn => Level::WARN,
            Self::Info => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "info" => Self::Info,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Warn,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Where the distance catalog comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CatalogSource {
    /// A built-in preset by name
    Preset {
        /// Preset name (`standard` or `classic`)
        name: String,
    },
    /// A JSON catalog file
    File {
        /// Path to the file
        path: PathBuf,
    },
}

impl Default for CatalogSource {
    fn default() -> Self {
        Self::Preset {
            name: defaults::CATALOG_PRESET.to_owned(),
        }
    }
}

/// Resolved calculator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Catalog to load
    pub catalog: CatalogSource,
    /// JSON file holding persisted preferences
    pub preferences_path: PathBuf,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogSource::default(),
            preferences_path: default_preferences_path(),
        }
    }
}

impl CalculatorConfig {
    /// Load configuration from environment variables
    ///
    /// `PACE_CATALOG_PATH` wins over `PACE_CATALOG` when both are set.
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable is set but not valid unicode
    pub fn from_env() -> Result<Self> {
        let catalog = if let Some(path) = read_env(env_config::CATALOG_PATH)? {
            CatalogSource::File {
                path: PathBuf::from(path),
            }
        } else {
            CatalogSource::Preset {
                name: read_env(env_config::CATALOG_PRESET)?
                    .unwrap_or_else(|| defaults::CATALOG_PRESET.to_owned()),
            }
        };

        let preferences_path = read_env(env_config::PREFERENCES_PATH)?
            .map_or_else(default_preferences_path, PathBuf::from);

        let config = Self {
            catalog,
            preferences_path,
        };
        debug!(?config, "Loaded calculator configuration from environment");
        Ok(config)
    }

    /// Select a built-in catalog preset
    #[must_use]
    pub fn with_catalog_preset(mut self, name: impl Into<String>) -> Self {
        self.catalog = CatalogSource::Preset { name: name.into() };
        self
    }

    /// Select a JSON catalog file
    #[must_use]
    pub fn with_catalog_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog = CatalogSource::File { path: path.into() };
        self
    }

    /// Use a different preferences file
    #[must_use]
    pub fn with_preferences_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.preferences_path = path.into();
        self
    }

    /// Load the configured distance catalog
    ///
    /// # Errors
    ///
    /// Returns an error if the preset is unknown, or the catalog file cannot
    /// be read, parsed, or validated
    pub fn load_catalog(&self) -> Result<DistanceCatalog> {
        let catalog = match &self.catalog {
            CatalogSource::Preset { name } => DistanceCatalog::preset(name)
                .with_context(|| format!("Failed to load catalog preset '{name}'"))?,
            CatalogSource::File { path } => load_catalog_file(path)?,
        };
        info!(
            distances = catalog.len(),
            default = %catalog.default_distance().id,
            "Distance catalog loaded"
        );
        Ok(catalog)
    }
}

fn load_catalog_file(path: &Path) -> Result<DistanceCatalog> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
    DistanceCatalog::from_json(&json)
        .with_context(|| format!("Invalid catalog file {}", path.display()))
}

/// Read an optional environment variable, treating empty values as unset
fn read_env(name: &str) -> Result<Option<String>> {
    match env::var(name) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(e).with_context(|| format!("Environment variable {name} is not valid")),
    }
}

/// `<config dir>/pace-calculator/preferences.json`, or the working directory
/// when the platform has no config dir
fn default_preferences_path() -> PathBuf {
    dirs::config_dir()
        .map_or_else(|| PathBuf::from("."), |dir| dir.join(defaults::CONFIG_DIR_NAME))
        .join(defaults::PREFERENCES_FILE_NAME)
}
