// ABOUTME: Application-level constants for the pace calculator binary and library
// ABOUTME: Environment variable names, service naming, and default file locations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Application constants
//!
//! Domain constants (units, checkpoints, messages, preference keys) live in
//! `pace_core::constants` and are re-exported here.

pub use pace_core::constants::{checkpoints, messages, storage_keys, timeouts, units};

/// Environment variable names read by `CalculatorConfig::from_env`
pub mod env_config {
    /// Built-in catalog preset (`standard` or `classic`)
    pub const CATALOG_PRESET: &str = "PACE_CATALOG";
    /// Path to a JSON catalog file; overrides the preset
    pub const CATALOG_PATH: &str = "PACE_CATALOG_PATH";
    /// Path to the JSON preferences file
    pub const PREFERENCES_PATH: &str = "PACE_PREFERENCES_PATH";
    /// Log level / filter directive
    pub const RUST_LOG: &str = "RUST_LOG";
    /// Log output format (`json`, `pretty`, `compact`)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
    /// Include source file and line in log records when set
    pub const LOG_INCLUDE_LOCATION: &str = "LOG_INCLUDE_LOCATION";
    /// Deployment environment name
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// Service names used in structured logs
pub mod service_names {
    /// The calculator CLI
    pub const PACE_CALCULATOR: &str = "pace-calculator";
}

/// Default values
pub mod defaults {
    /// Catalog preset used when none is configured
    pub const CATALOG_PRESET: &str = "standard";
    /// Directory (under the platform config dir) holding preferences
    pub const CONFIG_DIR_NAME: &str = "pace-calculator";
    /// Preferences file name
    pub const PREFERENCES_FILE_NAME: &str = "preferences.json";
    /// Log level when `RUST_LOG` is unset
    pub const LOG_LEVEL: &str = "warn";
}
