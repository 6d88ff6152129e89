// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for unit conversion, split checkpoints, and persisted keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into small domain modules rather than one flat list.

/// Split checkpoint distances reported in time-to-pace mode
pub mod checkpoints;

/// Unit conversions
pub mod units {
    /// Kilometers in one statute mile
    pub const KILOMETERS_PER_MILE: f64 = 1.60934;
    /// Meters in one statute mile, as used for the mile split
    pub const METERS_PER_MILE: f64 = 1609.34;
    /// Meters per kilometer
    pub const METERS_PER_KILOMETER: f64 = 1000.0;
    /// Seconds per minute
    pub const SECONDS_PER_MINUTE: i64 = 60;
    /// Seconds per hour
    pub const SECONDS_PER_HOUR: i64 = 3600;
    /// Relative tolerance when checking a distance's km/mile consistency
    pub const DISTANCE_CONSISTENCY_TOLERANCE: f64 = 1e-3;
}

/// User-facing messages
pub mod messages {
    /// Shown when the entered time does not add up to a positive duration
    pub const INVALID_TIME: &str = "Please enter a valid time";
    /// Suffix appended to a formatted mile pace
    pub const PER_MILE_SUFFIX: &str = "per mile";
}

/// Keys used by the presentation layer's preference store
pub mod storage_keys {
    /// Last selected calculation mode (`timeToPace` / `paceToTime`)
    pub const CALCULATOR_MODE: &str = "calculatorMode";
    /// Identifier of the last selected distance
    pub const LAST_DISTANCE: &str = "lastDistance";
}

/// Presentation timing
pub mod timeouts {
    /// How long the "Copied!" confirmation stays visible, in milliseconds
    pub const COPY_NOTICE_MS: u64 = 2000;
}
