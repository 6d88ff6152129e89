// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup and frequently used distances
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `pace_calculator`

use pace_calculator::{Distance, DistanceCatalog};
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            Ok("WARN" | "ERROR") | _ => Level::WARN, // Default to WARN for quiet tests
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Catalog used by most tests
pub fn standard_catalog() -> DistanceCatalog {
    init_test_logging();
    DistanceCatalog::standard()
}

/// Look up a distance that must exist in the standard catalog
pub fn distance(id: &str) -> Distance {
    standard_catalog().get(id).cloned().unwrap()
}

/// Mile pace formatted the way the engine does it: floor minutes, round seconds
pub fn expected_pace(seconds_per_mile: f64) -> String {
    let minutes = (seconds_per_mile / 60.0).floor() as i64;
    let seconds = (seconds_per_mile % 60.0).round() as i64;
    format!("{minutes}:{seconds:02} per mile")
}

/// Parse "m:ss", "h:mm:ss", or "m:ss per mile" back into seconds
pub fn clock_to_seconds(clock: &str) -> i64 {
    clock
        .trim_end_matches(" per mile")
        .split(':')
        .fold(0, |acc, part| acc * 60 + part.parse::<i64>().unwrap())
}
