// ABOUTME: Main library entry point for the race pace calculator application layer
// ABOUTME: Wires configuration, logging, preferences, and UI-owned state around the pure engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pace Calculator
//!
//! Converts a finish time over a race distance into a mile pace with
//! 400m / 800m / 1km / mile splits, or a target mile pace into a projected
//! finish time.
//!
//! The arithmetic lives in the stateless `pace-engine` crate. This crate is
//! the presentation side: it owns the mutable application state, persists
//! the last mode and distance through an injected preference store, and
//! builds the text exported when a result is copied.
//!
//! ## Example
//!
//! ```
//! use pace_calculator::preferences::MemoryPreferenceStore;
//! use pace_calculator::state::AppState;
//! use pace_calculator::{DistanceCatalog, Mode, TimeComponents};
//!
//! let catalog = DistanceCatalog::standard();
//! let mut store = MemoryPreferenceStore::new();
//! let mut state = AppState::restore(&catalog, &store);
//!
//! state.set_mode(Mode::PaceToTime, &mut store).unwrap();
//! state.select_distance(&catalog, "5k", &mut store).unwrap();
//! state.set_time(TimeComponents::new("", "8", "0"));
//!
//! let result = state.calculate(&catalog).as_ref().unwrap();
//! assert_eq!(result.main_result, "24:51");
//! ```

/// Application constants and environment variable names
pub mod constants;

/// Environment-driven configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Key-value preference storage injected into the application state
pub mod preferences;

/// Application state owned by the presentation layer
pub mod state;

/// Plain-text export of a calculation ("Copy Results")
pub mod export;

/// Auto-expiring "Copied!" confirmation
pub mod notice;

pub use pace_core::{
    AppError, AppResult, CalculationError, CalculationResult, CatalogError, Distance,
    DistanceCatalog, ErrorCode, Mode, PaceSplit, ResultBreakdown, TimeComponents, TotalDistance,
};
pub use pace_engine::{calculate, calculate_results};
