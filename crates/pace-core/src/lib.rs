// ABOUTME: Core types and constants for the race pace calculator
// ABOUTME: Foundation crate with distance catalog, result models, error types, and formatters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pace Core
//!
//! Foundation crate providing the shared types and constants for the race
//! pace calculator. The conversion engine and the application layer both
//! build on these types; this crate owns no state and performs no I/O.
//!
//! ## Modules
//!
//! - **errors**: `CalculationError`, `CatalogError`, and the application-level `AppError`
//! - **constants**: Unit conversions, split checkpoints, messages, and preference keys
//! - **models**: `Distance`, `Mode`, `TimeComponents`, and calculation results
//! - **catalog**: The ordered `DistanceCatalog` with its built-in presets
//! - **formatters**: mm:ss / h:mm:ss and distance display strings

/// Error types for calculations, catalogs, and the application layer
pub mod errors;

/// Constants organized by domain (units, checkpoints, messages, storage keys)
pub mod constants;

/// Core data models (Distance, Mode, `TimeComponents`, results)
pub mod models;

/// Ordered registry of race distances with default-distance fallback
pub mod catalog;

/// Display formatting for durations, paces, and distances
pub mod formatters;

pub use catalog::{CatalogDefinition, DistanceCatalog};
pub use errors::{AppError, AppResult, CalculationError, CatalogError, ErrorCode};
pub use models::{
    CalculationResult, Distance, Mode, PaceSplit, ResultBreakdown, TimeComponents, TotalDistance,
};
