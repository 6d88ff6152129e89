// ABOUTME: Core data models for the race pace calculator
// ABOUTME: Distances, calculation modes, raw time inputs, and calculation results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `Distance` - an immutable race distance record
//! - `Mode` - which direction a conversion runs
//! - `TimeComponents` - the raw hours/minutes/seconds strings a caller supplies
//! - `CalculationResult` - display strings produced by a successful conversion

/// Race distance record
pub mod distance;
/// Calculation direction
pub mod mode;
/// Calculation output records
pub mod results;
/// Raw time input and its lenient integer parsing
pub mod time;

pub use distance::Distance;
pub use mode::Mode;
pub use results::{CalculationResult, PaceSplit, ResultBreakdown, TotalDistance};
pub use time::{parse_time_component, TimeComponents};
