// ABOUTME: Pace/time conversion engine for the race pace calculator
// ABOUTME: Pure functions from (mode, distance, time fields) to display-ready results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pace Engine
//!
//! Stateless conversion between race times and mile paces. Every call is
//! independent, allocates only its result, and is safe to run from any
//! number of threads at once.
//!
//! ```
//! use pace_core::{DistanceCatalog, Mode};
//! use pace_engine::calculate_results;
//!
//! let catalog = DistanceCatalog::standard();
//! let five_k = catalog.lookup(Some("5k"));
//! let result = calculate_results(Mode::PaceToTime, five_k, "", "8", "0").unwrap();
//! assert_eq!(result.main_result, "24:51");
//! ```

/// Time-to-pace and pace-to-time conversions
pub mod calculator;

pub use calculator::{calculate, calculate_results};
pub use pace_core::models::parse_time_component;
