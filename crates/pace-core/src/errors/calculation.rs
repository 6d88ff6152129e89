// ABOUTME: Error returned by the conversion engine for unusable input
// ABOUTME: The only failure mode is a time that does not add up to a positive duration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::messages;

/// Calculation failure
///
/// Malformed numeric strings are never errors on their own; they count as
/// zero. A calculation only fails once the combined time is not positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationError {
    /// Hours, minutes and seconds added up to zero or less
    #[error("{}", messages::INVALID_TIME)]
    InvalidTime {
        /// The combined total that was rejected
        total_seconds: i64,
    },
}

impl CalculationError {
    /// Message suitable for display in place of a result
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::InvalidTime { .. } => messages::INVALID_TIME,
        }
    }
}
