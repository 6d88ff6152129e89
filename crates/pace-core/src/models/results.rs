// ABOUTME: Calculation output records: pace splits, total distance, and the result wrapper
// ABOUTME: A result carries splits or a total distance, never both and never neither
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::Mode;

/// Projected elapsed time at one checkpoint distance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaceSplit {
    /// Checkpoint label, e.g. "1 mile"
    pub label: String,
    /// Elapsed time as mm:ss
    pub formatted_time: String,
    /// Checkpoint length; used for ordering only
    pub distance_in_meters: f64,
}

/// Formatted race distance shown alongside a projected finish time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalDistance {
    /// e.g. "21.10 km"
    pub kilometers: String,
    /// e.g. "13.11 miles"
    pub miles: String,
}

/// Mode-specific part of a result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultBreakdown {
    /// Time-to-pace: splits in ascending checkpoint order
    Splits(Vec<PaceSplit>),
    /// Pace-to-time: the race distance in both units
    TotalDistance(TotalDistance),
}

/// Successful conversion output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Mile pace ("8:01 per mile") or finish time ("1:45:30")
    pub main_result: String,
    /// Splits or total distance, depending on the mode
    #[serde(flatten)]
    pub breakdown: ResultBreakdown,
}

impl CalculationResult {
    /// Split times, present only for time-to-pace results
    #[must_use]
    pub fn splits(&self) -> Option<&[PaceSplit]> {
        match &self.breakdown {
            ResultBreakdown::Splits(splits) => Some(splits),
            ResultBreakdown::TotalDistance(_) => None,
        }
    }

    /// Total distance, present only for pace-to-time results
    #[must_use]
    pub fn total_distance(&self) -> Option<&TotalDistance> {
        match &self.breakdown {
            ResultBreakdown::TotalDistance(total) => Some(total),
            ResultBreakdown::Splits(_) => None,
        }
    }

    /// Mode that produced this result
    #[must_use]
    pub const fn mode(&self) -> Mode {
        match self.breakdown {
            ResultBreakdown::Splits(_) => Mode::TimeToPace,
            ResultBreakdown::TotalDistance(_) => Mode::PaceToTime,
        }
    }
}
