// ABOUTME: Race distance record with miles, kilometers, and a display label
// ABOUTME: Immutable once constructed; looked up by id through the DistanceCatalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::constants::units::{
    DISTANCE_CONSISTENCY_TOLERANCE, KILOMETERS_PER_MILE, METERS_PER_KILOMETER,
};

/// A race distance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distance {
    /// Unique key, e.g. `halfMarathon`
    pub id: String,
    /// Length in statute miles
    pub miles: f64,
    /// Length in kilometers
    pub kilometers: f64,
    /// Display label, e.g. "Half Marathon"
    pub label: String,
}

impl Distance {
    /// Create a distance record
    #[must_use]
    pub fn new(id: impl Into<String>, miles: f64, kilometers: f64, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            miles,
            kilometers,
            label: label.into(),
        }
    }

    /// Length in meters
    #[must_use]
    pub fn meters(&self) -> f64 {
        self.kilometers * METERS_PER_KILOMETER
    }

    /// Both lengths are finite and strictly positive
    #[must_use]
    pub fn has_positive_length(&self) -> bool {
        self.miles.is_finite() && self.kilometers.is_finite() && self.miles > 0.0 && self.kilometers > 0.0
    }

    /// Kilometers agree with miles under the fixed 1.60934 km/mile factor
    #[must_use]
    pub fn units_consistent(&self) -> bool {
        let expected_km = self.miles * KILOMETERS_PER_MILE;
        ((self.kilometers - expected_km) / expected_km).abs() <= DISTANCE_CONSISTENCY_TOLERANCE
    }
}
