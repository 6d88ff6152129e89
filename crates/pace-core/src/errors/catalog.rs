// ABOUTME: Distance catalog validation and loading errors
// ABOUTME: Raised when a caller-supplied catalog is empty, inconsistent, or malformed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

/// Errors raised while building a `DistanceCatalog`
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog contains no distances
    #[error("Distance catalog must contain at least one distance")]
    Empty,

    /// Two entries share an identifier
    #[error("Duplicate distance id: {0}")]
    DuplicateId(String),

    /// Miles or kilometers is zero, negative, or not finite
    #[error("Distance '{id}' has a non-positive length")]
    NonPositiveLength {
        /// Offending distance id
        id: String,
    },

    /// Kilometers do not match miles within tolerance
    #[error("Distance '{id}': {kilometers} km is inconsistent with {miles} miles")]
    InconsistentUnits {
        /// Offending distance id
        id: String,
        /// Declared miles
        miles: f64,
        /// Declared kilometers
        kilometers: f64,
    },

    /// The configured default id is not in the catalog
    #[error("Default distance '{0}' is not in the catalog")]
    UnknownDefault(String),

    /// Unknown preset name
    #[error("Unknown catalog preset: {0}")]
    UnknownPreset(String),

    /// Catalog JSON could not be parsed
    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
