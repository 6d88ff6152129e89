// ABOUTME: Ordered registry of race distances with a configurable default
// ABOUTME: Unknown or missing ids resolve to the default instead of failing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Distance Catalog
//!
//! The catalog is configuration data: callers pick one of the built-in
//! presets or supply their own list (for example from a JSON file). Insertion
//! order is preserved and is what a distance picker should display.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

use crate::errors::CatalogError;
use crate::models::Distance;

/// Name of the eight-entry preset (adds 1K and 10K)
pub const PRESET_STANDARD: &str = "standard";
/// Name of the six-entry preset without 1K and 10K
pub const PRESET_CLASSIC: &str = "classic";

/// Identifier of the 5K, the classic preset's default
const FIVE_K_ID: &str = "5k";

/// Serialized shape of a catalog, as read from a catalog file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDefinition {
    /// Distances in display order
    pub distances: Vec<Distance>,
    /// Id of the fallback distance
    pub default_id: String,
}

/// Ordered, validated set of race distances
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CatalogDefinition", into = "CatalogDefinition")]
pub struct DistanceCatalog {
    distances: Vec<Distance>,
    default_index: usize,
}

impl DistanceCatalog {
    /// Build a catalog from caller-supplied distances
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty, an id repeats, a length is not
    /// positive, kilometers and miles disagree, or `default_id` is not listed.
    pub fn new(distances: Vec<Distance>, default_id: &str) -> Result<Self, CatalogError> {
        if distances.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(distances.len());
        for distance in &distances {
            if !seen.insert(distance.id.as_str()) {
                return Err(CatalogError::DuplicateId(distance.id.clone()));
            }
            if !distance.has_positive_length() {
                return Err(CatalogError::NonPositiveLength {
                    id: distance.id.clone(),
                });
            }
            if !distance.units_consistent() {
                return Err(CatalogError::InconsistentUnits {
                    id: distance.id.clone(),
                    miles: distance.miles,
                    kilometers: distance.kilometers,
                });
            }
        }

        let default_index = distances
            .iter()
            .position(|distance| distance.id == default_id)
            .ok_or_else(|| CatalogError::UnknownDefault(default_id.to_owned()))?;

        Ok(Self {
            distances,
            default_index,
        })
    }

    /// Eight distances from 1K to the marathon, defaulting to the first entry (1K)
    #[must_use]
    pub fn standard() -> Self {
        Self {
            distances: vec![
                Distance::new("1k", 0.621_371, 1.0, "1K"),
                Distance::new("mile", 1.0, 1.609_34, "1 Mile"),
                Distance::new("2mile", 2.0, 3.218_68, "2 Mile"),
                Distance::new("3mile", 3.0, 4.828_02, "3 Mile"),
                Distance::new(FIVE_K_ID, 3.106_86, 5.0, "5K"),
                Distance::new("10k", 6.213_71, 10.0, "10K"),
                Distance::new("halfMarathon", 13.1094, 21.0975, "Half Marathon"),
                Distance::new("marathon", 26.2188, 42.195, "Marathon"),
            ],
            default_index: 0,
        }
    }

    /// Six distances from the mile to the marathon (no 1K or 10K), defaulting to the 5K
    #[must_use]
    pub fn classic() -> Self {
        Self {
            distances: vec![
                Distance::new("mile", 1.0, 1.609_34, "Mile"),
                Distance::new("2mile", 2.0, 3.218_68, "2 Mile"),
                Distance::new("3mile", 3.0, 4.828_02, "3 Mile"),
                Distance::new(FIVE_K_ID, 3.106_86, 5.0, "5K"),
                Distance::new("halfMarathon", 13.1094, 21.0975, "Half Marathon"),
                Distance::new("marathon", 26.2188, 42.195, "Marathon"),
            ],
            default_index: 3,
        }
    }

    /// Built-in preset by name (`standard` or `classic`)
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnknownPreset` for any other name.
    pub fn preset(name: &str) -> Result<Self, CatalogError> {
        match name.trim().to_lowercase().as_str() {
            PRESET_STANDARD => Ok(Self::standard()),
            PRESET_CLASSIC => Ok(Self::classic()),
            _ => Err(CatalogError::UnknownPreset(name.to_owned())),
        }
    }

    /// Parse a catalog from JSON: `{"distances": [...], "default_id": "5k"}`
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or fails validation.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let definition: CatalogDefinition = serde_json::from_str(json)?;
        Self::try_from(definition)
    }

    /// All distances in display order
    #[must_use]
    pub fn distances(&self) -> &[Distance] {
        &self.distances
    }

    /// Distance used when nothing (or something unknown) is selected
    #[must_use]
    pub fn default_distance(&self) -> &Distance {
        &self.distances[self.default_index]
    }

    /// Strict lookup by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Distance> {
        self.distances.iter().find(|distance| distance.id == id)
    }

    /// Lookup that falls back to the default distance for unknown or absent ids
    #[must_use]
    pub fn lookup(&self, id: Option<&str>) -> &Distance {
        id.and_then(|id| self.get(id)).unwrap_or_else(|| {
            debug!(
                requested = ?id,
                fallback = %self.default_distance().id,
                "Distance not in catalog, using default"
            );
            self.default_distance()
        })
    }

    /// Number of distances
    #[must_use]
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Always false for a constructed catalog
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}

impl Default for DistanceCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<CatalogDefinition> for DistanceCatalog {
    type Error = CatalogError;

    fn try_from(definition: CatalogDefinition) -> Result<Self, Self::Error> {
        Self::new(definition.distances, &definition.default_id)
    }
}

impl From<DistanceCatalog> for CatalogDefinition {
    fn from(catalog: DistanceCatalog) -> Self {
        let default_id = catalog.default_distance().id.clone();
        Self {
            distances: catalog.distances,
            default_id,
        }
    }
}
