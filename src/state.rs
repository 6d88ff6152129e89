// ABOUTME: Application state owned by the presentation layer
// ABOUTME: Tracks mode, distance, raw inputs, and the last outcome; persists selections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Application State
//!
//! Everything mutable lives here rather than in the engine: the selected
//! mode and distance, the three input strings, the most recent outcome and
//! the copy confirmation. Mode and distance changes are written through the
//! injected [`PreferenceStore`] under `calculatorMode` / `lastDistance`.

use crate::export::export_text;
use crate::notice::CopyNotice;
use crate::preferences::PreferenceStore;
use pace_core::constants::storage_keys;
use pace_core::{
    AppResult, CalculationError, CalculationResult, Distance, DistanceCatalog, Mode,
    TimeComponents,
};
use std::time::Instant;
use tracing::{debug, info};

/// Outcome of one calculation
pub type CalculationOutcome = Result<CalculationResult, CalculationError>;

/// A finished calculation together with the selection it was made for
#[derive(Debug, Clone, PartialEq)]
pub struct LastCalculation {
    /// Mode at the time of calculation
    pub mode: Mode,
    /// Distance at the time of calculation
    pub distance: Distance,
    /// Result or invalid-input error
    pub outcome: CalculationOutcome,
}

/// Presentation-layer state
#[derive(Debug, Clone)]
pub struct AppState {
    mode: Mode,
    distance_id: String,
    time: TimeComponents,
    last: Option<LastCalculation>,
    copy_notice: CopyNotice,
}

impl AppState {
    /// Fresh state: time-to-pace on the catalog's default distance
    #[must_use]
    pub fn new(catalog: &DistanceCatalog) -> Self {
        Self {
            mode: Mode::default(),
            distance_id: catalog.default_distance().id.clone(),
            time: TimeComponents::default(),
            last: None,
            copy_notice: CopyNotice::default(),
        }
    }

    /// State restored from saved preferences
    ///
    /// An unrecognised saved mode falls back to time-to-pace, and a saved
    /// distance missing from `catalog` falls back to its default.
    #[must_use]
    pub fn restore<S: PreferenceStore + ?Sized>(catalog: &DistanceCatalog, store: &S) -> Self {
        let mode = store
            .get(storage_keys::CALCULATOR_MODE)
            .and_then(|saved| Mode::from_stored(&saved))
            .unwrap_or_default();
        let saved_distance = store.get(storage_keys::LAST_DISTANCE);
        let distance_id = catalog.lookup(saved_distance.as_deref()).id.clone();

        debug!(%mode, distance = %distance_id, "Restored calculator state");
        Self {
            mode,
            distance_id,
            ..Self::new(catalog)
        }
    }

    /// Current mode
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Switch mode and remember it
    ///
    /// # Errors
    ///
    /// Returns an error if the preference cannot be saved
    pub fn set_mode<S: PreferenceStore + ?Sized>(&mut self, mode: Mode, store: &mut S) -> AppResult<()> {
        self.mode = mode;
        store.set(storage_keys::CALCULATOR_MODE, mode.as_str())
    }

    /// Id of the selected distance
    #[must_use]
    pub fn distance_id(&self) -> &str {
        &self.distance_id
    }

    /// The selected distance, resolved against `catalog`
    #[must_use]
    pub fn selected_distance<'a>(&self, catalog: &'a DistanceCatalog) -> &'a Distance {
        catalog.lookup(Some(&self.distance_id))
    }

    /// Select a distance by id and remember it
    ///
    /// Unknown ids select the catalog default. Returns the distance that was
    /// actually selected.
    ///
    /// # Errors
    ///
    /// Returns an error if the preference cannot be saved
    pub fn select_distance<'a, S: PreferenceStore + ?Sized>(
        &mut self,
        catalog: &'a DistanceCatalog,
        id: &str,
        store: &mut S,
    ) -> AppResult<&'a Distance> {
        let distance = catalog.lookup(Some(id));
        self.distance_id.clone_from(&distance.id);
        store.set(storage_keys::LAST_DISTANCE, &distance.id)?;
        Ok(distance)
    }

    /// Raw time inputs
    #[must_use]
    pub const fn time(&self) -> &TimeComponents {
        &self.time
    }

    /// Replace the raw time inputs
    pub fn set_time(&mut self, time: TimeComponents) {
        self.time = time;
    }

    /// Run the engine on the current selection and keep the outcome
    pub fn calculate(&mut self, catalog: &DistanceCatalog) -> &CalculationOutcome {
        let distance = self.selected_distance(catalog).clone();
        let outcome = pace_engine::calculate(self.mode, &distance, &self.time);
        info!(
            mode = %self.mode,
            distance = %distance.id,
            success = outcome.is_ok(),
            "Calculation finished"
        );

        let last = self.last.insert(LastCalculation {
            mode: self.mode,
            distance,
            outcome,
        });
        &last.outcome
    }

    /// Most recent calculation, if any
    #[must_use]
    pub const fn last_calculation(&self) -> Option<&LastCalculation> {
        self.last.as_ref()
    }

    /// Clipboard text for the most recent calculation
    #[must_use]
    pub fn export_text(&self) -> Option<String> {
        self.last
            .as_ref()
            .map(|last| export_text(&last.distance, last.mode, &last.outcome))
    }

    /// Export the last calculation and start the copy confirmation
    ///
    /// Returns `None` when nothing has been calculated yet.
    pub fn copy_results(&mut self, now: Instant) -> Option<String> {
        let text = self.export_text()?;
        self.copy_notice.mark_copied(now);
        Some(text)
    }

    /// Copy confirmation state
    #[must_use]
    pub const fn copy_notice(&self) -> &CopyNotice {
        &self.copy_notice
    }
}
