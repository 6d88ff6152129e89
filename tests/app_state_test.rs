// ABOUTME: Integration tests for the presentation-layer application state
// ABOUTME: Covers restoring preferences, persisting selections, calculating, and copying results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::standard_catalog;
use pace_calculator::constants::storage_keys;
use pace_calculator::notice::COPY_NOTICE_DURATION;
use pace_calculator::preferences::{MemoryPreferenceStore, PreferenceStore};
use pace_calculator::state::AppState;
use pace_calculator::{CalculationError, DistanceCatalog, Mode, TimeComponents};
use std::time::{Duration, Instant};

#[test]
fn test_restore_with_empty_store_uses_defaults() {
    let catalog = standard_catalog();
    let state = AppState::restore(&catalog, &MemoryPreferenceStore::new());

    assert_eq!(state.mode(), Mode::TimeToPace);
    assert_eq!(state.distance_id(), "1k");
    assert!(state.time().is_empty());
    assert!(state.last_calculation().is_none());
    assert!(state.export_text().is_none());
}

#[test]
fn test_restore_reads_saved_mode_and_distance() {
    let catalog = standard_catalog();
    let store = MemoryPreferenceStore::with_entries([
        (storage_keys::CALCULATOR_MODE, "paceToTime"),
        (storage_keys::LAST_DISTANCE, "marathon"),
    ]);
    let state = AppState::restore(&catalog, &store);

    assert_eq!(state.mode(), Mode::PaceToTime);
    assert_eq!(state.selected_distance(&catalog).label, "Marathon");
}

#[test]
fn test_restore_ignores_unusable_saved_values() {
    let catalog = standard_catalog();
    let store = MemoryPreferenceStore::with_entries([
        (storage_keys::CALCULATOR_MODE, "sideways"),
        (storage_keys::LAST_DISTANCE, "ultra"),
    ]);
    let state = AppState::restore(&catalog, &store);

    assert_eq!(state.mode(), Mode::TimeToPace);
    assert_eq!(state.distance_id(), "1k");
}

#[test]
fn test_saved_distance_missing_from_smaller_catalog() {
    // 1K exists in the standard preset only
    let store = MemoryPreferenceStore::with_entries([(storage_keys::LAST_DISTANCE, "1k")]);
    let state = AppState::restore(&DistanceCatalog::classic(), &store);
    assert_eq!(state.distance_id(), "5k");
}

#[test]
fn test_selections_are_persisted() {
    let catalog = standard_catalog();
    let mut store = MemoryPreferenceStore::new();
    let mut state = AppState::new(&catalog);

    state.set_mode(Mode::PaceToTime, &mut store).unwrap();
    let selected = state.select_distance(&catalog, "10k", &mut store).unwrap();
    assert_eq!(selected.id, "10k");

    assert_eq!(
        store.get(storage_keys::CALCULATOR_MODE).as_deref(),
        Some("paceToTime")
    );
    assert_eq!(store.get(storage_keys::LAST_DISTANCE).as_deref(), Some("10k"));

    let restored = AppState::restore(&catalog, &store);
    assert_eq!(restored.mode(), Mode::PaceToTime);
    assert_eq!(restored.distance_id(), "10k");
}

#[test]
fn test_selecting_unknown_distance_selects_default() {
    let catalog = standard_catalog();
    let mut store = MemoryPreferenceStore::new();
    let mut state = AppState::new(&catalog);

    let selected = state.select_distance(&catalog, "ultra", &mut store).unwrap();
    assert_eq!(selected.id, "1k");
    assert_eq!(store.get(storage_keys::LAST_DISTANCE).as_deref(), Some("1k"));
}

#[test]
fn test_marathon_time_to_pace_export() {
    let catalog = standard_catalog();
    let mut store = MemoryPreferenceStore::new();
    let mut state = AppState::new(&catalog);
    state.select_distance(&catalog, "marathon", &mut store).unwrap();
    state.set_time(TimeComponents::new("3", "30", "0"));

    let result = state.calculate(&catalog).as_ref().unwrap();
    assert_eq!(result.main_result, "8:01 per mile");

    assert_eq!(
        state.export_text().unwrap(),
        "Marathon Time: 8:01 per mile\n\
         \n\
         Split Paces:\n\
         400m: 1:59\n\
         800m (½ mile): 3:59\n\
         1km: 4:59\n\
         1 mile: 8:01\n"
    );
}

#[test]
fn test_pace_to_time_export() {
    let catalog = standard_catalog();
    let mut store = MemoryPreferenceStore::new();
    let mut state = AppState::new(&catalog);
    state.set_mode(Mode::PaceToTime, &mut store).unwrap();
    state.select_distance(&catalog, "5k", &mut store).unwrap();
    state.set_time(TimeComponents::new("", "8", "0"));
    state.calculate(&catalog);

    assert_eq!(
        state.export_text().unwrap(),
        "5K Pace: 24:51\n\nTotal Distance: 5.00 km\n(3.11 miles)"
    );
}

#[test]
fn test_invalid_input_is_kept_and_exported() {
    let catalog = standard_catalog();
    let mut state = AppState::new(&catalog);
    state.set_time(TimeComponents::new("", "", ""));

    assert_eq!(
        state.calculate(&catalog),
        &Err(CalculationError::InvalidTime { total_seconds: 0 })
    );
    assert_eq!(
        state.export_text().unwrap(),
        "1K Time: Please enter a valid time\n"
    );
}

#[test]
fn test_export_reflects_selection_at_calculation_time() {
    let catalog = standard_catalog();
    let mut store = MemoryPreferenceStore::new();
    let mut state = AppState::new(&catalog);
    state.select_distance(&catalog, "5k", &mut store).unwrap();
    state.set_time(TimeComponents::new("", "20", "0"));
    state.calculate(&catalog);

    // Changing the selection afterwards does not rewrite the last result
    state.set_mode(Mode::PaceToTime, &mut store).unwrap();
    state.select_distance(&catalog, "marathon", &mut store).unwrap();

    let last = state.last_calculation().unwrap();
    assert_eq!(last.mode, Mode::TimeToPace);
    assert_eq!(last.distance.id, "5k");
    assert!(state.export_text().unwrap().starts_with("5K Time: 6:26 per mile\n"));
}

#[test]
fn test_copy_results_starts_notice() {
    let catalog = standard_catalog();
    let mut state = AppState::new(&catalog);
    let start = Instant::now();

    assert!(state.copy_results(start).is_none());
    assert!(!state.copy_notice().is_visible(start));

    state.set_time(TimeComponents::new("", "20", "0"));
    state.calculate(&catalog);
    let copied = state.copy_results(start).unwrap();
    assert_eq!(Some(copied), state.export_text());

    assert!(state.copy_notice().is_visible(start + Duration::from_millis(500)));
    assert!(!state.copy_notice().is_visible(start + COPY_NOTICE_DURATION));
}
