// ABOUTME: Conversion arithmetic for time-to-pace and pace-to-time modes
// ABOUTME: Validates the combined time, then derives mile pace and splits or a finish time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pace_core::constants::checkpoints::SPLIT_CHECKPOINTS;
use pace_core::formatters::{
    format_finish_time, format_kilometers, format_mile_pace, format_miles, format_split_time,
};
use pace_core::{
    CalculationError, CalculationResult, Distance, Mode, PaceSplit, ResultBreakdown,
    TimeComponents, TotalDistance,
};
use tracing::debug;

/// Convert raw hours/minutes/seconds strings for `distance` in the given mode
///
/// In [`Mode::TimeToPace`] the fields are the elapsed time for `distance`;
/// in [`Mode::PaceToTime`] they are a pace per mile.
///
/// # Errors
///
/// Returns [`CalculationError::InvalidTime`] when the fields add up to zero
/// seconds or less. Unparseable fields count as zero and are not errors.
pub fn calculate_results(
    mode: Mode,
    distance: &Distance,
    hours: &str,
    minutes: &str,
    seconds: &str,
) -> Result<CalculationResult, CalculationError> {
    calculate(mode, distance, &TimeComponents::new(hours, minutes, seconds))
}

/// Same as [`calculate_results`] for an already-assembled [`TimeComponents`]
///
/// # Errors
///
/// Returns [`CalculationError::InvalidTime`] when the total is not positive.
pub fn calculate(
    mode: Mode,
    distance: &Distance,
    time: &TimeComponents,
) -> Result<CalculationResult, CalculationError> {
    let total_seconds = time.total_seconds();
    if total_seconds <= 0 {
        debug!(%mode, distance = %distance.id, total_seconds, "Rejected non-positive time");
        return Err(CalculationError::InvalidTime { total_seconds });
    }

    let result = match mode {
        Mode::TimeToPace => time_to_pace(distance, total_seconds as f64),
        Mode::PaceToTime => pace_to_time(distance, total_seconds as f64),
    };

    debug!(
        %mode,
        distance = %distance.id,
        total_seconds,
        main_result = %result.main_result,
        "Calculated result"
    );

    Ok(result)
}

/// Elapsed time over `distance` -> mile pace plus checkpoint splits
fn time_to_pace(distance: &Distance, elapsed_seconds: f64) -> CalculationResult {
    let meters_per_second = distance.meters() / elapsed_seconds;

    let mut splits: Vec<PaceSplit> = SPLIT_CHECKPOINTS
        .iter()
        .map(|checkpoint| PaceSplit {
            label: checkpoint.label.to_owned(),
            formatted_time: format_split_time(checkpoint.meters / meters_per_second),
            distance_in_meters: checkpoint.meters,
        })
        .collect();
    splits.sort_by(|a, b| a.distance_in_meters.total_cmp(&b.distance_in_meters));

    let mile_seconds = elapsed_seconds / distance.miles;

    CalculationResult {
        main_result: format_mile_pace(mile_seconds),
        breakdown: ResultBreakdown::Splits(splits),
    }
}

/// Seconds per mile -> projected finish time over `distance`
fn pace_to_time(distance: &Distance, pace_seconds: f64) -> CalculationResult {
    let total_time_seconds = (pace_seconds * distance.miles).round() as u64;

    CalculationResult {
        main_result: format_finish_time(total_time_seconds),
        breakdown: ResultBreakdown::TotalDistance(TotalDistance {
            kilometers: format_kilometers(distance.kilometers),
            miles: format_miles(distance.miles),
        }),
    }
}
