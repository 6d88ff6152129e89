// ABOUTME: Plain-text export of a calculation for the clipboard
// ABOUTME: Joins the main result with its splits or total distance into one string
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pace_core::{CalculationError, CalculationResult, Distance, Mode, ResultBreakdown};

/// Text copied for a calculation outcome
///
/// ```text
/// Marathon Time: 8:01 per mile
///
/// Split Paces:
/// 400m: 1:59
/// ...
/// ```
///
/// Pace-to-time results end with `Total Distance: {km}` and the miles in
/// parentheses on the following line. A failed calculation exports only its
/// message.
#[must_use]
pub fn export_text(
    distance: &Distance,
    mode: Mode,
    outcome: &Result<CalculationResult, CalculationError>,
) -> String {
    let main_result = match outcome {
        Ok(result) => result.main_result.as_str(),
        Err(error) => error.message(),
    };

    let mut text = format!("{} {}: {main_result}\n", distance.label, mode.input_label());

    if let Ok(result) = outcome {
        match &result.breakdown {
            ResultBreakdown::Splits(splits) => {
                text.push_str("\nSplit Paces:\n");
                for split in splits {
                    text.push_str(&split.label);
                    text.push_str(": ");
                    text.push_str(&split.formatted_time);
                    text.push('\n');
                }
            }
            ResultBreakdown::TotalDistance(total) => {
                text.push_str(&format!(
                    "\nTotal Distance: {}\n({})",
                    total.kilometers, total.miles
                ));
            }
        }
    }

    text
}
