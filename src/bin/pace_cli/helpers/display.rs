// ABOUTME: Output formatting helpers for pace-cli
// ABOUTME: Renders calculations and catalogs as text or JSON on stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use pace_calculator::state::LastCalculation;
use pace_calculator::{DistanceCatalog, Mode, ResultBreakdown};
use serde_json::json;

/// Display a calculation the way the results panel lays it out
pub fn print_calculation(last: &LastCalculation) {
    let result = match &last.outcome {
        Ok(result) => result,
        Err(error) => {
            println!("{}", error.message());
            return;
        }
    };

    match last.mode {
        Mode::TimeToPace => println!("Your Paces:"),
        Mode::PaceToTime => println!("Your {} Time:", last.distance.label),
    }
    println!("  {}", result.main_result);
    println!();

    match &result.breakdown {
        ResultBreakdown::Splits(splits) => {
            let width = splits.iter().map(|s| s.label.chars().count()).max().unwrap_or(0) + 1;
            for split in splits {
                println!(
                    "  {:<width$} {}",
                    format!("{}:", split.label),
                    split.formatted_time
                );
            }
        }
        ResultBreakdown::TotalDistance(total) => {
            println!("  {:<10} {}", "Distance:", total.kilometers);
            println!("  {:<10} {}", "Miles:", total.miles);
        }
    }
}

/// Display a calculation as a JSON document
pub fn print_calculation_json(last: &LastCalculation) -> Result<()> {
    let document = match &last.outcome {
        Ok(result) => {
            let mut value = serde_json::to_value(result)?;
            if let Some(object) = value.as_object_mut() {
                object.insert("mode".to_owned(), json!(last.mode));
                object.insert("distance".to_owned(), json!(last.distance.id));
            }
            value
        }
        Err(error) => json!({
            "mode": last.mode,
            "distance": last.distance.id,
            "error": error.message(),
        }),
    };
    println!("{}", serde_json::to_string_pretty(&document)?);
    Ok(())
}

/// Display the catalog, one distance per line
pub fn print_distances(catalog: &DistanceCatalog) {
    let default_id = &catalog.default_distance().id;
    for distance in catalog.distances() {
        let marker = if &distance.id == default_id { "*" } else { " " };
        println!(
            "{marker} {:<14} {:<14} {:>8.2} mi {:>8.3} km",
            distance.id, distance.label, distance.miles, distance.kilometers
        );
    }
}
