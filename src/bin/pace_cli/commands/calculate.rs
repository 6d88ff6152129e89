// ABOUTME: Calculation command for pace-cli
// ABOUTME: Restores saved selections, runs one conversion, prints it, and persists the selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use pace_calculator::preferences::PreferenceStore;
use pace_calculator::state::AppState;
use pace_calculator::{DistanceCatalog, Mode, TimeComponents};
use std::process::ExitCode;
use std::time::Instant;
use tracing::warn;

use crate::helpers::display::{print_calculation, print_calculation_json};

/// Exit status for input that did not add up to a positive time
const INVALID_INPUT_EXIT: u8 = 2;

/// How results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human readable summary
    Text,
    /// JSON document
    Json,
    /// Clipboard export text
    Export,
}

/// One conversion requested on the command line
pub struct CalculationRequest {
    /// Conversion direction
    pub mode: Mode,
    /// Requested distance id; `None` keeps the saved one
    pub distance: Option<String>,
    /// Raw hours input
    pub hours: String,
    /// Raw minutes input
    pub minutes: String,
    /// Raw seconds input
    pub seconds: String,
}

/// Run a calculation and print it
pub fn run<S: PreferenceStore>(
    request: CalculationRequest,
    catalog: &DistanceCatalog,
    store: &mut S,
    output: OutputFormat,
) -> Result<ExitCode> {
    let mut state = AppState::restore(catalog, store);
    state.set_mode(request.mode, store)?;

    if let Some(id) = request.distance.as_deref() {
        let selected = state.select_distance(catalog, id, store)?;
        if selected.id != id {
            warn!(
                requested = id,
                using = %selected.id,
                "Unknown distance, falling back to the catalog default"
            );
        }
    }

    state.set_time(TimeComponents::new(
        request.hours,
        request.minutes,
        request.seconds,
    ));
    let succeeded = state.calculate(catalog).is_ok();

    match output {
        OutputFormat::Text => {
            if let Some(last) = state.last_calculation() {
                print_calculation(last);
            }
        }
        OutputFormat::Json => {
            if let Some(last) = state.last_calculation() {
                print_calculation_json(last)?;
            }
        }
        OutputFormat::Export => {
            if let Some(text) = state.copy_results(Instant::now()) {
                println!("{text}");
            }
        }
    }

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(INVALID_INPUT_EXIT)
    })
}
