// ABOUTME: Distance listing command for pace-cli
// ABOUTME: Prints the active catalog in display order, marking the default distance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use pace_calculator::DistanceCatalog;

use super::calculate::OutputFormat;
use crate::helpers::display::print_distances;

/// List the catalog
pub fn list(catalog: &DistanceCatalog, output: OutputFormat) -> Result<()> {
    if output == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(catalog)?);
    } else {
        print_distances(catalog);
    }
    Ok(())
}
