// ABOUTME: pace-cli - command-line front end for the race pace calculator
// ABOUTME: Converts finish times to mile pace and splits, or target pace to finish times
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Marathon finish time -> mile pace and 400m/800m/1km/mile splits
//! pace-cli pace --distance marathon --hours 3 --minutes 30
//!
//! # 8:00/mile -> projected 5K finish time
//! pace-cli time --distance 5k --minutes 8
//!
//! # Reuse the last distance, print the clipboard text
//! pace-cli --export pace --minutes 22 --seconds 30
//!
//! # List distances in the active catalog
//! pace-cli distances
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use pace_calculator::config::{CalculatorConfig, LogLevel};
use pace_calculator::logging::LoggingConfig;
use pace_calculator::preferences::FilePreferenceStore;
use pace_calculator::{DistanceCatalog, Mode};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

use commands::calculate::OutputFormat;

#[derive(Parser)]
#[command(
    name = "pace-cli",
    about = "Race pace calculator",
    long_about = "Converts a race finish time into mile pace and splits, or a target mile pace into a projected finish time."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Built-in catalog preset (standard, classic)
    #[arg(long, global = true)]
    catalog: Option<String>,

    /// JSON catalog file (overrides --catalog)
    #[arg(long, global = true)]
    catalog_path: Option<PathBuf>,

    /// Preferences file override
    #[arg(long, global = true)]
    preferences: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true, conflicts_with = "export")]
    json: bool,

    /// Print the text that "Copy Results" would place on the clipboard
    #[arg(long, global = true)]
    export: bool,

    /// Log level (error, warn, info, debug, trace); overrides RUST_LOG
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Enable debug logging (same as --log-level debug)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Finish time for a distance -> mile pace and splits
    Pace(TimeArgs),

    /// Mile pace -> projected finish time for a distance
    Time(TimeArgs),

    /// List the distances in the active catalog
    Distances,
}

#[derive(Args)]
struct TimeArgs {
    /// Distance id (defaults to the last distance used)
    #[arg(long, short = 'd')]
    distance: Option<String>,

    /// Hours
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    hours: String,

    /// Minutes
    #[arg(long, short = 'm', default_value = "", allow_hyphen_values = true)]
    minutes: String,

    /// Seconds
    #[arg(long, short = 's', default_value = "", allow_hyphen_values = true)]
    seconds: String,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging
    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_log_level(LogLevel::Debug);
    } else if let Some(level) = cli.log_level.as_deref() {
        logging = logging.with_log_level(LogLevel::from_str_or_default(level));
    }
    logging.init()?;

    // Load configuration, command-line flags win
    let mut config = CalculatorConfig::from_env()?;
    if let Some(name) = cli.catalog {
        config = config.with_catalog_preset(name);
    }
    if let Some(path) = cli.catalog_path {
        config = config.with_catalog_file(path);
    }
    if let Some(path) = cli.preferences {
        config = config.with_preferences_path(path);
    }

    let catalog = config.load_catalog()?;
    let output = if cli.json {
        OutputFormat::Json
    } else if cli.export {
        OutputFormat::Export
    } else {
        OutputFormat::Text
    };

    // Execute command
    match cli.command {
        Command::Distances => {
            commands::distances::list(&catalog, output)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Pace(args) => run_calculation(Mode::TimeToPace, args, &catalog, &config, output),
        Command::Time(args) => run_calculation(Mode::PaceToTime, args, &catalog, &config, output),
    }
}

fn run_calculation(
    mode: Mode,
    args: TimeArgs,
    catalog: &DistanceCatalog,
    config: &CalculatorConfig,
    output: OutputFormat,
) -> Result<ExitCode> {
    info!(preferences = %config.preferences_path.display(), "Opening preferences");
    let mut store = FilePreferenceStore::open(&config.preferences_path)?;

    let request = commands::calculate::CalculationRequest {
        mode,
        distance: args.distance,
        hours: args.hours,
        minutes: args.minutes,
        seconds: args.seconds,
    };
    commands::calculate::run(request, catalog, &mut store, output)
}
