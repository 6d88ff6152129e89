// ABOUTME: Configuration management module for the pace calculator
// ABOUTME: Resolves the distance catalog and preference file location from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! Configuration is environment-only; command-line flags override the
//! resolved values before the catalog is loaded.

/// Environment variable parsing and catalog resolution
pub mod environment;

pub use environment::{CalculatorConfig, CatalogSource, LogLevel};
