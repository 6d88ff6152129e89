// ABOUTME: Re-exports command modules for pace-cli
// ABOUTME: Provides the calculation and distance listing commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod calculate;
pub mod distances;
