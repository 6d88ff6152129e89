// ABOUTME: Re-exports helper modules for pace-cli
// ABOUTME: Provides output formatting shared by the commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;
