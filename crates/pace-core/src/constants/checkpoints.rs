// ABOUTME: Fixed checkpoint distances used for split reporting
// ABOUTME: 400m, 800m, 1km and one mile, each with its display label
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::units::METERS_PER_MILE;

/// A reference distance for which a split time is always reported
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Checkpoint {
    /// Display label, e.g. "1 mile"
    pub label: &'static str,
    /// Checkpoint length in meters
    pub meters: f64,
}

/// One lap of a standard track
pub const TRACK_LAP: Checkpoint = Checkpoint {
    label: "400m",
    meters: 400.0,
};

/// Two laps of a standard track
pub const HALF_MILE: Checkpoint = Checkpoint {
    label: "800m (½ mile)",
    meters: 800.0,
};

/// One kilometer
pub const KILOMETER: Checkpoint = Checkpoint {
    label: "1km",
    meters: 1000.0,
};

/// One statute mile
pub const MILE: Checkpoint = Checkpoint {
    label: "1 mile",
    meters: METERS_PER_MILE,
};

/// All checkpoints reported in time-to-pace mode
pub const SPLIT_CHECKPOINTS: [Checkpoint; 4] = [TRACK_LAP, HALF_MILE, KILOMETER, MILE];
