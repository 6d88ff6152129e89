// ABOUTME: Calculation mode enumeration (time-to-pace or pace-to-time)
// ABOUTME: Includes the stored string form used by persisted preferences
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Mode {
    /// Elapsed time for the selected distance in, mile pace and splits out
    #[default]
    TimeToPace,
    /// Mile pace in, projected finish time for the selected distance out
    PaceToTime,
}

impl Mode {
    /// Stored representation (`timeToPace` / `paceToTime`)
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TimeToPace => "timeToPace",
            Self::PaceToTime => "paceToTime",
        }
    }

    /// Parse the stored representation; anything else is rejected
    #[must_use]
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "timeToPace" => Some(Self::TimeToPace),
            "paceToTime" => Some(Self::PaceToTime),
            _ => None,
        }
    }

    /// What the user enters in this mode ("Time" or "Pace")
    #[must_use]
    pub const fn input_label(&self) -> &'static str {
        match self {
            Self::TimeToPace => "Time",
            Self::PaceToTime => "Pace",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
