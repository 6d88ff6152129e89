// ABOUTME: Display formatting for split times, mile paces, finish times, and distances
// ABOUTME: Shared by the conversion engine and the export text builder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Formatters
//!
//! `format_split_time` computes whole minutes with `floor` and the remaining
//! seconds with `round`, independently. A remainder that rounds up to 60 is
//! NOT carried into the minutes, so 119.6 s renders as `"1:60"`.

use crate::constants::messages::PER_MILE_SUFFIX;
use crate::constants::units::{SECONDS_PER_HOUR, SECONDS_PER_MINUTE};

const SECONDS_PER_MINUTE_F64: f64 = SECONDS_PER_MINUTE as f64;

/// Format a (possibly fractional) duration as `m:ss`
#[must_use]
pub fn format_split_time(seconds: f64) -> String {
    let minutes = (seconds / SECONDS_PER_MINUTE_F64).floor() as i64;
    let remaining_seconds = (seconds % SECONDS_PER_MINUTE_F64).round() as i64;
    format!("{minutes}:{remaining_seconds:02}")
}

/// Format seconds-per-mile as `m:ss per mile`
#[must_use]
pub fn format_mile_pace(seconds_per_mile: f64) -> String {
    format!("{} {PER_MILE_SUFFIX}", format_split_time(seconds_per_mile))
}

/// Format a whole number of seconds as `h:mm:ss`, or `m:ss` under one hour
#[must_use]
pub fn format_finish_time(total_seconds: u64) -> String {
    let hour = SECONDS_PER_HOUR as u64;
    let minute = SECONDS_PER_MINUTE as u64;

    let hours = total_seconds / hour;
    let minutes = (total_seconds % hour) / minute;
    let seconds = total_seconds % minute;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

/// Kilometers with exactly two decimals, e.g. `"21.10 km"`
#[must_use]
pub fn format_kilometers(kilometers: f64) -> String {
    format!("{kilometers:.2} km")
}

/// Miles with exactly two decimals, e.g. `"13.11 miles"`
#[must_use]
pub fn format_miles(miles: f64) -> String {
    format!("{miles:.2} miles")
}
