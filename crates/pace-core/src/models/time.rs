// ABOUTME: Raw hours/minutes/seconds input and its lenient integer parsing
// ABOUTME: Empty or non-numeric components count as zero; ranges are not checked
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::constants::units::{SECONDS_PER_HOUR, SECONDS_PER_MINUTE};

/// Parse one time component the way a browser's `parseInt` reads a form field
///
/// Leading whitespace and a single `+`/`-` sign are accepted, then as many
/// ASCII digits as follow. A `0x`/`0X` prefix switches to hexadecimal digits,
/// so `"0x1e"` reads as 30. Anything after the digits is ignored, so `"12.7"`
/// reads as 12 and `"1e3"` as 1. No digits at all reads as 0. Values too large
/// for an `i64` saturate instead of overflowing.
#[must_use]
pub fn parse_time_component(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (negative, digits) = trimmed.strip_prefix('-').map_or_else(
        || (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        |rest| (true, rest),
    );

    let (radix, digits) = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
        .map_or((10, digits), |hex| (16, hex));

    let magnitude = digits
        .chars()
        .map_while(|c| c.to_digit(radix))
        .fold(0_i64, |acc, digit| {
            acc.saturating_mul(i64::from(radix))
                .saturating_add(i64::from(digit))
        });

    if negative {
        -magnitude
    } else {
        magnitude
    }
}

/// Hours, minutes and seconds exactly as the user typed them
///
/// Out-of-range values are accepted: 90 seconds is simply 90 seconds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeComponents {
    /// Hours field
    pub hours: String,
    /// Minutes field
    pub minutes: String,
    /// Seconds field
    pub seconds: String,
}

impl TimeComponents {
    /// Build from the three raw fields
    #[must_use]
    pub fn new(hours: impl Into<String>, minutes: impl Into<String>, seconds: impl Into<String>) -> Self {
        Self {
            hours: hours.into(),
            minutes: minutes.into(),
            seconds: seconds.into(),
        }
    }

    /// `hours * 3600 + minutes * 60 + seconds`, saturating at the `i64` bounds
    #[must_use]
    pub fn total_seconds(&self) -> i64 {
        parse_time_component(&self.hours)
            .saturating_mul(SECONDS_PER_HOUR)
            .saturating_add(parse_time_component(&self.minutes).saturating_mul(SECONDS_PER_MINUTE))
            .saturating_add(parse_time_component(&self.seconds))
    }

    /// All three fields are blank
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hours.trim().is_empty() && self.minutes.trim().is_empty() && self.seconds.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_digits() {
        assert_eq!(parse_time_component("42"), 42);
        assert_eq!(parse_time_component("007"), 7);
    }

    #[test]
    fn test_parse_blank_and_garbage_are_zero() {
        assert_eq!(parse_time_component(""), 0);
        assert_eq!(parse_time_component("   "), 0);
        assert_eq!(parse_time_component("abc"), 0);
        assert_eq!(parse_time_component("-"), 0);
        assert_eq!(parse_time_component(".5"), 0);
    }

    #[test]
    fn test_parse_stops_at_first_non_digit() {
        assert_eq!(parse_time_component("12.7"), 12);
        assert_eq!(parse_time_component("1e3"), 1);
        assert_eq!(parse_time_component("  9 minutes"), 9);
        assert_eq!(parse_time_component("+15"), 15);
    }

    #[test]
    fn test_parse_hex_prefix() {
        assert_eq!(parse_time_component("0x1e"), 30);
        assert_eq!(parse_time_component("0XFF"), 255);
        assert_eq!(parse_time_component(" -0x10"), -16);
        assert_eq!(parse_time_component("0x"), 0);
        assert_eq!(parse_time_component("0xg"), 0);
        assert_eq!(parse_time_component("0x1g5"), 1);
        assert_eq!(parse_time_component("00x1e"), 0);
    }

    #[test]
    fn test_parse_negative_sign() {
        assert_eq!(parse_time_component("-5"), -5);
        assert_eq!(parse_time_component("-0"), 0);
    }

    #[test]
    fn test_parse_saturates_on_overflow() {
        assert_eq!(parse_time_component("99999999999999999999999999"), i64::MAX);
        assert_eq!(parse_time_component("-99999999999999999999999999"), -i64::MAX);
    }

    #[test]
    fn test_total_seconds_accepts_out_of_range_fields() {
        let time = TimeComponents::new("", "75", "90");
        assert_eq!(time.total_seconds(), 75 * 60 + 90);
    }

    #[test]
    fn test_total_seconds_saturates() {
        let time = TimeComponents::new("99999999999999999999", "1", "1");
        assert_eq!(time.total_seconds(), i64::MAX);
    }
}
