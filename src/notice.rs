// ABOUTME: Auto-expiring "Copied!" confirmation for exported results
// ABOUTME: A supersedable one-shot deadline evaluated against a caller-supplied clock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pace_core::constants::timeouts::COPY_NOTICE_MS;
use std::time::{Duration, Instant};

/// Visibility window of the copy confirmation
pub const COPY_NOTICE_DURATION: Duration = Duration::from_millis(COPY_NOTICE_MS);

/// Confirmation shown after a result is copied
///
/// Copying again restarts the window, replacing the earlier deadline.
/// Callers pass `now` explicitly so rendering code and tests share one clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyNotice {
    visible_until: Option<Instant>,
}

impl CopyNotice {
    /// Show the confirmation for [`COPY_NOTICE_DURATION`] starting at `now`
    pub fn mark_copied(&mut self, now: Instant) {
        self.visible_until = Some(now + COPY_NOTICE_DURATION);
    }

    /// Hide the confirmation immediately
    pub fn cancel(&mut self) {
        self.visible_until = None;
    }

    /// Whether the confirmation is still showing at `now`
    #[must_use]
    pub fn is_visible(&self, now: Instant) -> bool {
        self.visible_until.is_some_and(|deadline| now < deadline)
    }

    /// Time left before the confirmation clears
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.visible_until
            .and_then(|deadline| deadline.checked_duration_since(now))
            .filter(|left| !left.is_zero())
    }
}
