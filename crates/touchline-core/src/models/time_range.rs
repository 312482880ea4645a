// ABOUTME: Time-range bound applied to session histories before insight generation
// ABOUTME: All-time or a trailing window of days relative to an injected reference time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Touchline Contributors

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::SessionRecord;

/// Which part of the history to analyze
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "days")]
pub enum TimeRange {
    /// Every record, including undated ones
    #[default]
    AllTime,
    /// Dated records from the trailing `n` days up to and including `now`
    LastDays(u32),
}

impl TimeRange {
    /// Trailing 7 days
    #[must_use]
    pub const fn last_week() -> Self {
        Self::LastDays(7)
    }

    /// Trailing 30 days
    #[must_use]
    pub const fn last_month() -> Self {
        Self::LastDays(30)
    }

    /// Earliest timestamp included
    ///
    /// `None` when the range has no lower bound: `AllTime`, or a window that
    /// reaches past the earliest representable date.
    #[must_use]
    pub fn start(self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            Self::AllTime => None,
            Self::LastDays(days) => {
                Duration::try_days(i64::from(days)).and_then(|span| now.checked_sub_signed(span))
            }
        }
    }

    /// Whether a record falls inside this range
    ///
    /// Undated records cannot be placed in a bounded window, so they only
    /// survive the `AllTime` range.
    #[must_use]
    pub fn contains(self, record: &SessionRecord, now: DateTime<Utc>) -> bool {
        match (self, record.date()) {
            (Self::AllTime, _) => true,
            (Self::LastDays(_), None) => false,
            (Self::LastDays(_), Some(date)) => match self.start(now) {
                Some(start) => start <= date && date <= now,
                None => date <= now,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SessionRecordBuilder;

    #[test]
    fn test_last_days_bounds() {
        let now = Utc::now();
        let inside = SessionRecordBuilder::new()
            .date(now - Duration::days(3))
            .build()
            .unwrap();
        let outside = SessionRecordBuilder::new()
            .date(now - Duration::days(10))
            .build()
            .unwrap();
        let future = SessionRecordBuilder::new()
            .date(now + Duration::hours(1))
            .build()
            .unwrap();
        let undated = SessionRecordBuilder::new().build().unwrap();

        let range = TimeRange::last_week();
        assert!(range.contains(&inside, now));
        assert!(!range.contains(&outside, now));
        assert!(!range.contains(&future, now));
        assert!(!range.contains(&undated, now));

        assert!(TimeRange::AllTime.contains(&undated, now));
        assert!(TimeRange::AllTime.contains(&outside, now));
    }

    #[test]
    fn test_oversized_window_has_no_lower_bound() {
        let now = Utc::now();
        let range = TimeRange::LastDays(u32::MAX);
        assert!(range.start(now).is_none());

        let old = SessionRecordBuilder::new()
            .date(now - Duration::days(20_000))
            .build()
            .unwrap();
        let future = SessionRecordBuilder::new()
            .date(now + Duration::hours(1))
            .build()
            .unwrap();
        let undated = SessionRecordBuilder::new().build().unwrap();

        assert!(range.contains(&old, now));
        assert!(!range.contains(&future, now));
        assert!(!range.contains(&undated, now));
    }
}
