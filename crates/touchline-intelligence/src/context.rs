// ABOUTME: Per-invocation analysis context shared by all insight detectors
// ABOUTME: Holds the injected clock, calendar offset, filtered records, and date-sorted view
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Touchline Contributors

use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Utc};
use touchline_core::models::{SessionRecord, TimeRange};

use crate::config::InsightEngineConfig;

/// Inputs that accompany the record set on every call
///
/// `now` is injected rather than read from the system clock so the same
/// records and request always produce the same insights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsightRequest {
    /// Reference "now"
    pub now: DateTime<Utc>,
    /// Portion of the history to analyze
    pub time_range: TimeRange,
    /// The player's calendar offset, used for day, weekday, and hour bucketing
    pub utc_offset: FixedOffset,
}

impl InsightRequest {
    /// All-time request in UTC
    #[must_use]
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now,
            time_range: TimeRange::AllTime,
            utc_offset: Utc.fix(),
        }
    }

    /// Restrict the analysis window
    #[must_use]
    pub const fn with_time_range(mut self, time_range: TimeRange) -> Self {
        self.time_range = time_range;
        self
    }

    /// Use the player's local calendar
    #[must_use]
    pub const fn with_utc_offset(mut self, utc_offset: FixedOffset) -> Self {
        self.utc_offset = utc_offset;
        self
    }
}

/// A dated record with its timestamp converted to the player's calendar
#[derive(Debug, Clone, Copy)]
pub struct DatedSession<'a> {
    /// Local timestamp
    pub local: DateTime<FixedOffset>,
    /// Underlying record
    pub record: &'a SessionRecord,
}

impl DatedSession<'_> {
    /// Calendar day of the session
    #[must_use]
    pub fn day(&self) -> NaiveDate {
        self.local.date_naive()
    }
}

/// Read-only view of one invocation, built once and shared by every detector
#[derive(Debug)]
pub struct AnalysisContext<'a> {
    records: Vec<&'a SessionRecord>,
    dated: Vec<DatedSession<'a>>,
    now: DateTime<Utc>,
    offset: FixedOffset,
    config: &'a InsightEngineConfig,
}

impl<'a> AnalysisContext<'a> {
    /// Filter the records to the requested range and build the date-sorted view
    #[must_use]
    pub fn new(
        records: &'a [SessionRecord],
        request: &InsightRequest,
        config: &'a InsightEngineConfig,
    ) -> Self {
        let records: Vec<&SessionRecord> = records
            .iter()
            .filter(|record| request.time_range.contains(record, request.now))
            .collect();

        let mut dated: Vec<DatedSession<'a>> = records
            .iter()
            .filter_map(|&record| {
                record.date().map(|date| DatedSession {
                    local: date.with_timezone(&request.utc_offset),
                    record,
                })
            })
            .collect();
        // Stable: same-instant sessions keep their input order
        dated.sort_by_key(|session| session.local);

        Self {
            records,
            dated,
            now: request.now,
            offset: request.utc_offset,
            config,
        }
    }

    /// Records inside the time range, in input order (undated included under `AllTime`)
    #[must_use]
    pub fn records(&self) -> &[&'a SessionRecord] {
        &self.records
    }

    /// Dated records, ascending by date
    #[must_use]
    pub fn dated(&self) -> &[DatedSession<'a>] {
        &self.dated
    }

    /// Injected reference time
    #[must_use]
    pub const fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// Calendar day of `now` in the player's offset
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.now.with_timezone(&self.offset).date_naive()
    }

    /// The player's calendar offset
    #[must_use]
    pub const fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Engine configuration
    #[must_use]
    pub const fn config(&self) -> &'a InsightEngineConfig {
        self.config
    }
}
