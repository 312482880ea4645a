// ABOUTME: Session aggregation grouping records by weekday, time window, category, and week start
// ABOUTME: Single-pass reductions into count/sum/average statistics with zero-safe averages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Touchline Contributors

//! Session aggregation
//!
//! Every reduction is a single pass over the input. A classification function
//! decides which key(s) a record contributes to; returning nothing skips the
//! record for that classification only, so a record missing a date still
//! counts toward category totals.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Datelike, Duration, NaiveDate, Timelike};
use serde::{Deserialize, Serialize};
use touchline_core::constants::time_windows::{
    AFTERNOON_START_HOUR, EVENING_START_HOUR, MORNING_START_HOUR, NIGHT_START_HOUR,
};
use touchline_core::models::SessionRecord;

use crate::context::DatedSession;

/// Count and sum of a numeric metric for one group
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DerivedStatistic {
    /// Number of contributing values
    pub count: usize,
    /// Sum of contributing values
    pub sum: f64,
}

impl DerivedStatistic {
    /// Add one value
    pub fn add(&mut self, value: f64) {
        self.count += 1;
        self.sum += value;
    }

    /// Mean of the contributing values, `0.0` for an empty group
    #[must_use]
    pub fn average(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum / self.count as f64
        }
    }
}

/// Session count, total duration, and total intensity for one group
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupStats {
    /// Sessions in the group
    pub count: usize,
    /// Sum of session durations in minutes
    pub total_duration: f64,
    /// Sum of session intensities
    pub total_intensity: f64,
}

impl GroupStats {
    fn add(&mut self, record: &SessionRecord) {
        self.count += 1;
        self.total_duration += record.duration_minutes();
        self.total_intensity += f64::from(record.intensity().value());
    }

    /// Mean session duration, `0.0` for an empty group
    #[must_use]
    pub fn average_duration(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total_duration / self.count as f64
        }
    }

    /// Mean session intensity, `0.0` for an empty group
    #[must_use]
    pub fn average_intensity(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total_intensity / self.count as f64
        }
    }
}

/// Part of the day a session started in (player's local time)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeWindow {
    /// 05:00-11:59
    Morning,
    /// 12:00-16:59
    Afternoon,
    /// 17:00-20:59
    Evening,
    /// 21:00-04:59
    Night,
}

impl TimeWindow {
    /// Window containing a local hour (0-23)
    #[must_use]
    pub const fn from_hour(hour: u32) -> Self {
        if hour >= NIGHT_START_HOUR || hour < MORNING_START_HOUR {
            Self::Night
        } else if hour >= EVENING_START_HOUR {
            Self::Evening
        } else if hour >= AFTERNOON_START_HOUR {
            Self::Afternoon
        } else {
            Self::Morning
        }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
            Self::Night => "night",
        };
        f.write_str(label)
    }
}

/// Stateless grouping functions over session records
pub struct SessionAggregator;

impl SessionAggregator {
    /// Group records into session statistics by an optional key
    ///
    /// Records for which `classify` returns `None` are skipped.
    #[must_use]
    pub fn group_sessions<'r, K, I, F>(records: I, classify: F) -> BTreeMap<K, GroupStats>
    where
        K: Ord,
        I: IntoIterator<Item = &'r SessionRecord>,
        F: Fn(&SessionRecord) -> Option<K>,
    {
        let mut groups: BTreeMap<K, GroupStats> = BTreeMap::new();
        for record in records {
            if let Some(key) = classify(record) {
                groups.entry(key).or_default().add(record);
            }
        }
        groups
    }

    /// Reduce any number of `(key, value)` samples per record into derived statistics
    #[must_use]
    pub fn summarize<'r, K, I, S, F>(records: I, classify: F) -> BTreeMap<K, DerivedStatistic>
    where
        K: Ord,
        I: IntoIterator<Item = &'r SessionRecord>,
        S: IntoIterator<Item = (K, f64)>,
        F: Fn(&'r SessionRecord) -> S,
    {
        let mut groups: BTreeMap<K, DerivedStatistic> = BTreeMap::new();
        for record in records {
            for (key, value) in classify(record) {
                groups.entry(key).or_default().add(value);
            }
        }
        groups
    }

    /// Sessions per local weekday (keys are `Weekday::number_from_monday`, 1-7)
    #[must_use]
    pub fn by_weekday(sessions: &[DatedSession<'_>]) -> BTreeMap<u32, GroupStats> {
        Self::group_dated(sessions, |session| {
            session.local.weekday().number_from_monday()
        })
    }

    /// Sessions per local time-of-day window
    #[must_use]
    pub fn by_time_window(sessions: &[DatedSession<'_>]) -> BTreeMap<TimeWindow, GroupStats> {
        Self::group_dated(sessions, |session| {
            TimeWindow::from_hour(session.local.hour())
        })
    }

    /// Sessions per calendar week, keyed by the Monday that starts the week
    #[must_use]
    pub fn by_week_start(sessions: &[DatedSession<'_>]) -> BTreeMap<NaiveDate, GroupStats> {
        Self::group_dated(sessions, |session| week_start(session.day()))
    }

    /// Exercise entries per category string (case preserved), rated or not
    #[must_use]
    pub fn by_category<'r, I>(records: I) -> BTreeMap<&'r str, usize>
    where
        I: IntoIterator<Item = &'r SessionRecord>,
    {
        let mut counts: BTreeMap<&'r str, usize> = BTreeMap::new();
        for entry in records
            .into_iter()
            .flat_map(SessionRecord::exercise_entries)
        {
            *counts.entry(entry.category.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Occurrences of each target skill across all exercise entries
    #[must_use]
    pub fn skill_counts<'r, I>(records: I) -> BTreeMap<&'r str, usize>
    where
        I: IntoIterator<Item = &'r SessionRecord>,
    {
        let mut counts: BTreeMap<&'r str, usize> = BTreeMap::new();
        for skill in records
            .into_iter()
            .flat_map(SessionRecord::exercise_entries)
            .flat_map(|entry| entry.target_skills.iter())
        {
            *counts.entry(skill.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Time-ordered overall ratings, unrated sessions excluded
    #[must_use]
    pub fn rating_series(sessions: &[DatedSession<'_>]) -> Vec<f64> {
        sessions
            .iter()
            .filter_map(|session| session.record.overall_rating().score())
            .map(f64::from)
            .collect()
    }

    /// Time-ordered per-session mean exercise performance, sessions without rated exercises excluded
    #[must_use]
    pub fn performance_series(sessions: &[DatedSession<'_>]) -> Vec<f64> {
        sessions
            .iter()
            .filter_map(|session| session.record.mean_performance_rating())
            .collect()
    }

    fn group_dated<K, F>(sessions: &[DatedSession<'_>], key: F) -> BTreeMap<K, GroupStats>
    where
        K: Ord,
        F: Fn(&DatedSession<'_>) -> K,
    {
        let mut groups: BTreeMap<K, GroupStats> = BTreeMap::new();
        for session in sessions {
            groups.entry(key(session)).or_default().add(session.record);
        }
        groups
    }
}

/// Monday starting the calendar week that contains `day`
#[must_use]
pub fn week_start(day: NaiveDate) -> NaiveDate {
    day - Duration::days(i64::from(day.weekday().num_days_from_monday()))
}

/// English name of a weekday number (1 = Monday)
#[must_use]
pub const fn weekday_name(number_from_monday: u32) -> &'static str {
    match number_from_monday {
        1 => "Monday",
        2 => "Tuesday",
        3 => "Wednesday",
        4 => "Thursday",
        5 => "Friday",
        6 => "Saturday",
        _ => "Sunday",
    }
}
