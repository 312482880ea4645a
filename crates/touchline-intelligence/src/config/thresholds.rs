// ABOUTME: Threshold configuration for each insight detector in the pipeline
// ABOUTME: Trend, streak, category balance, projection, pattern, and ranking settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Touchline Contributors

//! Detector thresholds
//!
//! Defaults match the thresholds players see in the app; each section can be tuned
//! through environment variables (see [`super::InsightEngineConfig::load`]).

use serde::{Deserialize, Serialize};
use touchline_core::constants::milestones::SESSION_MILESTONES;

/// First-half vs second-half trend classification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendConfig {
    /// Minimum samples before a trend is reported
    pub min_samples: usize,
    /// Change (percent) at or above which an improvement is celebrated
    pub improvement_threshold_percent: f64,
    /// Change (percent) at or below which a dip is flagged
    pub decline_threshold_percent: f64,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            min_samples: 4,
            improvement_threshold_percent: 15.0,
            decline_threshold_percent: -15.0,
        }
    }
}

/// Consecutive-day streak thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreakConfig {
    /// Streak length that earns a celebration
    pub celebration_days: u32,
    /// Days without training before suggesting a return
    pub resume_after_days: i64,
}

impl Default for StreakConfig {
    fn default() -> Self {
        Self {
            celebration_days: 7,
            resume_after_days: 3,
        }
    }
}

/// Technical/physical/tactical balance thresholds (percent of matched entries)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceConfig {
    /// Share strictly above which one category is considered dominant
    pub dominance_percent: f64,
    /// Technical share strictly above which the mix counts as balanced
    pub technical_min_percent: f64,
    /// Physical share strictly above which the mix counts as balanced
    pub physical_min_percent: f64,
    /// Tactical share strictly above which the mix counts as balanced
    pub tactical_min_percent: f64,
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            dominance_percent: 60.0,
            technical_min_percent: 30.0,
            physical_min_percent: 30.0,
            tactical_min_percent: 20.0,
        }
    }
}

/// Frequency and milestone projection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Sessions per week at or above which frequency is praised
    pub high_frequency_per_week: f64,
    /// Sessions per week below which more training is suggested
    pub low_frequency_per_week: f64,
    /// Session-count milestones, strictly ascending
    pub milestones: Vec<u32>,
    /// Round-number step used by the frequency insight's projection
    pub frequency_milestone_step: u32,
    /// Minimum sessions before a milestone date is projected
    pub min_sessions_for_projection: usize,
    /// Minimum dated sessions before frequency is classified
    pub min_sessions_for_frequency: usize,
    /// Floor applied to the weekly rate before dividing by it
    pub min_rate_per_week: f64,
    /// How recent a crossed milestone must be to be announced
    pub achievement_window_days: i64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            high_frequency_per_week: 3.0,
            low_frequency_per_week: 2.0,
            milestones: SESSION_MILESTONES.to_vec(),
            frequency_milestone_step: 50,
            min_sessions_for_projection: 3,
            min_sessions_for_frequency: 2,
            min_rate_per_week: 0.1,
            achievement_window_days: 7,
        }
    }
}

/// Habit pattern detection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternConfig {
    /// Minimum sessions before habit patterns are reported
    pub min_sessions: usize,
    /// Minimum sessions before the duration bucket is reported
    pub min_sessions_for_duration: usize,
    /// Share (percent) the top weekday needs to be called a habit
    pub weekday_share_percent: f64,
    /// Share (percent) the top time-of-day window needs to be called a habit
    pub time_window_share_percent: f64,
    /// Average length below which sessions are considered short
    pub short_session_minutes: f64,
    /// Average length at or above which sessions are considered long
    pub long_session_minutes: f64,
    /// Average intensity at or above which load is flagged
    pub high_intensity_average: f64,
    /// Average intensity at or below which more effort is suggested
    pub low_intensity_average: f64,
    /// Number of trailing calendar weeks that must all contain a session
    pub consistency_weeks: u32,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            min_sessions: 5,
            min_sessions_for_duration: 3,
            weekday_share_percent: 40.0,
            time_window_share_percent: 50.0,
            short_session_minutes: 20.0,
            long_session_minutes: 60.0,
            high_intensity_average: 4.0,
            low_intensity_average: 2.0,
            consistency_weeks: 4,
        }
    }
}

/// Final ranking settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingConfig {
    /// Keep at most this many insights after sorting (`None` keeps all)
    pub max_insights: Option<usize>,
    /// Record count at which detectors run on the rayon pool
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

const fn default_parallel_threshold() -> usize {
    512
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl RankingConfig {
    /// Ranking settings with the default parallel threshold and no cap
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_insights: None,
            parallel_threshold: default_parallel_threshold(),
        }
    }
}
