// ABOUTME: Insight engine configuration orchestrating per-detector threshold sections
// ABOUTME: Provides defaults, environment variable overrides, and unified validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Touchline Contributors

//! Insight Engine Configuration
//!
//! Configuration is an ordinary value handed to [`crate::InsightEngine`]; there
//! is no process-wide instance. [`InsightEngineConfig::load`] starts from the
//! defaults, applies `TOUCHLINE_*` environment overrides, and validates the result.

pub mod error;
pub mod thresholds;

pub use error::ConfigError;
pub use thresholds::{
    BalanceConfig, PatternConfig, ProjectionConfig, RankingConfig, StreakConfig, TrendConfig,
};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use tracing::debug;

/// Main insight engine configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InsightEngineConfig {
    /// Rating and performance trend classification
    pub trend: TrendConfig,
    /// Consecutive-day streak thresholds
    pub streak: StreakConfig,
    /// Exercise category balance thresholds
    pub balance: BalanceConfig,
    /// Training frequency and milestone projection
    pub projection: ProjectionConfig,
    /// Habit pattern detection (weekday, time of day, duration, intensity, skills)
    pub patterns: PatternConfig,
    /// Final ranking and execution settings
    pub ranking: RankingConfig,
}

impl InsightEngineConfig {
    /// Load configuration from defaults and environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        debug!(config = ?config, "Insight engine configuration loaded");
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first inconsistent setting
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.float_settings().iter().all(|value| value.is_finite()) {
            return Err(ConfigError::InvalidRange(
                "numeric thresholds must be finite",
            ));
        }
        if self.trend.min_samples < 2 {
            return Err(ConfigError::ValueOutOfRange(
                "trend min_samples must be at least 2",
            ));
        }
        if self.trend.improvement_threshold_percent <= 0.0 {
            return Err(ConfigError::InvalidRange(
                "trend improvement threshold must be > 0",
            ));
        }
        if self.trend.decline_threshold_percent >= 0.0 {
            return Err(ConfigError::InvalidRange(
                "trend decline threshold must be < 0",
            ));
        }

        if self.streak.celebration_days == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "streak celebration_days must be at least 1",
            ));
        }
        if self.streak.resume_after_days < 1 {
            return Err(ConfigError::ValueOutOfRange(
                "streak resume_after_days must be at least 1",
            ));
        }

        Self::validate_balance(&self.balance)?;
        Self::validate_projection(&self.projection)?;
        Self::validate_patterns(&self.patterns)?;

        Ok(())
    }

    fn validate_balance(balance: &BalanceConfig) -> Result<(), ConfigError> {
        let percentages = [
            balance.dominance_percent,
            balance.technical_min_percent,
            balance.physical_min_percent,
            balance.tactical_min_percent,
        ];
        if percentages.iter().any(|p| !(0.0..=100.0).contains(p)) {
            return Err(ConfigError::InvalidRange(
                "balance percentages must be between 0 and 100",
            ));
        }
        Ok(())
    }

    fn validate_projection(projection: &ProjectionConfig) -> Result<(), ConfigError> {
        if projection.low_frequency_per_week >= projection.high_frequency_per_week {
            return Err(ConfigError::InvalidRange(
                "low_frequency_per_week must be < high_frequency_per_week",
            ));
        }
        if projection.milestones.is_empty() {
            return Err(ConfigError::InvalidRange("milestones must not be empty"));
        }
        if projection.milestones.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ConfigError::InvalidRange(
                "milestones must be strictly ascending",
            ));
        }
        if projection.frequency_milestone_step == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "frequency_milestone_step must be positive",
            ));
        }
        if projection.min_sessions_for_projection == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "min_sessions_for_projection must be positive",
            ));
        }
        if projection.achievement_window_days < 0 {
            return Err(ConfigError::ValueOutOfRange(
                "achievement_window_days must not be negative",
            ));
        }
        if projection.min_rate_per_week <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "min_rate_per_week must be positive",
            ));
        }
        Ok(())
    }

    fn validate_patterns(patterns: &PatternConfig) -> Result<(), ConfigError> {
        if patterns.min_sessions == 0 || patterns.min_sessions_for_duration == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "pattern session minimums must be positive",
            ));
        }
        if patterns.short_session_minutes >= patterns.long_session_minutes {
            return Err(ConfigError::InvalidRange(
                "short_session_minutes must be < long_session_minutes",
            ));
        }
        if patterns.low_intensity_average >= patterns.high_intensity_average {
            return Err(ConfigError::InvalidRange(
                "low_intensity_average must be < high_intensity_average",
            ));
        }
        let shares = [
            patterns.weekday_share_percent,
            patterns.time_window_share_percent,
        ];
        if shares.iter().any(|p| !(0.0..=100.0).contains(p)) {
            return Err(ConfigError::InvalidRange(
                "pattern share percentages must be between 0 and 100",
            ));
        }
        if patterns.consistency_weeks == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "consistency_weeks must be positive",
            ));
        }
        Ok(())
    }

    fn float_settings(&self) -> [f64; 15] {
        [
            self.trend.improvement_threshold_percent,
            self.trend.decline_threshold_percent,
            self.balance.dominance_percent,
            self.balance.technical_min_percent,
            self.balance.physical_min_percent,
            self.balance.tactical_min_percent,
            self.projection.high_frequency_per_week,
            self.projection.low_frequency_per_week,
            self.projection.min_rate_per_week,
            self.patterns.weekday_share_percent,
            self.patterns.time_window_share_percent,
            self.patterns.short_session_minutes,
            self.patterns.long_session_minutes,
            self.patterns.high_intensity_average,
            self.patterns.low_intensity_average,
        ]
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Trend overrides
        Self::apply_env_var("TOUCHLINE_TREND_MIN_SAMPLES", &mut self.trend.min_samples)?;
        Self::apply_env_var(
            "TOUCHLINE_TREND_IMPROVEMENT_PERCENT",
            &mut self.trend.improvement_threshold_percent,
        )?;
        Self::apply_env_var(
            "TOUCHLINE_TREND_DECLINE_PERCENT",
            &mut self.trend.decline_threshold_percent,
        )?;

        // Streak overrides
        Self::apply_env_var(
            "TOUCHLINE_STREAK_CELEBRATION_DAYS",
            &mut self.streak.celebration_days,
        )?;
        Self::apply_env_var(
            "TOUCHLINE_STREAK_RESUME_AFTER_DAYS",
            &mut self.streak.resume_after_days,
        )?;

        // Category balance overrides
        Self::apply_env_var(
            "TOUCHLINE_BALANCE_DOMINANCE_PERCENT",
            &mut self.balance.dominance_percent,
        )?;
        Self::apply_env_var(
            "TOUCHLINE_BALANCE_TECHNICAL_MIN_PERCENT",
            &mut self.balance.technical_min_percent,
        )?;
        Self::apply_env_var(
            "TOUCHLINE_BALANCE_PHYSICAL_MIN_PERCENT",
            &mut self.balance.physical_min_percent,
        )?;
        Self::apply_env_var(
            "TOUCHLINE_BALANCE_TACTICAL_MIN_PERCENT",
            &mut self.balance.tactical_min_percent,
        )?;

        // Projection overrides
        Self::apply_env_var(
            "TOUCHLINE_PROJECTION_HIGH_FREQUENCY",
            &mut self.projection.high_frequency_per_week,
        )?;
        Self::apply_env_var(
            "TOUCHLINE_PROJECTION_LOW_FREQUENCY",
            &mut self.projection.low_frequency_per_week,
        )?;
        Self::apply_env_var(
            "TOUCHLINE_PROJECTION_MILESTONE_STEP",
            &mut self.projection.frequency_milestone_step,
        )?;
        Self::apply_env_var(
            "TOUCHLINE_PROJECTION_MIN_SESSIONS",
            &mut self.projection.min_sessions_for_projection,
        )?;
        Self::apply_env_var(
            "TOUCHLINE_PROJECTION_MIN_FREQUENCY_SESSIONS",
            &mut self.projection.min_sessions_for_frequency,
        )?;
        Self::apply_env_var(
            "TOUCHLINE_PROJECTION_ACHIEVEMENT_WINDOW_DAYS",
            &mut self.projection.achievement_window_days,
        )?;

        // Pattern overrides
        Self::apply_env_var(
            "TOUCHLINE_PATTERN_MIN_SESSIONS",
            &mut self.patterns.min_sessions,
        )?;
        Self::apply_env_var(
            "TOUCHLINE_PATTERN_SHORT_MINUTES",
            &mut self.patterns.short_session_minutes,
        )?;
        Self::apply_env_var(
            "TOUCHLINE_PATTERN_LONG_MINUTES",
            &mut self.patterns.long_session_minutes,
        )?;
        Self::apply_env_var(
            "TOUCHLINE_PATTERN_CONSISTENCY_WEEKS",
            &mut self.patterns.consistency_weeks,
        )?;

        // Ranking overrides
        if let Ok(val) = env::var("TOUCHLINE_RANKING_MAX_INSIGHTS") {
            let max = val
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid TOUCHLINE_RANKING_MAX_INSIGHTS".into()))?;
            self.ranking.max_insights = Some(max);
        }
        Self::apply_env_var(
            "TOUCHLINE_RANKING_PARALLEL_THRESHOLD",
            &mut self.ranking.parallel_threshold,
        )?;

        Ok(self)
    }
}
