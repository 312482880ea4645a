// ABOUTME: Training rate estimation with frequency classification and milestone date projection
// ABOUTME: Linear sessions-per-week extrapolation toward fixed session-count milestones
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Touchline Contributors

//! Projection estimation
//!
//! All projections share one rate primitive: sessions per week between the
//! first and last dated session, with the span floored at one week so a burst
//! of same-day sessions cannot blow the rate up.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use touchline_core::constants::insight_priority::{
    HIGH_FREQUENCY, LOW_FREQUENCY, MILESTONE_ACHIEVEMENT, MILESTONE_PROJECTION,
};
use touchline_core::models::{Insight, InsightKind, InsightSource};

use crate::context::AnalysisContext;
use crate::engine::InsightDetector;

/// Projected arrival at the next session-count milestone
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MilestoneProjection {
    /// Sessions completed so far
    pub current: usize,
    /// Smallest milestone strictly above `current`
    pub next_milestone: u32,
    /// Sessions still needed
    pub remaining: usize,
    /// Rate used for the projection (after the floor)
    pub sessions_per_week: f64,
    /// Weeks until the milestone at that rate
    pub weeks_to_milestone: f64,
    /// Projected calendar date
    pub projected_date: DateTime<Utc>,
}

/// Linear rate and milestone projections
pub struct ProjectionEstimator;

impl ProjectionEstimator {
    /// Sessions per week between two dates, weeks floored at one
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn sessions_per_week(first: DateTime<Utc>, last: DateTime<Utc>, count: usize) -> f64 {
        let days = (last - first).num_days().max(0) as f64;
        let weeks = (days / 7.0).max(1.0);
        count as f64 / weeks
    }

    /// Sessions per week over the dated sessions in a context, `None` without dated sessions
    #[must_use]
    pub fn context_rate(context: &AnalysisContext<'_>) -> Option<f64> {
        let dated = context.dated();
        let first = dated.first()?;
        let last = dated.last()?;
        Some(Self::sessions_per_week(
            first.local.with_timezone(&Utc),
            last.local.with_timezone(&Utc),
            dated.len(),
        ))
    }

    /// Smallest milestone strictly above `count`
    #[must_use]
    pub fn next_milestone(count: usize, milestones: &[u32]) -> Option<u32> {
        milestones
            .iter()
            .copied()
            .find(|milestone| usize::try_from(*milestone).is_ok_and(|m| m > count))
    }

    /// Largest milestone at or below `count`
    #[must_use]
    pub fn reached_milestone(count: usize, milestones: &[u32]) -> Option<u32> {
        milestones
            .iter()
            .rev()
            .copied()
            .find(|milestone| usize::try_from(*milestone).is_ok_and(|m| m <= count))
    }

    /// Next multiple of `step` strictly above `count`
    #[must_use]
    pub fn next_round_milestone(count: usize, step: u32) -> usize {
        let step = usize::try_from(step).unwrap_or(usize::MAX).max(1);
        (count / step).saturating_add(1).saturating_mul(step)
    }

    /// Project when the next milestone will be reached
    ///
    /// `None` when every milestone is already behind, or the date falls outside
    /// the representable calendar. The projected date is at least one day after `now`.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn project_milestone(
        count: usize,
        sessions_per_week: f64,
        milestones: &[u32],
        min_rate_per_week: f64,
        now: DateTime<Utc>,
    ) -> Option<MilestoneProjection> {
        let next_milestone = Self::next_milestone(count, milestones)?;
        let remaining = usize::try_from(next_milestone).ok()?.saturating_sub(count);
        let rate = sessions_per_week.max(min_rate_per_week);
        let weeks_to_milestone = remaining as f64 / rate;
        let days = ((weeks_to_milestone * 7.0).ceil() as i64).max(1);
        let projected_date = now.checked_add_signed(Duration::try_days(days)?)?;

        Some(MilestoneProjection {
            current: count,
            next_milestone,
            remaining,
            sessions_per_week: rate,
            weeks_to_milestone,
            projected_date,
        })
    }
}

/// High and low training frequency detector
pub struct FrequencyDetector;

impl InsightDetector for FrequencyDetector {
    fn name(&self) -> &'static str {
        "training_frequency"
    }

    #[allow(clippy::cast_precision_loss)]
    fn detect(&self, context: &AnalysisContext<'_>) -> Vec<Insight> {
        let config = &context.config().projection;
        if context.dated().len() < config.min_sessions_for_frequency {
            return Vec::new();
        }
        let Some(rate) = ProjectionEstimator::context_rate(context) else {
            return Vec::new();
        };

        if rate >= config.high_frequency_per_week {
            let count = context.records().len();
            let target =
                ProjectionEstimator::next_round_milestone(count, config.frequency_milestone_step);
            let weeks = (target - count) as f64 / rate;
            vec![Insight::new(
                InsightSource::TrainingFrequency,
                InsightKind::Pattern,
                HIGH_FREQUENCY,
                "Training Machine",
                format!(
                    "You're averaging {rate:.1} sessions per week. At this pace you'll hit {target} sessions in about {:.0} weeks.",
                    weeks.ceil()
                ),
            )]
        } else if rate < config.low_frequency_per_week {
            vec![Insight::new(
                InsightSource::TrainingFrequency,
                InsightKind::Recommendation,
                LOW_FREQUENCY,
                "Train More Often",
                format!("You're averaging {rate:.1} sessions per week."),
            )
            .with_action(format!(
                "Aim for at least {:.0} sessions per week to keep improving.",
                config.low_frequency_per_week
            ))]
        } else {
            Vec::new()
        }
    }
}

/// Next-milestone date projection detector
pub struct MilestoneProjectionDetector;

impl InsightDetector for MilestoneProjectionDetector {
    fn name(&self) -> &'static str {
        "milestone_projection"
    }

    fn detect(&self, context: &AnalysisContext<'_>) -> Vec<Insight> {
        let config = &context.config().projection;
        let count = context.records().len();
        if count < config.min_sessions_for_projection {
            return Vec::new();
        }
        let Some(rate) = ProjectionEstimator::context_rate(context) else {
            return Vec::new();
        };
        let Some(projection) = ProjectionEstimator::project_milestone(
            count,
            rate,
            &config.milestones,
            config.min_rate_per_week,
            context.now(),
        ) else {
            return Vec::new();
        };

        let local_date: NaiveDate = projection
            .projected_date
            .with_timezone(&context.offset())
            .date_naive();
        vec![Insight::new(
            InsightSource::MilestoneProjection,
            InsightKind::Pattern,
            MILESTONE_PROJECTION,
            format!("Next Milestone: {} Sessions", projection.next_milestone),
            format!(
                "{} sessions to go. At {:.1} sessions per week you'll get there around {}.",
                projection.remaining,
                projection.sessions_per_week,
                local_date.format("%B %-d, %Y")
            ),
        )]
    }
}

/// Recently crossed milestone detector
pub struct MilestoneAchievementDetector;

impl InsightDetector for MilestoneAchievementDetector {
    fn name(&self) -> &'static str {
        "milestone_achievement"
    }

    fn detect(&self, context: &AnalysisContext<'_>) -> Vec<Insight> {
        let config = &context.config().projection;
        let dated = context.dated();
        let Some(milestone) = ProjectionEstimator::reached_milestone(dated.len(), &config.milestones)
        else {
            return Vec::new();
        };
        let Some(crossing) = usize::try_from(milestone)
            .ok()
            .and_then(|m| m.checked_sub(1))
            .and_then(|index| dated.get(index))
        else {
            return Vec::new();
        };

        let days_ago = (context.today() - crossing.day()).num_days();
        if !(0..=config.achievement_window_days).contains(&days_ago) {
            return Vec::new();
        }

        let when = match days_ago {
            0 => "today".to_owned(),
            1 => "yesterday".to_owned(),
            n => format!("{n} days ago"),
        };
        vec![Insight::new(
            InsightSource::MilestoneAchievement,
            InsightKind::Achievement,
            MILESTONE_ACHIEVEMENT,
            format!("{milestone} Sessions Completed"),
            format!("You reached {milestone} training sessions {when}."),
        )
        .with_action("Set a new goal for your next milestone.")]
    }
}
