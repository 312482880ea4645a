// ABOUTME: Consecutive-day training streak calculation over the player's calendar days
// ABOUTME: Emits streak celebrations and resume-training nudges after a break
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Touchline Contributors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use touchline_core::constants::insight_priority::{RESUME_TRAINING, STREAK_CELEBRATION};
use touchline_core::models::{Insight, InsightKind, InsightSource};

use crate::context::AnalysisContext;
use crate::engine::InsightDetector;

/// Streak state as of "today"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakSummary {
    /// Consecutive days ending today or yesterday, `0` if the run is broken
    pub current: u32,
    /// Longest run of consecutive days in the history
    pub best: u32,
    /// Distinct calendar days with at least one session
    pub active_days: usize,
    /// Whole days between the last session day and today
    pub days_since_last: Option<i64>,
}

/// Streak computation over distinct calendar days
pub struct StreakCalculator;

impl StreakCalculator {
    /// Summarize streaks from session days
    ///
    /// Days are deduplicated here; input order does not matter. Days after
    /// `today` are ignored.
    #[must_use]
    pub fn summarize<I>(days: I, today: NaiveDate) -> StreakSummary
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        let mut days: Vec<NaiveDate> = days.into_iter().filter(|day| *day <= today).collect();
        days.sort_unstable();
        days.dedup();

        let Some(&last) = days.last() else {
            return StreakSummary::default();
        };

        let mut best = 0_u32;
        let mut run = 0_u32;
        let mut previous: Option<NaiveDate> = None;
        for &day in &days {
            run = match previous {
                Some(prev) if (day - prev).num_days() == 1 => run + 1,
                _ => 1,
            };
            best = best.max(run);
            previous = Some(day);
        }

        let days_since_last = (today - last).num_days();
        // The run ending at the last day is the current streak while it is still alive
        let current = if days_since_last <= 1 { run } else { 0 };

        StreakSummary {
            current,
            best,
            active_days: days.len(),
            days_since_last: Some(days_since_last),
        }
    }

    /// Summarize the streaks visible in an analysis context
    #[must_use]
    pub fn from_context(context: &AnalysisContext<'_>) -> StreakSummary {
        Self::summarize(
            context.dated().iter().map(|session| session.day()),
            context.today(),
        )
    }
}

/// Streak celebration and resume-training detector
pub struct StreakDetector;

impl InsightDetector for StreakDetector {
    fn name(&self) -> &'static str {
        "streak"
    }

    fn detect(&self, context: &AnalysisContext<'_>) -> Vec<Insight> {
        let config = &context.config().streak;
        let summary = StreakCalculator::from_context(context);
        let mut insights = Vec::new();

        if summary.current >= config.celebration_days {
            insights.push(
                Insight::new(
                    InsightSource::Streak,
                    InsightKind::Celebration,
                    STREAK_CELEBRATION,
                    "On Fire",
                    format!(
                        "You've trained {} days in a row! Your best streak is {} days.",
                        summary.current, summary.best
                    ),
                )
                .with_action("Train today to keep the streak alive."),
            );
        }

        if summary.current == 0 {
            if let Some(days) = summary.days_since_last {
                if days >= config.resume_after_days {
                    insights.push(
                        Insight::new(
                            InsightSource::Streak,
                            InsightKind::Recommendation,
                            RESUME_TRAINING,
                            "Time to Get Back Out There",
                            format!("It's been {days} days since your last session."),
                        )
                        .with_action("Start with a short, easy session to rebuild the habit."),
                    );
                }
            }
        }

        insights
    }
}
