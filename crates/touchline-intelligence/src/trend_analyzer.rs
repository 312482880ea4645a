// ABOUTME: First-half versus second-half trend analysis over time-ordered metric samples
// ABOUTME: Classifies rating and exercise-performance changes into celebration or warning insights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Touchline Contributors

use serde::{Deserialize, Serialize};
use touchline_core::constants::insight_priority::{
    PERFORMANCE_DIP, PERFORMANCE_IMPROVEMENT, RATING_DIP, RATING_IMPROVEMENT,
};
use touchline_core::models::{Insight, InsightKind, InsightSource};

use crate::aggregator::SessionAggregator;
use crate::config::TrendConfig;
use crate::context::AnalysisContext;
use crate::engine::InsightDetector;

/// Direction of a classified trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    /// Change at or above the improvement threshold
    Improving,
    /// Change at or below the decline threshold
    Declining,
    /// Anything in between
    Stable,
}

/// Result of comparing the two halves of a sample sequence
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendResult {
    /// Samples analyzed
    pub sample_count: usize,
    /// Mean of the first `count / 2` samples
    pub first_half_average: f64,
    /// Mean of the remaining samples
    pub second_half_average: f64,
    /// Relative change from first to second half, in percent
    pub change_percent: f64,
    /// Classification of `change_percent`
    pub direction: TrendDirection,
}

/// Half-split trend classifier
pub struct TrendAnalyzer;

impl TrendAnalyzer {
    /// Compare the first and second half of `samples`
    ///
    /// Returns `None` below `min_samples` or when the first half averages zero.
    /// For odd counts the second half holds the extra sample.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn analyze(samples: &[f64], config: &TrendConfig) -> Option<TrendResult> {
        if samples.len() < config.min_samples.max(2) {
            return None;
        }

        let (first, second) = samples.split_at(samples.len() / 2);
        let first_half_average = first.iter().sum::<f64>() / first.len() as f64;
        let second_half_average = second.iter().sum::<f64>() / second.len() as f64;

        if first_half_average.abs() < f64::EPSILON {
            return None;
        }

        let change_percent =
            (second_half_average - first_half_average) / first_half_average * 100.0;
        let direction = if change_percent >= config.improvement_threshold_percent {
            TrendDirection::Improving
        } else if change_percent <= config.decline_threshold_percent {
            TrendDirection::Declining
        } else {
            TrendDirection::Stable
        };

        Some(TrendResult {
            sample_count: samples.len(),
            first_half_average,
            second_half_average,
            change_percent,
            direction,
        })
    }
}

/// Trend in overall session ratings (unrated sessions excluded)
pub struct RatingTrendDetector;

impl InsightDetector for RatingTrendDetector {
    fn name(&self) -> &'static str {
        "rating_trend"
    }

    fn detect(&self, context: &AnalysisContext<'_>) -> Vec<Insight> {
        let samples = SessionAggregator::rating_series(context.dated());
        let Some(trend) = TrendAnalyzer::analyze(&samples, &context.config().trend) else {
            return Vec::new();
        };

        let insight = match trend.direction {
            TrendDirection::Improving => Insight::new(
                InsightSource::RatingTrend,
                InsightKind::Celebration,
                RATING_IMPROVEMENT,
                "Impressive Improvement",
                format!(
                    "Your session ratings are up {:.0}%, from an average of {:.1} to {:.1}.",
                    trend.change_percent, trend.first_half_average, trend.second_half_average
                ),
            )
            .with_action("Keep the same routine going, it is clearly working."),
            TrendDirection::Declining => Insight::new(
                InsightSource::RatingTrend,
                InsightKind::Warning,
                RATING_DIP,
                "Performance Dip",
                format!(
                    "Your session ratings dropped {:.0}%, from an average of {:.1} to {:.1}.",
                    trend.change_percent.abs(),
                    trend.first_half_average,
                    trend.second_half_average
                ),
            )
            .with_action("Plan a lighter session and check your rest and recovery."),
            TrendDirection::Stable => return Vec::new(),
        };
        vec![insight]
    }
}

/// Trend in per-session mean exercise performance
pub struct PerformanceTrendDetector;

impl InsightDetector for PerformanceTrendDetector {
    fn name(&self) -> &'static str {
        "performance_trend"
    }

    fn detect(&self, context: &AnalysisContext<'_>) -> Vec<Insight> {
        let samples = SessionAggregator::performance_series(context.dated());
        let Some(trend) = TrendAnalyzer::analyze(&samples, &context.config().trend) else {
            return Vec::new();
        };

        match trend.direction {
            TrendDirection::Improving => vec![Insight::new(
                InsightSource::PerformanceTrend,
                InsightKind::Celebration,
                PERFORMANCE_IMPROVEMENT,
                "Exercise Performance Rising",
                format!(
                    "Your exercise performance ratings improved {:.0}% across {} sessions.",
                    trend.change_percent, trend.sample_count
                ),
            )],
            TrendDirection::Declining => vec![Insight::new(
                InsightSource::PerformanceTrend,
                InsightKind::Warning,
                PERFORMANCE_DIP,
                "Exercise Performance Slipping",
                format!(
                    "Your exercise performance ratings fell {:.0}% across {} sessions.",
                    trend.change_percent.abs(),
                    trend.sample_count
                ),
            )
            .with_action("Revisit the drills you rated lowest and slow them down.")],
            TrendDirection::Stable => Vec::new(),
        }
    }
}
