// ABOUTME: Training-insight pipeline turning session histories into ranked, human-readable insights
// ABOUTME: Aggregation, trend, streak, balance, projection, and habit detectors plus the ranking engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Touchline Contributors

#![deny(unsafe_code)]

//! # Touchline Intelligence
//!
//! A deterministic analytics pipeline. Callers hand [`InsightEngine`] a slice
//! of [`touchline_core::SessionRecord`] and an [`InsightRequest`] carrying the
//! reference "now", an optional time range, and the player's calendar offset.
//! The engine returns insights sorted by descending priority.
//!
//! Insufficient data is never an error: each detector checks its own
//! preconditions and simply emits nothing when they are unmet.

/// Single-pass grouping into per-dimension statistics
pub mod aggregator;

/// Per-detector thresholds with environment overrides
pub mod config;

/// Per-call inputs and the shared read-only analysis view
pub mod context;

/// Detector trait and engine orchestration
pub mod engine;

/// Technical/physical/tactical distribution
pub mod category_balance;

/// Weekday, time-of-day, duration, intensity, skill, and weekly habits
pub mod pattern_detection;

/// Training rate, frequency, and milestone projection
pub mod projection;

/// Stable priority ordering
pub mod ranker;

/// Consecutive-day streaks
pub mod streak;

/// First-half versus second-half trend classification
pub mod trend_analyzer;

pub use aggregator::{DerivedStatistic, GroupStats, SessionAggregator, TimeWindow};
pub use category_balance::{
    BalanceAssessment, BalanceCategory, CategoryBalanceClassifier, CategoryDistribution,
};
pub use config::{ConfigError, InsightEngineConfig};
pub use context::{AnalysisContext, DatedSession, InsightRequest};
pub use engine::{InsightDetector, InsightEngine};
pub use projection::{MilestoneProjection, ProjectionEstimator};
pub use ranker::InsightRanker;
pub use streak::{StreakCalculator, StreakSummary};
pub use trend_analyzer::{TrendAnalyzer, TrendDirection, TrendResult};
