// ABOUTME: Insight engine orchestrating detectors over one analysis context per call
// ABOUTME: Runs detectors sequentially or on the rayon pool and ranks the merged output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Touchline Contributors

//! Insight engine
//!
//! The engine is an ordinary value: it holds configuration and the registered
//! detectors, never any per-call state. Every call builds a fresh
//! [`AnalysisContext`], runs every detector against it, and hands the merged
//! candidates to [`InsightRanker`].

use rayon::prelude::*;
use touchline_core::models::{Insight, SessionRecord};
use tracing::{debug, info};

use crate::category_balance::CategoryBalanceDetector;
use crate::config::InsightEngineConfig;
use crate::context::{AnalysisContext, InsightRequest};
use crate::pattern_detection::{
    IntensityPatternDetector, SessionDurationDetector, SkillFocusDetector, TimeOfDayDetector,
    WeekdayPatternDetector, WeeklyConsistencyDetector,
};
use crate::projection::{FrequencyDetector, MilestoneAchievementDetector, MilestoneProjectionDetector};
use crate::ranker::InsightRanker;
use crate::streak::{StreakCalculator, StreakDetector, StreakSummary};
use crate::trend_analyzer::{PerformanceTrendDetector, RatingTrendDetector};

/// A single emit-or-skip insight source
///
/// Detectors must not fail: insufficient data means returning no insights.
pub trait InsightDetector: Send + Sync {
    /// Stable identifier used in logs
    fn name(&self) -> &'static str;

    /// Produce zero or more candidate insights
    fn detect(&self, context: &AnalysisContext<'_>) -> Vec<Insight>;
}

/// Deterministic training insight pipeline
pub struct InsightEngine {
    config: InsightEngineConfig,
    detectors: Vec<Box<dyn InsightDetector>>,
}

impl Default for InsightEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightEngine {
    /// Engine with default thresholds and the built-in detectors
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(InsightEngineConfig::default())
    }

    /// Engine with custom thresholds and the built-in detectors
    #[must_use]
    pub fn with_config(config: InsightEngineConfig) -> Self {
        Self {
            config,
            detectors: Self::builtin_detectors(),
        }
    }

    /// Register an additional detector, run after the built-in ones
    #[must_use]
    pub fn with_detector<D>(mut self, detector: D) -> Self
    where
        D: InsightDetector + 'static,
    {
        self.detectors.push(Box::new(detector));
        self
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &InsightEngineConfig {
        &self.config
    }

    /// Registered detector names in execution order
    #[must_use]
    pub fn detector_names(&self) -> Vec<&'static str> {
        self.detectors.iter().map(|detector| detector.name()).collect()
    }

    fn builtin_detectors() -> Vec<Box<dyn InsightDetector>> {
        vec![
            Box::new(RatingTrendDetector),
            Box::new(PerformanceTrendDetector),
            Box::new(StreakDetector),
            Box::new(CategoryBalanceDetector),
            Box::new(FrequencyDetector),
            Box::new(MilestoneProjectionDetector),
            Box::new(MilestoneAchievementDetector),
            Box::new(WeekdayPatternDetector),
            Box::new(TimeOfDayDetector),
            Box::new(SessionDurationDetector),
            Box::new(IntensityPatternDetector),
            Box::new(SkillFocusDetector),
            Box::new(WeeklyConsistencyDetector),
        ]
    }

    /// Generate ranked insights for a record set
    ///
    /// Never fails; sparse or empty input yields fewer (or no) insights.
    /// Identical inputs always produce identical output, whether or not the
    /// detectors ran in parallel.
    #[must_use]
    pub fn generate_insights(
        &self,
        records: &[SessionRecord],
        request: &InsightRequest,
    ) -> Vec<Insight> {
        let context = AnalysisContext::new(records, request, &self.config);
        let parallel = context.records().len() >= self.config.ranking.parallel_threshold;

        let run = |detector: &dyn InsightDetector| {
            let candidates = detector.detect(&context);
            debug!(
                detector = detector.name(),
                candidates = candidates.len(),
                "Detector finished"
            );
            candidates
        };

        // Indexed collect keeps registration order on the parallel path
        let per_detector: Vec<Vec<Insight>> = if parallel {
            self.detectors
                .par_iter()
                .map(|detector| run(detector.as_ref()))
                .collect()
        } else {
            self.detectors
                .iter()
                .map(|detector| run(detector.as_ref()))
                .collect()
        };

        let candidates: Vec<Insight> = per_detector.into_iter().flatten().collect();
        let candidate_count = candidates.len();
        let ranked = InsightRanker::rank(candidates, &self.config.ranking);

        info!(
            records = records.len(),
            analyzed = context.records().len(),
            dated = context.dated().len(),
            candidates = candidate_count,
            insights = ranked.len(),
            parallel,
            "Insight generation complete"
        );
        ranked
    }

    /// Current and best streak for a record set
    #[must_use]
    pub fn streak_summary(
        &self,
        records: &[SessionRecord],
        request: &InsightRequest,
    ) -> StreakSummary {
        let context = AnalysisContext::new(records, request, &self.config);
        StreakCalculator::from_context(&context)
    }
}
