// ABOUTME: Final insight ranking by descending priority with stable tie ordering
// ABOUTME: Applies the optional result cap after sorting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Touchline Contributors

use std::cmp::Reverse;

use touchline_core::models::Insight;

use crate::config::RankingConfig;

/// Orders merged detector output
pub struct InsightRanker;

impl InsightRanker {
    /// Sort by descending priority, keeping emission order among equal priorities
    ///
    /// No deduplication is performed: detectors are independent and may emit
    /// several insights of the same kind.
    #[must_use]
    pub fn rank(mut insights: Vec<Insight>, config: &RankingConfig) -> Vec<Insight> {
        // sort_by_key is stable
        insights.sort_by_key(|insight| Reverse(insight.priority()));
        if let Some(max) = config.max_insights {
            insights.truncate(max);
        }
        insights
    }
}
