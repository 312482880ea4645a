// ABOUTME: Technical, physical, and tactical exercise distribution with balance classification
// ABOUTME: Recommends diversifying when one category dominates and recognizes a balanced mix
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Touchline Contributors

use std::fmt;

use serde::{Deserialize, Serialize};
use touchline_core::constants::categories::{PHYSICAL, TACTICAL, TECHNICAL};
use touchline_core::constants::insight_priority::{BALANCED_CATEGORIES, CATEGORY_DOMINANCE};
use touchline_core::models::{Insight, InsightKind, InsightSource};

use std::collections::BTreeMap;

use crate::aggregator::{DerivedStatistic, SessionAggregator};
use crate::config::BalanceConfig;
use crate::context::AnalysisContext;
use crate::engine::InsightDetector;

/// One of the three balance dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceCategory {
    /// Ball skills
    Technical,
    /// Fitness and conditioning
    Physical,
    /// Positioning and decision making
    Tactical,
}

impl BalanceCategory {
    /// All categories in reporting order
    pub const ALL: [Self; 3] = [Self::Technical, Self::Physical, Self::Tactical];

    /// Match a free-text category by case-insensitive substring
    ///
    /// Checked in technical, physical, tactical order; anything else is `None`.
    #[must_use]
    pub fn classify(category: &str) -> Option<Self> {
        let lowered = category.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|candidate| lowered.contains(candidate.keyword()))
    }

    const fn keyword(self) -> &'static str {
        match self {
            Self::Technical => TECHNICAL,
            Self::Physical => PHYSICAL,
            Self::Tactical => TACTICAL,
        }
    }
}

impl fmt::Display for BalanceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Matched exercise counts per balance category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDistribution {
    /// Technical entries
    pub technical: usize,
    /// Physical entries
    pub physical: usize,
    /// Tactical entries
    pub tactical: usize,
}

impl CategoryDistribution {
    /// Count matched entries from a per-category-string entry count
    #[must_use]
    pub fn from_counts<'a, I>(counts: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, usize)>,
    {
        let mut distribution = Self::default();
        for (category, entries) in counts {
            match BalanceCategory::classify(category) {
                Some(BalanceCategory::Technical) => distribution.technical += entries,
                Some(BalanceCategory::Physical) => distribution.physical += entries,
                Some(BalanceCategory::Tactical) => distribution.tactical += entries,
                None => {}
            }
        }
        distribution
    }

    /// Entries that matched any category
    #[must_use]
    pub const fn total(&self) -> usize {
        self.technical + self.physical + self.tactical
    }

    /// Entries in one category
    #[must_use]
    pub const fn count(&self, category: BalanceCategory) -> usize {
        match category {
            BalanceCategory::Technical => self.technical,
            BalanceCategory::Physical => self.physical,
            BalanceCategory::Tactical => self.tactical,
        }
    }

    /// Share of one category in percent, `None` when nothing matched
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn share(&self, category: BalanceCategory) -> Option<f64> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        Some(self.count(category) as f64 / total as f64 * 100.0)
    }
}

/// Outcome of classifying a distribution
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BalanceAssessment {
    /// One category strictly exceeds the dominance threshold
    Dominant {
        /// The dominant category
        category: BalanceCategory,
        /// Its share in percent
        share: f64,
    },
    /// Every category strictly exceeds its minimum share
    Balanced {
        /// Technical share in percent
        technical: f64,
        /// Physical share in percent
        physical: f64,
        /// Tactical share in percent
        tactical: f64,
    },
    /// Neither dominant nor balanced
    Mixed,
}

/// Category balance classification
pub struct CategoryBalanceClassifier;

impl CategoryBalanceClassifier {
    /// Mean rated performance per balance category
    ///
    /// Unrated entries and unmatched categories contribute nothing.
    #[must_use]
    pub fn performance(
        context: &AnalysisContext<'_>,
    ) -> BTreeMap<BalanceCategory, DerivedStatistic> {
        SessionAggregator::summarize(context.records().iter().copied(), |record| {
            record.exercise_entries().iter().filter_map(|entry| {
                let category = BalanceCategory::classify(&entry.category)?;
                let score = entry.performance_rating.score()?;
                Some((category, f64::from(score)))
            })
        })
    }

    /// Category with the lowest mean performance
    ///
    /// `None` unless at least two categories are rated and their averages
    /// differ. Ties go to the first category in reporting order.
    #[must_use]
    pub fn weakest(
        performance: &BTreeMap<BalanceCategory, DerivedStatistic>,
    ) -> Option<(BalanceCategory, f64)> {
        let rated: Vec<(BalanceCategory, f64)> = performance
            .iter()
            .filter(|(_, stats)| stats.count > 0)
            .map(|(category, stats)| (*category, stats.average()))
            .collect();
        let lowest = rated
            .iter()
            .copied()
            .fold(None, |best: Option<(BalanceCategory, f64)>, candidate| match best {
                Some((_, average)) if average <= candidate.1 => best,
                _ => Some(candidate),
            })?;
        let spread = rated
            .iter()
            .any(|(_, average)| *average - lowest.1 > f64::EPSILON);
        spread.then_some(lowest)
    }

    /// Classify a distribution, `None` when no entry matched a category
    #[must_use]
    pub fn assess(
        distribution: &CategoryDistribution,
        config: &BalanceConfig,
    ) -> Option<BalanceAssessment> {
        let technical = distribution.share(BalanceCategory::Technical)?;
        let physical = distribution.share(BalanceCategory::Physical)?;
        let tactical = distribution.share(BalanceCategory::Tactical)?;

        let dominant = [
            (BalanceCategory::Technical, technical),
            (BalanceCategory::Physical, physical),
            (BalanceCategory::Tactical, tactical),
        ]
        .into_iter()
        .find(|(_, share)| *share > config.dominance_percent);

        if let Some((category, share)) = dominant {
            return Some(BalanceAssessment::Dominant { category, share });
        }

        if technical > config.technical_min_percent
            && physical > config.physical_min_percent
            && tactical > config.tactical_min_percent
        {
            return Some(BalanceAssessment::Balanced {
                technical,
                physical,
                tactical,
            });
        }

        Some(BalanceAssessment::Mixed)
    }
}

/// Category balance detector over every exercise entry, dated or not
pub struct CategoryBalanceDetector;

impl InsightDetector for CategoryBalanceDetector {
    fn name(&self) -> &'static str {
        "category_balance"
    }

    fn detect(&self, context: &AnalysisContext<'_>) -> Vec<Insight> {
        let distribution = CategoryDistribution::from_counts(SessionAggregator::by_category(
            context.records().iter().copied(),
        ));

        match CategoryBalanceClassifier::assess(&distribution, &context.config().balance) {
            Some(BalanceAssessment::Dominant { category, share }) => {
                let others: Vec<String> = BalanceCategory::ALL
                    .into_iter()
                    .filter(|other| *other != category)
                    .map(|other| other.to_string())
                    .collect();
                vec![Insight::new(
                    InsightSource::CategoryBalance,
                    InsightKind::Recommendation,
                    CATEGORY_DOMINANCE,
                    "Diversify Your Training",
                    format!("{share:.0}% of your exercises are {category}."),
                )
                .with_action(format!(
                    "Add some {} exercises to round out your game.",
                    others.join(" and ")
                ))]
            }
            Some(BalanceAssessment::Balanced {
                technical,
                physical,
                tactical,
            }) => {
                let insight = Insight::new(
                    InsightSource::CategoryBalance,
                    InsightKind::Pattern,
                    BALANCED_CATEGORIES,
                    "Well-Balanced Training",
                    format!(
                        "Your exercises are split {technical:.0}% technical, {physical:.0}% physical and {tactical:.0}% tactical."
                    ),
                );
                let performance = CategoryBalanceClassifier::performance(context);
                let insight = match CategoryBalanceClassifier::weakest(&performance) {
                    Some((category, average)) => insight.with_action(format!(
                        "Your {category} exercises rate lowest at {average:.1} out of 5. Give them a little extra focus."
                    )),
                    None => insight,
                };
                vec![insight]
            }
            Some(BalanceAssessment::Mixed) | None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use touchline_core::models::{SessionRecord, SessionRecordBuilder};

    use crate::config::InsightEngineConfig;
    use crate::context::InsightRequest;

    fn distribution(technical: usize, physical: usize, tactical: usize) -> CategoryDistribution {
        CategoryDistribution {
            technical,
            physical,
            tactical,
        }
    }

    #[test]
    fn test_classify_substring_case_insensitive() {
        assert_eq!(
            BalanceCategory::classify("Technical Drills"),
            Some(BalanceCategory::Technical)
        );
        assert_eq!(
            BalanceCategory::classify("PHYSICAL"),
            Some(BalanceCategory::Physical)
        );
        assert_eq!(
            BalanceCategory::classify("small-sided tactical"),
            Some(BalanceCategory::Tactical)
        );
        assert_eq!(BalanceCategory::classify("Mental"), None);
    }

    #[test]
    fn test_dominance_is_strict() {
        let config = BalanceConfig::default();
        let assessment =
            CategoryBalanceClassifier::assess(&distribution(61, 25, 14), &config).unwrap();
        assert!(matches!(
            assessment,
            BalanceAssessment::Dominant {
                category: BalanceCategory::Technical,
                ..
            }
        ));

        let assessment =
            CategoryBalanceClassifier::assess(&distribution(60, 25, 15), &config).unwrap();
        assert_eq!(assessment, BalanceAssessment::Mixed);
    }

    #[test]
    fn test_balanced_mix() {
        let config = BalanceConfig::default();
        let assessment =
            CategoryBalanceClassifier::assess(&distribution(35, 35, 30), &config).unwrap();
        assert!(matches!(assessment, BalanceAssessment::Balanced { .. }));
    }

    #[test]
    fn test_unmatched_categories_are_excluded() {
        let counts = [("Technical", 2), ("Mental", 10), ("Physical", 2)];
        let distribution = CategoryDistribution::from_counts(counts);
        assert_eq!(distribution.total(), 4);
        assert_eq!(distribution.share(BalanceCategory::Technical), Some(50.0));
        assert!(CategoryBalanceClassifier::assess(
            &CategoryDistribution::default(),
            &BalanceConfig::default()
        )
        .is_none());
    }

    fn rated(category: &str, count: usize, score: u8) -> Vec<SessionRecord> {
        (0..count)
            .map(|_| {
                SessionRecordBuilder::new()
                    .duration_minutes(30.0)
                    .exercise(category, score)
                    .build()
                    .unwrap()
            })
            .collect()
    }

    fn detect(records: &[SessionRecord]) -> Vec<Insight> {
        let config = InsightEngineConfig::default();
        let request = InsightRequest::new(Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap());
        let context = AnalysisContext::new(records, &request, &config);
        CategoryBalanceDetector.detect(&context)
    }

    #[test]
    fn test_balanced_mix_names_weakest_category() {
        let mut records = rated("Technical", 7, 4);
        records.extend(rated("Physical Conditioning", 7, 2));
        records.extend(rated("Tactical Shape", 6, 5));
        records.extend(rated("Mental", 4, 1));

        let insights = detect(&records);
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].title(), "Well-Balanced Training");
        assert_eq!(
            insights[0].actionable(),
            Some("Your physical exercises rate lowest at 2.0 out of 5. Give them a little extra focus.")
        );
    }

    #[test]
    fn test_even_ratings_add_no_action() {
        let mut records = rated("Technical", 7, 3);
        records.extend(rated("Physical", 7, 3));
        records.extend(rated("Tactical", 6, 0));

        let insights = detect(&records);
        assert_eq!(insights.len(), 1);
        assert!(insights[0].actionable().is_none());
    }

    #[test]
    fn test_weakest_prefers_reporting_order_on_tie() {
        let mut performance = BTreeMap::new();
        for (category, score) in [
            (BalanceCategory::Tactical, 2.0),
            (BalanceCategory::Physical, 2.0),
            (BalanceCategory::Technical, 4.0),
        ] {
            performance
                .entry(category)
                .or_insert_with(DerivedStatistic::default)
                .add(score);
        }
        assert_eq!(
            CategoryBalanceClassifier::weakest(&performance),
            Some((BalanceCategory::Physical, 2.0))
        );
        assert!(CategoryBalanceClassifier::weakest(&BTreeMap::new()).is_none());
    }
}
