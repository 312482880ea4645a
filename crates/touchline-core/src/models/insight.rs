// ABOUTME: Insight value objects produced by the training-insight pipeline
// ABOUTME: Kinds, detector sources, and an immutable ranked Insight record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Touchline Contributors

use std::fmt;

use serde::{Deserialize, Serialize};

/// Categories of insights that can be generated
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    /// A recurring habit or regularity in the player's training
    Pattern,
    /// A completed accomplishment (milestone reached)
    Achievement,
    /// A suggested change to training
    Recommendation,
    /// A negative signal worth attention
    Warning,
    /// A positive signal worth celebrating
    Celebration,
}

impl fmt::Display for InsightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Pattern => "pattern",
            Self::Achievement => "achievement",
            Self::Recommendation => "recommendation",
            Self::Warning => "warning",
            Self::Celebration => "celebration",
        };
        f.write_str(label)
    }
}

/// Detector that produced an insight
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum InsightSource {
    /// First-half vs second-half overall session rating
    RatingTrend,
    /// First-half vs second-half mean exercise performance
    PerformanceTrend,
    /// Consecutive-day training streak
    Streak,
    /// Technical/physical/tactical distribution
    CategoryBalance,
    /// Sessions-per-week classification
    TrainingFrequency,
    /// Projected date of the next session-count milestone
    MilestoneProjection,
    /// Recently crossed session-count milestone
    MilestoneAchievement,
    /// Most common training weekday
    WeekdayPattern,
    /// Most common time-of-day window
    TimeOfDayPattern,
    /// Average session length bucket
    SessionDuration,
    /// Average perceived intensity
    IntensityPattern,
    /// Most frequently targeted skill
    SkillFocus,
    /// Sessions in every recent calendar week
    WeeklyConsistency,
    /// Caller-registered detector
    Custom,
}

/// An insight derived from a player's session history
///
/// Insights are immutable once constructed; the pipeline creates them fresh on
/// every invocation and never caches them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    kind: InsightKind,
    title: String,
    description: String,
    priority: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    actionable: Option<String>,
    source: InsightSource,
}

impl Insight {
    /// Create an insight without a suggested action
    #[must_use]
    pub fn new(
        source: InsightSource,
        kind: InsightKind,
        priority: u8,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            description: description.into(),
            priority,
            actionable: None,
            source,
        }
    }

    /// Attach a suggested next action
    #[must_use]
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.actionable = Some(action.into());
        self
    }

    /// Insight category
    #[must_use]
    pub const fn kind(&self) -> InsightKind {
        self.kind
    }

    /// Short headline
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Human-readable explanation, may embed computed values
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Display priority, higher is shown first
    #[must_use]
    pub const fn priority(&self) -> u8 {
        self.priority
    }

    /// Suggested next action, if any
    #[must_use]
    pub fn actionable(&self) -> Option<&str> {
        self.actionable.as_deref()
    }

    /// Detector that produced this insight
    #[must_use]
    pub const fn source(&self) -> InsightSource {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insight_serialization() {
        let insight = Insight::new(
            InsightSource::Streak,
            InsightKind::Recommendation,
            9,
            "Time to Get Back Out There",
            "It's been 5 days since your last session.",
        )
        .with_action("Schedule a short session today");

        let json = serde_json::to_value(&insight).unwrap();
        assert_eq!(json["kind"], "recommendation");
        assert_eq!(json["source"], "streak");
        assert_eq!(json["priority"], 9);
        assert_eq!(json["actionable"], "Schedule a short session today");

        let plain = Insight::new(
            InsightSource::SkillFocus,
            InsightKind::Pattern,
            2,
            "Skill Focus",
            "Dribbling",
        );
        let json = serde_json::to_value(&plain).unwrap();
        assert!(json.get("actionable").is_none());
    }
}
