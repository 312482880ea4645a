// ABOUTME: Habit pattern detection for training schedule, session length, intensity, and skill focus
// ABOUTME: Weekday and time-of-day habits, duration bucketing, load warnings, and weekly consistency
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Touchline Contributors

use std::collections::BTreeMap;

use chrono::Duration;
use touchline_core::constants::insight_priority::{
    HIGH_INTENSITY, LONG_SESSIONS, LOW_INTENSITY, MODERATE_SESSIONS, SHORT_SESSIONS, SKILL_FOCUS,
    TIME_OF_DAY_PATTERN, WEEKDAY_PATTERN, WEEKLY_CONSISTENCY,
};
use touchline_core::models::{Insight, InsightKind, InsightSource};

use crate::aggregator::{week_start, weekday_name, GroupStats, SessionAggregator, TimeWindow};
use crate::context::AnalysisContext;
use crate::engine::InsightDetector;

/// Largest group by session count, ties resolved to the smallest key
fn top_group<K: Copy + Ord>(groups: &BTreeMap<K, GroupStats>) -> Option<(K, usize)> {
    groups
        .iter()
        .fold(None, |best: Option<(K, usize)>, (key, stats)| match best {
            Some((_, count)) if count >= stats.count => best,
            _ => Some((*key, stats.count)),
        })
}

#[allow(clippy::cast_precision_loss)]
fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

/// Totals over every record in range
fn overall_stats(context: &AnalysisContext<'_>) -> GroupStats {
    SessionAggregator::group_sessions(context.records().iter().copied(), |_| Some(()))
        .remove(&())
        .unwrap_or_default()
}

/// Most common training weekday
pub struct WeekdayPatternDetector;

impl InsightDetector for WeekdayPatternDetector {
    fn name(&self) -> &'static str {
        "weekday_pattern"
    }

    fn detect(&self, context: &AnalysisContext<'_>) -> Vec<Insight> {
        let config = &context.config().patterns;
        let total = context.dated().len();
        if total < config.min_sessions {
            return Vec::new();
        }

        let by_weekday = SessionAggregator::by_weekday(context.dated());
        let Some((weekday, count)) = top_group(&by_weekday) else {
            return Vec::new();
        };
        let share = percent(count, total);
        if share < config.weekday_share_percent {
            return Vec::new();
        }

        let day = weekday_name(weekday);
        vec![Insight::new(
            InsightSource::WeekdayPattern,
            InsightKind::Pattern,
            WEEKDAY_PATTERN,
            format!("{day} Regular"),
            format!("{share:.0}% of your sessions happen on a {day}."),
        )]
    }
}

/// Preferred time of day
pub struct TimeOfDayDetector;

impl TimeOfDayDetector {
    const fn title(window: TimeWindow) -> &'static str {
        match window {
            TimeWindow::Morning => "Early Bird",
            TimeWindow::Afternoon => "Afternoon Regular",
            TimeWindow::Evening => "Evening Grinder",
            TimeWindow::Night => "Night Owl",
        }
    }
}

impl InsightDetector for TimeOfDayDetector {
    fn name(&self) -> &'static str {
        "time_of_day_pattern"
    }

    fn detect(&self, context: &AnalysisContext<'_>) -> Vec<Insight> {
        let config = &context.config().patterns;
        let total = context.dated().len();
        if total < config.min_sessions {
            return Vec::new();
        }

        let by_window = SessionAggregator::by_time_window(context.dated());
        let Some((window, count)) = top_group(&by_window) else {
            return Vec::new();
        };
        let share = percent(count, total);
        if share < config.time_window_share_percent {
            return Vec::new();
        }

        vec![Insight::new(
            InsightSource::TimeOfDayPattern,
            InsightKind::Pattern,
            TIME_OF_DAY_PATTERN,
            Self::title(window),
            format!("{share:.0}% of your sessions start in the {window}."),
        )]
    }
}

/// Average session length bucketing
pub struct SessionDurationDetector;

impl InsightDetector for SessionDurationDetector {
    fn name(&self) -> &'static str {
        "session_duration"
    }

    fn detect(&self, context: &AnalysisContext<'_>) -> Vec<Insight> {
        let config = &context.config().patterns;
        let stats = overall_stats(context);
        if stats.count < config.min_sessions_for_duration {
            return Vec::new();
        }

        let average = stats.average_duration();
        let insight = if average < config.short_session_minutes {
            Insight::new(
                InsightSource::SessionDuration,
                InsightKind::Recommendation,
                SHORT_SESSIONS,
                "Short Sessions",
                format!("Your sessions average {average:.0} minutes."),
            )
            .with_action("Add ten minutes of focused drills to your next few sessions.")
        } else if average >= config.long_session_minutes {
            Insight::new(
                InsightSource::SessionDuration,
                InsightKind::Pattern,
                LONG_SESSIONS,
                "Endurance Builder",
                format!("Your sessions average {average:.0} minutes. That's serious commitment."),
            )
        } else {
            Insight::new(
                InsightSource::SessionDuration,
                InsightKind::Pattern,
                MODERATE_SESSIONS,
                "Solid Session Length",
                format!("Your sessions average {average:.0} minutes."),
            )
        };
        vec![insight]
    }
}

/// Average intensity load
pub struct IntensityPatternDetector;

impl InsightDetector for IntensityPatternDetector {
    fn name(&self) -> &'static str {
        "intensity_pattern"
    }

    fn detect(&self, context: &AnalysisContext<'_>) -> Vec<Insight> {
        let config = &context.config().patterns;
        let stats = overall_stats(context);
        if stats.count < config.min_sessions {
            return Vec::new();
        }

        let average = stats.average_intensity();
        if average >= config.high_intensity_average {
            vec![Insight::new(
                InsightSource::IntensityPattern,
                InsightKind::Warning,
                HIGH_INTENSITY,
                "High Training Load",
                format!("Your sessions average an intensity of {average:.1} out of 5."),
            )
            .with_action("Schedule an easier recovery session this week.")]
        } else if average <= config.low_intensity_average {
            vec![Insight::new(
                InsightSource::IntensityPattern,
                InsightKind::Recommendation,
                LOW_INTENSITY,
                "Push a Little Harder",
                format!("Your sessions average an intensity of {average:.1} out of 5."),
            )
            .with_action("Add one high-tempo drill to your next session.")]
        } else {
            Vec::new()
        }
    }
}

/// Most practiced target skill
pub struct SkillFocusDetector;

impl InsightDetector for SkillFocusDetector {
    fn name(&self) -> &'static str {
        "skill_focus"
    }

    fn detect(&self, context: &AnalysisContext<'_>) -> Vec<Insight> {
        let config = &context.config().patterns;
        let counts = SessionAggregator::skill_counts(context.records().iter().copied());
        let total: usize = counts.values().sum();
        if total < config.min_sessions {
            return Vec::new();
        }

        // Alphabetical iteration, so the first maximum wins ties
        let Some((skill, count)) = counts
            .iter()
            .fold(None, |best: Option<(&str, usize)>, (skill, count)| match best {
                Some((_, top)) if top >= *count => best,
                _ => Some((*skill, *count)),
            })
        else {
            return Vec::new();
        };

        vec![Insight::new(
            InsightSource::SkillFocus,
            InsightKind::Pattern,
            SKILL_FOCUS,
            format!("Skill Focus: {skill}"),
            format!(
                "{skill} is your most practiced skill ({count} of {total} targeted skills, {:.0}%).",
                percent(count, total)
            ),
        )]
    }
}

/// A session in each of the trailing calendar weeks
pub struct WeeklyConsistencyDetector;

impl InsightDetector for WeeklyConsistencyDetector {
    fn name(&self) -> &'static str {
        "weekly_consistency"
    }

    fn detect(&self, context: &AnalysisContext<'_>) -> Vec<Insight> {
        let weeks = context.config().patterns.consistency_weeks;
        let by_week = SessionAggregator::by_week_start(context.dated());
        let current_week = week_start(context.today());

        let consistent = (0..i64::from(weeks)).all(|back| {
            by_week.get(&(current_week - Duration::weeks(back))).is_some_and(|stats| stats.count > 0)
        });
        if !consistent {
            return Vec::new();
        }

        vec![Insight::new(
            InsightSource::WeeklyConsistency,
            InsightKind::Pattern,
            WEEKLY_CONSISTENCY,
            "Consistent Every Week",
            format!("You've trained in each of the last {weeks} weeks."),
        )
        .with_action("Keep at least one session on the calendar every week.")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use touchline_core::models::{SessionRecord, SessionRecordBuilder};

    use crate::config::InsightEngineConfig;
    use crate::context::InsightRequest;

    /// Sunday, 2025-06-15 at noon UTC
    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    fn at(day: u32, hour: u32) -> SessionRecord {
        SessionRecordBuilder::new()
            .date(Utc.with_ymd_and_hms(2025, 6, day, hour, 0, 0).unwrap())
            .duration_minutes(40.0)
            .build()
            .unwrap()
    }

    fn lasting(minutes: f64) -> SessionRecord {
        SessionRecordBuilder::new()
            .duration_minutes(minutes)
            .build()
            .unwrap()
    }

    fn with_intensity(intensity: u8) -> SessionRecord {
        SessionRecordBuilder::new()
            .duration_minutes(40.0)
            .intensity(intensity)
            .build()
            .unwrap()
    }

    fn practicing(skill: &str) -> SessionRecord {
        SessionRecordBuilder::new()
            .duration_minutes(40.0)
            .exercise_with_skills("Technical", [skill], 3)
            .build()
            .unwrap()
    }

    fn run(detector: &dyn InsightDetector, records: &[SessionRecord]) -> Vec<Insight> {
        let config = InsightEngineConfig::default();
        let request = InsightRequest::new(now());
        let context = AnalysisContext::new(records, &request, &config);
        detector.detect(&context)
    }

    #[test]
    fn test_weekday_habit_at_forty_percent() {
        // June 2 and June 9 are Mondays
        let records = [at(9, 10), at(2, 10), at(10, 10), at(11, 10), at(12, 10)];
        let insights = run(&WeekdayPatternDetector, &records);
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].title(), "Monday Regular");
        assert!(insights[0].description().starts_with("40%"));

        let diluted = [
            at(9, 10),
            at(2, 10),
            at(10, 10),
            at(11, 10),
            at(12, 10),
            at(13, 10),
        ];
        assert!(run(&WeekdayPatternDetector, &diluted).is_empty());

        let too_few = [at(9, 10), at(2, 10), at(10, 10), at(11, 10)];
        assert!(run(&WeekdayPatternDetector, &too_few).is_empty());
    }

    #[test]
    fn test_time_of_day_habit_at_half_of_sessions() {
        let records = [
            at(9, 18),
            at(10, 19),
            at(11, 20),
            at(12, 8),
            at(13, 9),
            at(14, 14),
        ];
        let insights = run(&TimeOfDayDetector, &records);
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].title(), "Evening Grinder");
        assert!(insights[0].description().ends_with("start in the evening."));

        let split = [at(9, 18), at(10, 19), at(12, 8), at(13, 9), at(14, 14)];
        assert!(run(&TimeOfDayDetector, &split).is_empty());

        let night = [at(9, 23), at(10, 2), at(11, 22), at(12, 8), at(13, 14)];
        assert_eq!(run(&TimeOfDayDetector, &night)[0].title(), "Night Owl");
    }

    #[test]
    fn test_duration_buckets() {
        let bucket = |minutes: f64| {
            let records = [lasting(minutes), lasting(minutes), lasting(minutes)];
            run(&SessionDurationDetector, &records)
                .first()
                .map(|insight| (insight.title().to_owned(), insight.kind()))
        };

        assert_eq!(
            bucket(19.5),
            Some(("Short Sessions".to_owned(), InsightKind::Recommendation))
        );
        assert_eq!(
            bucket(20.0),
            Some(("Solid Session Length".to_owned(), InsightKind::Pattern))
        );
        assert_eq!(
            bucket(59.5),
            Some(("Solid Session Length".to_owned(), InsightKind::Pattern))
        );
        assert_eq!(
            bucket(60.0),
            Some(("Endurance Builder".to_owned(), InsightKind::Pattern))
        );

        assert!(run(&SessionDurationDetector, &[lasting(10.0), lasting(10.0)]).is_empty());
    }

    #[test]
    fn test_intensity_thresholds() {
        let detect = |levels: [u8; 5]| run(&IntensityPatternDetector, &levels.map(with_intensity));

        let high = detect([4, 4, 4, 4, 4]);
        assert_eq!(high[0].kind(), InsightKind::Warning);
        assert_eq!(high[0].title(), "High Training Load");
        assert!(detect([4, 4, 4, 4, 3]).is_empty());

        let low = detect([2, 2, 2, 2, 2]);
        assert_eq!(low[0].kind(), InsightKind::Recommendation);
        assert_eq!(low[0].title(), "Push a Little Harder");
        assert!(detect([2, 2, 2, 2, 3]).is_empty());

        let too_few = [with_intensity(5), with_intensity(5), with_intensity(5), with_intensity(5)];
        assert!(run(&IntensityPatternDetector, &too_few).is_empty());
    }

    #[test]
    fn test_skill_focus_breaks_ties_alphabetically() {
        let records = [
            practicing("passing"),
            practicing("shooting"),
            practicing("passing"),
            practicing("dribbling"),
            practicing("shooting"),
            practicing("dribbling"),
        ];
        let insights = run(&SkillFocusDetector, &records);
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].title(), "Skill Focus: dribbling");
        assert!(insights[0].description().contains("2 of 6"));

        let sparse = [practicing("passing"), practicing("passing"), practicing("shooting")];
        assert!(run(&SkillFocusDetector, &sparse).is_empty());
    }

    #[test]
    fn test_weekly_consistency_needs_every_recent_week() {
        let may = |day: u32| {
            SessionRecordBuilder::new()
                .date(Utc.with_ymd_and_hms(2025, 5, day, 10, 0, 0).unwrap())
                .duration_minutes(40.0)
                .build()
                .unwrap()
        };

        // Weeks starting June 9, June 2, May 26, and May 19
        let consistent = [at(10, 10), at(3, 10), may(27), may(20)];
        let insights = run(&WeeklyConsistencyDetector, &consistent);
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].title(), "Consistent Every Week");
        assert!(insights[0].description().contains("last 4 weeks"));

        let gap = [at(10, 10), at(3, 10), may(27), may(13)];
        assert!(run(&WeeklyConsistencyDetector, &gap).is_empty());

        let idle_this_week = [at(3, 10), may(27), may(20), may(13)];
        assert!(run(&WeeklyConsistencyDetector, &idle_this_week).is_empty());
    }

    #[test]
    fn test_top_group_prefers_smallest_key_on_tie() {
        let mut groups: BTreeMap<u32, GroupStats> = BTreeMap::new();
        groups.insert(
            3,
            GroupStats {
                count: 2,
                ..GroupStats::default()
            },
        );
        groups.insert(
            1,
            GroupStats {
                count: 2,
                ..GroupStats::default()
            },
        );
        groups.insert(
            5,
            GroupStats {
                count: 1,
                ..GroupStats::default()
            },
        );
        assert_eq!(top_group(&groups), Some((1, 2)));
        assert_eq!(top_group::<u32>(&BTreeMap::new()), None);
    }

    #[test]
    fn test_percent_guards_zero() {
        assert!(percent(3, 0).abs() < f64::EPSILON);
        assert!((percent(1, 4) - 25.0).abs() < f64::EPSILON);
    }
}
