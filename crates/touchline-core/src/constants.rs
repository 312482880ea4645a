// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Insight priorities, session milestones, and calendar windows for the insight engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Touchline Contributors

//! Constants module
//!
//! Fixed values shared by the engine and its callers, grouped by domain.
//! Tunable thresholds live in the intelligence crate's configuration instead.

/// Display priorities for each insight the engine can emit (higher = shown first)
pub mod insight_priority {
    /// Streak of seven or more days
    pub const STREAK_CELEBRATION: u8 = 10;
    /// Overall rating improved past the threshold
    pub const RATING_IMPROVEMENT: u8 = 9;
    /// No session for several days
    pub const RESUME_TRAINING: u8 = 9;
    /// Overall rating dropped past the threshold
    pub const RATING_DIP: u8 = 8;
    /// Session-count milestone crossed recently
    pub const MILESTONE_ACHIEVEMENT: u8 = 8;
    /// One category dominates the exercise mix
    pub const CATEGORY_DOMINANCE: u8 = 7;
    /// Fewer sessions per week than recommended
    pub const LOW_FREQUENCY: u8 = 7;
    /// Exercise performance improved past the threshold
    pub const PERFORMANCE_IMPROVEMENT: u8 = 7;
    /// Exercise performance dropped past the threshold
    pub const PERFORMANCE_DIP: u8 = 6;
    /// Average intensity is very high
    pub const HIGH_INTENSITY: u8 = 6;
    /// Training several times per week
    pub const HIGH_FREQUENCY: u8 = 6;
    /// Technical, physical and tactical work are all represented
    pub const BALANCED_CATEGORIES: u8 = 5;
    /// Sessions are consistently short
    pub const SHORT_SESSIONS: u8 = 5;
    /// Training in every recent week
    pub const WEEKLY_CONSISTENCY: u8 = 5;
    /// Projected date of the next milestone
    pub const MILESTONE_PROJECTION: u8 = 4;
    /// Sessions are consistently long
    pub const LONG_SESSIONS: u8 = 4;
    /// Average intensity is very low
    pub const LOW_INTENSITY: u8 = 4;
    /// Favorite training weekday
    pub const WEEKDAY_PATTERN: u8 = 3;
    /// Favorite time of day
    pub const TIME_OF_DAY_PATTERN: u8 = 3;
    /// Sessions have a moderate length
    pub const MODERATE_SESSIONS: u8 = 3;
    /// Most targeted skill
    pub const SKILL_FOCUS: u8 = 2;
}

/// Session-count milestones used for progress projection
pub mod milestones {
    /// Round-number targets, ascending
    pub const SESSION_MILESTONES: [u32; 5] = [10, 25, 50, 100, 200];
}

/// Calendar windows used by the time-of-day aggregation (local hours, inclusive start)
pub mod time_windows {
    /// First hour of the morning window
    pub const MORNING_START_HOUR: u32 = 5;
    /// First hour of the afternoon window
    pub const AFTERNOON_START_HOUR: u32 = 12;
    /// First hour of the evening window
    pub const EVENING_START_HOUR: u32 = 17;
    /// First hour of the night window
    pub const NIGHT_START_HOUR: u32 = 21;
}

/// Exercise category keywords matched case-insensitively as substrings
pub mod categories {
    /// Ball skills, first touch, finishing
    pub const TECHNICAL: &str = "technical";
    /// Speed, endurance, strength
    pub const PHYSICAL: &str = "physical";
    /// Positioning, decision making
    pub const TACTICAL: &str = "tactical";
}
