// ABOUTME: Synthetic training-session generator for deterministic insight testing
// ABOUTME: Creates realistic soccer session histories with configurable player patterns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Touchline Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use chrono::{DateTime, Duration, Utc};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use touchline_insights::{SessionRecord, SessionRecordBuilder};

const CATEGORIES: [&str; 4] = [
    "Technical Skills",
    "Physical Conditioning",
    "Tactical Awareness",
    "Mental Focus",
];

const SKILLS: [&str; 6] = [
    "dribbling",
    "passing",
    "first touch",
    "shooting",
    "sprinting",
    "positioning",
];

/// Player histories the generator can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPattern {
    /// Four sessions a week for eight weeks, ratings rising steadily
    ImprovingRegular,
    /// Daily sessions for the last ten days, mixed categories
    DailyStreak,
    /// A month of training that stopped twelve days ago
    LapsedPlayer,
    /// Technical drills almost exclusively
    TechnicalHeavy,
}

/// Builder for deterministic synthetic session histories
///
/// The same seed and reference time always produce the same records.
#[derive(Debug, Clone)]
pub struct SyntheticSessionBuilder {
    rng: ChaCha8Rng,
    reference: DateTime<Utc>,
}

impl SyntheticSessionBuilder {
    /// Create a builder anchored at `reference` ("now" for generated histories)
    #[must_use]
    pub fn new(seed: u64, reference: DateTime<Utc>) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            reference,
        }
    }

    /// Generate one of the predefined histories
    #[must_use]
    pub fn generate_pattern(&mut self, pattern: SessionPattern) -> Vec<SessionRecord> {
        match pattern {
            SessionPattern::ImprovingRegular => self.improving_regular(),
            SessionPattern::DailyStreak => self.daily_streak(),
            SessionPattern::LapsedPlayer => self.lapsed_player(),
            SessionPattern::TechnicalHeavy => self.technical_heavy(),
        }
    }

    /// Generate `count` random sessions spread over the trailing `span_days`
    #[must_use]
    pub fn random_history(&mut self, count: usize, span_days: i64) -> Vec<SessionRecord> {
        (0..count)
            .map(|_| {
                let days_ago = self.rng.gen_range(0..=span_days);
                let rating = self.rng.gen_range(0..=5);
                self.session(days_ago, rating, None)
            })
            .collect()
    }

    fn improving_regular(&mut self) -> Vec<SessionRecord> {
        let mut records = Vec::new();
        for week in 0..8_i64 {
            for slot in 0..4_i64 {
                let days_ago = 55 - (week * 7 + slot * 2);
                // Ratings climb from 2 to 4 across the eight weeks
                let rating = if week < 3 {
                    2
                } else if week < 6 {
                    3
                } else {
                    4
                };
                records.push(self.session(days_ago, rating, None));
            }
        }
        records
    }

    fn daily_streak(&mut self) -> Vec<SessionRecord> {
        (0..10).map(|days_ago| self.session(days_ago, 4, None)).collect()
    }

    fn lapsed_player(&mut self) -> Vec<SessionRecord> {
        (0..8)
            .map(|i| self.session(40 - i * 4, 3, None))
            .collect()
    }

    fn technical_heavy(&mut self) -> Vec<SessionRecord> {
        (0..6)
            .map(|i| self.session(i * 3, 3, Some("Technical Skills")))
            .collect()
    }

    fn session(&mut self, days_ago: i64, rating: u8, category: Option<&str>) -> SessionRecord {
        let hour_offset = self.rng.gen_range(0..10);
        let date = self.reference - Duration::days(days_ago) - Duration::hours(hour_offset);
        let mut builder = SessionRecordBuilder::new()
            .date(date)
            .duration_minutes(f64::from(self.rng.gen_range(20_u32..=75)))
            .overall_rating(rating)
            .intensity(self.rng.gen_range(2..=4));

        for _ in 0..self.rng.gen_range(2..=4) {
            let category = category.unwrap_or_else(|| *CATEGORIES.choose(&mut self.rng).unwrap());
            let skill = *SKILLS.choose(&mut self.rng).unwrap();
            let performance = self.rng.gen_range(1..=5);
            builder = builder.exercise_with_skills(category, [skill], performance);
        }
        builder.build().unwrap()
    }
}
