// ABOUTME: Training session models including SessionRecord, ExerciseEntry, and builders
// ABOUTME: Rating and intensity scales are validated once at the persistence boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Touchline Contributors

use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::RecordError;

/// Highest value on the 0-5 rating scale
const MAX_RATING: u8 = 5;
/// Lowest valid intensity
const MIN_INTENSITY: u8 = 1;
/// Highest valid intensity
const MAX_INTENSITY: u8 = 5;

/// A 0-5 rating where `0` means "unrated"
///
/// Unrated values are not zero scores: callers use [`Rating::score`] to get
/// `None` for them so averages are never dragged down by missing ratings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// The unrated sentinel
    pub const UNRATED: Self = Self(0);

    /// Rated score, or `None` when the session/exercise was not rated
    #[must_use]
    pub const fn score(self) -> Option<u8> {
        if self.0 == 0 {
            None
        } else {
            Some(self.0)
        }
    }

    /// Whether a rating was given
    #[must_use]
    pub const fn is_rated(self) -> bool {
        self.0 != 0
    }

    /// Raw value on the 0-5 scale
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = RecordError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > MAX_RATING {
            return Err(RecordError::RatingOutOfRange { value });
        }
        Ok(Self(value))
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.score() {
            Some(score) => write!(f, "{score}/5"),
            None => f.write_str("unrated"),
        }
    }
}

/// Perceived session intensity on a 1-5 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Intensity(u8);

impl Intensity {
    /// Raw value on the 1-5 scale
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Intensity {
    type Error = RecordError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if !(MIN_INTENSITY..=MAX_INTENSITY).contains(&value) {
            return Err(RecordError::IntensityOutOfRange { value });
        }
        Ok(Self(value))
    }
}

impl From<Intensity> for u8 {
    fn from(intensity: Intensity) -> Self {
        intensity.0
    }
}

/// One exercise performed within a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseEntry {
    /// Free-text category (e.g. "Technical", "Physical - Speed", "tactical")
    pub category: String,
    /// Skills the exercise targets
    #[serde(default)]
    pub target_skills: BTreeSet<String>,
    /// How well the player performed the exercise (0 = unrated)
    #[serde(default)]
    pub performance_rating: Rating,
}

impl ExerciseEntry {
    /// Create an entry with no target skills
    #[must_use]
    pub fn new(category: impl Into<String>, performance_rating: Rating) -> Self {
        Self {
            category: category.into(),
            target_skills: BTreeSet::new(),
            performance_rating,
        }
    }

    /// Add a target skill
    #[must_use]
    pub fn with_skill(mut self, skill: impl Into<String>) -> Self {
        self.target_skills.insert(skill.into());
        self
    }
}

/// One completed training session
///
/// Fields are private so a constructed record always satisfies the scale and
/// duration invariants; use [`SessionRecordBuilder`] or deserialize from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawSessionRecord")]
pub struct SessionRecord {
    date: Option<DateTime<Utc>>,
    duration_minutes: f64,
    overall_rating: Rating,
    intensity: Intensity,
    exercise_entries: Vec<ExerciseEntry>,
}

impl SessionRecord {
    /// When the session happened; `None` for records imported without a timestamp
    #[must_use]
    pub const fn date(&self) -> Option<DateTime<Utc>> {
        self.date
    }

    /// Session length in minutes
    #[must_use]
    pub const fn duration_minutes(&self) -> f64 {
        self.duration_minutes
    }

    /// Overall session rating
    #[must_use]
    pub const fn overall_rating(&self) -> Rating {
        self.overall_rating
    }

    /// Perceived intensity
    #[must_use]
    pub const fn intensity(&self) -> Intensity {
        self.intensity
    }

    /// Exercises in the order they were performed
    #[must_use]
    pub fn exercise_entries(&self) -> &[ExerciseEntry] {
        &self.exercise_entries
    }

    /// Mean of the rated exercise performance scores, `None` if no exercise was rated
    #[must_use]
    pub fn mean_performance_rating(&self) -> Option<f64> {
        let (sum, count) = self
            .exercise_entries
            .iter()
            .filter_map(|entry| entry.performance_rating.score())
            .fold((0_u32, 0_u32), |(sum, count), score| {
                (sum + u32::from(score), count + 1)
            });

        if count == 0 {
            None
        } else {
            Some(f64::from(sum) / f64::from(count))
        }
    }
}

/// Wire shape of a session record before validation
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSessionRecord {
    #[serde(default)]
    date: Option<DateTime<Utc>>,
    duration_minutes: f64,
    #[serde(default)]
    overall_rating: Rating,
    intensity: Intensity,
    #[serde(default)]
    exercise_entries: Vec<ExerciseEntry>,
}

impl TryFrom<RawSessionRecord> for SessionRecord {
    type Error = RecordError;

    fn try_from(raw: RawSessionRecord) -> Result<Self, Self::Error> {
        validate_duration(raw.duration_minutes)?;
        Ok(Self {
            date: raw.date,
            duration_minutes: raw.duration_minutes,
            overall_rating: raw.overall_rating,
            intensity: raw.intensity,
            exercise_entries: raw.exercise_entries,
        })
    }
}

fn validate_duration(minutes: f64) -> Result<(), RecordError> {
    if minutes.is_finite() && minutes >= 0.0 {
        Ok(())
    } else {
        Err(RecordError::InvalidDuration { value: minutes })
    }
}

/// Builder for [`SessionRecord`], validating scales on [`build`](Self::build)
#[derive(Debug, Clone)]
pub struct SessionRecordBuilder {
    date: Option<DateTime<Utc>>,
    duration_minutes: f64,
    overall_rating: u8,
    intensity: u8,
    exercise_entries: Vec<(String, BTreeSet<String>, u8)>,
}

impl Default for SessionRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionRecordBuilder {
    /// Start an undated, unrated, moderate-intensity session of zero length
    #[must_use]
    pub const fn new() -> Self {
        Self {
            date: None,
            duration_minutes: 0.0,
            overall_rating: 0,
            intensity: 3,
            exercise_entries: Vec::new(),
        }
    }

    /// Set the session timestamp
    #[must_use]
    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    /// Set the session length
    #[must_use]
    pub fn duration_minutes(mut self, minutes: f64) -> Self {
        self.duration_minutes = minutes;
        self
    }

    /// Set the overall rating (0 = unrated)
    #[must_use]
    pub fn overall_rating(mut self, rating: u8) -> Self {
        self.overall_rating = rating;
        self
    }

    /// Set the perceived intensity (1-5)
    #[must_use]
    pub fn intensity(mut self, intensity: u8) -> Self {
        self.intensity = intensity;
        self
    }

    /// Append an exercise entry without target skills
    #[must_use]
    pub fn exercise(self, category: impl Into<String>, performance_rating: u8) -> Self {
        self.exercise_with_skills(category, Vec::<String>::new(), performance_rating)
    }

    /// Append an exercise entry with target skills
    #[must_use]
    pub fn exercise_with_skills<S: Into<String>>(
        mut self,
        category: impl Into<String>,
        skills: impl IntoIterator<Item = S>,
        performance_rating: u8,
    ) -> Self {
        self.exercise_entries.push((
            category.into(),
            skills.into_iter().map(Into::into).collect(),
            performance_rating,
        ));
        self
    }

    /// Validate and build the record
    ///
    /// # Errors
    ///
    /// Returns an error if a rating is above 5, the intensity is outside 1-5,
    /// or the duration is negative or not finite
    pub fn build(self) -> Result<SessionRecord, RecordError> {
        validate_duration(self.duration_minutes)?;

        let exercise_entries = self
            .exercise_entries
            .into_iter()
            .map(|(category, target_skills, rating)| {
                Ok(ExerciseEntry {
                    category,
                    target_skills,
                    performance_rating: Rating::try_from(rating)?,
                })
            })
            .collect::<Result<Vec<_>, RecordError>>()?;

        Ok(SessionRecord {
            date: self.date,
            duration_minutes: self.duration_minutes,
            overall_rating: Rating::try_from(self.overall_rating)?,
            intensity: Intensity::try_from(self.intensity)?,
            exercise_entries,
        })
    }
}
