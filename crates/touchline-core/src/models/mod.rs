// ABOUTME: Core data models for training session history and derived insights
// ABOUTME: Re-exports session, insight, and time-range types from their domain modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Touchline Contributors

//! Data models shared by the persistence boundary, the engine, and the presentation layer.

/// Output insight value objects
pub mod insight;
/// Session records, exercise entries, and validated rating scales
pub mod session;
/// Time-range bounds for insight generation
pub mod time_range;

pub use insight::{Insight, InsightKind, InsightSource};
pub use session::{ExerciseEntry, Intensity, Rating, SessionRecord, SessionRecordBuilder};
pub use time_range::TimeRange;
