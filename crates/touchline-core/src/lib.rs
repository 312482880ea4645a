// ABOUTME: Core types and constants for the Touchline training-insight engine
// ABOUTME: Foundation crate with session records, insights, error handling, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Touchline Contributors

#![deny(unsafe_code)]

//! # Touchline Core
//!
//! Foundation crate providing shared types and constants for the Touchline
//! training-insight engine. Everything the pipeline consumes or produces is
//! defined here so the persistence and presentation layers can depend on the
//! data shapes without pulling in the analytics.
//!
//! ## Modules
//!
//! - **models**: `SessionRecord`, `ExerciseEntry`, `Insight`, `TimeRange` and friends
//! - **errors**: `AppError`, `ErrorCode`, and boundary validation errors
//! - **constants**: Insight priorities, milestones, and calendar windows

/// Unified error handling with standard error codes
pub mod errors;

/// Insight priorities, milestones, and other fixed values organized by domain
pub mod constants;

/// Core data models (session records, exercise entries, insights)
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode, RecordError};
pub use models::{
    ExerciseEntry, Insight, InsightKind, InsightSource, Intensity, Rating, SessionRecord,
    SessionRecordBuilder, TimeRange,
};
