// ABOUTME: Main library entry point for the Touchline training-insights application shell
// ABOUTME: Wires session loading, the insight engine, report rendering, and logging together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Touchline Contributors

#![deny(unsafe_code)]

//! # Touchline Insights
//!
//! Turns a player's logged training sessions into a ranked list of
//! human-readable insights: streaks, rating trends, category balance,
//! frequency and milestone projections, and training habits.
//!
//! ## Architecture
//!
//! - **`touchline_core`**: session records, insights, errors, constants
//! - **`touchline_intelligence`**: the deterministic insight pipeline
//! - **report**: reads session JSON and renders JSON or text output
//! - **logging**: `tracing` subscriber setup writing to stderr
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::Utc;
//! use std::path::Path;
//! use touchline_insights::report::{self, InsightReport, ReportFormat};
//! use touchline_insights::{InsightEngine, InsightRequest};
//!
//! let records = report::load_sessions(Path::new("sessions.json"))?;
//! let engine = InsightEngine::new();
//! let report = InsightReport::generate(&engine, &records, &InsightRequest::new(Utc::now()));
//! println!("{}", report::render_report(&report, ReportFormat::Text)?);
//! # Ok::<(), touchline_insights::AppError>(())
//! ```

/// Structured logging configuration
pub mod logging;

/// Session loading and report rendering
pub mod report;

pub use touchline_core::{
    AppError, AppResult, ErrorCode, Insight, InsightKind, InsightSource, SessionRecord,
    SessionRecordBuilder, TimeRange,
};
pub use touchline_intelligence::{
    InsightDetector, InsightEngine, InsightEngineConfig, InsightRequest, StreakSummary,
};
