// ABOUTME: Session loading and insight report rendering for the command-line shell
// ABOUTME: Reads session JSON, runs the engine, and renders results as JSON or plain text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Touchline Contributors

//! Report generation
//!
//! This is the boundary where fallibility lives: reading and validating the
//! session file and serializing output. The engine call in between cannot fail.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::Serialize;
use touchline_core::errors::{AppError, AppResult};
use touchline_core::models::{Insight, SessionRecord, TimeRange};
use touchline_intelligence::{InsightEngine, InsightRequest, StreakSummary};
use tracing::debug;

/// Output format for rendered insights
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Pretty-printed JSON
    #[default]
    Json,
    /// Human-readable text
    Text,
}

/// Insights plus the context they were generated for
#[derive(Debug, Clone, Serialize)]
pub struct InsightReport {
    /// Reference time used for the run
    pub generated_at: DateTime<Utc>,
    /// Analysis window
    pub time_range: TimeRange,
    /// Records supplied by the caller
    pub session_count: usize,
    /// Current and best streak
    pub streak: StreakSummary,
    /// Ranked insights
    pub insights: Vec<Insight>,
}

impl InsightReport {
    /// Run the engine and collect the report
    #[must_use]
    pub fn generate(
        engine: &InsightEngine,
        records: &[SessionRecord],
        request: &InsightRequest,
    ) -> Self {
        Self {
            generated_at: request.now,
            time_range: request.time_range,
            session_count: records.len(),
            streak: engine.streak_summary(records, request),
            insights: engine.generate_insights(records, request),
        }
    }
}

/// Parse a JSON array of session records
///
/// # Errors
///
/// Returns an error if the text is not a JSON array of valid session records
pub fn parse_sessions(json: &str) -> AppResult<Vec<SessionRecord>> {
    let records: Vec<SessionRecord> = serde_json::from_str(json)?;
    debug!(records = records.len(), "Parsed session records");
    Ok(records)
}

/// Load a JSON array of session records from disk
///
/// # Errors
///
/// Returns an error if the file cannot be read or contains invalid records
pub fn load_sessions(path: &Path) -> AppResult<Vec<SessionRecord>> {
    let contents = fs::read_to_string(path).map_err(|error| {
        let base = AppError::from(error);
        AppError::new(base.code, format!("{}: {}", path.display(), base.message))
    })?;
    parse_sessions(&contents)
}

/// Render insights on their own
///
/// # Errors
///
/// Returns an error if JSON serialization fails
pub fn render(insights: &[Insight], format: ReportFormat) -> AppResult<String> {
    match format {
        ReportFormat::Json => Ok(serde_json::to_string_pretty(insights)?),
        ReportFormat::Text => Ok(render_insights_text(insights)),
    }
}

/// Render a full report with its header
///
/// # Errors
///
/// Returns an error if JSON serialization fails
pub fn render_report(report: &InsightReport, format: ReportFormat) -> AppResult<String> {
    match format {
        ReportFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        ReportFormat::Text => {
            let range = match report.time_range {
                TimeRange::AllTime => "all time".to_owned(),
                TimeRange::LastDays(days) => format!("last {days} days"),
            };
            let mut out = format!(
                "Touchline insights for {} sessions ({range})\nCurrent streak: {} days (best {})\n\n",
                report.session_count, report.streak.current, report.streak.best
            );
            out.push_str(&render_insights_text(&report.insights));
            Ok(out)
        }
    }
}

fn render_insights_text(insights: &[Insight]) -> String {
    if insights.is_empty() {
        return "No insights yet. Log a few more sessions.\n".to_owned();
    }

    insights.iter().map(insight_text).collect()
}

fn insight_text(insight: &Insight) -> String {
    let mut block = format!(
        "[{:>2}] {}: {}\n     {}\n",
        insight.priority(),
        insight.kind(),
        insight.title(),
        insight.description()
    );
    if let Some(action) = insight.actionable() {
        block.push_str(&format!("     -> {action}\n"));
    }
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use touchline_core::errors::ErrorCode;
    use touchline_core::models::{InsightKind, InsightSource};

    #[test]
    fn test_text_render_includes_action() {
        let insights = vec![Insight::new(
            InsightSource::Streak,
            InsightKind::Celebration,
            10,
            "On Fire",
            "You've trained 8 days in a row!",
        )
        .with_action("Train today to keep the streak alive.")];
        let text = render(&insights, ReportFormat::Text).unwrap();
        assert!(text.starts_with("[10] celebration: On Fire"));
        assert!(text.contains("-> Train today"));
    }

    #[test]
    fn test_text_render_lays_out_each_insight() {
        let insights = vec![
            Insight::new(
                InsightSource::Streak,
                InsightKind::Celebration,
                10,
                "On Fire",
                "You've trained 8 days in a row!",
            )
            .with_action("Train today to keep the streak alive."),
            Insight::new(
                InsightSource::WeekdayPattern,
                InsightKind::Pattern,
                5,
                "Monday Regular",
                "You train most often on Mondays.",
            ),
        ];
        let text = render(&insights, ReportFormat::Text).unwrap();
        assert_eq!(
            text,
            "[10] celebration: On Fire\n     You've trained 8 days in a row!\n     -> Train today to keep the streak alive.\n\
             [ 5] pattern: Monday Regular\n     You train most often on Mondays.\n"
        );
    }

    #[test]
    fn test_empty_text_render() {
        let text = render(&[], ReportFormat::Text).unwrap();
        assert!(text.contains("No insights yet"));
        assert_eq!(render(&[], ReportFormat::Json).unwrap(), "[]");
    }

    #[test]
    fn test_parse_rejects_invalid_rating() {
        let error = parse_sessions(r#"[{"durationMinutes": 30, "overallRating": 9, "intensity": 3}]"#)
            .unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidFormat);
    }
}
