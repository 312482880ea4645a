// ABOUTME: Integration tests for session file loading and report rendering
// ABOUTME: Covers JSON boundary validation, error codes, and text and JSON output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Touchline Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use std::path::Path;

use helpers::synthetic_data::SessionPattern;
use helpers::test_utils::{reference_now, scenario_sessions, write_raw_file, write_sessions_file};
use serde_json::Value;
use touchline_insights::report::{self, InsightReport, ReportFormat};
use touchline_insights::{ErrorCode, InsightEngine, InsightRequest, TimeRange};

#[test]
fn test_load_sessions_round_trips_generated_history() {
    let records = scenario_sessions(SessionPattern::ImprovingRegular);
    let file = write_sessions_file(&records);

    let loaded = report::load_sessions(file.path()).unwrap();
    assert_eq!(loaded, records);
}

#[test]
fn test_load_sessions_accepts_minimal_records() {
    let file = write_raw_file(
        r#"[
            {"date": "2025-06-14T17:30:00Z", "durationMinutes": 45, "overallRating": 4, "intensity": 3,
             "exerciseEntries": [{"category": "Technical", "targetSkills": ["passing"], "performanceRating": 4}]},
            {"durationMinutes": 20, "intensity": 2}
        ]"#,
    );
    let loaded = report::load_sessions(file.path()).unwrap();
    assert_eq!(loaded.len(), 2);
    assert!(loaded[1].date().is_none());
    assert!(!loaded[1].overall_rating().is_rated());
    assert_eq!(loaded[0].exercise_entries()[0].category, "Technical");
}

#[test]
fn test_missing_file_reports_not_found_with_path() {
    let error = report::load_sessions(Path::new("/nonexistent/touchline/sessions.json")).unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
    assert!(error.message.contains("sessions.json"));
}

#[test]
fn test_invalid_records_are_rejected_at_the_boundary() {
    let negative = write_raw_file(r#"[{"durationMinutes": -5, "intensity": 3}]"#);
    let error = report::load_sessions(negative.path()).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidFormat);

    let intensity = write_raw_file(r#"[{"durationMinutes": 30, "intensity": 0}]"#);
    assert_eq!(
        report::load_sessions(intensity.path()).unwrap_err().code,
        ErrorCode::InvalidFormat
    );

    let garbage = write_raw_file("not json");
    assert_eq!(
        report::load_sessions(garbage.path()).unwrap_err().code,
        ErrorCode::InvalidFormat
    );
}

#[test]
fn test_text_report_has_header_and_insights() {
    let records = scenario_sessions(SessionPattern::DailyStreak);
    let request = InsightRequest::new(reference_now()).with_time_range(TimeRange::LastDays(14));
    let report = InsightReport::generate(&InsightEngine::new(), &records, &request);

    let text = report::render_report(&report, ReportFormat::Text).unwrap();
    assert!(text.starts_with("Touchline insights for 10 sessions (last 14 days)"));
    assert!(text.contains("Current streak: 10 days (best 10)"));
    assert!(text.contains("[10] celebration: On Fire"));
}

#[test]
fn test_json_report_structure() {
    let records = scenario_sessions(SessionPattern::LapsedPlayer);
    let report = InsightReport::generate(
        &InsightEngine::new(),
        &records,
        &InsightRequest::new(reference_now()),
    );

    let json: Value =
        serde_json::from_str(&report::render_report(&report, ReportFormat::Json).unwrap()).unwrap();
    assert_eq!(json["session_count"], 8);
    assert_eq!(json["streak"]["current"], 0);
    assert_eq!(json["streak"]["days_since_last"], 12);
    assert_eq!(json["time_range"]["type"], "all_time");

    let insights = json["insights"].as_array().unwrap();
    assert!(!insights.is_empty());
    assert!(insights
        .iter()
        .all(|insight| insight["kind"].is_string() && insight["priority"].is_u64()));

    let bare: Value =
        serde_json::from_str(&report::render(&report.insights, ReportFormat::Json).unwrap())
            .unwrap();
    assert_eq!(bare.as_array().unwrap().len(), insights.len());
}
