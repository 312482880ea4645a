// ABOUTME: Test utilities for report and engine integration tests
// ABOUTME: Provides a fixed reference clock, scenario histories, and temporary session files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Touchline Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::io::Write;

use chrono::{DateTime, TimeZone, Utc};
use tempfile::NamedTempFile;
use touchline_insights::SessionRecord;

use super::synthetic_data::{SessionPattern, SyntheticSessionBuilder};

/// Reference "now" shared by all integration tests (a Sunday)
#[must_use]
pub fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 18, 0, 0).unwrap()
}

/// Deterministic history for a scenario
#[must_use]
pub fn scenario_sessions(pattern: SessionPattern) -> Vec<SessionRecord> {
    SyntheticSessionBuilder::new(42, reference_now()).generate_pattern(pattern)
}

/// Write records to a temporary JSON file that lives as long as the handle
#[must_use]
pub fn write_sessions_file(records: &[SessionRecord]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    serde_json::to_writer(&mut file, records).unwrap();
    file.flush().unwrap();
    file
}

/// Write raw text to a temporary file
#[must_use]
pub fn write_raw_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
