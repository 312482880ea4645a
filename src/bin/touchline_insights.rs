// ABOUTME: Touchline insights CLI generating ranked training insights from a session file
// ABOUTME: Loads sessions, applies env configuration, runs the engine, and prints a report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Touchline Contributors
//!
//! Usage:
//! ```bash
//! # All-time insights as JSON
//! touchline-insights --input sessions.json
//!
//! # Last 30 days as text, for a player in UTC-05:00, at a fixed reference time
//! touchline-insights --input sessions.json --days 30 --utc-offset-minutes -300 \
//!     --now 2025-06-15T12:00:00Z --format text
//! ```

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, FixedOffset, Utc};
use clap::Parser;
use touchline_insights::logging::{self, AppLogger};
use touchline_insights::report::{self, InsightReport, ReportFormat};
use touchline_insights::{InsightEngine, InsightEngineConfig, InsightRequest, TimeRange};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "touchline-insights",
    about = "Generate ranked training insights from logged sessions",
    long_about = "Reads a JSON array of training sessions and prints ranked insights. Thresholds can be tuned with TOUCHLINE_* environment variables; logs go to stderr."
)]
struct Cli {
    /// JSON file containing an array of session records
    #[arg(long, short = 'i')]
    input: PathBuf,

    /// Only analyze sessions from the trailing N days
    #[arg(long)]
    days: Option<u32>,

    /// Reference time (RFC 3339), defaults to the current time
    #[arg(long)]
    now: Option<DateTime<Utc>>,

    /// Player's calendar offset from UTC in minutes
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    utc_offset_minutes: i32,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = ReportFormat::Json)]
    format: ReportFormat,

    /// Keep at most this many insights (overrides `TOUCHLINE_RANKING_MAX_INSIGHTS`)
    #[arg(long)]
    max_insights: Option<usize>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_from_env()?;

    let mut config = InsightEngineConfig::load().context("Invalid TOUCHLINE_* configuration")?;
    if cli.max_insights.is_some() {
        config.ranking.max_insights = cli.max_insights;
    }

    let offset = cli
        .utc_offset_minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or_else(|| anyhow!("UTC offset {} minutes is out of range", cli.utc_offset_minutes))?;
    let time_range = cli.days.map_or(TimeRange::AllTime, TimeRange::LastDays);
    let request = InsightRequest::new(cli.now.unwrap_or_else(Utc::now))
        .with_time_range(time_range)
        .with_utc_offset(offset);

    let started = Instant::now();
    let records = report::load_sessions(&cli.input)
        .with_context(|| format!("Failed to load sessions from {}", cli.input.display()))?;
    info!(records = records.len(), "Sessions loaded");

    let engine = InsightEngine::with_config(config);
    let insight_report = InsightReport::generate(&engine, &records, &request);
    AppLogger::log_report(
        &cli.input.display().to_string(),
        records.len(),
        insight_report.insights.len(),
        started.elapsed().as_millis(),
    );

    println!("{}", report::render_report(&insight_report, cli.format)?);
    Ok(())
}
