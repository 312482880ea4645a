// ABOUTME: Validation errors raised when building session records at the persistence boundary
// ABOUTME: Covers rating and intensity scales and session duration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Touchline Contributors

use thiserror::Error;

/// Session record validation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    /// Rating above the 0-5 scale
    #[error("rating {value} is outside 0-5")]
    RatingOutOfRange {
        /// Offending value
        value: u8,
    },

    /// Intensity outside the 1-5 scale
    #[error("intensity {value} is outside 1-5")]
    IntensityOutOfRange {
        /// Offending value
        value: u8,
    },

    /// Negative or non-finite duration
    #[error("duration {value} minutes is not a non-negative finite number")]
    InvalidDuration {
        /// Offending value
        value: f64,
    },
}
