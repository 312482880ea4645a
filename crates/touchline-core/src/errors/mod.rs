// ABOUTME: Unified error handling for the Touchline application shell and data boundary
// ABOUTME: Defines AppError with standard error codes plus record validation errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Touchline Contributors

//! # Error Handling
//!
//! The insight pipeline itself never fails: insufficient data resolves to
//! "emit nothing". Errors only exist at the edges, where records are parsed,
//! configuration is loaded, and reports are read or written.

/// Session record validation errors
pub mod record;

use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use record::RecordError;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input was syntactically wrong
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,
    /// Numeric value outside its scale
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // Resource Management (4000-4999)
    /// File or resource does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,

    // Configuration (6000-6999)
    /// Configuration failed validation
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
}

impl ErrorCode {
    /// Short human-readable description of the code
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidFormat => "Input format is invalid",
            Self::ValueOutOfRange => "Value is outside the allowed range",
            Self::ResourceNotFound => "Requested resource was not found",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "Internal error",
        }
    }
}

/// Application error with a stable error code
#[derive(Debug, Error)]
#[error("{code:?}: {message}")]
pub struct AppError {
    /// Machine-readable code
    pub code: ErrorCode,
    /// Human-readable details
    pub message: String,
}

/// Result alias for application-level operations
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create an error with an explicit code
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Missing file or resource
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ResourceNotFound, message)
    }

    /// Invalid configuration
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Internal failure
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl From<RecordError> for AppError {
    fn from(error: RecordError) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, error.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        if error.is_io() {
            Self::internal(format!("JSON I/O failure: {error}"))
        } else {
            Self::new(ErrorCode::InvalidFormat, format!("Invalid JSON: {error}"))
        }
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        if error.kind() == io::ErrorKind::NotFound {
            Self::not_found(error.to_string())
        } else {
            Self::internal(error.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversions() {
        let record_error = RecordError::RatingOutOfRange { value: 9 };
        let app_error = AppError::from(record_error);
        assert_eq!(app_error.code, ErrorCode::ValueOutOfRange);
        assert!(app_error.message.contains('9'));

        let json_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        assert_eq!(AppError::from(json_error).code, ErrorCode::InvalidFormat);

        let io_error = io::Error::new(io::ErrorKind::NotFound, "sessions.json");
        assert_eq!(AppError::from(io_error).code, ErrorCode::ResourceNotFound);
        assert_eq!(
            ErrorCode::ResourceNotFound.description(),
            "Requested resource was not found"
        );
    }
}
