// ABOUTME: Unified error type and error codes for workout computation and reporting
// ABOUTME: Every failure in the tracker surfaces as an AppError carrying one ErrorCode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! Errors are raised immediately to the caller and never retried. Each
//! failure carries an [`ErrorCode`] so callers can branch on the kind of
//! failure without matching on message text.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the tracker
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Dispatch (1000-1999)
    /// Workout code is not present in the dispatch mapping
    #[serde(rename = "UNKNOWN_WORKOUT_TYPE")]
    UnknownWorkoutType = 1000,
    /// Argument list does not match the selected workout's constructor
    #[serde(rename = "ARGUMENT_MISMATCH")]
    ArgumentMismatch = 1001,

    // Computation (2000-2999)
    /// Calorie computation requested on the base training record
    #[serde(rename = "NOT_IMPLEMENTED")]
    NotImplemented = 2000,
    /// Arithmetic failure such as a division by a zero duration
    #[serde(rename = "ARITHMETIC_ERROR")]
    ArithmeticError = 2001,

    // Reporting (3000-3999)
    /// Report fields are malformed and cannot be rendered
    #[serde(rename = "FORMATTING_ERROR")]
    FormattingError = 3000,
    /// Rendered report could not be written to its destination
    #[serde(rename = "OUTPUT_ERROR")]
    OutputError = 3001,

    // Configuration (6000-6999)
    /// Configuration value is present but not recognised
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6000,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::UnknownWorkoutType => "Unknown workout type",
            Self::ArgumentMismatch => "Sensor data does not match the workout constructor",
            Self::NotImplemented => "Calorie formula must be provided by a concrete workout",
            Self::ArithmeticError => "Arithmetic error",
            Self::FormattingError => "Message formatting error",
            Self::OutputError => "Failed to write report",
            Self::ConfigInvalid => "Configuration is invalid",
        }
    }
}

/// Unified error type for the tracker
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Workout code absent from the dispatch mapping
    #[must_use]
    pub fn unknown_workout_type(workout_code: &str) -> Self {
        Self::new(
            ErrorCode::UnknownWorkoutType,
            format!("'{workout_code}'. Valid codes: SWM, RUN, WLK"),
        )
    }

    /// Argument count or type mismatch for the selected workout
    #[must_use]
    pub fn argument_mismatch(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ArgumentMismatch, message)
    }

    /// Calorie formula requested from a record with no concrete workout
    #[must_use]
    pub fn not_implemented(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotImplemented, message)
    }

    /// Arithmetic failure
    #[must_use]
    pub fn arithmetic(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ArithmeticError, message)
    }

    /// Report could not be rendered
    #[must_use]
    pub fn formatting(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::FormattingError, message)
    }

    /// Report could not be written
    #[must_use]
    pub fn output(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::OutputError, message)
    }

    /// Invalid configuration value
    #[must_use]
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}
