// ABOUTME: Training report message and output format selection
// ABOUTME: Renders computed workout metrics as the fixed text template or as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Report Formatting
//!
//! An [`InfoMessage`] carries the five computed values of one workout. It
//! renders to a single line with every number shown to exactly three
//! decimal places, in fixed field order:
//!
//! ```text
//! Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750.
//! ```
//!
//! ## Supported Formats
//!
//! - **Text**: Default format, the template line above
//! - **JSON**: One compact object per report with the fields and rendered message

use crate::errors::{AppError, AppResult};
use fitness_tracker_core::constants::messages::{
    CALORIES_LABEL, DECIMAL_PLACES, DISTANCE_LABEL, DURATION_LABEL, SPEED_LABEL,
    TRAINING_TYPE_LABEL,
};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Information message about a completed workout
///
/// Duration is in hours, distance in kilometers, speed in km/h.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoMessage {
    /// Workout label (`Running`, `SportsWalking`, `Swimming`)
    pub training_type: String,
    /// Duration in hours
    pub duration: f64,
    /// Distance in kilometers
    pub distance: f64,
    /// Mean speed in km/h
    pub speed: f64,
    /// Calories spent
    pub calories: f64,
}

impl InfoMessage {
    /// Bundle computed metrics into a message
    #[must_use]
    pub fn new(
        training_type: impl Into<String>,
        duration: f64,
        distance: f64,
        speed: f64,
        calories: f64,
    ) -> Self {
        Self {
            training_type: training_type.into(),
            duration,
            distance,
            speed,
            calories,
        }
    }

    /// Render the human-readable report line
    ///
    /// # Errors
    ///
    /// Returns `FormattingError` if the training type is empty or any
    /// numeric field is not a finite number
    pub fn get_message(&self) -> AppResult<String> {
        if self.training_type.is_empty() {
            return Err(AppError::formatting("training type is missing"));
        }
        for (field, value) in [
            ("duration", self.duration),
            ("distance", self.distance),
            ("speed", self.speed),
            ("calories", self.calories),
        ] {
            if !value.is_finite() {
                return Err(AppError::formatting(format!(
                    "{field} is not a finite number: {value}"
                )));
            }
        }

        Ok(format!(
            "{TRAINING_TYPE_LABEL}: {}; \
             {DURATION_LABEL}: {:.prec$} ч.; \
             {DISTANCE_LABEL}: {:.prec$} км; \
             {SPEED_LABEL}: {:.prec$} км/ч; \
             {CALORIES_LABEL}: {:.prec$}.",
            self.training_type,
            self.duration,
            self.distance,
            self.speed,
            self.calories,
            prec = DECIMAL_PLACES,
        ))
    }
}

/// JSON rendition of a report: the raw fields plus the rendered line
#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    info: &'a InfoMessage,
    message: String,
}

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Template text line (default)
    #[default]
    Text,
    /// One compact JSON object per report
    Json,
}

impl OutputFormat {
    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }

    /// Render a report in this format as a single line
    ///
    /// # Errors
    ///
    /// Returns `FormattingError` if the message is malformed or JSON
    /// serialization fails
    pub fn render(&self, info: &InfoMessage) -> AppResult<String> {
        let message = info.get_message()?;
        match self {
            Self::Text => Ok(message),
            Self::Json => serde_json::to_string(&JsonReport { info, message }).map_err(|e| {
                AppError::formatting("failed to serialize report as JSON").with_source(e)
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(AppError::config_invalid(format!(
                "Unknown output format: '{other}'. Valid options: text, json"
            ))),
        }
    }
}
