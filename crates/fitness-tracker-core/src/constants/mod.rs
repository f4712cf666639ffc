// ABOUTME: Named constants for workout formulas, unit conversions, and report labels
// ABOUTME: Organized by domain so formula code never carries magic numbers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Unit conversion factors
pub mod units;

/// Per-workout formula coefficients
pub mod workout;

/// Labels and templates used when rendering reports
pub mod messages {
    /// Field labels of the rendered training report, in output order
    pub const TRAINING_TYPE_LABEL: &str = "Тип тренировки";
    /// Duration label, value in hours
    pub const DURATION_LABEL: &str = "Длительность";
    /// Distance label, value in kilometers
    pub const DISTANCE_LABEL: &str = "Дистанция";
    /// Mean speed label, value in km/h
    pub const SPEED_LABEL: &str = "Ср. скорость";
    /// Calories label
    pub const CALORIES_LABEL: &str = "Потрачено ккал";

    /// Number of decimal places every numeric report value is rendered with
    pub const DECIMAL_PLACES: usize = 3;
}

/// Service identity used in structured logs
pub mod service_names {
    /// Binary and log target name
    pub const FITNESS_TRACKER: &str = "fitness-tracker";
}
