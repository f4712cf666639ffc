// ABOUTME: Stride lengths and calorie coefficients for running, walking, and swimming
// ABOUTME: Each workout module groups the constants its formulas read
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Length of a single step on land (meters)
///
/// Shared by every workout that does not override its stride.
pub const STEP_LENGTH_M: f64 = 0.65;

/// Running calorie formula
///
/// `(SPEED_MULTIPLIER x mean_speed - SPEED_SHIFT) x weight / 1000 x duration_min`
pub mod running {
    /// Multiplier applied to mean speed (km/h)
    pub const SPEED_MULTIPLIER: f64 = 18.0;
    /// Offset subtracted from the scaled speed
    pub const SPEED_SHIFT: f64 = 20.0;
}

/// Sports walking calorie formula
///
/// `(WEIGHT_MULTIPLIER x weight + floor(speed² / height) x SPEED_HEIGHT_MULTIPLIER x weight) x duration_min`
pub mod walking {
    /// Weight-only term multiplier
    pub const WEIGHT_MULTIPLIER: f64 = 0.035;
    /// Multiplier of the floored speed-squared-over-height term
    pub const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
}

/// Swimming distance and calorie formulas
///
/// `(mean_speed + SPEED_SHIFT) x WEIGHT_MULTIPLIER x weight`
pub mod swimming {
    /// Length of a single stroke (meters)
    pub const STROKE_LENGTH_M: f64 = 1.38;
    /// Offset added to mean speed
    pub const SPEED_SHIFT: f64 = 1.1;
    /// Multiplier applied to weight
    pub const WEIGHT_MULTIPLIER: f64 = 2.0;
}
