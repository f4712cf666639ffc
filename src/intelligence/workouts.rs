// ABOUTME: Distance, mean speed, and calorie formulas for each workout type
// ABOUTME: Shared defaults live on the WorkoutMetrics trait, concrete workouts override them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Workout Metrics
//!
//! Every workout answers the same three questions: how far, how fast, and how
//! many calories. The base training record supplies distance and speed from
//! its step count; calories have no sensible default and must come from a
//! concrete workout.
//!
//! | Workout         | Distance                  | Mean speed                         | Calories |
//! |-----------------|---------------------------|------------------------------------|----------|
//! | `Running`       | `action x 0.65 / 1000`    | `distance / duration`              | `(18 x speed - 20) x weight / 1000 x minutes` |
//! | `SportsWalking` | `action x 0.65 / 1000`    | `distance / duration`              | `(0.035 x weight + floor(speed² / height) x 0.029 x weight) x minutes` |
//! | `Swimming`      | `action x 1.38 / 1000`    | `pool_length x pool_count / 1000 / duration` | `(speed + 1.1) x 2 x weight` |

use crate::errors::{AppError, AppResult};
use crate::formatters::InfoMessage;
use crate::models::{Running, SportsWalking, Swimming, Training, TrainingRecord};
use fitness_tracker_core::constants::units::{METERS_PER_KM, MINUTES_PER_HOUR};
use fitness_tracker_core::constants::workout::{running, swimming, walking, STEP_LENGTH_M};
use tracing::debug;

/// Capability shared by every workout: distance, mean speed, and calories
///
/// Implementors provide access to their [`TrainingRecord`] and a display
/// label; the remaining methods have defaults matching the base record.
pub trait WorkoutMetrics {
    /// Shared sensor fields
    fn record(&self) -> &TrainingRecord;

    /// Label used in the rendered report
    fn training_type(&self) -> &'static str;

    /// Distance covered by one action (meters)
    fn stride_length_m(&self) -> f64 {
        STEP_LENGTH_M
    }

    /// Distance covered in kilometers
    fn distance_km(&self) -> f64 {
        f64::from(self.record().action) * self.stride_length_m() / METERS_PER_KM
    }

    /// Mean speed in km/h
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError` if the duration is zero
    fn mean_speed_kmh(&self) -> AppResult<f64> {
        per_hour(self.distance_km(), self.record().duration_hours)
    }

    /// Calories spent during the workout
    ///
    /// # Errors
    ///
    /// The default returns `NotImplemented`; only concrete workouts know
    /// their calorie formula.
    fn spent_calories(&self) -> AppResult<f64> {
        Err(AppError::not_implemented(format!(
            "'{}' has no calorie formula, use a concrete workout",
            self.training_type()
        )))
    }

    /// Compute every metric and bundle it into an information message
    ///
    /// # Errors
    ///
    /// Propagates any error raised by the speed or calorie formulas
    fn show_training_info(&self) -> AppResult<InfoMessage> {
        let record = self.record();
        let distance = self.distance_km();
        let speed = self.mean_speed_kmh()?;
        let calories = self.spent_calories()?;

        debug!(
            workout.kind = self.training_type(),
            workout.duration_hours = record.duration_hours,
            workout.distance_km = distance,
            workout.speed_kmh = speed,
            workout.calories = calories,
            "Computed training info"
        );

        Ok(InfoMessage::new(
            self.training_type(),
            record.duration_hours,
            distance,
            speed,
            calories,
        ))
    }
}

/// Divide a quantity by a duration in hours
///
/// A zero duration is an arithmetic error rather than an infinite speed.
fn per_hour(quantity: f64, duration_hours: f64) -> AppResult<f64> {
    let speed = quantity / duration_hours;
    if speed.is_finite() {
        Ok(speed)
    } else {
        Err(AppError::arithmetic(format!(
            "division by zero: cannot divide {quantity} km by a duration of {duration_hours} hours"
        )))
    }
}

/// Floored quotient of two floats, rounded the way a floor-division operator is
///
/// The quotient is derived from the `fmod` remainder rather than from
/// `(dividend / divisor).floor()`, so a true quotient just below an integer
/// stays below it: `floor_div(1.0, 0.1)` is `9.0`, not `10.0`.
///
/// Returns `None` for a zero divisor or a non-finite result.
fn floor_div(dividend: f64, divisor: f64) -> Option<f64> {
    if divisor == 0.0 {
        return None;
    }
    let remainder = dividend % divisor;
    let mut quotient = (dividend - remainder) / divisor;
    if remainder != 0.0 && (divisor < 0.0) != (remainder < 0.0) {
        quotient -= 1.0;
    }

    let floored = if quotient == 0.0 {
        0.0_f64.copysign(dividend / divisor)
    } else {
        let floored = quotient.floor();
        if quotient - floored > 0.5 {
            floored + 1.0
        } else {
            floored
        }
    };

    floored.is_finite().then_some(floored)
}

impl WorkoutMetrics for TrainingRecord {
    fn record(&self) -> &TrainingRecord {
        self
    }

    fn training_type(&self) -> &'static str {
        "Training"
    }
}

impl WorkoutMetrics for Running {
    fn record(&self) -> &TrainingRecord {
        &self.record
    }

    fn training_type(&self) -> &'static str {
        "Running"
    }

    // Two roundings, not a fused multiply-add
    #[allow(clippy::suboptimal_flops)]
    fn spent_calories(&self) -> AppResult<f64> {
        let speed = self.mean_speed_kmh()?;
        let duration_min = self.record.duration_hours * MINUTES_PER_HOUR;
        Ok(
            (running::SPEED_MULTIPLIER * speed - running::SPEED_SHIFT) * self.record.weight_kg
                / METERS_PER_KM
                * duration_min,
        )
    }
}

impl WorkoutMetrics for SportsWalking {
    fn record(&self) -> &TrainingRecord {
        &self.record
    }

    fn training_type(&self) -> &'static str {
        "SportsWalking"
    }

    #[allow(clippy::suboptimal_flops)]
    fn spent_calories(&self) -> AppResult<f64> {
        let speed = self.mean_speed_kmh()?;
        let speed_height_term = floor_div(speed.powi(2), self.height_cm).ok_or_else(|| {
            AppError::arithmetic(format!(
                "division by zero: athlete height is {} cm",
                self.height_cm
            ))
        })?;
        let weight = self.record.weight_kg;
        let per_minute = walking::WEIGHT_MULTIPLIER * weight
            + speed_height_term * walking::SPEED_HEIGHT_MULTIPLIER * weight;
        Ok(per_minute * self.record.duration_hours * MINUTES_PER_HOUR)
    }
}

impl WorkoutMetrics for Swimming {
    fn record(&self) -> &TrainingRecord {
        &self.record
    }

    fn training_type(&self) -> &'static str {
        "Swimming"
    }

    fn stride_length_m(&self) -> f64 {
        swimming::STROKE_LENGTH_M
    }

    fn mean_speed_kmh(&self) -> AppResult<f64> {
        let pool_distance_km = self.pool_length_m * f64::from(self.pool_count) / METERS_PER_KM;
        per_hour(pool_distance_km, self.record.duration_hours)
    }

    fn spent_calories(&self) -> AppResult<f64> {
        let speed = self.mean_speed_kmh()?;
        Ok((speed + swimming::SPEED_SHIFT) * swimming::WEIGHT_MULTIPLIER * self.record.weight_kg)
    }
}

impl Training {
    fn as_metrics(&self) -> &dyn WorkoutMetrics {
        match self {
            Self::Running(workout) => workout,
            Self::SportsWalking(workout) => workout,
            Self::Swimming(workout) => workout,
        }
    }
}

impl WorkoutMetrics for Training {
    fn record(&self) -> &TrainingRecord {
        self.as_metrics().record()
    }

    fn training_type(&self) -> &'static str {
        self.as_metrics().training_type()
    }

    fn stride_length_m(&self) -> f64 {
        self.as_metrics().stride_length_m()
    }

    fn distance_km(&self) -> f64 {
        self.as_metrics().distance_km()
    }

    fn mean_speed_kmh(&self) -> AppResult<f64> {
        self.as_metrics().mean_speed_kmh()
    }

    fn spent_calories(&self) -> AppResult<f64> {
        self.as_metrics().spent_calories()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn test_base_record_has_no_calorie_formula() {
        let record = TrainingRecord::new(1000, 1.0, 70.0);

        let error = record.spent_calories().unwrap_err();
        assert_eq!(error.code, ErrorCode::NotImplemented);
        assert!(record.show_training_info().is_err());
    }

    #[test]
    fn test_base_record_uses_step_length() {
        let record = TrainingRecord::new(2000, 0.5, 70.0);

        assert!((record.distance_km() - 1.3).abs() < TOLERANCE);
        assert!((record.mean_speed_kmh().unwrap() - 2.6).abs() < TOLERANCE);
    }

    #[test]
    fn test_zero_duration_is_arithmetic_error() {
        let running = Running::new(15000, 0.0, 75.0);

        let error = running.mean_speed_kmh().unwrap_err();
        assert_eq!(error.code, ErrorCode::ArithmeticError);
        assert_eq!(
            running.spent_calories().unwrap_err().code,
            ErrorCode::ArithmeticError
        );
    }

    #[test]
    fn test_walking_floor_term_rounds_toward_negative_infinity() {
        // distance 2.5 km in 1 h -> speed 2.5, 2.5² / 7 = 0.892... -> 0
        let action = (2.5 * METERS_PER_KM / STEP_LENGTH_M).round() as u32;
        let workout = SportsWalking::new(action, 1.0, 70.0, 7.0);
        let speed = workout.mean_speed_kmh().unwrap();
        assert!((speed - 2.5).abs() < 1e-3);

        let calories = workout.spent_calories().unwrap();
        let weight_only = walking::WEIGHT_MULTIPLIER * 70.0 * MINUTES_PER_HOUR;
        assert!((calories - weight_only).abs() < TOLERANCE);
    }

    #[test]
    fn test_walking_floor_term_counts_whole_units() {
        // speed 5.85, height 10 -> 34.2225 / 10 = 3.42 -> 3
        let workout = SportsWalking::new(9000, 1.0, 75.0, 10.0);
        let expected = (0.035 * 75.0 + 3.0 * 0.029 * 75.0) * 60.0;

        assert!((workout.spent_calories().unwrap() - expected).abs() < TOLERANCE);
    }

    #[test]
    #[allow(clippy::suboptimal_flops)]
    fn test_running_calories_round_each_step() {
        let running = Running::new(12345, 1.7, 72.3);
        let speed = running.mean_speed_kmh().unwrap();
        let expected = (18.0 * speed - 20.0) * 72.3 / 1000.0 * (1.7 * 60.0);

        assert_eq!(
            running.spent_calories().unwrap().to_bits(),
            expected.to_bits()
        );
    }

    #[test]
    fn test_floor_div_uses_remainder_not_rounded_quotient() {
        assert_eq!(floor_div(1.0, 0.1), Some(9.0));
        assert_eq!(floor_div(7.0, 2.0), Some(3.0));
        assert_eq!(floor_div(-7.0, 2.0), Some(-4.0));
        assert_eq!(floor_div(7.0, -2.0), Some(-4.0));
        assert_eq!(floor_div(6.25, 7.0), Some(0.0));
        assert_eq!(floor_div(1.0, 0.0), None);
        assert_eq!(floor_div(f64::NAN, 2.0), None);
    }

    #[test]
    fn test_walking_zero_height_is_arithmetic_error() {
        let workout = SportsWalking::new(9000, 1.0, 75.0, 0.0);

        assert_eq!(
            workout.spent_calories().unwrap_err().code,
            ErrorCode::ArithmeticError
        );
    }

    #[test]
    fn test_training_enum_delegates_overrides() {
        let training = Training::from(Swimming::new(720, 1.0, 80.0, 25.0, 40));

        assert_eq!(training.training_type(), "Swimming");
        assert!((training.stride_length_m() - swimming::STROKE_LENGTH_M).abs() < TOLERANCE);
        assert!((training.mean_speed_kmh().unwrap() - 1.0).abs() < TOLERANCE);
    }
}
