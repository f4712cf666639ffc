// ABOUTME: Sensor package dispatch from three-letter workout codes to concrete workouts
// ABOUTME: Validates argument count and numeric types before constructing a workout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use crate::models::{Running, SportsWalking, Swimming, Training};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// Workout code reported by the sensor alongside its readings
///
/// - `SWM`: pool swimming, 5 readings
/// - `RUN`: running, 3 readings
/// - `WLK`: sports walking, 4 readings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutCode {
    /// Pool swimming
    Swimming,
    /// Running
    Running,
    /// Sports walking
    SportsWalking,
}

impl WorkoutCode {
    /// Three-letter sensor code
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Swimming => "SWM",
            Self::Running => "RUN",
            Self::SportsWalking => "WLK",
        }
    }

    /// Constructor parameters in positional order
    #[must_use]
    pub const fn parameters(&self) -> &'static [&'static str] {
        match self {
            Self::Swimming => &[
                "action",
                "duration_hours",
                "weight_kg",
                "pool_length_m",
                "pool_count",
            ],
            Self::Running => &["action", "duration_hours", "weight_kg"],
            Self::SportsWalking => &["action", "duration_hours", "weight_kg", "height_cm"],
        }
    }

    /// Number of readings the workout constructor expects
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.parameters().len()
    }

    /// Build the concrete workout from positional readings
    ///
    /// # Errors
    ///
    /// Returns `ArgumentMismatch` if the reading count differs from
    /// [`Self::arity`], a count reading is not a non-negative integer, or
    /// any reading is not finite
    pub fn build(self, data: &[f64]) -> AppResult<Training> {
        let args = SensorArgs::new(self, data)?;

        let training: Training = match self {
            Self::Swimming => Swimming::new(
                args.count(0)?,
                args.real(1)?,
                args.real(2)?,
                args.real(3)?,
                args.count(4)?,
            )
            .into(),
            Self::Running => Running::new(args.count(0)?, args.real(1)?, args.real(2)?).into(),
            Self::SportsWalking => {
                SportsWalking::new(args.count(0)?, args.real(1)?, args.real(2)?, args.real(3)?)
                    .into()
            }
        };

        Ok(training)
    }
}

impl fmt::Display for WorkoutCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutCode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SWM" => Ok(Self::Swimming),
            "RUN" => Ok(Self::Running),
            "WLK" => Ok(Self::SportsWalking),
            other => Err(AppError::unknown_workout_type(other)),
        }
    }
}

/// Positional sensor readings checked against a workout's constructor
struct SensorArgs<'a> {
    code: WorkoutCode,
    data: &'a [f64],
}

impl<'a> SensorArgs<'a> {
    fn new(code: WorkoutCode, data: &'a [f64]) -> AppResult<Self> {
        if data.len() != code.arity() {
            return Err(AppError::argument_mismatch(format!(
                "{code} expects {} readings ({}), got {}",
                code.arity(),
                code.parameters().join(", "),
                data.len()
            )));
        }
        Ok(Self { code, data })
    }

    fn name(&self, index: usize) -> &'static str {
        self.code.parameters()[index]
    }

    fn real(&self, index: usize) -> AppResult<f64> {
        let value = self.data[index];
        if value.is_finite() {
            Ok(value)
        } else {
            Err(AppError::argument_mismatch(format!(
                "{} '{}' must be a finite number, got {value}",
                self.code,
                self.name(index)
            )))
        }
    }

    fn count(&self, index: usize) -> AppResult<u32> {
        let value = self.real(index)?;
        if value < 0.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
            return Err(AppError::argument_mismatch(format!(
                "{} '{}' must be a non-negative integer, got {value}",
                self.code,
                self.name(index)
            )));
        }
        Ok(value as u32)
    }
}

/// Read a sensor package and construct the workout it describes
///
/// Looks `workout_type` up in the fixed code mapping, then applies `data`
/// positionally to that workout's constructor.
///
/// # Errors
///
/// - `UnknownWorkoutType` if `workout_type` is not `SWM`, `RUN`, or `WLK`
/// - `ArgumentMismatch` if `data` does not fit the selected constructor
pub fn read_package(workout_type: &str, data: &[f64]) -> AppResult<Training> {
    debug!(workout.code = workout_type, workout.args = ?data, "Reading sensor package");

    workout_type
        .parse::<WorkoutCode>()
        .and_then(|code| code.build(data))
        .inspect_err(|e| {
            warn!(workout.code = workout_type, error = %e, "Rejected sensor package");
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity_matches_parameters() {
        assert_eq!(WorkoutCode::Running.arity(), 3);
        assert_eq!(WorkoutCode::SportsWalking.arity(), 4);
        assert_eq!(WorkoutCode::Swimming.arity(), 5);
    }

    #[test]
    fn test_code_round_trips_through_display() {
        for code in [
            WorkoutCode::Swimming,
            WorkoutCode::Running,
            WorkoutCode::SportsWalking,
        ] {
            assert_eq!(code.to_string().parse::<WorkoutCode>().unwrap(), code);
        }
    }

    #[test]
    fn test_count_rejects_fractional_values() {
        let args = SensorArgs::new(WorkoutCode::Running, &[1.5, 1.0, 75.0]).unwrap();

        let error = args.count(0).unwrap_err();
        assert!(error.message.contains("'action'"));
    }

    #[test]
    fn test_count_rejects_negative_values() {
        let args = SensorArgs::new(WorkoutCode::Swimming, &[720.0, 1.0, 80.0, 25.0, -1.0])
            .unwrap();

        assert!(args.count(4).is_err());
    }
}
