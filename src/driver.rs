// ABOUTME: Demo driver that turns sensor packages into printed training reports
// ABOUTME: Processes packages in input order and stops at the first failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use crate::formatters::OutputFormat;
use crate::intelligence::dispatch::read_package;
use crate::intelligence::workouts::WorkoutMetrics;
use std::io::Write;
use tracing::{debug, info_span};

/// Raw readings from a sensor: a workout code and positional values
#[derive(Debug, Clone, PartialEq)]
pub struct SensorPackage {
    /// Three-letter workout code (`SWM`, `RUN`, `WLK`)
    pub workout_type: String,
    /// Positional readings for the workout constructor
    pub data: Vec<f64>,
}

impl SensorPackage {
    /// Create a package from a code and readings
    #[must_use]
    pub fn new(workout_type: impl Into<String>, data: impl Into<Vec<f64>>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data: data.into(),
        }
    }
}

/// The fixed sample packages run by the binary
#[must_use]
pub fn demo_packages() -> Vec<SensorPackage> {
    vec![
        SensorPackage::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPackage::new("RUN", [15000.0, 1.0, 75.0]),
        SensorPackage::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Build, compute, and render the report line for one package
///
/// # Errors
///
/// Propagates dispatch, computation, and formatting errors
pub fn process_package(package: &SensorPackage, format: OutputFormat) -> AppResult<String> {
    let training = read_package(&package.workout_type, &package.data)?;
    let info = training.show_training_info()?;
    format.render(&info)
}

/// Process packages in order, writing one line per package to `out`
///
/// Lines already written stay written if a later package fails.
///
/// # Errors
///
/// Returns the first dispatch, computation, or formatting error, or
/// `OutputError` if writing to `out` fails
pub fn run<W: Write>(
    packages: &[SensorPackage],
    format: OutputFormat,
    out: &mut W,
) -> AppResult<()> {
    for (index, package) in packages.iter().enumerate() {
        let _span = info_span!("package", index, workout.code = %package.workout_type).entered();

        let line = process_package(package, format)?;
        writeln!(out, "{line}")
            .map_err(|e| AppError::output("failed to write report line").with_source(e))?;
        debug!("Report written");
    }

    out.flush()
        .map_err(|e| AppError::output("failed to flush report output").with_source(e))
}
