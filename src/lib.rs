// ABOUTME: Main library entry point for the fitness tracker calculator
// ABOUTME: Computes distance, mean speed, and calories for running, walking, and swimming
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitness Tracker
//!
//! Computes workout statistics from raw sensor readings. A sensor package is a
//! three-letter workout code plus positional readings; the tracker builds the
//! matching workout, computes its metrics, and renders a one-line report.
//!
//! ## Example Usage
//!
//! ```rust
//! use fitness_tracker::formatters::OutputFormat;
//! use fitness_tracker::intelligence::{read_package, WorkoutMetrics};
//!
//! # fn main() -> fitness_tracker::errors::AppResult<()> {
//! let training = read_package("RUN", &[15000.0, 1.0, 75.0])?;
//! let info = training.show_training_info()?;
//! println!("{}", OutputFormat::Text.render(&info)?);
//! # Ok(())
//! # }
//! ```

/// Environment-driven configuration
pub mod config;

/// Demo driver processing sensor packages in order
pub mod driver;

/// Unified error handling re-exported from the core crate
pub mod errors;

/// Report message rendering and output formats
pub mod formatters;

/// Workout metric formulas and package dispatch
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Workout data models
pub mod models;
