// ABOUTME: Workout intelligence: metric formulas and sensor package dispatch
// ABOUTME: Groups the WorkoutMetrics capability with the code-to-workout factory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Turns raw sensor packages into computed workout metrics.
//!
//! - **dispatch**: Maps a workout code and readings to a concrete workout
//! - **workouts**: Distance, mean speed, and calorie formulas per workout

/// Sensor package dispatch by workout code
pub mod dispatch;
/// Per-workout metric formulas
pub mod workouts;

pub use dispatch::{read_package, WorkoutCode};
pub use workouts::WorkoutMetrics;
