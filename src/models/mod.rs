// ABOUTME: Data models for workouts built from sensor packages
// ABOUTME: Re-exports the base training record and the concrete workout types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! A workout is constructed once from a flat list of sensor readings, used to
//! produce exactly one report, then discarded. Models are plain values with no
//! update operations.
//!
//! ## Core Models
//!
//! - `TrainingRecord`: Shared sensor fields (action count, duration, weight)
//! - `Running`, `SportsWalking`, `Swimming`: Concrete workouts
//! - `Training`: Closed enum over the concrete workouts

/// Workout record types
pub mod workout;

pub use workout::{Running, SportsWalking, Swimming, Training, TrainingRecord};
