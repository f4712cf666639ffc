// ABOUTME: Workout record types built from raw sensor readings
// ABOUTME: Base training record plus running, sports walking, and swimming specializations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Raw sensor fields shared by every workout
///
/// `action` is the step or stroke count reported by the sensor. Duration is
/// in hours and weight in kilograms. Distance, speed, and calories are
/// derived on demand and never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingRecord {
    /// Step or stroke count
    pub action: u32,
    /// Workout duration in hours
    pub duration_hours: f64,
    /// Athlete weight in kilograms
    pub weight_kg: f64,
}

impl TrainingRecord {
    /// Create a record from raw sensor fields
    #[must_use]
    pub const fn new(action: u32, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            action,
            duration_hours,
            weight_kg,
        }
    }
}

/// Running workout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    /// Shared sensor fields
    pub record: TrainingRecord,
}

impl Running {
    /// Create a running workout
    #[must_use]
    pub const fn new(action: u32, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            record: TrainingRecord::new(action, duration_hours, weight_kg),
        }
    }
}

/// Sports walking workout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    /// Shared sensor fields
    pub record: TrainingRecord,
    /// Athlete height in centimeters
    pub height_cm: f64,
}

impl SportsWalking {
    /// Create a sports walking workout
    #[must_use]
    pub const fn new(action: u32, duration_hours: f64, weight_kg: f64, height_cm: f64) -> Self {
        Self {
            record: TrainingRecord::new(action, duration_hours, weight_kg),
            height_cm,
        }
    }
}

/// Pool swimming workout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    /// Shared sensor fields
    pub record: TrainingRecord,
    /// Pool length in meters
    pub pool_length_m: f64,
    /// Number of pool lengths swum
    pub pool_count: u32,
}

impl Swimming {
    /// Create a swimming workout
    #[must_use]
    pub const fn new(
        action: u32,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_count: u32,
    ) -> Self {
        Self {
            record: TrainingRecord::new(action, duration_hours, weight_kg),
            pool_length_m,
            pool_count,
        }
    }
}

/// Closed set of concrete workouts a sensor package can describe
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Training {
    /// Running
    Running(Running),
    /// Sports walking
    SportsWalking(SportsWalking),
    /// Pool swimming
    Swimming(Swimming),
}

impl From<Running> for Training {
    fn from(workout: Running) -> Self {
        Self::Running(workout)
    }
}

impl From<SportsWalking> for Training {
    fn from(workout: SportsWalking) -> Self {
        Self::SportsWalking(workout)
    }
}

impl From<Swimming> for Training {
    fn from(workout: Swimming) -> Self {
        Self::Swimming(workout)
    }
}
