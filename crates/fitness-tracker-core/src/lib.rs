// ABOUTME: Core types and constants for the fitness tracker calculator
// ABOUTME: Foundation crate with error handling and named formula constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitness Tracker Core
//!
//! Foundation crate providing shared types and constants for the fitness
//! tracker. It holds no computation of its own; the workout formulas live in
//! the root crate and lean on the coefficients defined here.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Unit conversions, per-workout coefficients, and message labels

/// Unified error handling system with standard error codes
pub mod errors;

/// Named constants organized by domain
pub mod constants;
