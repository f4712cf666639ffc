// ABOUTME: Unified error handling re-exported from fitness-tracker-core
// ABOUTME: Keeps crate::errors import paths stable for the root crate and its binary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use fitness_tracker_core::errors::*;
