// ABOUTME: Configuration module for tracker settings loaded from the environment
// ABOUTME: Re-exports the top-level TrackerConfig and its environment loader
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration for the fitness tracker
//!
//! Configuration is environment-only; there are no config files.

/// Environment-driven tracker configuration
pub mod environment;

pub use environment::{TrackerConfig, OUTPUT_FORMAT_ENV};
