// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet test logging and the expected demo report lines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(dead_code, clippy::missing_panics_doc, clippy::must_use_candidate)]
//! Shared test utilities for `fitness_tracker`

use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        // Another test binary may already own the global subscriber
        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Report lines the demo packages produce, in input order
pub const EXPECTED_DEMO_LINES: [&str; 3] = [
    "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; \
     Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000.",
    "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
     Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750.",
    "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 км; \
     Ср. скорость: 5.850 км/ч; Потрачено ккал: 157.500.",
];
