// ABOUTME: Tracker configuration assembled from environment variables
// ABOUTME: Combines logging settings with the report output format
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppResult;
use crate::formatters::OutputFormat;
use crate::logging::LoggingConfig;
use std::env;
use tracing::debug;

/// Environment variable selecting the report output format (`text` or `json`)
pub const OUTPUT_FORMAT_ENV: &str = "FITNESS_OUTPUT_FORMAT";

/// Top-level tracker configuration
#[derive(Debug, Clone, Default)]
pub struct TrackerConfig {
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Format used to render each report line
    pub output_format: OutputFormat,
}

impl TrackerConfig {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to defaults: warn-level pretty logs and
    /// text reports.
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if `FITNESS_OUTPUT_FORMAT` is set to an
    /// unrecognised value
    pub fn from_env() -> AppResult<Self> {
        let output_format = env_var_or(OUTPUT_FORMAT_ENV, OutputFormat::default().as_str())
            .parse::<OutputFormat>()?;

        let config = Self {
            logging: LoggingConfig::from_env(),
            output_format,
        };
        debug!(output.format = %config.output_format, "Tracker configuration loaded");

        Ok(config)
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
