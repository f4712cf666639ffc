// ABOUTME: Unit tests for environment-driven tracker and logging configuration
// ABOUTME: Validates defaults, output format selection, and log format parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitness_tracker::config::{TrackerConfig, OUTPUT_FORMAT_ENV};
use fitness_tracker::errors::ErrorCode;
use fitness_tracker::formatters::OutputFormat;
use fitness_tracker::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str_or_default("json"), LogFormat::Json);
    assert_eq!(LogFormat::from_str_or_default("COMPACT"), LogFormat::Compact);
    assert_eq!(LogFormat::from_str_or_default("pretty"), LogFormat::Pretty);
    assert_eq!(LogFormat::from_str_or_default("invalid"), LogFormat::Pretty); // Default fallback
}

#[test]
fn test_logging_defaults_are_quiet() {
    let config = LoggingConfig::default();

    assert_eq!(config.level, "warn");
    assert_eq!(config.format, LogFormat::Pretty);
    assert_eq!(config.service_name, "fitness-tracker");
}

#[test]
#[serial]
fn test_default_output_format_is_text() {
    env::remove_var(OUTPUT_FORMAT_ENV);

    let config = TrackerConfig::from_env().unwrap();
    assert_eq!(config.output_format, OutputFormat::Text);
}

#[test]
#[serial]
fn test_json_output_format_from_env() {
    env::set_var(OUTPUT_FORMAT_ENV, "json");

    let config = TrackerConfig::from_env().unwrap();
    assert_eq!(config.output_format, OutputFormat::Json);

    env::remove_var(OUTPUT_FORMAT_ENV);
}

#[test]
#[serial]
fn test_unknown_output_format_is_config_error() {
    env::set_var(OUTPUT_FORMAT_ENV, "yaml");

    let error = TrackerConfig::from_env().unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert!(error.message.contains("yaml"));

    env::remove_var(OUTPUT_FORMAT_ENV);
}

#[test]
#[serial]
fn test_log_settings_from_env() {
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");

    let config = LoggingConfig::from_env();
    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Json);

    env::remove_var("RUST_LOG");
    env::remove_var("LOG_FORMAT");
}

#[test]
fn test_invalid_filter_directive_falls_back() {
    let config = LoggingConfig {
        level: "not a [valid directive".to_owned(),
        ..LoggingConfig::default()
    };

    // Must not panic; the fallback filter is used instead
    let _filter = config.env_filter();
}
