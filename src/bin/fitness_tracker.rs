// ABOUTME: Fitness tracker demo binary printing reports for the built-in sensor packages
// ABOUTME: Takes no arguments; configuration comes from the environment only
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use fitness_tracker::config::TrackerConfig;
use fitness_tracker::driver::{demo_packages, run};
use std::io;
use tracing::info;

fn main() -> Result<()> {
    let config = TrackerConfig::from_env()?;
    config.logging.init()?;

    let packages = demo_packages();
    info!(packages = packages.len(), output.format = %config.output_format, "Running demo");

    let stdout = io::stdout();
    run(&packages, config.output_format, &mut stdout.lock())?;

    Ok(())
}
