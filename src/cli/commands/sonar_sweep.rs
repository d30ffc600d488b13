//! Solve day 1: sonar sweep

use std::path::PathBuf;

use anyhow::Context;

use aoc2021::config::Config;
use aoc2021::core::models::{Measurement, WindowSize};
use aoc2021::core::services::sonar;
use aoc2021::input;
use aoc2021::output::{ChallengeInfo, OutputMode, SweepResult};
use aoc2021::puzzle::Puzzle;

/// Flags for the sonar sweep command
#[derive(Debug, Clone)]
pub struct SonarSweepArgs {
    /// Input file (falls back to the configured inputs directory)
    pub measurements: Option<PathBuf>,
    /// Window size (falls back to config)
    pub window: Option<i64>,
    /// Print the rules instead of solving
    pub challenge: bool,
}

/// Count sliding-window depth increases in the measurements file
pub fn sonar_sweep(args: &SonarSweepArgs, config: &Config, mode: OutputMode) -> anyhow::Result<()> {
    if args.challenge {
        ChallengeInfo::from(Puzzle::SonarSweep).render(mode);
        return Ok(());
    }

    let path = args.measurements.clone().unwrap_or_else(|| config.input_path(Puzzle::SonarSweep));
    let window = args.window.unwrap_or(config.sonar.window);
    // Reject a bad window before touching the input
    let window = WindowSize::try_from(window)?;
    log::debug!("sonar sweep over {} with window {window}", path.display());

    let records = input::read_records::<Measurement>(&path)
        .with_context(|| format!("Failed to open measurements file {}", path.display()))?;
    let report = sonar::solve(records, window)
        .with_context(|| format!("Failed to sweep {}", path.display()))?;

    SweepResult::from(report).render(mode);
    Ok(())
}
