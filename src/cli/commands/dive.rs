//! Solve day 2: dive

use std::path::PathBuf;

use anyhow::Context;

use aoc2021::config::Config;
use aoc2021::core::models::{Instruction, PilotMode};
use aoc2021::core::services::pilot;
use aoc2021::input;
use aoc2021::output::{ChallengeInfo, CourseResult, OutputMode};
use aoc2021::puzzle::Puzzle;

/// Flags for the dive command
#[derive(Debug, Clone)]
pub struct DiveArgs {
    /// Input file (falls back to the configured inputs directory)
    pub instructions: Option<PathBuf>,
    /// Force advanced mode (otherwise config decides)
    pub advanced: bool,
    /// Print the rules instead of solving
    pub challenge: bool,
}

/// Pilot the submarine through the instructions file
pub fn dive(args: &DiveArgs, config: &Config, mode: OutputMode) -> anyhow::Result<()> {
    if args.challenge {
        ChallengeInfo::from(Puzzle::Dive).render(mode);
        return Ok(());
    }

    let path = args.instructions.clone().unwrap_or_else(|| config.input_path(Puzzle::Dive));
    let pilot_mode = if args.advanced { PilotMode::Advanced } else { config.dive.mode() };
    log::debug!("piloting {} in {pilot_mode} mode", path.display());

    let records = input::read_records::<Instruction>(&path)
        .with_context(|| format!("Failed to open instructions file {}", path.display()))?;
    let course = pilot::solve(records, pilot_mode)
        .with_context(|| format!("Failed to pilot {}", path.display()))?;

    CourseResult::from(course).render(mode);
    Ok(())
}
