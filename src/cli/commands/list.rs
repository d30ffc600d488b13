//! List available puzzles

use aoc2021::output::{OutputMode, PuzzleListResult};

/// Print every puzzle the CLI can solve
#[allow(clippy::unnecessary_wraps)]
pub fn list(mode: OutputMode) -> anyhow::Result<()> {
    PuzzleListResult::all().render(mode);
    Ok(())
}
