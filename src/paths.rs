//! Centralized path definitions for aoc2021
//!
//! ## Layout
//!
//! ```text
//! <config_dir>/aoc2021/
//! └── config.toml               # Optional user defaults
//!
//! ./inputs/                     # Default puzzle inputs directory
//! ├── day01.txt
//! └── day02.txt
//! ```
//!
//! `<config_dir>` is the platform config directory (`~/.config` on Linux).

use std::path::{Path, PathBuf};

use crate::puzzle::Puzzle;

/// Config directory name
const CONFIG_DIR: &str = "aoc2021";

/// Config filename
const CONFIG_FILE: &str = "config.toml";

/// Default inputs directory, relative to the working directory
pub const INPUTS_DIR: &str = "inputs";

/// Get the aoc2021 config directory.
#[must_use]
pub fn config_dir() -> PathBuf {
    dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join(CONFIG_DIR)
}

/// Get the default config file path.
#[must_use]
pub fn config_file() -> PathBuf {
    config_dir().join(CONFIG_FILE)
}

/// Get the default input file for a puzzle inside `inputs_dir`.
#[must_use]
pub fn puzzle_input(inputs_dir: &Path, puzzle: Puzzle) -> PathBuf {
    inputs_dir.join(puzzle.input_file())
}
