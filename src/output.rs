//! Output formatting for human and JSON modes
//!
//! Human mode prints exactly one integer per solved puzzle, so answers can
//! be piped. JSON mode adds the solver details.

use serde::Serialize;

use crate::core::services::{Course, SweepReport};
use crate::puzzle::Puzzle;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of the sonar sweep
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SweepResult {
    /// Day number
    pub day: u8,
    /// Number of increases (the answer)
    pub answer: usize,
    /// Full tally
    pub report: SweepReport,
}

impl From<SweepReport> for SweepResult {
    fn from(report: SweepReport) -> Self {
        Self {
            day: Puzzle::SonarSweep.day(),
            answer: report.increases,
            report,
        }
    }
}

impl SweepResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.answer),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

/// Result of piloting the submarine
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CourseResult {
    /// Day number
    pub day: u8,
    /// `horizontal * depth` (the answer)
    pub answer: i64,
    /// Full course details
    pub course: Course,
}

impl From<Course> for CourseResult {
    fn from(course: Course) -> Self {
        Self {
            day: Puzzle::Dive.day(),
            answer: course.product,
            course,
        }
    }
}

impl CourseResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.answer),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

/// Puzzle description shown instead of solving
#[derive(Debug, Serialize)]
pub struct ChallengeInfo {
    /// Day number
    pub day: u8,
    /// Puzzle title
    pub title: String,
    /// Rules the solver applies
    pub challenge: String,
}

impl From<Puzzle> for ChallengeInfo {
    fn from(puzzle: Puzzle) -> Self {
        Self {
            day: puzzle.day(),
            title: puzzle.title().to_string(),
            challenge: puzzle.challenge().to_string(),
        }
    }
}

impl ChallengeInfo {
    /// Render the description based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!("--- Day {}: {} ---\n", self.day, self.title);
        print!("{}", self.challenge);
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Entry in the puzzle list
#[derive(Debug, Serialize)]
pub struct PuzzleInfo {
    /// Day number
    pub day: u8,
    /// Puzzle title
    pub title: String,
    /// Subcommand that solves it
    pub command: String,
}

/// Result of the list command
#[derive(Debug, Serialize)]
pub struct PuzzleListResult {
    /// Known puzzles in day order
    pub puzzles: Vec<PuzzleInfo>,
}

impl PuzzleListResult {
    /// List every known puzzle
    #[must_use]
    pub fn all() -> Self {
        Self {
            puzzles: Puzzle::ALL
                .into_iter()
                .map(|p| PuzzleInfo {
                    day: p.day(),
                    title: p.title().to_string(),
                    command: p.command().to_string(),
                })
                .collect(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        for p in &self.puzzles {
            println!("  Day {:02}  {:<12} aoc2021 {}", p.day, p.title, p.command);
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
