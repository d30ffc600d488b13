//! Puzzle catalogue
//!
//! Every solver the CLI knows about, with its day, title and a short
//! statement of the rules it implements.

use serde::Serialize;

/// A solvable puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Puzzle {
    /// Day 1: count depth increases
    SonarSweep,
    /// Day 2: plot the submarine course
    Dive,
}

impl Puzzle {
    /// All puzzles in day order
    pub const ALL: [Self; 2] = [Self::SonarSweep, Self::Dive];

    /// Day of the advent calendar
    #[must_use]
    pub const fn day(self) -> u8 {
        match self {
            Self::SonarSweep => 1,
            Self::Dive => 2,
        }
    }

    /// Puzzle title
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::SonarSweep => "Sonar Sweep",
            Self::Dive => "Dive!",
        }
    }

    /// CLI subcommand name
    #[must_use]
    pub const fn command(self) -> &'static str {
        match self {
            Self::SonarSweep => "sonar-sweep",
            Self::Dive => "dive",
        }
    }

    /// Default input file name (inside the inputs directory)
    #[must_use]
    pub const fn input_file(self) -> &'static str {
        match self {
            Self::SonarSweep => "day01.txt",
            Self::Dive => "day02.txt",
        }
    }

    /// Statement of the rules the solver applies
    #[must_use]
    pub const fn challenge(self) -> &'static str {
        match self {
            Self::SonarSweep => SONAR_SWEEP,
            Self::Dive => DIVE,
        }
    }
}

impl std::fmt::Display for Puzzle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Day {:02}: {}", self.day(), self.title())
    }
}

const SONAR_SWEEP: &str = "\
Each line of the report is one sea floor depth measurement, in the order
the sweep took them.

Count how many times the depth increases. With the default window of 1,
compare every measurement with the one before it; the first measurement
has nothing to compare with.

With a larger window (--window 3), sum each run of consecutive
measurements and compare each sum with the previous one instead. Stop
when there are not enough measurements left to fill a window. Equal sums
are not increases.

Example: 199 200 208 210 200 207 240 269 260 263
  window 1 -> 7 increases
  window 3 -> 5 increases
";

const DIVE: &str = "\
Each line is a command: `forward X`, `down X` or `up X`. Horizontal
position and depth both start at 0.

Simple mode:
  forward X  horizontal += X
  down X     depth += X
  up X       depth -= X

Advanced mode (--advanced) also tracks aim, starting at 0:
  down X     aim += X
  up X       aim -= X
  forward X  horizontal += X and depth += aim * X

The answer is horizontal * depth after the last command.

Example: forward 5, down 5, forward 8, up 3, down 8, forward 2
  simple   -> horizontal 15, depth 10, answer 150
  advanced -> horizontal 15, depth 60, answer 900
";
