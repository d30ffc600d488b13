//! Submarine position and piloting modes
//!
//! In [`PilotMode::Simple`] `up`/`down` change depth directly. In
//! [`PilotMode::Advanced`] they change aim, and `forward` also dives by
//! `magnitude * aim`. All arithmetic is checked.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Direction, Instruction};

/// How instructions are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PilotMode {
    /// `up`/`down` move depth directly
    #[default]
    Simple,
    /// `up`/`down` steer aim; `forward` dives along it
    Advanced,
}

impl PilotMode {
    /// Pick the mode from an "advanced" flag
    #[must_use]
    pub const fn from_advanced(advanced: bool) -> Self {
        if advanced { Self::Advanced } else { Self::Simple }
    }
}

impl fmt::Display for PilotMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simple => write!(f, "simple"),
            Self::Advanced => write!(f, "advanced"),
        }
    }
}

/// Submarine state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Position {
    /// Horizontal distance travelled
    pub horizontal: i64,
    /// Current depth
    pub depth: i64,
    /// Current aim (always 0 in simple mode)
    pub aim: i64,
}

impl Position {
    /// Starting position (all zero)
    #[must_use]
    pub const fn origin() -> Self {
        Self {
            horizontal: 0,
            depth: 0,
            aim: 0,
        }
    }

    /// Apply one instruction, returning `None` on overflow
    #[must_use]
    pub fn apply(self, instruction: Instruction, mode: PilotMode) -> Option<Self> {
        let units = i64::from(instruction.magnitude);
        let mut next = self;

        match (mode, instruction.direction) {
            (PilotMode::Simple, Direction::Up) => next.depth = self.depth.checked_sub(units)?,
            (PilotMode::Simple, Direction::Down) => next.depth = self.depth.checked_add(units)?,
            (PilotMode::Advanced, Direction::Up) => next.aim = self.aim.checked_sub(units)?,
            (PilotMode::Advanced, Direction::Down) => next.aim = self.aim.checked_add(units)?,
            (PilotMode::Simple, Direction::Forward) => {
                next.horizontal = self.horizontal.checked_add(units)?;
            },
            (PilotMode::Advanced, Direction::Forward) => {
                next.horizontal = self.horizontal.checked_add(units)?;
                next.depth = self.depth.checked_add(units.checked_mul(self.aim)?)?;
            },
        }

        Some(next)
    }

    /// `horizontal * depth`, `None` on overflow
    #[must_use]
    pub const fn product(&self) -> Option<i64> {
        self.horizontal.checked_mul(self.depth)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "horizontal={} depth={} aim={}", self.horizontal, self.depth, self.aim)
    }
}
