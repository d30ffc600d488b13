//! Submarine piloting instructions
//!
//! One instruction per line: a direction token followed by a non-negative
//! magnitude, separated by whitespace.
//!
//! # Examples
//!
//! ```
//! use aoc2021::core::models::{Direction, Instruction};
//!
//! let i: Instruction = "forward 5".parse().unwrap();
//! assert_eq!(i.direction, Direction::Forward);
//! assert_eq!(i.magnitude, 5);
//! assert!("left 3".parse::<Instruction>().is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::core::error::ParseError;

/// Which way an instruction moves the submarine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Decrease depth (or aim)
    Up,
    /// Increase depth (or aim)
    Down,
    /// Move horizontally
    Forward,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up => write!(f, "up"),
            Self::Down => write!(f, "down"),
            Self::Forward => write!(f, "forward"),
        }
    }
}

impl FromStr for Direction {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "forward" => Ok(Self::Forward),
            _ => Err(ParseError::UnknownDirection(s.to_string())),
        }
    }
}

/// A parsed piloting command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Instruction {
    /// Direction of travel
    pub direction: Direction,
    /// Units to move
    pub magnitude: u32,
}

impl Instruction {
    /// Create an instruction
    #[must_use]
    pub const fn new(direction: Direction, magnitude: u32) -> Self {
        Self {
            direction,
            magnitude,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.direction, self.magnitude)
    }
}

impl FromStr for Instruction {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();

        let direction: Direction = tokens.next().ok_or(ParseError::Empty)?.parse()?;
        let raw = tokens.next().ok_or_else(|| ParseError::MissingMagnitude(direction.to_string()))?;
        let magnitude = raw.parse::<u32>().map_err(|_| ParseError::InvalidMagnitude(raw.to_string()))?;

        if let Some(extra) = tokens.next() {
            return Err(ParseError::TrailingInput(extra.to_string()));
        }

        Ok(Self::new(direction, magnitude))
    }
}
