//! Sonar depth measurement
//!
//! A measurement is a single finite number read from one line of a sonar
//! sweep report. Integer literals are kept exact; anything else that parses
//! as a finite float is stored as `f64`. Two integers compare exactly, any
//! comparison involving a float goes through `f64`.
//!
//! # Examples
//!
//! ```
//! use aoc2021::core::models::Measurement;
//!
//! let m: Measurement = "199".parse().unwrap();
//! assert_eq!(m, Measurement::Int(199));
//! assert!("deep".parse::<Measurement>().is_err());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::core::error::ParseError;

/// A single depth reading
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(untagged)]
pub enum Measurement {
    /// Integer literal, compared exactly
    Int(i64),
    /// Finite float literal
    Float(f64),
}

impl Measurement {
    /// Create a float measurement, rejecting infinities and NaN
    #[must_use]
    pub const fn new(value: f64) -> Option<Self> {
        if value.is_finite() { Some(Self::Float(value)) } else { None }
    }

    /// The value as `f64` (lossy for integers beyond 2^53)
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn value(self) -> f64 {
        match self {
            Self::Int(v) => v as f64,
            Self::Float(v) => v,
        }
    }
}

impl PartialEq for Measurement {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Measurement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => Some(a.cmp(b)),
            _ => self.value().partial_cmp(&other.value()),
        }
    }
}

impl From<i32> for Measurement {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
        }
    }
}

impl FromStr for Measurement {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::Empty);
        }

        if let Ok(v) = trimmed.parse::<i64>() {
            return Ok(Self::Int(v));
        }

        trimmed
            .parse::<f64>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| ParseError::InvalidMeasurement(trimmed.to_string()))
    }
}
