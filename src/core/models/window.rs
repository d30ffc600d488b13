//! Sliding window over recent measurements
//!
//! A [`SlidingWindow`] is a FIFO with a fixed capacity. Once it holds
//! `capacity` values, every push evicts the oldest one and hands it back,
//! which is all a caller needs to compare consecutive window sums: the two
//! windows share every element except the one entering and the one leaving.

use std::collections::VecDeque;
use std::fmt;
use std::num::NonZeroUsize;

use serde::Serialize;

use super::Measurement;
use crate::core::error::SolveError;

/// A strictly positive window length
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct WindowSize(NonZeroUsize);

impl WindowSize {
    /// Window of a single measurement (compare each reading with the last)
    pub const ONE: Self = Self(NonZeroUsize::MIN);

    /// Create a window size, returning `None` for zero
    #[must_use]
    pub const fn new(size: usize) -> Option<Self> {
        match NonZeroUsize::new(size) {
            Some(size) => Some(Self(size)),
            None => None,
        }
    }

    /// The window length
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for WindowSize {
    fn default() -> Self {
        Self::ONE
    }
}

impl TryFrom<i64> for WindowSize {
    type Error = SolveError;

    fn try_from(size: i64) -> Result<Self, Self::Error> {
        usize::try_from(size).ok().and_then(Self::new).ok_or(SolveError::InvalidWindowSize)
    }
}

impl fmt::Display for WindowSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fixed-capacity FIFO of the most recent measurements
#[derive(Debug, Clone)]
pub struct SlidingWindow {
    values: VecDeque<Measurement>,
    capacity: WindowSize,
}

impl SlidingWindow {
    /// Create an empty window
    #[must_use]
    pub fn new(capacity: WindowSize) -> Self {
        Self {
            values: VecDeque::with_capacity(capacity.get()),
            capacity,
        }
    }

    /// Append a measurement, returning the evicted one if the window was full
    pub fn push(&mut self, measurement: Measurement) -> Option<Measurement> {
        let evicted = if self.is_full() { self.values.pop_front() } else { None };
        self.values.push_back(measurement);
        evicted
    }

    /// Maximum number of measurements held
    #[must_use]
    pub const fn capacity(&self) -> WindowSize {
        self.capacity
    }

    /// Number of measurements currently held
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no measurement has been pushed yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether the window holds `capacity` measurements
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.values.len() == self.capacity.get()
    }

    /// Measurements from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = Measurement> + '_ {
        self.values.iter().copied()
    }

    /// Sum of the held measurements
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.iter().map(Measurement::value).sum()
    }

    /// Mean of the held measurements, `None` while empty
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn average(&self) -> Option<f64> {
        if self.is_empty() { None } else { Some(self.sum() / self.len() as f64) }
    }
}

impl fmt::Display for SlidingWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values: Vec<String> = self.iter().map(|m| m.to_string()).collect();
        write!(f, "window({})", values.join(","))
    }
}
