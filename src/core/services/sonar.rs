//! Sonar sweep - count sliding-window depth increases
//!
//! Each measurement enters a [`SlidingWindow`]. Once the previous window is
//! complete, the new and old windows differ by exactly one element at each
//! end, so the new sum is larger iff the entering measurement is larger than
//! the evicted one. Comparisons before a complete previous window exists do
//! not count.

use serde::Serialize;

use crate::core::error::SolveError;
use crate::core::models::{Change, Measurement, SlidingWindow, WindowSize};

/// Tally of a completed sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SweepReport {
    /// Window length used
    pub window_size: WindowSize,
    /// Number of measurements read
    pub measurements: usize,
    /// Windows whose sum grew
    pub increases: usize,
    /// Windows whose sum shrank
    pub decreases: usize,
    /// Windows whose sum stayed the same
    pub unchanged: usize,
}

impl SweepReport {
    const fn empty(window_size: WindowSize) -> Self {
        Self {
            window_size,
            measurements: 0,
            increases: 0,
            decreases: 0,
            unchanged: 0,
        }
    }

    /// Number of window comparisons made
    #[must_use]
    pub const fn comparisons(&self) -> usize {
        self.increases + self.decreases + self.unchanged
    }
}

/// Incremental sliding-window increase counter
#[derive(Debug, Clone)]
pub struct SonarSweep {
    window: SlidingWindow,
    report: SweepReport,
}

impl SonarSweep {
    /// Start a sweep with the given window length
    #[must_use]
    pub fn new(window_size: WindowSize) -> Self {
        Self {
            window: SlidingWindow::new(window_size),
            report: SweepReport::empty(window_size),
        }
    }

    /// Feed the next measurement
    ///
    /// Returns `None` while there is no complete previous window to compare with.
    pub fn observe(&mut self, measurement: Measurement) -> Option<Change> {
        let evicted = self.window.push(measurement);
        self.report.measurements += 1;

        let change = evicted.map(|old| Change::between(old, measurement));
        match change {
            Some(Change::Increased) => self.report.increases += 1,
            Some(Change::Decreased) => self.report.decreases += 1,
            Some(Change::Unchanged) => self.report.unchanged += 1,
            None => {},
        }

        self.trace(measurement, change);
        change
    }

    /// Counts so far
    #[must_use]
    pub const fn report(&self) -> SweepReport {
        self.report
    }

    fn trace(&self, measurement: Measurement, change: Option<Change>) {
        if !log::log_enabled!(log::Level::Debug) {
            return;
        }

        let label = change.map_or_else(
            || {
                if self.window.capacity() == WindowSize::ONE {
                    "N/A - no previous measurement".to_string()
                } else {
                    "N/A - no previous sum".to_string()
                }
            },
            |c| c.to_string(),
        );

        if self.window.capacity() == WindowSize::ONE {
            log::debug!("{measurement} ({label})");
        } else if self.window.is_full() {
            let average = self.window.average().unwrap_or_default();
            log::debug!("{average:.2} {} ({label})", self.window);
        } else {
            log::debug!("- {} ({label})", self.window);
        }
    }
}

/// Run a full sweep over `measurements`
pub fn sweep<I>(measurements: I, window_size: WindowSize) -> SweepReport
where
    I: IntoIterator<Item = Measurement>,
{
    let mut sonar = SonarSweep::new(window_size);
    for measurement in measurements {
        sonar.observe(measurement);
    }
    sonar.report()
}

/// Count how many windows have a larger sum than the window before them
pub fn count_increases<I>(measurements: I, window_size: WindowSize) -> usize
where
    I: IntoIterator<Item = Measurement>,
{
    sweep(measurements, window_size).increases
}

/// Sweep parsed records, aborting on the first malformed one
pub fn solve<I>(records: I, window_size: WindowSize) -> Result<SweepReport, SolveError>
where
    I: IntoIterator<Item = Result<Measurement, SolveError>>,
{
    super::until_first_error(records, |measurements| sweep(measurements, window_size))
}
