//! Command implementations

mod dive;
mod list;
mod sonar_sweep;

pub use dive::{DiveArgs, dive};
pub use list::list;
pub use sonar_sweep::{SonarSweepArgs, sonar_sweep};
