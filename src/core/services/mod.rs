//! Puzzle solvers
//!
//! Pure folds over already-parsed values. These services have no I/O
//! dependencies: they consume records in arrival order and return results.
//!
//! - [`sonar`] - Count sliding-window depth increases (day 1)
//! - [`pilot`] - Plot a submarine course (day 2)

pub mod pilot;
pub mod sonar;

pub use pilot::{Course, pilot};
pub use sonar::{SonarSweep, SweepReport, count_increases, sweep};

use crate::core::error::SolveError;

/// Feed successful records to `fold` until the first error
///
/// The fold sees a plain iterator of values. Once a record fails, the
/// iterator ends and that error is returned in place of the fold's result.
pub(crate) fn until_first_error<T, I, R>(
    records: I,
    fold: impl FnOnce(&mut dyn Iterator<Item = T>) -> R,
) -> Result<R, SolveError>
where
    I: IntoIterator<Item = Result<T, SolveError>>,
{
    let mut error = None;
    let mut values = records.into_iter().map_while(|record| match record {
        Ok(value) => Some(value),
        Err(err) => {
            error = Some(err);
            None
        },
    });

    let result = fold(&mut values);
    drop(values);

    match error {
        Some(err) => Err(err),
        None => Ok(result),
    }
}
