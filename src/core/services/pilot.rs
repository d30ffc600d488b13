//! Pilot - fold piloting instructions into a final position
//!
//! Instructions are applied strictly in input order starting from the
//! origin. The answer is `horizontal * depth` of the final position.

use serde::Serialize;

use crate::core::error::SolveError;
use crate::core::models::{Instruction, PilotMode, Position};

/// A completed course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Course {
    /// Mode the instructions were interpreted in
    pub mode: PilotMode,
    /// Number of instructions followed
    pub instructions: usize,
    /// Final position
    pub position: Position,
    /// `horizontal * depth` of the final position
    pub product: i64,
}

/// Follow `instructions` from the origin
///
/// Fails with [`SolveError::Overflow`] if any accumulator, or the final
/// product, leaves the `i64` range.
pub fn pilot<I>(instructions: I, mode: PilotMode) -> Result<Course, SolveError>
where
    I: IntoIterator<Item = Instruction>,
{
    let mut position = Position::origin();
    let mut steps = 0;

    for instruction in instructions {
        steps += 1;
        position = position
            .apply(instruction, mode)
            .ok_or(SolveError::Overflow { step: steps })?;
        log::debug!("{instruction} -> {position}");
    }

    let product = position.product().ok_or(SolveError::Overflow { step: steps })?;

    Ok(Course {
        mode,
        instructions: steps,
        position,
        product,
    })
}

/// Pilot over parsed records, aborting on the first malformed one
pub fn solve<I>(records: I, mode: PilotMode) -> Result<Course, SolveError>
where
    I: IntoIterator<Item = Result<Instruction, SolveError>>,
{
    super::until_first_error(records, |instructions| pilot(instructions, mode))?
}
