//! Domain models for aoc2021
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Measurement`] - One sonar depth reading
//! - [`SlidingWindow`] - Fixed-capacity FIFO of recent measurements
//! - [`Change`] - How one window compares with the previous one
//! - [`Instruction`] - One submarine piloting command
//! - [`Position`] - Submarine state folded from instructions

mod change;
mod instruction;
mod measurement;
mod position;
mod window;

pub use change::Change;
pub use instruction::{Direction, Instruction};
pub use measurement::Measurement;
pub use position::{PilotMode, Position};
pub use window::{SlidingWindow, WindowSize};
