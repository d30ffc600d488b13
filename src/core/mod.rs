//! Core puzzle logic for aoc2021
//!
//! This module contains the pure solvers with no I/O dependencies.
//! Solvers consume already-parsed values in arrival order and fold them
//! into a single result.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Measurement, SlidingWindow, Instruction, Position)
//! - `services/` - The folds themselves (sonar sweep, pilot)
//! - `error` - Parse and solve errors

pub mod error;
pub mod models;
pub mod services;

pub use error::{ParseError, SolveError};
