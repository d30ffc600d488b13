//! aoc2021 - Advent of Code 2021 solutions
//!
//! This library provides the solvers behind the `aoc2021` CLI: a sliding-window
//! depth increase counter (day 1) and a submarine course plotter (day 2), plus
//! the line-oriented input reader and output formatting they share.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod core;
pub mod input;
pub mod output;
pub mod paths;
pub mod puzzle;
