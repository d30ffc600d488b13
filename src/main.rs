//! aoc2021 - Advent of Code 2021 solutions
//!
//! Command-line front end for the day 1 and day 2 solvers.

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

mod cli;

use colored::Colorize;

/// Main entry point for the aoc2021 CLI
fn main() {
    if let Err(err) = cli::run() {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}
