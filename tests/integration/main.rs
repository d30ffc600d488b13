//! Integration tests for the aoc2021 CLI
//!
//! These tests run the binary against real input files, covering the full
//! path: config -> input file -> solver -> printed answer.


use assert_cmd::cargo;
use predicates::prelude::*;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper function to create an aoc2021 command rooted in `dir`
fn aoc_in(dir: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("aoc2021"));
    cmd.current_dir(dir).env("XDG_CONFIG_HOME", dir.join("xdg"));
    cmd
}

/// Helper to write a puzzle input under `inputs/`
fn write_input(dir: &Path, name: &str, content: &str) {
    fs::create_dir_all(dir.join("inputs")).unwrap();
    fs::write(dir.join("inputs").join(name), content).unwrap();
}

// =============================================================================
// END-TO-END SOLVES
// =============================================================================

/// Both puzzles solve from the default inputs directory
#[test]
fn test_e2e_default_inputs() {
    let temp = TempDir::new().unwrap();
    write_input(temp.path(), "day01.txt", "199\n200\n208\n210\n200\n207\n240\n269\n260\n263\n");
    write_input(temp.path(), "day02.txt", "forward 5\ndown 5\nforward 8\nup 3\ndown 8\nforward 2\n");

    aoc_in(temp.path()).arg("sonar-sweep").assert().success().stdout("7\n");
    aoc_in(temp.path()).args(["sonar-sweep", "-w", "3"]).assert().success().stdout("5\n");
    aoc_in(temp.path()).arg("dive").assert().success().stdout("150\n");
    aoc_in(temp.path()).args(["dive", "-a"]).assert().success().stdout("900\n");
}

/// A large generated input is streamed and solved correctly
#[test]
fn test_e2e_large_input() {
    let temp = TempDir::new().unwrap();

    // Strictly increasing depths: every comparison is an increase
    let mut report = String::new();
    for depth in 0..50_000 {
        writeln!(report, "{depth}").unwrap();
    }
    write_input(temp.path(), "day01.txt", &report);

    aoc_in(temp.path()).arg("day01").assert().success().stdout("49999\n");
    aoc_in(temp.path()).args(["day01", "-w", "3"]).assert().success().stdout("49997\n");
}

/// Windows line endings and blank trailing lines are accepted
#[test]
fn test_e2e_crlf_input() {
    let temp = TempDir::new().unwrap();
    write_input(temp.path(), "day02.txt", "forward 5\r\ndown 5\r\nforward 8\r\n\r\n");

    aoc_in(temp.path()).args(["dive", "--advanced"]).assert().success().stdout("520\n");
}

// =============================================================================
// FAILURES
// =============================================================================

/// A malformed record aborts with its line number and prints no answer
#[test]
fn test_e2e_malformed_measurement() {
    let temp = TempDir::new().unwrap();
    write_input(temp.path(), "day01.txt", "1\n2\nseven\n8\n");

    aoc_in(temp.path())
        .arg("sonar-sweep")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("line 3"))
        .stderr(predicate::str::contains("invalid measurement"));
}

/// An unknown direction fails in both modes
#[test]
fn test_e2e_unknown_direction_both_modes() {
    let temp = TempDir::new().unwrap();
    write_input(temp.path(), "day02.txt", "forward 5\nleft 3\n");

    aoc_in(temp.path())
        .arg("dive")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown pilot command: left"));
    aoc_in(temp.path())
        .args(["dive", "--advanced"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown pilot command: left"));
}

/// Missing default input names the path it looked for
#[test]
fn test_e2e_missing_default_input() {
    let temp = TempDir::new().unwrap();

    aoc_in(temp.path())
        .arg("dive")
        .assert()
        .failure()
        .stderr(predicate::str::contains("day02.txt"));
}
