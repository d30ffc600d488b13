//! Tests for the line-oriented input reader

use std::path::Path;

use aoc2021::core::SolveError;
use aoc2021::core::models::{Instruction, Measurement};
use aoc2021::input;

use crate::common::TestInputs;

#[test]
fn reads_file_lazily_in_order() {
    let inputs = TestInputs::new();
    let records = input::read_records::<Measurement>(&inputs.path().join("inputs/day01.txt")).unwrap();
    let values: Vec<f64> = records.map(|r| r.unwrap().value()).collect();
    assert_eq!(values.len(), 10);
    assert_eq!(values.first(), Some(&199.0));
    assert_eq!(values.last(), Some(&263.0));
}

#[test]
fn trailing_newlines_are_not_records() {
    let inputs = TestInputs::new();
    let path = inputs.add_file("padded.txt", "up 1\n\n\n");
    let parsed: Vec<Instruction> = input::read_records(&path)
        .unwrap()
        .collect::<Result<_, SolveError>>()
        .unwrap();
    assert_eq!(parsed.len(), 1);
}

#[test]
fn error_reports_original_line_number() {
    let inputs = TestInputs::new();
    let path = inputs.add_file("bad.txt", "1\n\n2\nx\n");
    let err = input::read_records::<Measurement>(&path)
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap_err();
    assert!(matches!(err, SolveError::Malformed { line: 4, .. }));
}

#[test]
fn invalid_utf8_is_an_io_error() {
    let inputs = TestInputs::new();
    let path = inputs.path().join("binary.txt");
    std::fs::write(&path, [0xff, 0xfe, b'\n']).unwrap();
    let first = input::read_records::<Measurement>(&path).unwrap().next().unwrap();
    let err = first.unwrap_err();
    assert!(matches!(err, SolveError::Io(_)));
    assert_eq!(err.to_string(), "failed to read input");
}

#[test]
fn missing_file_fails_to_open() {
    assert!(input::read_records::<Measurement>(Path::new("/nonexistent/day01.txt")).is_err());
}
