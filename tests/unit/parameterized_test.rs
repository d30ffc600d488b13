//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use aoc2021::core::ParseError;
use aoc2021::core::models::{Direction, Instruction, Measurement, WindowSize};
use aoc2021::core::services::count_increases;
use test_case::test_case;

// =============================================================================
// Instruction Parsing Tests
// =============================================================================

#[test_case("up 3", Direction::Up, 3 ; "up")]
#[test_case("down 8", Direction::Down, 8 ; "down")]
#[test_case("forward 5", Direction::Forward, 5 ; "forward")]
#[test_case("forward 0", Direction::Forward, 0 ; "zero magnitude")]
#[test_case("  down   12  ", Direction::Down, 12 ; "padded")]
fn test_instruction_parsing(input: &str, direction: Direction, magnitude: u32) {
    let parsed: Instruction = input.parse().unwrap();
    assert_eq!(parsed, Instruction::new(direction, magnitude));
}

#[test_case("left 3", ParseError::UnknownDirection("left".to_string()) ; "unknown direction")]
#[test_case("UP 3", ParseError::UnknownDirection("UP".to_string()) ; "uppercase direction")]
#[test_case("forward", ParseError::MissingMagnitude("forward".to_string()) ; "missing magnitude")]
#[test_case("up -2", ParseError::InvalidMagnitude("-2".to_string()) ; "negative magnitude")]
#[test_case("up x", ParseError::InvalidMagnitude("x".to_string()) ; "non numeric magnitude")]
#[test_case("up 1 now", ParseError::TrailingInput("now".to_string()) ; "trailing token")]
#[test_case("", ParseError::Empty ; "empty line")]
fn test_instruction_parsing_errors(input: &str, expected: ParseError) {
    assert_eq!(input.parse::<Instruction>(), Err(expected));
}

// =============================================================================
// Measurement Parsing Tests
// =============================================================================

#[test_case("199", 199.0 ; "integer")]
#[test_case("0", 0.0 ; "zero")]
#[test_case("-4", -4.0 ; "negative")]
#[test_case("2.5", 2.5 ; "float")]
#[test_case("1e3", 1000.0 ; "exponent")]
fn test_measurement_parsing(input: &str, expected: f64) {
    let parsed: Measurement = input.parse().unwrap();
    assert!((parsed.value() - expected).abs() < f64::EPSILON);
}

#[test_case("deep" ; "word")]
#[test_case("inf" ; "infinity")]
#[test_case("12 13" ; "two numbers")]
fn test_measurement_parsing_errors(input: &str) {
    assert!(matches!(input.parse::<Measurement>(), Err(ParseError::InvalidMeasurement(_))));
}

// =============================================================================
// Window Size Tests
// =============================================================================

#[test_case(1, 7 ; "single measurement")]
#[test_case(2, 5 ; "pairs")]
#[test_case(3, 5 ; "triples")]
#[test_case(10, 0 ; "whole report")]
#[test_case(11, 0 ; "larger than report")]
fn test_sample_by_window(window: usize, expected: usize) {
    let sample = [199, 200, 208, 210, 200, 207, 240, 269, 260, 263].map(Measurement::from);
    assert_eq!(count_increases(sample, WindowSize::new(window).unwrap()), expected);
}
