//! Tests for configuration loading

use std::path::{Path, PathBuf};

use aoc2021::config::{Config, ConfigError};
use aoc2021::core::models::PilotMode;
use aoc2021::puzzle::Puzzle;

use crate::common::TestInputs;

// =============================================================================
// DEFAULTS
// =============================================================================

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.inputs_dir, PathBuf::from("inputs"));
    assert_eq!(config.sonar.window, 1);
    assert!(!config.dive.advanced);
    assert_eq!(config.dive.mode(), PilotMode::Simple);
}

#[test]
fn test_config_empty_toml_uses_defaults() {
    let config = Config::from_toml("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_config_input_path() {
    let config = Config::default();
    assert_eq!(config.input_path(Puzzle::SonarSweep), Path::new("inputs").join("day01.txt"));
}

// =============================================================================
// PARSING
// =============================================================================

#[test]
fn test_config_partial_override() {
    let config = Config::from_toml("[sonar]\nwindow = 3\n").unwrap();
    assert_eq!(config.sonar.window, 3);
    assert!(!config.dive.advanced);
    assert_eq!(config.inputs_dir, PathBuf::from("inputs"));
}

#[test]
fn test_config_full() {
    let config = Config::from_toml(
        r#"
inputs_dir = "/data/aoc"

[sonar]
window = 3

[dive]
advanced = true
"#,
    )
    .unwrap();
    assert_eq!(config.inputs_dir, PathBuf::from("/data/aoc"));
    assert_eq!(config.dive.mode(), PilotMode::Advanced);
    assert_eq!(config.input_path(Puzzle::Dive), PathBuf::from("/data/aoc/day02.txt"));
}

#[test]
fn test_config_rejects_wrong_types() {
    assert!(Config::from_toml("[sonar]\nwindow = \"three\"\n").is_err());
}

// =============================================================================
// LOADING
// =============================================================================

#[test]
fn test_config_load_explicit_file() {
    let dir = TestInputs::new();
    let path = dir.add_file("config.toml", "[dive]\nadvanced = true\n");
    let config = Config::load(Some(&path)).unwrap();
    assert!(config.dive.advanced);
}

#[test]
fn test_config_load_missing_explicit_file() {
    let err = Config::load(Some(Path::new("/nonexistent/aoc2021.toml"))).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
    assert!(err.to_string().contains("/nonexistent/aoc2021.toml"));
}

#[test]
fn test_config_load_invalid_file() {
    let dir = TestInputs::new();
    let path = dir.add_file("config.toml", "[sonar\n");
    assert!(matches!(Config::load_from(&path), Err(ConfigError::Parse { .. })));
}
