//! User configuration
//!
//! Optional defaults for the solvers, read from a TOML file. The default
//! location is `<config_dir>/aoc2021/config.toml` (see [`crate::paths`]).
//! Command-line flags always win over values loaded here.
//!
//! ```toml
//! inputs_dir = "inputs"
//!
//! [sonar]
//! window = 3
//!
//! [dive]
//! advanced = true
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::models::PilotMode;
use crate::paths;
use crate::puzzle::Puzzle;

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("cannot read config {path}")]
    Read {
        /// File that failed
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`Config`]
    #[error("invalid config {path}")]
    Parse {
        /// File that failed
        path: PathBuf,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },
}

/// Solver defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding `day01.txt`, `day02.txt`, ...
    #[serde(default = "default_inputs_dir")]
    pub inputs_dir: PathBuf,
    /// Sonar sweep defaults
    #[serde(default)]
    pub sonar: SonarConfig,
    /// Dive defaults
    #[serde(default)]
    pub dive: DiveConfig,
}

fn default_inputs_dir() -> PathBuf {
    PathBuf::from(paths::INPUTS_DIR)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inputs_dir: default_inputs_dir(),
            sonar: SonarConfig::default(),
            dive: DiveConfig::default(),
        }
    }
}

/// Sonar sweep defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SonarConfig {
    /// Sliding window size (validated when solving)
    #[serde(default = "default_window")]
    pub window: i64,
}

const fn default_window() -> i64 {
    1
}

impl Default for SonarConfig {
    fn default() -> Self {
        Self {
            window: default_window(),
        }
    }
}

/// Dive defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DiveConfig {
    /// Use advanced (aim) mode
    #[serde(default)]
    pub advanced: bool,
}

impl DiveConfig {
    /// Pilot mode selected by this config
    #[must_use]
    pub const fn mode(&self) -> PilotMode {
        PilotMode::from_advanced(self.advanced)
    }
}

impl Config {
    /// Parse config from TOML text
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load config from a specific file, which must exist
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load config from `explicit`, or from the default location if present
    ///
    /// A missing default file yields [`Config::default`]; a missing explicit
    /// file is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        let path = paths::config_file();
        if path.exists() {
            log::debug!("loading config from {}", path.display());
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Default input file for a puzzle
    #[must_use]
    pub fn input_path(&self, puzzle: Puzzle) -> PathBuf {
        paths::puzzle_input(&self.inputs_dir, puzzle)
    }
}
