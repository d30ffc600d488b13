//! Error types for the puzzle solvers
//!
//! [`ParseError`] describes why a single record could not be read.
//! [`SolveError`] is what a solver returns: a bad configuration, the first
//! malformed record (with its line number), or a failure reading input.

use thiserror::Error;

/// Errors that can occur when parsing a single input record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Record was empty after trimming
    #[error("empty record")]
    Empty,

    /// Record is not a finite integer or float literal
    #[error("invalid measurement: {0:?}")]
    InvalidMeasurement(String),

    /// Direction token is not one of `up`, `down`, `forward`
    #[error("unknown pilot command: {0}")]
    UnknownDirection(String),

    /// Instruction has a direction but no magnitude
    #[error("missing magnitude for {0}")]
    MissingMagnitude(String),

    /// Magnitude is not a non-negative integer
    #[error("invalid magnitude: {0:?}")]
    InvalidMagnitude(String),

    /// Instruction has tokens after the magnitude
    #[error("unexpected trailing input: {0:?}")]
    TrailingInput(String),
}

/// Errors returned by the solvers
#[derive(Debug, Error)]
pub enum SolveError {
    /// Sliding window size was zero or negative
    #[error("window size must be greater than zero")]
    InvalidWindowSize,

    /// A record did not conform to the expected shape
    #[error("line {line}")]
    Malformed {
        /// 1-based line number of the offending record
        line: usize,
        /// Why the record was rejected
        #[source]
        source: ParseError,
    },

    /// A position accumulator left the representable range
    #[error("position overflow at instruction {step}")]
    Overflow {
        /// 1-based index among the instructions (blank lines not counted)
        step: usize,
    },

    /// IO error while reading input
    #[error("failed to read input")]
    Io(#[from] std::io::Error),
}

impl SolveError {
    /// Wrap a record parse failure with its line number
    #[must_use]
    pub const fn malformed(line: usize, source: ParseError) -> Self {
        Self::Malformed { line, source }
    }

    /// Whether this error comes from invalid solver configuration
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::InvalidWindowSize)
    }

    /// The parse failure behind this error, if it is one
    #[must_use]
    pub const fn parse_error(&self) -> Option<&ParseError> {
        match self {
            Self::Malformed { source, .. } => Some(source),
            _ => None,
        }
    }
}
