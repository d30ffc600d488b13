//! Outcome of comparing two consecutive windows

use serde::Serialize;

use super::Measurement;

/// How a window compares with the window before it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Change {
    /// The new window sum is larger
    Increased,
    /// The new window sum is smaller
    Decreased,
    /// Both sums are equal
    Unchanged,
}

impl Change {
    /// Classify the move from `previous` to `current`
    #[must_use]
    pub fn between(previous: Measurement, current: Measurement) -> Self {
        if current > previous {
            Self::Increased
        } else if current < previous {
            Self::Decreased
        } else {
            Self::Unchanged
        }
    }
}

impl std::fmt::Display for Change {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Increased => write!(f, "increased"),
            Self::Decreased => write!(f, "decreased"),
            Self::Unchanged => write!(f, "no change"),
        }
    }
}
