//! Round markers and resolved round descriptors.
//!
//! A variant enumerates its rounds as markers: a number (cards dealt, the
//! double played in Mexican Train) or a symbolic label (a Hearts pass
//! direction). Only numeric markers carry a trick count for bid checks.

use serde::{Deserialize, Serialize};

/// One entry of a variant's round enumeration.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoundMarker {
    Number(i64),
    Label(String),
}

impl RoundMarker {
    /// Create a symbolic marker.
    pub fn label(label: impl Into<String>) -> Self {
        Self::Label(label.into())
    }

    /// The numeric value of the marker, if it has one.
    #[must_use]
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Label(_) => None,
        }
    }
}

impl From<i64> for RoundMarker {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for RoundMarker {
    fn from(label: &str) -> Self {
        Self::Label(label.to_string())
    }
}

impl std::fmt::Display for RoundMarker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Label(s) => f.write_str(s),
        }
    }
}

/// A resolved round: its marker plus the display string shown in the
/// round column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundDescriptor {
    pub marker: RoundMarker,
    pub label: String,
}

impl RoundDescriptor {
    /// Describe a marker, using `label_fn` for the display string when given.
    #[must_use]
    pub fn new(marker: RoundMarker, label_fn: Option<fn(&RoundMarker) -> String>) -> Self {
        let label = match label_fn {
            Some(f) => f(&marker),
            None => marker.to_string(),
        };
        Self { marker, label }
    }

    /// Trick count of the round, when the marker is numeric.
    #[must_use]
    pub fn tricks(&self) -> Option<i64> {
        self.marker.as_number()
    }
}
