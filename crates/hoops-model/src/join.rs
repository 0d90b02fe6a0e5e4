//! Join types accepted by the merge transformer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PlanError;

/// Equi-join flavour.
///
/// Inner and outer joins may change the row count, so merges are never
/// size-contracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JoinHow {
    /// Keep only keys present on both sides.
    #[default]
    Inner,
    /// Keep every left row, with nulls where the right side has no match.
    Left,
    /// Keep every row of both sides.
    Outer,
}

impl JoinHow {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Inner => "inner",
            Self::Left => "left",
            Self::Outer => "outer",
        }
    }
}

impl fmt::Display for JoinHow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JoinHow {
    type Err = PlanError;

    /// Parse `inner`, `left` or `outer` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inner" => Ok(Self::Inner),
            "left" => Ok(Self::Left),
            "outer" => Ok(Self::Outer),
            _ => Err(PlanError::UnknownJoin(s.to_string())),
        }
    }
}
