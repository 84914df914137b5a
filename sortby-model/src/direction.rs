//! Sort direction supplied per comparator instance.

use crate::error::ModelError;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Sort order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "asc", alias = "ascending"))]
    Ascending,
    #[cfg_attr(feature = "serde", serde(rename = "desc", alias = "descending"))]
    Descending,
}

impl Direction {
    /// Orient an ascending comparison result for this direction.
    #[inline]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }

    pub fn is_descending(self) -> bool {
        self == Direction::Descending
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Ascending => "asc",
            Direction::Descending => "desc",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Direction::Ascending),
            "desc" | "descending" => Ok(Direction::Descending),
            _ => Err(ModelError::InvalidDirection(s.to_string())),
        }
    }
}
