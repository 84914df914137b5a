//! Sort criteria as accepted from configuration or request payloads.
//!
//! A criterion is a property path plus a direction. It deserializes from
//! `{"path": "post.title", "direction": "desc"}` (direction defaults to
//! ascending) or parses from the compact `post.title:desc` form.

use crate::comparator::{ChainedComparator, PropertyComparator};
use crate::error::{Result, SortError};
use crate::path::{PropertyPath, Traversable};
use serde::{Deserialize, Serialize};
use sortby_model::Direction;
use std::fmt;
use std::str::FromStr;

/// One sort key: which property, which way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortCriteria {
    /// Dotted property path
    pub path: String,
    /// Defaults to ascending
    #[serde(default)]
    pub direction: Direction,
}

impl SortCriteria {
    /// Criterion for `path` in `direction`.
    pub fn new(path: impl Into<String>, direction: Direction) -> Self {
        Self {
            path: path.into(),
            direction,
        }
    }

    /// Parse `path` or `path:direction`.
    pub fn parse(raw: &str) -> Result<Self> {
        let (path, direction) = match raw.rsplit_once(':') {
            Some((path, direction)) => (path, direction.parse::<Direction>()?),
            None => (raw, Direction::default()),
        };

        if path.is_empty() {
            return Err(SortError::EmptyPropertyPath);
        }
        Ok(Self::new(path, direction))
    }

    /// Build the property comparator this criterion describes.
    pub fn comparator(&self) -> Result<PropertyComparator> {
        Ok(PropertyComparator::new(
            PropertyPath::parse(&self.path)?,
            self.direction,
        ))
    }

    /// Chain several criteria, first one taking precedence.
    pub fn chain<T>(criteria: &[SortCriteria]) -> Result<ChainedComparator<T>>
    where
        T: Traversable + ?Sized + 'static,
    {
        if criteria.is_empty() {
            return Err(SortError::InvalidCriteria(
                "at least one sort criterion is required".to_string(),
            ));
        }

        criteria
            .iter()
            .try_fold(ChainedComparator::<T>::new(), |chain, criterion| -> Result<_> {
                Ok(chain.then_by(criterion.comparator()?))
            })
    }
}

impl fmt::Display for SortCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.path, self.direction)
    }
}

impl FromStr for SortCriteria {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
