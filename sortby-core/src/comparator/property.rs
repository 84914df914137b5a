use super::Comparator;
use crate::engine;
use crate::error::Result;
use crate::path::{PropertyPath, Traversable, resolve};
use sortby_model::Direction;
use std::cmp::Ordering;
use tracing::trace;

/// Compares two records by the value found at a property path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyComparator {
    path: PropertyPath,
    direction: Direction,
}

impl PropertyComparator {
    /// Compare by the value at `path` in `direction`.
    pub fn new(path: PropertyPath, direction: Direction) -> Self {
        Self { path, direction }
    }

    /// Path resolved on both operands
    pub fn path(&self) -> &PropertyPath {
        &self.path
    }

    /// Direction applied to present values
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl<T: Traversable + ?Sized> Comparator<T> for PropertyComparator {
    fn compare(&self, a: &T, b: &T) -> Result<Ordering> {
        let left = resolve(a, &self.path);
        let right = resolve(b, &self.path);

        engine::compare_resolved(left, right, self.direction).inspect_err(|_| {
            trace!(path = %self.path, "property comparison failed");
        })
    }
}

/// Build a comparator over records for the dotted `path`.
///
/// Fails with [`SortError::EmptyPropertyPath`](crate::SortError) for `""`.
pub fn sort_by_property(path: &str, direction: Direction) -> Result<PropertyComparator> {
    let path = PropertyPath::parse(path)?;
    trace!(%path, %direction, "building property comparator");
    Ok(PropertyComparator::new(path, direction))
}
