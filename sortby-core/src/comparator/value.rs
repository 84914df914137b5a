use super::Comparator;
use crate::engine;
use crate::error::Result;
use sortby_model::{Direction, Value};
use std::cmp::Ordering;

/// Compares two values with the comparison engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueComparator {
    direction: Direction,
}

impl ValueComparator {
    /// Compare values in `direction`.
    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }

    /// Direction applied to present values
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl Comparator<Value> for ValueComparator {
    fn compare(&self, a: &Value, b: &Value) -> Result<Ordering> {
        engine::compare(a, b, self.direction)
    }
}

/// `None` is treated like an undefined value and sorts last.
impl Comparator<Option<Value>> for ValueComparator {
    fn compare(&self, a: &Option<Value>, b: &Option<Value>) -> Result<Ordering> {
        engine::compare_resolved(a.as_ref(), b.as_ref(), self.direction)
    }
}

/// Build a comparator over plain values.
pub fn sort_by(direction: Direction) -> ValueComparator {
    ValueComparator::new(direction)
}
