use super::Comparator;
use crate::error::Result;
use std::cmp::Ordering;
use std::fmt;

/// Multi-key ordering: later comparators only break ties left by earlier ones.
pub struct ChainedComparator<T: ?Sized> {
    comparators: Vec<Box<dyn Comparator<T> + Send + Sync>>,
}

impl<T: ?Sized> ChainedComparator<T> {
    /// Create an empty chain, which considers everything equal
    pub fn new() -> Self {
        Self {
            comparators: Vec::new(),
        }
    }

    /// Add a comparator to the chain
    pub fn then_by(mut self, comparator: impl Comparator<T> + Send + Sync + 'static) -> Self {
        self.comparators.push(Box::new(comparator));
        self
    }

    /// Number of comparators in the chain
    pub fn len(&self) -> usize {
        self.comparators.len()
    }

    /// Whether no comparator has been added yet
    pub fn is_empty(&self) -> bool {
        self.comparators.is_empty()
    }
}

impl<T: ?Sized> Default for ChainedComparator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for ChainedComparator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainedComparator")
            .field("comparator_count", &self.comparators.len())
            .finish()
    }
}

impl<T: ?Sized> Comparator<T> for ChainedComparator<T> {
    fn compare(&self, a: &T, b: &T) -> Result<Ordering> {
        for comparator in &self.comparators {
            match comparator.compare(a, b)? {
                Ordering::Equal => continue,
                ord => return Ok(ord),
            }
        }
        Ok(Ordering::Equal)
    }
}
