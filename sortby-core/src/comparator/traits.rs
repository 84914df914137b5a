//! Core comparator trait

use crate::error::Result;
use std::cmp::Ordering;

/// A fallible three-way comparison over `T`.
///
/// Implementations must be a total order on every set of inputs they accept
/// without error. Errors propagate to whoever drives the sort.
pub trait Comparator<T: ?Sized> {
    /// Order `a` relative to `b`.
    fn compare(&self, a: &T, b: &T) -> Result<Ordering>;
}

impl<T: ?Sized, C: Comparator<T> + ?Sized> Comparator<T> for &C {
    fn compare(&self, a: &T, b: &T) -> Result<Ordering> {
        (**self).compare(a, b)
    }
}

impl<T: ?Sized, C: Comparator<T> + ?Sized> Comparator<T> for Box<C> {
    fn compare(&self, a: &T, b: &T) -> Result<Ordering> {
        (**self).compare(a, b)
    }
}
