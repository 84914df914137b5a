//! Shared, ordered lists of values.

use crate::value::Value;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::fmt;
use std::sync::Arc;

/// An ordered list of values with shared ownership.
///
/// Clones point at the same list. Comparing two sequences sorts each of them
/// in place, and that reordering is visible through every clone, including
/// the records the sequences were resolved from.
#[derive(Clone, Default)]
pub struct Sequence {
    items: Arc<RwLock<Vec<Value>>>,
}

impl Sequence {
    pub fn new(items: Vec<Value>) -> Self {
        Self {
            items: Arc::new(RwLock::new(items)),
        }
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    pub fn push(&self, value: impl Into<Value>) {
        self.items.write().push(value.into());
    }

    /// Snapshot of the current elements. Nested sequences stay shared.
    pub fn to_vec(&self) -> Vec<Value> {
        self.items.read().clone()
    }

    pub fn read(&self) -> RwLockReadGuard<'_, Vec<Value>> {
        self.items.read()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, Vec<Value>> {
        self.items.write()
    }

    /// Whether both handles share one underlying list.
    pub fn ptr_eq(&self, other: &Sequence) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }
}

impl PartialEq for Sequence {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || *self.items.read() == *other.items.read()
    }
}

impl fmt::Debug for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.read().iter()).finish()
    }
}

impl From<Vec<Value>> for Sequence {
    fn from(items: Vec<Value>) -> Self {
        Sequence::new(items)
    }
}

impl<V: Into<Value>> FromIterator<V> for Sequence {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Sequence::new(iter.into_iter().map(Into::into).collect())
    }
}
