//! Comparators handed to a sort routine.
//!
//! - [`sort_by`] / [`ValueComparator`] compare two values directly
//! - [`sort_by_property`] / [`PropertyComparator`] compare two records by the
//!   value at a property path
//! - [`ChainedComparator`] consults several comparators in turn

/// Multi-key ordering
pub mod chained;
/// Comparison by property path
pub mod property;
pub mod traits;
/// Direct value comparison
pub mod value;

#[cfg(test)]
mod tests;

pub use chained::ChainedComparator;
pub use property::{PropertyComparator, sort_by_property};
pub use traits::Comparator;
pub use value::{ValueComparator, sort_by};
