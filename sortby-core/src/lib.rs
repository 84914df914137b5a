//! # sortby-core
//!
//! Type-aware comparators for sorting plain values and composite records.
//!
//! ## Overview
//!
//! - [`sort_by`] builds a comparator over two [`Value`]s.
//! - [`sort_by_property`] builds a comparator over two records, comparing
//!   the values found at a dotted property path such as `post.title`.
//!
//! Both delegate to the comparison [`engine`], which:
//!
//! - always sorts missing values (`null` or an unresolved path) last,
//!   whatever the direction,
//! - refuses to compare values of different kinds with
//!   [`SortError::TypeMismatch`],
//! - compares strings that are entirely numeric by their numeric value,
//! - sorts array values in place before comparing them element by element.
//!
//! Comparators return `Result<Ordering>`, so they are driven through the
//! fallible [`try_sort_by`] routine (or [`TrySortExt::try_sort_with`]) rather
//! than `slice::sort_by`, which has no way to surface an error.
//!
//! ## Examples
//!
//! ```
//! use serde_json::json;
//! use sortby_core::{Direction, TrySortExt, Value, sort_by_property};
//!
//! # fn main() -> Result<(), sortby_core::SortError> {
//! let mut posts: Vec<Value> = vec![
//!     json!({ "post": { "title": "C" } }).into(),
//!     json!({ "post": { "title": "A" } }).into(),
//!     json!({ "post": { "title": "B" } }).into(),
//! ];
//!
//! posts.try_sort_with(&sort_by_property("post.title", Direction::Ascending)?)?;
//! assert_eq!(posts[0], Value::from(json!({ "post": { "title": "A" } })));
//! # Ok(())
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

/// Comparator trait and the value, property and chained comparators
pub mod comparator;

/// Serializable sort criteria
pub mod criteria;

/// The comparison engine shared by every comparator
pub mod engine;

/// Error types
pub mod error;

/// Dotted property paths and their resolution
pub mod path;

/// Fallible stable sorting driven by comparators
pub mod sort;

pub use comparator::{
    ChainedComparator, Comparator, PropertyComparator, ValueComparator, sort_by,
    sort_by_property,
};
pub use criteria::SortCriteria;
pub use error::{Result, SortError};
pub use path::{PropertyPath, Traversable, resolve};
pub use sort::{TrySortExt, reorder_by_indices, try_sort_by};

pub use sortby_model::{
    Direction, Kind, ModelError, Record, Sequence, Token, Value, is_sequence,
};
