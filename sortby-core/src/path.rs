//! Dotted property paths.
//!
//! A path such as `post.title` is split on `.` into segments; each segment is
//! looked up as a key in the current record. There is no escaping, so a key
//! containing a literal dot cannot be addressed. Empty segments are kept and
//! looked up like any other key.

use crate::error::{Result, SortError};
use sortby_model::{Record, Value};
use std::fmt;

/// A parsed, non-empty property path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyPath {
    segments: Vec<String>,
}

impl PropertyPath {
    /// Split `path` on `.`. Fails only for the empty string.
    pub fn parse(path: &str) -> Result<Self> {
        if path.is_empty() {
            return Err(SortError::EmptyPropertyPath);
        }

        Ok(Self {
            segments: path.split('.').map(str::to_string).collect(),
        })
    }

    /// The keys looked up in turn, outermost first.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

impl std::str::FromStr for PropertyPath {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Anything whose fields can be looked up by key.
///
/// Implement this for host types to sort them with a
/// [`PropertyComparator`](crate::PropertyComparator) without first converting
/// them into a [`Record`].
pub trait Traversable {
    /// The value stored under `key`, if there is one.
    fn get_field(&self, key: &str) -> Option<&Value>;
}

impl Traversable for Record {
    fn get_field(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }
}

/// Only records have fields; every other value stops traversal.
impl Traversable for Value {
    fn get_field(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Record(record) => record.get(key),
            _ => None,
        }
    }
}

/// Follow `path` from `root`.
///
/// Returns `None` (an undefined value) as soon as a segment is absent or
/// lands on something that is not a record.
pub fn resolve<'a, T>(root: &'a T, path: &PropertyPath) -> Option<&'a Value>
where
    T: Traversable + ?Sized,
{
    let (first, rest) = path.segments.split_first()?;
    rest.iter()
        .try_fold(root.get_field(first)?, |current, segment| {
            current.get_field(segment)
        })
}
