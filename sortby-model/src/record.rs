//! Composite records addressed by property paths.

use crate::value::Value;
use std::collections::BTreeMap;

/// String-keyed mapping of nested values.
pub type Record = BTreeMap<String, Value>;
