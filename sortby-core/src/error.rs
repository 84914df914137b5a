use sortby_model::{Kind, ModelError};
use thiserror::Error;

/// Errors raised while building or running comparators
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// Two non-missing operands classified to different kinds.
    #[error("Type mismatch: cannot compare {left} with {right}")]
    TypeMismatch {
        /// Kind of the left-hand operand
        left: Kind,
        /// Kind of the right-hand operand
        right: Kind,
    },

    /// A property comparator was requested for `""`.
    #[error("Property path must not be empty")]
    EmptyPropertyPath,

    /// Sort criteria that cannot produce a comparator.
    #[error("Invalid sort criteria: {0}")]
    InvalidCriteria(String),

    /// A model value failed to parse.
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, SortError>;
