use std::fmt::{self, Display};

/// Errors produced while parsing model values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    InvalidDirection(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidDirection(raw) => {
                write!(f, "invalid sort direction: {raw:?} (expected asc or desc)")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
