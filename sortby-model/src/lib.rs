//! Value model shared across the sortby crates.
//!
//! Everything here is plain data: the [`Value`] union that comparators
//! operate on, its [`Kind`] classification, the sort [`Direction`], and the
//! opaque [`Token`] identity type. Behaviour lives in `sortby-core`.
#![allow(missing_docs)]

pub mod direction;
pub mod error;
#[cfg(feature = "serde")]
pub mod json;
pub mod kind;
pub mod record;
pub mod sequence;
pub mod token;
pub mod value;

pub use ::chrono;
pub use ::num_bigint;

pub use direction::Direction;
pub use error::{ModelError, Result as ModelResult};
pub use kind::Kind;
pub use record::Record;
pub use sequence::Sequence;
pub use token::Token;
pub use value::{Value, is_sequence};
