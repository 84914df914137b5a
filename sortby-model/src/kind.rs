//! Classification buckets governing which values may be compared.

use std::fmt;

/// Comparison kind of a [`Value`](crate::Value).
///
/// Two non-missing operands are only comparable when they share a kind.
/// `NumericText` and `Text` both come from strings but are distinct kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `null` or an unresolved property.
    Missing,
    /// A string that parses in full as a finite number.
    NumericText,
    Text,
    Number,
    Date,
    Token,
    BigInteger,
    Sequence,
    Boolean,
    /// Nested record; has no natural order.
    Record,
}

impl Kind {
    pub fn name(self) -> &'static str {
        match self {
            Kind::Missing => "missing",
            Kind::NumericText => "numeric-text",
            Kind::Text => "text",
            Kind::Number => "number",
            Kind::Date => "date",
            Kind::Token => "unique-token",
            Kind::BigInteger => "big-integer",
            Kind::Sequence => "sequence",
            Kind::Boolean => "boolean",
            Kind::Record => "record",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
