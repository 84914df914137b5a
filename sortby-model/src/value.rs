//! The value union comparators operate on.

use crate::kind::Kind;
use crate::record::Record;
use crate::sequence::Sequence;
use crate::token::Token;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use num_bigint::BigInt;

/// Any value a comparator may be handed.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    BigInt(BigInt),
    String(String),
    Date(DateTime<Utc>),
    Token(Token),
    Sequence(Sequence),
    Record(Record),
}

impl Value {
    /// Classify this value into exactly one comparison [`Kind`].
    ///
    /// This is the only place kinds are decided. Strings are numeric text
    /// only when the whole string parses as a finite number.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Missing,
            Value::Bool(_) => Kind::Boolean,
            Value::Number(_) => Kind::Number,
            Value::BigInt(_) => Kind::BigInteger,
            Value::String(s) if parse_numeric_text(s).is_some() => Kind::NumericText,
            Value::String(_) => Kind::Text,
            Value::Date(_) => Kind::Date,
            Value::Token(_) => Kind::Token,
            Value::Sequence(_) => Kind::Sequence,
            Value::Record(_) => Kind::Record,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, Value::Sequence(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&Sequence> {
        match self {
            Value::Sequence(seq) => Some(seq),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_record_mut(&mut self) -> Option<&mut Record> {
        match self {
            Value::Record(record) => Some(record),
            _ => None,
        }
    }
}

/// Whether `value` is an ordered sequence.
pub fn is_sequence(value: &Value) -> bool {
    value.is_sequence()
}

/// Parse `text` as a number only if the entire string is a finite number.
///
/// Leading-number matches such as `"3abc"` are rejected, as are `"NaN"`,
/// `"inf"` and the empty string.
pub fn parse_numeric_text(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|n| n.is_finite())
}

macro_rules! number_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Number(n as f64)
                }
            }
        )*
    };
}

number_from!(f64, f32, i32, i64, u32, u64);

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<BigInt> for Value {
    fn from(n: BigInt) -> Self {
        Value::BigInt(n)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(date: DateTime<Utc>) -> Self {
        Value::Date(date)
    }
}

/// Calendar dates become midnight UTC.
impl From<NaiveDate> for Value {
    fn from(date: NaiveDate) -> Self {
        Value::Date(date.and_time(NaiveTime::MIN).and_utc())
    }
}

impl From<Token> for Value {
    fn from(token: Token) -> Self {
        Value::Token(token)
    }
}

impl From<Sequence> for Value {
    fn from(seq: Sequence) -> Self {
        Value::Sequence(seq)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Sequence(items.into_iter().collect())
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Record(record)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Value::Null)
    }
}
