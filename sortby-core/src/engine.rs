//! The comparison engine behind every comparator.
//!
//! Rules, in priority order:
//!
//! 1. Missing values (`null`, or `None` for an unresolved path) sort after
//!    everything else. This is decided before the direction is applied, so
//!    missing values end up last for both directions.
//! 2. Present values of different [`Kind`]s are never coerced into each
//!    other; the comparison fails with [`SortError::TypeMismatch`].
//! 3. Same-kind values are ordered by their kind's natural order, then
//!    reversed for [`Direction::Descending`].
//!
//! Sequences are the exception to step 3: each operand is first sorted in
//! place by the active direction, then the two are compared element by
//! element under that direction. The in-place sort is a deliberate side
//! effect and is visible through every handle to the sequence.

use crate::error::{Result, SortError};
use crate::sort::try_sort_by;
use ordered_float::OrderedFloat;
use sortby_model::value::parse_numeric_text;
use sortby_model::{Direction, Kind, Sequence, Value};
use std::cmp::Ordering;
use tracing::{debug, trace};

/// Compare two values for `direction`.
pub fn compare(a: &Value, b: &Value, direction: Direction) -> Result<Ordering> {
    compare_resolved(Some(a), Some(b), direction)
}

/// Compare two possibly-undefined values; `None` counts as missing.
pub fn compare_resolved(
    a: Option<&Value>,
    b: Option<&Value>,
    direction: Direction,
) -> Result<Ordering> {
    let a = a.filter(|v| !v.is_missing());
    let b = b.filter(|v| !v.is_missing());

    match (a, b) {
        (None, None) => Ok(Ordering::Equal),
        (None, Some(_)) => Ok(Ordering::Greater),
        (Some(_), None) => Ok(Ordering::Less),
        (Some(a), Some(b)) => compare_present(a, b, direction),
    }
}

fn compare_present(a: &Value, b: &Value, direction: Direction) -> Result<Ordering> {
    let (left, right) = (a.kind(), b.kind());
    if left != right {
        debug!(%left, %right, "refusing to compare values of different kinds");
        return Err(SortError::TypeMismatch { left, right });
    }

    match (a, b) {
        (Value::Sequence(a), Value::Sequence(b)) => compare_sequences(a, b, direction),
        _ => Ok(direction.apply(natural_order(a, b, left))),
    }
}

/// Ascending order of two values already known to share `kind`.
fn natural_order(a: &Value, b: &Value, kind: Kind) -> Ordering {
    match (a, b) {
        (Value::String(a), Value::String(b)) => {
            // Both parse whenever the shared kind is NumericText
            let numeric = (kind == Kind::NumericText)
                .then(|| parse_numeric_text(a).zip(parse_numeric_text(b)))
                .flatten();
            match numeric {
                Some((x, y)) => OrderedFloat(x).cmp(&OrderedFloat(y)),
                None => a.cmp(b),
            }
        }
        (Value::Number(x), Value::Number(y)) => OrderedFloat(*x).cmp(&OrderedFloat(*y)),
        (Value::BigInt(x), Value::BigInt(y)) => x.cmp(y),
        (Value::Date(x), Value::Date(y)) => x.cmp(y),
        (Value::Token(x), Value::Token(y)) => x.cmp(y),
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        // Records have no natural order
        _ => Ordering::Equal,
    }
}

fn compare_sequences(a: &Sequence, b: &Sequence, direction: Direction) -> Result<Ordering> {
    if a.ptr_eq(b) {
        normalize(a, direction)?;
        return Ok(Ordering::Equal);
    }

    normalize(a, direction)?;
    normalize(b, direction)?;

    let (left, right) = (a.to_vec(), b.to_vec());
    for (x, y) in left.iter().zip(&right) {
        match compare(x, y, direction)? {
            Ordering::Equal => continue,
            ord => return Ok(ord),
        }
    }

    Ok(direction.apply(left.len().cmp(&right.len())))
}

/// Sort `sequence` in place by `direction` using this engine.
///
/// No lock is held while elements are compared, so nested sequences can be
/// normalized along the way. On error the sequence is left unchanged.
pub fn normalize(sequence: &Sequence, direction: Direction) -> Result<()> {
    let mut items = sequence.to_vec();
    try_sort_by(&mut items, |x, y| compare(x, y, direction))?;

    trace!(len = items.len(), %direction, "normalized sequence");
    *sequence.write() = items;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortby_model::num_bigint::BigInt;
    use sortby_model::{Record, Token};

    const BOTH: [Direction; 2] = [Direction::Ascending, Direction::Descending];

    #[test]
    fn missing_sorts_last_in_both_directions() -> Result<()> {
        for direction in BOTH {
            assert_eq!(compare(&Value::Null, &Value::from(1), direction)?, Ordering::Greater);
            assert_eq!(compare(&Value::from(1), &Value::Null, direction)?, Ordering::Less);
            assert_eq!(compare(&Value::Null, &Value::Null, direction)?, Ordering::Equal);
            assert_eq!(
                compare_resolved(None, Some(&Value::from("a")), direction)?,
                Ordering::Greater
            );
            assert_eq!(compare_resolved(None, Some(&Value::Null), direction)?, Ordering::Equal);
        }
        Ok(())
    }

    #[test]
    fn direction_flips_present_values() -> Result<()> {
        let (one, two) = (Value::from(1), Value::from(2));
        assert_eq!(compare(&one, &two, Direction::Ascending)?, Ordering::Less);
        assert_eq!(compare(&one, &two, Direction::Descending)?, Ordering::Greater);
        Ok(())
    }

    #[test]
    fn mismatched_kinds_fail() {
        let cases = [
            (Value::from(1), Value::from("2"), Kind::Number, Kind::NumericText),
            (Value::from("2"), Value::from("b"), Kind::NumericText, Kind::Text),
            (Value::from(1), Value::from(BigInt::from(1)), Kind::Number, Kind::BigInteger),
        ];

        for (a, b, left, right) in cases {
            for direction in BOTH {
                assert_eq!(
                    compare(&a, &b, direction),
                    Err(SortError::TypeMismatch { left, right })
                );
            }
        }
    }

    #[test]
    fn numeric_text_compares_by_value() -> Result<()> {
        let cmp = |a: &str, b: &str| compare(&Value::from(a), &Value::from(b), Direction::Ascending);
        assert_eq!(cmp("3", "22")?, Ordering::Less);
        assert_eq!(cmp("2.2", "3")?, Ordering::Less);
        assert_eq!(cmp("1e1", "10")?, Ordering::Equal);
        assert_eq!(cmp("b", "a")?, Ordering::Greater);
        // Text is ordinal, not locale aware
        assert_eq!(cmp("Z", "a")?, Ordering::Less);
        Ok(())
    }

    #[test]
    fn numbers_use_a_total_order() -> Result<()> {
        let nan = Value::Number(f64::NAN);
        let one = Value::from(1);
        assert_eq!(compare(&nan, &one, Direction::Ascending)?, Ordering::Greater);
        assert_eq!(compare(&nan, &nan, Direction::Ascending)?, Ordering::Equal);
        assert_eq!(
            compare(&Value::Number(-0.0), &Value::Number(0.0), Direction::Ascending)?,
            Ordering::Equal
        );
        Ok(())
    }

    #[test]
    fn tokens_ignore_their_descriptions() -> Result<()> {
        let first = Value::from(Token::new("z"));
        let second = Value::from(Token::new("a"));
        assert_eq!(compare(&first, &second, Direction::Ascending)?, Ordering::Less);
        assert_eq!(compare(&first, &second, Direction::Descending)?, Ordering::Greater);
        Ok(())
    }

    #[test]
    fn records_compare_equal() -> Result<()> {
        let a = Value::from(Record::from([("x".to_string(), Value::from(1))]));
        let b = Value::from(Record::new());
        assert_eq!(compare(&a, &b, Direction::Ascending)?, Ordering::Equal);
        Ok(())
    }

    #[test]
    fn sequences_are_normalized_in_place() -> Result<()> {
        let a = Sequence::from_iter([3, 1, 2]);
        let b = Sequence::from_iter([2, 3, 1]);

        let ord = compare(
            &Value::from(a.clone()),
            &Value::from(b.clone()),
            Direction::Descending,
        )?;

        assert_eq!(ord, Ordering::Equal);
        assert_eq!(a.to_vec(), vec![Value::from(3), Value::from(2), Value::from(1)]);
        assert_eq!(b.to_vec(), vec![Value::from(3), Value::from(2), Value::from(1)]);
        Ok(())
    }

    #[test]
    fn sequences_compare_element_wise_then_by_length() -> Result<()> {
        let short = Value::from(vec![1, 2]);
        let long = Value::from(vec![2, 1, 3]);
        // [1, 2] is a prefix of [1, 2, 3]
        assert_eq!(compare(&short, &long, Direction::Ascending)?, Ordering::Less);
        // [2, 1] against [3, 2, 1]: 3 leads
        assert_eq!(compare(&short, &long, Direction::Descending)?, Ordering::Greater);

        let prefix = Value::from(vec![3, 2]);
        let extended = Value::from(vec![1, 2, 3]);
        assert_eq!(compare(&prefix, &extended, Direction::Descending)?, Ordering::Greater);
        Ok(())
    }

    #[test]
    fn sequence_with_itself_is_equal() -> Result<()> {
        let seq = Sequence::from_iter(["b", "c", "a"]);
        let value = Value::from(seq.clone());
        assert_eq!(compare(&value, &value, Direction::Ascending)?, Ordering::Equal);
        assert_eq!(seq.to_vec(), vec![Value::from("a"), Value::from("b"), Value::from("c")]);
        Ok(())
    }

    #[test]
    fn mixed_sequence_fails_and_stays_put() {
        let mixed = Sequence::from_iter([Value::from(2), Value::from("a"), Value::from(1)]);
        let other = Value::from(vec![1]);

        let result = compare(&Value::from(mixed.clone()), &other, Direction::Ascending);

        assert!(matches!(result, Err(SortError::TypeMismatch { .. })));
        assert_eq!(mixed.to_vec(), vec![Value::from(2), Value::from("a"), Value::from(1)]);
    }
}
