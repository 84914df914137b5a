//! Tests for comparator implementations

#[cfg(test)]
mod tests {
    use crate::comparator::{ChainedComparator, Comparator, sort_by, sort_by_property};
    use crate::error::{Result, SortError};
    use crate::path::Traversable;
    use crate::sort::TrySortExt;
    use sortby_model::{Direction, Kind, Value};
    use std::cmp::Ordering;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    /// A host type that exposes its fields without becoming a `Record`.
    struct Movie {
        title: Value,
        rating: Value,
    }

    impl Movie {
        fn new(title: &str, rating: Option<f64>) -> Self {
            Self {
                title: Value::from(title),
                rating: Value::from(rating),
            }
        }
    }

    impl Traversable for Movie {
        fn get_field(&self, key: &str) -> Option<&Value> {
            match key {
                "title" => Some(&self.title),
                "rating" => Some(&self.rating),
                _ => None,
            }
        }
    }

    fn titles(movies: &[Movie]) -> Vec<&str> {
        movies.iter().filter_map(|m| m.title.as_str()).collect()
    }

    #[test]
    fn test_value_comparator_keeps_direction() {
        assert_eq!(sort_by(Direction::Descending).direction(), Direction::Descending);
    }

    #[test]
    fn test_undefined_options_sort_last() -> Result<()> {
        let mut values = vec![Some(Value::from(3)), None, Some(Value::from(1)), Some(Value::Null)];

        values.try_sort_with(&sort_by(Direction::Descending))?;

        assert_eq!(
            values,
            vec![Some(Value::from(3)), Some(Value::from(1)), None, Some(Value::Null)]
        );
        Ok(())
    }

    #[test]
    fn test_property_sort_over_host_type() -> Result<()> {
        let mut movies = vec![
            Movie::new("Charlie", Some(6.5)),
            Movie::new("Alice", None),
            Movie::new("Bob", Some(8.5)),
        ];

        movies.try_sort_with(&sort_by_property("rating", Direction::Descending)?)?;
        assert_eq!(titles(&movies), vec!["Bob", "Charlie", "Alice"]);

        movies.try_sort_with(&sort_by_property("title", Direction::Ascending)?)?;
        assert_eq!(titles(&movies), vec!["Alice", "Bob", "Charlie"]);
        Ok(())
    }

    #[test]
    fn test_unknown_field_is_missing_everywhere() -> Result<()> {
        let comparator = sort_by_property("runtime", Direction::Ascending)?;
        let (a, b) = (Movie::new("A", None), Movie::new("B", None));
        assert_eq!(comparator.compare(&a, &b)?, Ordering::Equal);
        Ok(())
    }

    #[test]
    fn test_empty_property_path_is_rejected() {
        assert_eq!(
            sort_by_property("", Direction::Ascending),
            Err(SortError::EmptyPropertyPath)
        );
    }

    #[test]
    fn test_chained_comparator() -> Result<()> {
        let mut movies = vec![
            Movie::new("Charlie", Some(7.0)),
            Movie::new("Alice", Some(7.0)),
            Movie::new("Bob", Some(9.0)),
        ];

        let chain = ChainedComparator::new()
            .then_by(sort_by_property("rating", Direction::Descending)?)
            .then_by(sort_by_property("title", Direction::Ascending)?);
        movies.try_sort_with(&chain)?;

        assert_eq!(titles(&movies), vec!["Bob", "Alice", "Charlie"]);
        Ok(())
    }

    #[test]
    fn test_chain_stops_at_first_error() {
        let chain = ChainedComparator::<Value>::new()
            .then_by(sort_by(Direction::Ascending))
            .then_by(sort_by(Direction::Descending));

        assert_eq!(
            chain.compare(&Value::from("a"), &Value::from(1)),
            Err(SortError::TypeMismatch {
                left: Kind::Text,
                right: Kind::Number
            })
        );
        assert_eq!(
            ChainedComparator::<Value>::default().compare(&Value::from(1), &Value::from(2)),
            Ok(Ordering::Equal)
        );
    }

    #[test]
    fn test_comparators_work_through_references() -> Result<()> {
        let comparator = sort_by(Direction::Ascending);
        let by_ref: &dyn Comparator<Value> = &comparator;
        let mut values = vec![Value::from("b"), Value::from("a")];

        values.try_sort_with(&by_ref)?;

        assert_eq!(values, vec![Value::from("a"), Value::from("b")]);
        Ok(())
    }

    /// Counts `debug!` events seen while installed.
    struct DebugEvents(Arc<AtomicUsize>);

    impl<S: Subscriber> Layer<S> for DebugEvents {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == Level::DEBUG {
                self.0.fetch_add(1, AtomicOrdering::SeqCst);
            }
        }
    }

    #[test]
    fn test_property_mismatch_is_logged_once() -> Result<()> {
        let count = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(DebugEvents(Arc::clone(&count)));
        let comparator = sort_by_property("rating", Direction::Ascending)?;
        let (a, b) = (Movie::new("A", Some(1.0)), Movie {
            title: Value::from("B"),
            rating: Value::from("high"),
        });

        let result = tracing::subscriber::with_default(subscriber, || comparator.compare(&a, &b));

        assert!(matches!(result, Err(SortError::TypeMismatch { .. })));
        assert_eq!(count.load(AtomicOrdering::SeqCst), 1);
        Ok(())
    }
}
