#![allow(dead_code)]

use serde_json::json;
use sortby_core::{Comparator, Result, TrySortExt, Value};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Install a test-friendly subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sortby_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}

/// Convert JSON fixtures into values.
pub fn values(items: Vec<serde_json::Value>) -> Vec<Value> {
    items.into_iter().map(Value::from).collect()
}

/// Sort a copy of `items` and return it.
pub fn sorted<C: Comparator<Value>>(mut items: Vec<Value>, comparator: &C) -> Result<Vec<Value>> {
    items.try_sort_with(comparator)?;
    Ok(items)
}

/// `{ "post": { <field>: <value> } }`
pub fn post(field: &str, value: serde_json::Value) -> Value {
    let mut inner = serde_json::Map::new();
    inner.insert(field.to_string(), value);
    Value::from(json!({ "post": serde_json::Value::Object(inner) }))
}
