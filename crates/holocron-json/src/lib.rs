//! Null pruning for JSON response bodies
//!
//! Rows serialized from the store carry every column, including optional
//! references that are unset. A favorite points at either a planet or a
//! person, so its raw form always has one `null` reference:
//!
//! ```text
//! {"id": 3, "planets_id": 2, "people_id": null, "user_id": 1}
//! ```
//!
//! [`prune_nulls`] drops such entries anywhere in a value so clients only see
//! the reference that is actually set.

use serde_json::{Map, Value};

/// Remove `null` object entries and `null` array elements, recursively
///
/// Children are pruned first. Containers that become empty are kept, and a
/// bare top-level `null` is returned as-is: only nulls found *inside* an
/// array or object are removed.
///
/// # Examples
///
/// ```
/// use holocron_json::prune_nulls;
/// use serde_json::json;
///
/// let raw = json!([{"a": null}, {"a": 1, "b": null}]);
/// assert_eq!(prune_nulls(&raw), json!([{}, {"a": 1}]));
/// ```
pub fn prune_nulls(value: &Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(
            items
                .iter()
                .filter(|item| !item.is_null())
                .map(prune_nulls)
                .collect(),
        ),
        Value::Object(entries) => Value::Object(
            entries
                .iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k.clone(), prune_nulls(v)))
                .collect::<Map<String, Value>>(),
        ),
        _ => value.clone(),
    }
}

/// Owned variant of [`prune_nulls`]
///
/// Moves strings and nested containers out of `value` instead of cloning
/// them; used on the response path where the raw value is discarded anyway.
pub fn into_pruned(value: Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .filter(|item| !item.is_null())
                .map(into_pruned)
                .collect(),
        ),
        Value::Object(entries) => Value::Object(
            entries
                .into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k, into_pruned(v)))
                .collect(),
        ),
        other => other,
    }
}

/// True if `value` contains a `null` inside any array or object
///
/// The top-level value itself is not inspected, matching what
/// [`prune_nulls`] removes.
pub fn contains_nested_null(value: &Value) -> bool {
    match value {
        Value::Array(items) => items
            .iter()
            .any(|item| item.is_null() || contains_nested_null(item)),
        Value::Object(entries) => entries
            .values()
            .any(|v| v.is_null() || contains_nested_null(v)),
        _ => false,
    }
}
