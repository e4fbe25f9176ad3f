//! Dot-path field resolution over serialized rows.
//!
//! Rows are generic: the pipeline never requires them to implement a shared
//! field-access interface. Instead a row is serialized once into a
//! [`serde_json::Value`] and fields are read out of that object graph by
//! dot-separated path. Resolution is total: a missing segment, a null, or a
//! traversal into a non-object yields `None`, never a panic.

use serde::Serialize;
use serde_json::Value;

/// Resolves `path` inside an already-serialized value.
///
/// Splits `path` on `.` and walks the object graph. Returns `None` as soon
/// as a segment is absent, a non-object is traversed, or the resolved leaf
/// is null (a null field carries no value to filter or sort on).
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use loadgrid_tables::path::resolve;
///
/// let row = json!({"carrier": {"name": "Acme Haulage"}, "rate": 950});
/// assert_eq!(resolve(&row, "carrier.name"), Some(&json!("Acme Haulage")));
/// assert_eq!(resolve(&row, "carrier.mc_number"), None);
/// assert_eq!(resolve(&row, "rate.amount"), None);
/// ```
pub fn resolve<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
	let mut current = value;
	for segment in path.split('.') {
		current = current.as_object()?.get(segment)?;
	}
	if current.is_null() { None } else { Some(current) }
}

/// Serializes `row` and resolves `path` inside it, cloning the leaf out.
///
/// A row that fails serialization is treated as having no fields.
pub fn resolve_owned<T: Serialize>(row: &T, path: &str) -> Option<Value> {
	let value = serde_json::to_value(row).ok()?;
	resolve(&value, path).cloned()
}

/// The display form of a resolved value, used for substring filtering and
/// export cells.
///
/// Strings are used verbatim (unquoted); every other value uses its JSON
/// rendering. Numbers and dates therefore match and export on their string
/// form rather than any type-aware representation.
pub(crate) fn value_text(value: &Value) -> String {
	match value {
		Value::String(s) => s.clone(),
		other => other.to_string(),
	}
}

/// Returns true when `path` is non-empty and every `.`-separated segment is
/// non-empty. Checked once, at column construction.
pub(crate) fn is_valid_path(path: &str) -> bool {
	!path.is_empty() && path.split('.').all(|segment| !segment.is_empty())
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_resolve_top_level_field() {
		let row = json!({"status": "AVAILABLE"});
		assert_eq!(resolve(&row, "status"), Some(&json!("AVAILABLE")));
	}

	#[test]
	fn test_resolve_nested_field() {
		let row = json!({"origin": {"city": {"name": "Memphis"}}});
		assert_eq!(resolve(&row, "origin.city.name"), Some(&json!("Memphis")));
	}

	#[test]
	fn test_resolve_missing_intermediate_segment() {
		let row = json!({"origin": {"state": "TN"}});
		assert_eq!(resolve(&row, "origin.city.name"), None);
	}

	#[test]
	fn test_resolve_through_non_object() {
		let row = json!({"rate": 950});
		assert_eq!(resolve(&row, "rate.amount"), None);
	}

	#[test]
	fn test_resolve_null_leaf_is_none() {
		let row = json!({"rate": null});
		assert_eq!(resolve(&row, "rate"), None);
	}

	#[test]
	fn test_resolve_null_intermediate_is_none() {
		let row = json!({"origin": null});
		assert_eq!(resolve(&row, "origin.city"), None);
	}

	#[test]
	fn test_value_text_forms() {
		assert_eq!(value_text(&json!("Memphis")), "Memphis");
		assert_eq!(value_text(&json!(950)), "950");
		assert_eq!(value_text(&json!(true)), "true");
	}

	#[test]
	fn test_path_validity() {
		assert!(is_valid_path("status"));
		assert!(is_valid_path("origin.city.name"));
		assert!(!is_valid_path(""));
		assert!(!is_valid_path("origin..name"));
		assert!(!is_valid_path(".status"));
	}
}
