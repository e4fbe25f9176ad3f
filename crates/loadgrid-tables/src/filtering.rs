//! Substring filtering over table rows.
//!
//! Each filterable column may carry one query string; a row survives when it
//! satisfies every active predicate (logical AND). Matching is a
//! case-insensitive substring test on the field's display form, so numeric
//! and date-like fields match on their string rendering, a deliberate
//! simplification over type-aware comparison.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::column::Column;
use crate::path;

/// Per-column filter queries.
///
/// An entry is *active* only when its query is non-blank: blank or
/// whitespace-only text means "no constraint for this column", never "match
/// the empty string". Setting a blank query removes the entry.
///
/// # Examples
///
/// ```
/// use loadgrid_tables::FilterState;
///
/// let mut filters = FilterState::new();
/// filters.set("status", "avail");
/// filters.set("origin.city", "   ");
/// assert_eq!(filters.query("status"), Some("avail"));
/// assert_eq!(filters.query("origin.city"), None);
/// assert_eq!(filters.active_len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
	queries: HashMap<String, String>,
}

impl FilterState {
	/// Creates an empty filter state.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the query for `field`. A blank query deactivates the column's
	/// filter instead of storing it.
	pub fn set(&mut self, field: impl Into<String>, query: impl Into<String>) {
		let field = field.into();
		let query = query.into();
		if query.trim().is_empty() {
			self.queries.remove(&field);
		} else {
			self.queries.insert(field, query);
		}
	}

	/// Returns the active query for `field`, if any.
	pub fn query(&self, field: &str) -> Option<&str> {
		self.queries.get(field).map(String::as_str)
	}

	/// Removes the query for `field`.
	pub fn remove(&mut self, field: &str) {
		self.queries.remove(field);
	}

	/// Removes every query.
	pub fn clear(&mut self) {
		self.queries.clear();
	}

	/// Iterates over the active `(field, query)` entries.
	pub fn active(&self) -> impl Iterator<Item = (&str, &str)> {
		self.queries.iter().map(|(f, q)| (f.as_str(), q.as_str()))
	}

	/// Number of active entries.
	pub fn active_len(&self) -> usize {
		self.queries.len()
	}

	/// True when no filter is active.
	pub fn is_empty(&self) -> bool {
		self.queries.is_empty()
	}
}

impl From<HashMap<String, String>> for FilterState {
	fn from(queries: HashMap<String, String>) -> Self {
		let mut state = Self::new();
		for (field, query) in queries {
			state.set(field, query);
		}
		state
	}
}

/// Applies `filters` to `rows`, keeping rows that satisfy every active
/// predicate of a filterable column.
///
/// Rows whose field does not resolve fail that predicate. Columns without an
/// active query (and queries without a filterable column) impose no
/// constraint. Survivors keep their relative input order: filtering never
/// reorders.
pub fn apply_filters<T>(rows: &[T], filters: &FilterState, columns: &[Column<T>]) -> Vec<T>
where
	T: Serialize + Clone,
{
	let predicates: Vec<(&str, String)> = columns
		.iter()
		.filter(|column| column.is_filterable())
		.filter_map(|column| {
			filters
				.query(column.field())
				.map(|query| (column.field(), query.to_lowercase()))
		})
		.collect();

	if predicates.is_empty() {
		return rows.to_vec();
	}

	rows.iter()
		.filter(|row| {
			let value = serde_json::to_value(row).ok();
			predicates.iter().all(|(field, needle)| {
				value
					.as_ref()
					.and_then(|v| path::resolve(v, field))
					.is_some_and(|v| matches_query(v, needle))
			})
		})
		.cloned()
		.collect()
}

fn matches_query(value: &Value, lowercase_needle: &str) -> bool {
	path::value_text(value)
		.to_lowercase()
		.contains(lowercase_needle)
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde::Serialize;

	#[derive(Debug, Clone, Serialize, PartialEq)]
	struct Load {
		reference: String,
		status: String,
		rate: Option<u32>,
	}

	fn load(reference: &str, status: &str, rate: Option<u32>) -> Load {
		Load {
			reference: reference.to_string(),
			status: status.to_string(),
			rate,
		}
	}

	fn columns() -> Vec<Column<Load>> {
		vec![
			Column::new("reference", "Reference").unwrap(),
			Column::new("status", "Status").unwrap(),
			Column::new("rate", "Rate").unwrap(),
		]
	}

	#[test]
	fn test_filter_is_case_insensitive_substring() {
		let rows = vec![
			load("L-100", "AVAILABLE", Some(950)),
			load("L-101", "AVAILABLE", Some(1050)),
			load("L-102", "CANCELLED", None),
		];
		let mut filters = FilterState::new();
		filters.set("status", "avail");

		let result = apply_filters(&rows, &filters, &columns());
		assert_eq!(result.len(), 2);
		assert_eq!(result[0].reference, "L-100");
		assert_eq!(result[1].reference, "L-101");
	}

	#[test]
	fn test_filters_combine_with_and() {
		let rows = vec![
			load("L-100", "AVAILABLE", Some(950)),
			load("L-101", "AVAILABLE", Some(1050)),
			load("L-102", "CANCELLED", Some(1050)),
		];
		let mut filters = FilterState::new();
		filters.set("status", "available");
		filters.set("rate", "1050");

		let result = apply_filters(&rows, &filters, &columns());
		assert_eq!(result, vec![load("L-101", "AVAILABLE", Some(1050))]);
	}

	#[test]
	fn test_unresolvable_field_fails_predicate() {
		let rows = vec![
			load("L-100", "AVAILABLE", Some(950)),
			load("L-101", "AVAILABLE", None),
		];
		let mut filters = FilterState::new();
		filters.set("rate", "9");

		let result = apply_filters(&rows, &filters, &columns());
		assert_eq!(result.len(), 1);
		assert_eq!(result[0].reference, "L-100");
	}

	#[test]
	fn test_blank_query_imposes_no_constraint() {
		let rows = vec![load("L-100", "AVAILABLE", None)];
		let mut filters = FilterState::new();
		filters.set("status", "  ");

		let result = apply_filters(&rows, &filters, &columns());
		assert_eq!(result.len(), 1);
	}

	#[test]
	fn test_non_filterable_column_is_ignored() {
		let rows = vec![
			load("L-100", "AVAILABLE", None),
			load("L-101", "CANCELLED", None),
		];
		let columns = vec![
			Column::new("reference", "Reference").unwrap(),
			Column::new("status", "Status").unwrap().filterable(false),
		];
		let mut filters = FilterState::new();
		filters.set("status", "available");

		let result = apply_filters(&rows, &filters, &columns);
		assert_eq!(result.len(), 2);
	}

	#[test]
	fn test_filter_is_idempotent() {
		let rows = vec![
			load("L-100", "AVAILABLE", Some(950)),
			load("L-101", "CANCELLED", None),
		];
		let mut filters = FilterState::new();
		filters.set("status", "avail");

		let cols = columns();
		let once = apply_filters(&rows, &filters, &cols);
		let twice = apply_filters(&once, &filters, &cols);
		assert_eq!(once, twice);
	}

	#[test]
	fn test_numeric_fields_match_on_string_form() {
		let rows = vec![
			load("L-100", "AVAILABLE", Some(950)),
			load("L-101", "AVAILABLE", Some(1950)),
		];
		let mut filters = FilterState::new();
		filters.set("rate", "950");

		// "950" is a substring of both "950" and "1950".
		let result = apply_filters(&rows, &filters, &columns());
		assert_eq!(result.len(), 2);
	}
}
