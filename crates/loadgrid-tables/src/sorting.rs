//! Stable single-field sorting.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::column::Column;
use crate::path;

/// Sort direction for a column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
	/// Smallest key first.
	#[default]
	Ascending,
	/// Largest key first.
	Descending,
}

impl SortDirection {
	/// The opposite direction.
	pub fn reversed(self) -> Self {
		match self {
			Self::Ascending => Self::Descending,
			Self::Descending => Self::Ascending,
		}
	}

	fn apply(self, ordering: Ordering) -> Ordering {
		match self {
			Self::Ascending => ordering,
			Self::Descending => ordering.reverse(),
		}
	}
}

/// The field and direction a table is currently sorted by.
///
/// `field: None` means unsorted: the sort stage passes rows through in their
/// input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
	/// Dot-separated path of the sorted column, or `None` when unsorted.
	pub field: Option<String>,
	/// Direction applied to non-missing keys.
	pub direction: SortDirection,
}

impl SortState {
	/// A state sorting by `field` in `direction`.
	pub fn by(field: impl Into<String>, direction: SortDirection) -> Self {
		Self {
			field: Some(field.into()),
			direction,
		}
	}

	/// The unsorted state.
	pub fn unsorted() -> Self {
		Self::default()
	}

	/// True when a sort field is set.
	pub fn is_active(&self) -> bool {
		self.field.is_some()
	}
}

/// Produces a stably sorted copy of `rows` according to `sort`.
///
/// With no sort field this is an identity copy. With a field, the matching
/// column's custom comparator is used when present; otherwise each row's key
/// is resolved once by path and keys are compared by type: strings with
/// `str::cmp` (byte-wise; locale collation is out of scope), numbers with
/// `f64::total_cmp`, booleans with `bool::cmp`, anything else via its
/// display form.
///
/// Rows whose key is missing sort **last in both directions**; the
/// direction flips only comparisons between present keys. Equal-key rows
/// keep their relative input order.
pub fn apply_sort<T>(rows: &[T], sort: &SortState, columns: &[Column<T>]) -> Vec<T>
where
	T: Serialize + Clone,
{
	let Some(field) = sort.field.as_deref() else {
		return rows.to_vec();
	};

	let comparator = columns
		.iter()
		.find(|column| column.field() == field)
		.and_then(|column| column.custom_comparator().cloned());
	if let Some(comparator) = comparator {
		let mut sorted = rows.to_vec();
		sorted.sort_by(|a, b| sort.direction.apply(comparator(a, b)));
		return sorted;
	}

	// Decorate-sort-undecorate: one serialization per row, not per comparison.
	let mut keyed: Vec<(Option<Value>, T)> = rows
		.iter()
		.map(|row| (path::resolve_owned(row, field), row.clone()))
		.collect();
	keyed.sort_by(|(a, _), (b, _)| compare_keys(a.as_ref(), b.as_ref(), sort.direction));
	keyed.into_iter().map(|(_, row)| row).collect()
}

/// Compares two optional sort keys: missing keys order last regardless of
/// direction, present keys compare by [`compare_values`] with the direction
/// applied.
pub(crate) fn compare_keys(
	a: Option<&Value>,
	b: Option<&Value>,
	direction: SortDirection,
) -> Ordering {
	match (a, b) {
		(None, None) => Ordering::Equal,
		(None, Some(_)) => Ordering::Greater,
		(Some(_), None) => Ordering::Less,
		(Some(a), Some(b)) => direction.apply(compare_values(a, b)),
	}
}

fn compare_values(a: &Value, b: &Value) -> Ordering {
	match (a, b) {
		(Value::String(a), Value::String(b)) => a.cmp(b),
		(Value::Number(a), Value::Number(b)) => {
			let a = a.as_f64().unwrap_or(f64::NAN);
			let b = b.as_f64().unwrap_or(f64::NAN);
			a.total_cmp(&b)
		}
		(Value::Bool(a), Value::Bool(b)) => a.cmp(b),
		(a, b) => path::value_text(a).cmp(&path::value_text(b)),
	}
}
