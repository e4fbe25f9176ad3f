//! Column descriptors

use std::cmp::Ordering;
use std::sync::Arc;

use crate::error::{Result, TableError};
use crate::path;

/// Comparator injected for columns whose ordering cannot be derived from the
/// field value alone.
pub type Comparator<T> = Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// Describes one column of a table: which field it reads (a dot-separated
/// path into the row), its header label, and whether it participates in
/// sorting and filtering.
///
/// Rendering and formatting hooks deliberately do not live here; a column
/// only describes pipeline behavior.
///
/// # Examples
///
/// ```
/// use loadgrid_tables::Column;
///
/// #[derive(serde::Serialize)]
/// struct Load {
///     reference: String,
///     rate: u32,
/// }
///
/// let column: loadgrid_tables::Column<Load> = Column::new("rate", "Rate")
///     .unwrap()
///     .filterable(false);
/// assert!(column.is_sortable());
/// assert!(!column.is_filterable());
/// ```
pub struct Column<T> {
	field: String,
	header: String,
	sortable: bool,
	filterable: bool,
	comparator: Option<Comparator<T>>,
}

impl<T> Column<T> {
	/// Creates a column reading `field` (a dot-separated path) with the
	/// given header label. Sortable and filterable default to true.
	///
	/// # Errors
	/// Returns [`TableError::InvalidFieldPath`] when the path is empty or
	/// contains an empty segment; malformed paths are rejected here rather
	/// than discovered mid-recomputation.
	pub fn new(field: impl Into<String>, header: impl Into<String>) -> Result<Self> {
		let field = field.into();
		if !path::is_valid_path(&field) {
			return Err(TableError::InvalidFieldPath(field));
		}
		Ok(Self {
			field,
			header: header.into(),
			sortable: true,
			filterable: true,
			comparator: None,
		})
	}

	/// Sets whether this column can be sorted.
	pub fn sortable(mut self, sortable: bool) -> Self {
		self.sortable = sortable;
		self
	}

	/// Sets whether this column can be filtered.
	pub fn filterable(mut self, filterable: bool) -> Self {
		self.filterable = filterable;
		self
	}

	/// Installs a custom comparator, overriding value-based ordering for
	/// this column. The sort direction is applied to the comparator's
	/// result by the sort stage.
	pub fn comparator(
		mut self,
		comparator: impl Fn(&T, &T) -> Ordering + Send + Sync + 'static,
	) -> Self {
		self.comparator = Some(Arc::new(comparator));
		self
	}

	/// The dot-separated field path this column reads.
	pub fn field(&self) -> &str {
		&self.field
	}

	/// The header label for this column.
	pub fn header(&self) -> &str {
		&self.header
	}

	/// Whether this column can be sorted.
	pub fn is_sortable(&self) -> bool {
		self.sortable
	}

	/// Whether this column can be filtered.
	pub fn is_filterable(&self) -> bool {
		self.filterable
	}

	/// The custom comparator, if one was installed.
	pub fn custom_comparator(&self) -> Option<&Comparator<T>> {
		self.comparator.as_ref()
	}
}

impl<T> Clone for Column<T> {
	fn clone(&self) -> Self {
		Self {
			field: self.field.clone(),
			header: self.header.clone(),
			sortable: self.sortable,
			filterable: self.filterable,
			comparator: self.comparator.clone(),
		}
	}
}

impl<T> std::fmt::Debug for Column<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Column")
			.field("field", &self.field)
			.field("header", &self.header)
			.field("sortable", &self.sortable)
			.field("filterable", &self.filterable)
			.field("has_comparator", &self.comparator.is_some())
			.finish()
	}
}
