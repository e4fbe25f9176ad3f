//! Table error types

use loadgrid_pagination::PaginationError;
use thiserror::Error;

/// Errors raised when configuring or mutating a table.
///
/// Derived-state recomputation itself never errors: out-of-range pages are
/// clamped and unresolvable field paths behave as missing values. Everything
/// here is rejected at configuration or mutation time instead.
#[derive(Debug, Error)]
pub enum TableError {
	/// The referenced field does not match any configured column.
	#[error("unknown column: '{0}'")]
	UnknownColumn(String),

	/// The referenced column exists but is not sortable.
	#[error("column '{0}' is not sortable")]
	ColumnNotSortable(String),

	/// The referenced column exists but is not filterable.
	#[error("column '{0}' is not filterable")]
	ColumnNotFilterable(String),

	/// A column was declared with an empty path or an empty path segment.
	#[error("invalid field path: '{0}'")]
	InvalidFieldPath(String),

	/// A selection operation was attempted without a selection configuration.
	#[error("selection is not enabled for this table")]
	SelectionDisabled,

	/// A pagination configuration error.
	#[error(transparent)]
	Pagination(#[from] PaginationError),

	/// Serializing the view for export failed.
	#[cfg(feature = "export")]
	#[error("export failed: {0}")]
	Export(String),
}

/// Result alias for table operations.
pub type Result<T> = std::result::Result<T, TableError>;
