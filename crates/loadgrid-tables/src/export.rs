//! CSV and JSON export of a table view.
//!
//! Export operates on the filtered+sorted view handed to it, so the output
//! matches what the user is looking at rather than the raw dataset. CSV
//! cells are produced by the same dot-path resolution the filter stage uses;
//! unresolvable fields export as empty cells.

use serde::Serialize;

use crate::column::Column;
use crate::error::{Result, TableError};
use crate::path;

/// Renders `rows` as CSV with one column per configured column, headers
/// first.
///
/// # Errors
/// Returns [`TableError::Export`] when serialization or CSV writing fails.
pub fn to_csv<T: Serialize>(rows: &[T], columns: &[Column<T>]) -> Result<String> {
	let mut writer = csv::Writer::from_writer(Vec::new());
	writer
		.write_record(columns.iter().map(|column| column.header()))
		.map_err(|e| TableError::Export(e.to_string()))?;

	for row in rows {
		let value = serde_json::to_value(row).map_err(|e| TableError::Export(e.to_string()))?;
		let record: Vec<String> = columns
			.iter()
			.map(|column| {
				path::resolve(&value, column.field())
					.map(path::value_text)
					.unwrap_or_default()
			})
			.collect();
		writer
			.write_record(&record)
			.map_err(|e| TableError::Export(e.to_string()))?;
	}

	let bytes = writer
		.into_inner()
		.map_err(|e| TableError::Export(e.to_string()))?;
	String::from_utf8(bytes).map_err(|e| TableError::Export(e.to_string()))
}

/// Renders `rows` as a JSON array of whole rows.
///
/// # Errors
/// Returns [`TableError::Export`] when serialization fails.
pub fn to_json<T: Serialize>(rows: &[T]) -> Result<String> {
	serde_json::to_string(rows).map_err(|e| TableError::Export(e.to_string()))
}
