//! Common test fixtures for loadgrid-tables tests

use loadgrid_tables::Column;
use rstest::*;
use serde::Serialize;

/// Freight load row used across the pipeline tests.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestLoad {
	pub id: u32,
	pub reference: String,
	pub status: String,
	pub rate: Option<u32>,
	pub origin: Origin,
}

/// Nested origin record, exercised through dot-path columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Origin {
	pub city: String,
	pub state: String,
}

/// Builds one load row.
pub fn load(id: u32, reference: &str, status: &str, rate: Option<u32>, city: &str) -> TestLoad {
	TestLoad {
		id,
		reference: reference.to_string(),
		status: status.to_string(),
		rate,
		origin: Origin {
			city: city.to_string(),
			state: "TN".to_string(),
		},
	}
}

/// Fixture providing a small mixed dataset.
#[fixture]
pub fn sample_loads() -> Vec<TestLoad> {
	vec![
		load(1, "L-100", "AVAILABLE", Some(950), "Memphis"),
		load(2, "L-101", "AVAILABLE", Some(1050), "Nashville"),
		load(3, "L-102", "CANCELLED", None, "Knoxville"),
		load(4, "L-103", "IN_TRANSIT", Some(700), "Memphis"),
		load(5, "L-104", "AVAILABLE", Some(1200), "Chattanooga"),
	]
}

/// Fixture providing the standard column configuration.
#[fixture]
pub fn load_columns() -> Vec<Column<TestLoad>> {
	vec![
		Column::new("reference", "Reference").unwrap(),
		Column::new("status", "Status").unwrap(),
		Column::new("rate", "Rate").unwrap(),
		Column::new("origin.city", "Origin City").unwrap(),
	]
}

/// Builds a dataset of `count` available loads with ascending rates.
pub fn many_loads(count: u32) -> Vec<TestLoad> {
	(0..count)
		.map(|i| {
			load(
				i + 1,
				&format!("L-{:03}", 100 + i),
				"AVAILABLE",
				Some(500 + i * 10),
				"Memphis",
			)
		})
		.collect()
}
