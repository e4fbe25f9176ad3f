//! Debounced filter input through the engine.

#[path = "fixtures.rs"]
mod fixtures;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use fixtures::{TestLoad, load_columns, sample_loads};
use loadgrid_tables::{
	Column, FilterConfig, FilterState, GridCallbacks, GridConfig, GridEngine, TableError,
};
use rstest::rstest;

fn debounced_engine(
	dataset: Vec<TestLoad>,
	columns: Vec<Column<TestLoad>>,
	debounce: Duration,
	on_filter_count: Arc<AtomicUsize>,
) -> GridEngine<TestLoad, u32> {
	let callbacks = GridCallbacks::new().on_filter(move |_: &FilterState| {
		on_filter_count.fetch_add(1, Ordering::SeqCst);
	});
	let config = GridConfig {
		filter: FilterConfig::new().debounce(debounce),
		callbacks,
		..GridConfig::default()
	};
	GridEngine::new(dataset, columns, config).unwrap()
}

#[rstest]
#[tokio::test]
async fn test_keystrokes_coalesce_into_one_filter_application(
	sample_loads: Vec<TestLoad>,
	load_columns: Vec<Column<TestLoad>>,
) {
	// Arrange
	let fired = Arc::new(AtomicUsize::new(0));
	let engine = debounced_engine(
		sample_loads,
		load_columns,
		Duration::from_millis(150),
		Arc::clone(&fired),
	);

	// Act - three keystrokes inside one quiet window
	engine.input_filter_text("status", "a").unwrap();
	tokio::time::sleep(Duration::from_millis(30)).await;
	engine.input_filter_text("status", "av").unwrap();
	tokio::time::sleep(Duration::from_millis(30)).await;
	engine.input_filter_text("status", "avail").unwrap();

	// Nothing applied while the window is open.
	assert_eq!(engine.filtered_count(), 5);
	assert_eq!(fired.load(Ordering::SeqCst), 0);

	tokio::time::sleep(Duration::from_millis(400)).await;

	// Assert - exactly one application, carrying the last value
	assert_eq!(fired.load(Ordering::SeqCst), 1);
	assert_eq!(engine.filter_state().query("status"), Some("avail"));
	assert_eq!(engine.filtered_count(), 3);
	assert_eq!(engine.current_page(), 1);
}

#[rstest]
#[tokio::test]
async fn test_cancel_pending_filter_discards_input(
	sample_loads: Vec<TestLoad>,
	load_columns: Vec<Column<TestLoad>>,
) {
	// Arrange
	let fired = Arc::new(AtomicUsize::new(0));
	let engine = debounced_engine(
		sample_loads,
		load_columns,
		Duration::from_millis(100),
		Arc::clone(&fired),
	);

	// Act
	engine.input_filter_text("status", "avail").unwrap();
	engine.cancel_pending_filter();
	tokio::time::sleep(Duration::from_millis(300)).await;

	// Assert - the input never reached the filter stage
	assert_eq!(fired.load(Ordering::SeqCst), 0);
	assert!(engine.filter_state().is_empty());
	assert_eq!(engine.filtered_count(), 5);
}

#[rstest]
#[tokio::test]
async fn test_dropping_engine_silences_pending_timer(
	sample_loads: Vec<TestLoad>,
	load_columns: Vec<Column<TestLoad>>,
) {
	// Arrange
	let fired = Arc::new(AtomicUsize::new(0));
	let engine = debounced_engine(
		sample_loads,
		load_columns,
		Duration::from_millis(100),
		Arc::clone(&fired),
	);
	engine.input_filter_text("status", "avail").unwrap();

	// Act - dispose while the timer is pending
	drop(engine);
	tokio::time::sleep(Duration::from_millis(300)).await;

	// Assert - no stale callback after disposal
	assert_eq!(fired.load(Ordering::SeqCst), 0);
}

#[rstest]
#[tokio::test]
async fn test_debounced_input_validates_column_up_front(
	sample_loads: Vec<TestLoad>,
	load_columns: Vec<Column<TestLoad>>,
) {
	let fired = Arc::new(AtomicUsize::new(0));
	let engine = debounced_engine(
		sample_loads,
		load_columns,
		Duration::from_millis(50),
		Arc::clone(&fired),
	);

	// Unknown columns are rejected immediately, not after the window.
	assert!(matches!(
		engine.input_filter_text("nonexistent", "x"),
		Err(TableError::UnknownColumn(_))
	));
	tokio::time::sleep(Duration::from_millis(150)).await;
	assert_eq!(fired.load(Ordering::SeqCst), 0);
}

#[rstest]
#[tokio::test]
async fn test_separate_quiet_windows_apply_separately(
	sample_loads: Vec<TestLoad>,
	load_columns: Vec<Column<TestLoad>>,
) {
	// Arrange
	let fired = Arc::new(AtomicUsize::new(0));
	let engine = debounced_engine(
		sample_loads,
		load_columns,
		Duration::from_millis(50),
		Arc::clone(&fired),
	);

	// Act - two inputs separated by more than the window
	engine.input_filter_text("status", "avail").unwrap();
	tokio::time::sleep(Duration::from_millis(200)).await;
	engine.input_filter_text("origin.city", "memphis").unwrap();
	tokio::time::sleep(Duration::from_millis(200)).await;

	// Assert - both applied, conjunction of the two predicates
	assert_eq!(fired.load(Ordering::SeqCst), 2);
	assert_eq!(engine.filtered_count(), 1);
}
