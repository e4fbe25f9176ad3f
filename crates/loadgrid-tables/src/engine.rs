//! Grid engine: the composed filter → sort → paginate pipeline.
//!
//! [`GridEngine`] owns a dataset, a column configuration, and the derived
//! state of the pipeline. Every mutation synchronously recomputes the cached
//! filtered+sorted view, so a read issued after any mutation observes a
//! result consistent with all inputs as of that mutation. The one deliberate
//! exception is keystroke-driven filter text, which is delayed by a debounce
//! window so each keystroke does not re-run the whole pipeline.

use std::sync::Arc;
use std::time::Duration;

use loadgrid_pagination::{Page, PageToken, Paginator, page_range};
use parking_lot::{Mutex, RwLock};
use serde::Serialize;

use crate::column::Column;
use crate::debounce::DebounceScheduler;
use crate::error::{Result, TableError};
use crate::filtering::{self, FilterState};
use crate::path;
use crate::selection::{GetId, SelectionChange, SelectionManager, SelectionMode};
use crate::sorting::{self, SortDirection, SortState};

/// Caller-supplied replacement for the built-in sort stage.
pub type SortFn<T> = Arc<dyn Fn(&[T], &SortState) -> Vec<T> + Send + Sync>;

/// Caller-supplied replacement for the built-in filter stage.
pub type FilterFn<T> = Arc<dyn Fn(&[T], &FilterState) -> Vec<T> + Send + Sync>;

/// Pagination configuration.
#[derive(Debug, Clone)]
pub struct PaginationConfig {
	/// When false, the engine exposes the whole view as a single page.
	pub enabled: bool,
	/// Items per page. Must be at least 1.
	pub page_size: usize,
	/// Initial page, clamped into range at construction.
	pub current_page: usize,
	/// Server-side mode: the total number of items known to exist when the
	/// dataset holds only the already-materialized page. `None` means the
	/// dataset is complete and is sliced locally.
	pub total_items: Option<usize>,
}

impl Default for PaginationConfig {
	fn default() -> Self {
		Self {
			enabled: true,
			page_size: 10,
			current_page: 1,
			total_items: None,
		}
	}
}

impl PaginationConfig {
	/// Creates the default configuration (enabled, 10 items per page).
	pub fn new() -> Self {
		Self::default()
	}

	/// Disables pagination; the engine exposes one page holding the view.
	pub fn disabled() -> Self {
		Self {
			enabled: false,
			..Self::default()
		}
	}

	/// Sets the page size.
	pub fn page_size(mut self, page_size: usize) -> Self {
		self.page_size = page_size;
		self
	}

	/// Sets the initial page.
	pub fn current_page(mut self, current_page: usize) -> Self {
		self.current_page = current_page;
		self
	}

	/// Enables server-side mode with the given known total.
	pub fn total_items(mut self, total_items: usize) -> Self {
		self.total_items = Some(total_items);
		self
	}
}

/// Sort configuration.
pub struct SortConfig<T> {
	/// When false, the sort stage passes rows through unchanged.
	pub enabled: bool,
	/// Field to sort by initially, if any.
	pub default_field: Option<String>,
	/// Direction used with `default_field`.
	pub default_direction: SortDirection,
	/// Replaces the built-in sort stage entirely when set.
	pub sort_function: Option<SortFn<T>>,
}

impl<T> Default for SortConfig<T> {
	fn default() -> Self {
		Self {
			enabled: true,
			default_field: None,
			default_direction: SortDirection::Ascending,
			sort_function: None,
		}
	}
}

impl<T> SortConfig<T> {
	/// Creates the default configuration (enabled, unsorted).
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the initial sort field and direction.
	pub fn default_sort(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
		self.default_field = Some(field.into());
		self.default_direction = direction;
		self
	}

	/// Replaces the built-in sort stage.
	pub fn sort_function(
		mut self,
		sort_function: impl Fn(&[T], &SortState) -> Vec<T> + Send + Sync + 'static,
	) -> Self {
		self.sort_function = Some(Arc::new(sort_function));
		self
	}
}

/// Filter configuration.
pub struct FilterConfig<T> {
	/// When false, the filter stage passes rows through unchanged.
	pub enabled: bool,
	/// Filters applied from construction.
	pub default_filters: FilterState,
	/// Quiet window for [`GridEngine::input_filter_text`].
	pub debounce: Duration,
	/// Replaces the built-in filter stage entirely when set.
	pub filter_function: Option<FilterFn<T>>,
}

impl<T> Default for FilterConfig<T> {
	fn default() -> Self {
		Self {
			enabled: true,
			default_filters: FilterState::new(),
			debounce: Duration::from_millis(300),
			filter_function: None,
		}
	}
}

impl<T> FilterConfig<T> {
	/// Creates the default configuration (enabled, no filters, 300ms
	/// debounce).
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the filters active from construction.
	pub fn default_filters(mut self, filters: FilterState) -> Self {
		self.default_filters = filters;
		self
	}

	/// Sets the debounce quiet window.
	pub fn debounce(mut self, debounce: Duration) -> Self {
		self.debounce = debounce;
		self
	}

	/// Replaces the built-in filter stage.
	pub fn filter_function(
		mut self,
		filter_function: impl Fn(&[T], &FilterState) -> Vec<T> + Send + Sync + 'static,
	) -> Self {
		self.filter_function = Some(Arc::new(filter_function));
		self
	}
}

/// Selection configuration. Its presence in [`GridConfig`] enables
/// selection.
pub struct SelectionConfig<T, I = String> {
	/// Single- or multiple-selection.
	pub mode: SelectionMode,
	/// Identities selected from construction.
	pub initial: Vec<I>,
	/// Identity accessor.
	pub get_id: GetId<T, I>,
}

impl<T, I> SelectionConfig<T, I> {
	/// Creates a selection configuration with an injected identity accessor.
	pub fn new(mode: SelectionMode, get_id: impl Fn(&T) -> I + Send + Sync + 'static) -> Self {
		Self {
			mode,
			initial: Vec::new(),
			get_id: Arc::new(get_id),
		}
	}

	/// Sets the identities selected from construction.
	pub fn initial(mut self, initial: Vec<I>) -> Self {
		self.initial = initial;
		self
	}
}

impl<T: Serialize> SelectionConfig<T, String> {
	/// Identity from a field path, using the value's display form.
	///
	/// Rows that do not resolve the field produce an empty identity, so
	/// prefer [`SelectionConfig::new`] with a real accessor whenever rows
	/// may lack the field.
	pub fn by_field(mode: SelectionMode, field: impl Into<String>) -> Self {
		let field = field.into();
		Self::new(mode, move |row: &T| {
			path::resolve_owned(row, &field)
				.map(|value| path::value_text(&value))
				.unwrap_or_default()
		})
	}
}

/// Observers invoked synchronously on every externally visible state
/// transition, after the engine's lock has been released.
pub struct GridCallbacks<T, I = String> {
	on_page_change: Option<Arc<dyn Fn(usize) + Send + Sync>>,
	on_page_size_change: Option<Arc<dyn Fn(usize) + Send + Sync>>,
	on_sort: Option<Arc<dyn Fn(&SortState) + Send + Sync>>,
	on_filter: Option<Arc<dyn Fn(&FilterState) + Send + Sync>>,
	on_selection_change: Option<Arc<dyn Fn(&SelectionChange<T, I>) + Send + Sync>>,
}

impl<T, I> Default for GridCallbacks<T, I> {
	fn default() -> Self {
		Self {
			on_page_change: None,
			on_page_size_change: None,
			on_sort: None,
			on_filter: None,
			on_selection_change: None,
		}
	}
}

impl<T, I> GridCallbacks<T, I> {
	/// Creates an empty callback set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Observes effective page changes, including clamps.
	pub fn on_page_change(mut self, callback: impl Fn(usize) + Send + Sync + 'static) -> Self {
		self.on_page_change = Some(Arc::new(callback));
		self
	}

	/// Observes page-size changes.
	pub fn on_page_size_change(mut self, callback: impl Fn(usize) + Send + Sync + 'static) -> Self {
		self.on_page_size_change = Some(Arc::new(callback));
		self
	}

	/// Observes sort-state changes.
	pub fn on_sort(mut self, callback: impl Fn(&SortState) + Send + Sync + 'static) -> Self {
		self.on_sort = Some(Arc::new(callback));
		self
	}

	/// Observes filter-state changes (immediate and debounced).
	pub fn on_filter(mut self, callback: impl Fn(&FilterState) + Send + Sync + 'static) -> Self {
		self.on_filter = Some(Arc::new(callback));
		self
	}

	/// Observes selection changes with both identities and resolved rows.
	pub fn on_selection_change(
		mut self,
		callback: impl Fn(&SelectionChange<T, I>) + Send + Sync + 'static,
	) -> Self {
		self.on_selection_change = Some(Arc::new(callback));
		self
	}
}

/// Full engine configuration.
pub struct GridConfig<T, I = String> {
	/// Pagination stage configuration.
	pub pagination: PaginationConfig,
	/// Sort stage configuration.
	pub sort: SortConfig<T>,
	/// Filter stage configuration.
	pub filter: FilterConfig<T>,
	/// Selection configuration; `None` disables selection.
	pub selection: Option<SelectionConfig<T, I>>,
	/// Change observers.
	pub callbacks: GridCallbacks<T, I>,
}

impl<T, I> Default for GridConfig<T, I> {
	fn default() -> Self {
		Self {
			pagination: PaginationConfig::default(),
			sort: SortConfig::default(),
			filter: FilterConfig::default(),
			selection: None,
			callbacks: GridCallbacks::default(),
		}
	}
}

struct EngineState<T, I> {
	dataset: Vec<T>,
	columns: Vec<Column<T>>,
	filters: FilterState,
	filter_enabled: bool,
	filter_function: Option<FilterFn<T>>,
	sort: SortState,
	sort_enabled: bool,
	sort_function: Option<SortFn<T>>,
	pagination_enabled: bool,
	paginator: Paginator,
	current_page: usize,
	remote_total: Option<usize>,
	selection: Option<SelectionManager<T, I>>,
	/// Filtered+sorted dataset, recomputed on every input change.
	view: Vec<T>,
}

impl<T, I> EngineState<T, I>
where
	T: Serialize + Clone,
	I: Eq + Clone,
{
	fn column(&self, field: &str) -> Result<&Column<T>> {
		self.columns
			.iter()
			.find(|column| column.field() == field)
			.ok_or_else(|| TableError::UnknownColumn(field.to_string()))
	}

	fn require_sortable(&self, field: &str) -> Result<()> {
		if !self.column(field)?.is_sortable() {
			return Err(TableError::ColumnNotSortable(field.to_string()));
		}
		Ok(())
	}

	fn require_filterable(&self, field: &str) -> Result<()> {
		if !self.column(field)?.is_filterable() {
			return Err(TableError::ColumnNotFilterable(field.to_string()));
		}
		Ok(())
	}

	fn recompute(&mut self) {
		let filtered = if !self.filter_enabled || self.filters.is_empty() {
			self.dataset.clone()
		} else if let Some(filter_function) = &self.filter_function {
			filter_function(&self.dataset, &self.filters)
		} else {
			filtering::apply_filters(&self.dataset, &self.filters, &self.columns)
		};

		self.view = if !self.sort_enabled || !self.sort.is_active() {
			filtered
		} else if let Some(sort_function) = &self.sort_function {
			sort_function(&filtered, &self.sort)
		} else {
			sorting::apply_sort(&filtered, &self.sort, &self.columns)
		};

		self.clamp_page();
		tracing::debug!(
			dataset = self.dataset.len(),
			view = self.view.len(),
			page = self.current_page,
			"grid view recomputed"
		);
	}

	fn total_pages(&self) -> usize {
		if !self.pagination_enabled {
			return 1;
		}
		let total_items = self.remote_total.unwrap_or(self.view.len());
		self.paginator.total_pages(total_items)
	}

	fn clamp_page(&mut self) {
		self.current_page = self.current_page.clamp(1, self.total_pages());
	}

	fn page(&self) -> Page<T> {
		if !self.pagination_enabled {
			return Page {
				items: self.view.clone(),
				number: 1,
				total_pages: 1,
				total_items: self.view.len(),
				page_size: self.view.len().max(1),
			};
		}
		match self.remote_total {
			Some(total) => self
				.paginator
				.paginate_remote(&self.view, self.current_page, total),
			None => self.paginator.paginate(&self.view, self.current_page),
		}
	}

	fn selection_change(&self) -> Option<SelectionChange<T, I>> {
		self.selection
			.as_ref()
			.map(|selection| selection.change(&self.view))
	}
}

/// The composed tabular pipeline over an in-memory dataset.
///
/// A `GridEngine` is created with a dataset, a column configuration, and a
/// [`GridConfig`]; it recomputes its derived view whenever an input changes
/// and is simply dropped when no longer needed; dropping cancels any
/// pending debounce timer. The caller's dataset is never mutated; every
/// stage materializes a new sequence.
///
/// Stage semantics, invariants, and the clamping/reset policies are
/// documented on the individual stage modules; this type wires them
/// together and owns the change notifications.
///
/// # Examples
///
/// ```
/// use loadgrid_tables::{Column, GridConfig, GridEngine, SortDirection};
/// use serde::Serialize;
///
/// #[derive(Debug, Clone, Serialize)]
/// struct Load {
///     reference: String,
///     status: String,
///     rate: u32,
/// }
///
/// # fn load(r: &str, s: &str, rate: u32) -> Load {
/// #     Load { reference: r.into(), status: s.into(), rate }
/// # }
/// let dataset = vec![
///     load("L-100", "AVAILABLE", 950),
///     load("L-101", "CANCELLED", 1050),
///     load("L-102", "AVAILABLE", 700),
/// ];
/// let columns = vec![
///     Column::new("reference", "Reference").unwrap(),
///     Column::new("status", "Status").unwrap(),
///     Column::new("rate", "Rate").unwrap(),
/// ];
///
/// let engine: GridEngine<Load> =
///     GridEngine::new(dataset, columns, GridConfig::default()).unwrap();
/// engine.set_filter("status", "avail").unwrap();
/// engine.set_sort("rate", SortDirection::Descending).unwrap();
///
/// let page = engine.page();
/// assert_eq!(page.total_pages, 1);
/// let refs: Vec<&str> = page.items.iter().map(|l| l.reference.as_str()).collect();
/// assert_eq!(refs, vec!["L-100", "L-102"]);
/// ```
pub struct GridEngine<T, I = String> {
	inner: Arc<RwLock<EngineState<T, I>>>,
	callbacks: Arc<GridCallbacks<T, I>>,
	debounce: Mutex<DebounceScheduler<(String, String)>>,
	debounce_delay: Duration,
}

impl<T, I> GridEngine<T, I>
where
	T: Serialize + Clone + Send + Sync + 'static,
	I: Eq + Clone + Send + Sync + 'static,
{
	/// Creates an engine over `dataset` with the given columns and
	/// configuration, and computes the initial view.
	///
	/// # Errors
	/// Rejects a zero page size, a default sort field that is unknown or
	/// not sortable, and default filters on unknown or non-filterable
	/// columns. Configuration mistakes surface here, not mid-recomputation.
	pub fn new(dataset: Vec<T>, columns: Vec<Column<T>>, config: GridConfig<T, I>) -> Result<Self> {
		let GridConfig {
			pagination,
			sort,
			filter,
			selection,
			callbacks,
		} = config;

		let paginator = Paginator::new(pagination.page_size)?;
		let selection = selection.map(|selection_config| {
			SelectionManager::with_initial(
				selection_config.mode,
				selection_config.get_id,
				selection_config.initial,
			)
		});

		let mut state = EngineState {
			dataset,
			columns,
			filters: filter.default_filters,
			filter_enabled: filter.enabled,
			filter_function: filter.filter_function,
			sort: match &sort.default_field {
				Some(field) => SortState::by(field.clone(), sort.default_direction),
				None => SortState::unsorted(),
			},
			sort_enabled: sort.enabled,
			sort_function: sort.sort_function,
			pagination_enabled: pagination.enabled,
			paginator,
			current_page: pagination.current_page.max(1),
			remote_total: pagination.total_items,
			selection,
			view: Vec::new(),
		};

		if let Some(field) = state.sort.field.clone() {
			state.require_sortable(&field)?;
		}
		let default_fields: Vec<String> =
			state.filters.active().map(|(field, _)| field.to_string()).collect();
		for field in default_fields {
			state.require_filterable(&field)?;
		}

		state.recompute();

		Ok(Self {
			inner: Arc::new(RwLock::new(state)),
			callbacks: Arc::new(callbacks),
			debounce: Mutex::new(DebounceScheduler::new()),
			debounce_delay: filter.debounce,
		})
	}

	// --- dataset ---

	/// Replaces the dataset.
	///
	/// Filter, sort and selection state are preserved; the current page is
	/// preserved and clamped into the new page range.
	pub fn set_dataset(&self, dataset: Vec<T>) {
		let (before, after) = {
			let mut state = self.inner.write();
			let before = state.current_page;
			state.dataset = dataset;
			state.recompute();
			(before, state.current_page)
		};
		self.notify_page_change(before, after);
	}

	// --- filtering ---

	/// Sets the filter for `field` immediately (no debounce).
	///
	/// A blank query clears the column's filter. The current page resets
	/// to 1.
	///
	/// # Errors
	/// [`TableError::UnknownColumn`] / [`TableError::ColumnNotFilterable`].
	pub fn set_filter(&self, field: &str, query: impl Into<String>) -> Result<()> {
		let (filters, before, after) = {
			let mut state = self.inner.write();
			state.require_filterable(field)?;
			let before = state.current_page;
			state.filters.set(field, query.into());
			state.current_page = 1;
			state.recompute();
			(state.filters.clone(), before, state.current_page)
		};
		if let Some(callback) = &self.callbacks.on_filter {
			callback(&filters);
		}
		self.notify_page_change(before, after);
		Ok(())
	}

	/// Feeds keystroke-driven filter text through the debounce window.
	///
	/// The column is validated immediately, but the filter is applied (and
	/// `on_filter` fired) only after the configured quiet period with the
	/// last value scheduled. Requires a tokio runtime.
	///
	/// # Errors
	/// [`TableError::UnknownColumn`] / [`TableError::ColumnNotFilterable`].
	pub fn input_filter_text(
		&self,
		field: impl Into<String>,
		query: impl Into<String>,
	) -> Result<()> {
		let field = field.into();
		self.inner.read().require_filterable(&field)?;

		let weak = Arc::downgrade(&self.inner);
		let callbacks = Arc::clone(&self.callbacks);
		self.debounce.lock().schedule(
			(field, query.into()),
			self.debounce_delay,
			move |(field, query)| {
				// The engine may have been dropped while the timer was
				// pending; a stale firing must not touch anything.
				let Some(inner) = weak.upgrade() else {
					return;
				};
				let filters = {
					let mut state = inner.write();
					state.filters.set(field, query);
					state.current_page = 1;
					state.recompute();
					state.filters.clone()
				};
				tracing::debug!("debounced filter applied");
				if let Some(callback) = &callbacks.on_filter {
					callback(&filters);
				}
			},
		);
		Ok(())
	}

	/// Discards any pending debounced filter input without applying it.
	pub fn cancel_pending_filter(&self) {
		self.debounce.lock().cancel();
	}

	/// Clears every filter. The current page resets to 1.
	pub fn clear_filters(&self) {
		let (filters, before, after) = {
			let mut state = self.inner.write();
			let before = state.current_page;
			state.filters.clear();
			state.current_page = 1;
			state.recompute();
			(state.filters.clone(), before, state.current_page)
		};
		if let Some(callback) = &self.callbacks.on_filter {
			callback(&filters);
		}
		self.notify_page_change(before, after);
	}

	// --- sorting ---

	/// Sorts by `field` in `direction`. The current page is preserved.
	///
	/// # Errors
	/// [`TableError::UnknownColumn`] / [`TableError::ColumnNotSortable`].
	pub fn set_sort(&self, field: &str, direction: SortDirection) -> Result<()> {
		let sort = {
			let mut state = self.inner.write();
			state.require_sortable(field)?;
			state.sort = SortState::by(field, direction);
			state.recompute();
			state.sort.clone()
		};
		if let Some(callback) = &self.callbacks.on_sort {
			callback(&sort);
		}
		Ok(())
	}

	/// Sorts by `field`, flipping the direction when it is already the
	/// sorted field (the header-click cycle: Ascending, then Descending).
	///
	/// # Errors
	/// [`TableError::UnknownColumn`] / [`TableError::ColumnNotSortable`].
	pub fn toggle_sort(&self, field: &str) -> Result<()> {
		let direction = {
			let state = self.inner.read();
			state.require_sortable(field)?;
			match &state.sort.field {
				Some(current) if current == field => state.sort.direction.reversed(),
				_ => SortDirection::Ascending,
			}
		};
		self.set_sort(field, direction)
	}

	/// Removes the sort; rows flow through in filter output order.
	pub fn clear_sort(&self) {
		let sort = {
			let mut state = self.inner.write();
			state.sort = SortState::unsorted();
			state.recompute();
			state.sort.clone()
		};
		if let Some(callback) = &self.callbacks.on_sort {
			callback(&sort);
		}
	}

	// --- pagination ---

	/// Navigates to `page`, clamped into `[1, total_pages]`. Returns the
	/// effective page.
	pub fn set_page(&self, page: usize) -> usize {
		let (before, after) = {
			let mut state = self.inner.write();
			let before = state.current_page;
			state.current_page = page.max(1);
			state.clamp_page();
			(before, state.current_page)
		};
		self.notify_page_change(before, after);
		after
	}

	/// Changes the page size. The current page resets to 1, since the
	/// meaning of every page boundary shifts.
	///
	/// # Errors
	/// [`PaginationError::InvalidPageSize`] for a zero size.
	///
	/// [`PaginationError::InvalidPageSize`]: loadgrid_pagination::PaginationError::InvalidPageSize
	pub fn set_page_size(&self, page_size: usize) -> Result<()> {
		let before = {
			let mut state = self.inner.write();
			let paginator = Paginator::new(page_size)?;
			let before = state.current_page;
			state.paginator = paginator;
			state.current_page = 1;
			before
		};
		if let Some(callback) = &self.callbacks.on_page_size_change {
			callback(page_size);
		}
		self.notify_page_change(before, 1);
		Ok(())
	}

	/// Updates the server-side total, or returns to local slicing with
	/// `None`. The current page is clamped into the new range.
	pub fn set_remote_total(&self, total_items: Option<usize>) {
		let (before, after) = {
			let mut state = self.inner.write();
			let before = state.current_page;
			state.remote_total = total_items;
			state.clamp_page();
			(before, state.current_page)
		};
		self.notify_page_change(before, after);
	}

	// --- selection ---

	/// Selects or deselects `id`. Returns whether the selection changed.
	///
	/// # Errors
	/// [`TableError::SelectionDisabled`] without a selection configuration.
	pub fn toggle_selection(&self, id: I, selected: bool) -> Result<bool> {
		self.mutate_selection(|selection| selection.toggle(id, selected))
	}

	/// Selects or deselects `row` via its identity.
	///
	/// # Errors
	/// [`TableError::SelectionDisabled`] without a selection configuration.
	pub fn toggle_row_selection(&self, row: &T, selected: bool) -> Result<bool> {
		self.mutate_selection(|selection| selection.toggle_row(row, selected))
	}

	/// Deselects everything. Returns whether anything had been selected.
	///
	/// # Errors
	/// [`TableError::SelectionDisabled`] without a selection configuration.
	pub fn clear_selection(&self) -> Result<bool> {
		self.mutate_selection(|selection| selection.clear())
	}

	/// True when `id` is selected.
	pub fn is_selected(&self, id: &I) -> bool {
		self.inner
			.read()
			.selection
			.as_ref()
			.is_some_and(|selection| selection.is_selected(id))
	}

	/// Selected identities in selection order. Empty when selection is
	/// disabled.
	pub fn selected_ids(&self) -> Vec<I> {
		self.inner
			.read()
			.selection
			.as_ref()
			.map(|selection| selection.selected_ids().to_vec())
			.unwrap_or_default()
	}

	/// Selected rows resolved against the full filtered+sorted view (not
	/// just the visible page), in view order.
	pub fn selected_items(&self) -> Vec<T> {
		let state = self.inner.read();
		state
			.selection
			.as_ref()
			.map(|selection| {
				selection
					.selected_items(&state.view)
					.into_iter()
					.cloned()
					.collect()
			})
			.unwrap_or_default()
	}

	fn mutate_selection(
		&self,
		mutation: impl FnOnce(&mut SelectionManager<T, I>) -> bool,
	) -> Result<bool> {
		let change = {
			let mut state = self.inner.write();
			let selection = state
				.selection
				.as_mut()
				.ok_or(TableError::SelectionDisabled)?;
			if !mutation(selection) {
				return Ok(false);
			}
			state.selection_change()
		};
		if let (Some(callback), Some(change)) = (&self.callbacks.on_selection_change, change) {
			callback(&change);
		}
		Ok(true)
	}

	// --- reads ---

	/// The current page of the pipeline output.
	pub fn page(&self) -> Page<T> {
		self.inner.read().page()
	}

	/// The rows on the current page.
	pub fn visible_rows(&self) -> Vec<T> {
		self.page().items
	}

	/// The current page number.
	pub fn current_page(&self) -> usize {
		self.inner.read().current_page
	}

	/// The total page count.
	pub fn total_pages(&self) -> usize {
		self.inner.read().total_pages()
	}

	/// Number of rows surviving filter and sort (the whole view, not the
	/// page).
	pub fn filtered_count(&self) -> usize {
		self.inner.read().view.len()
	}

	/// Total items the pagination is computed from: the server-side count
	/// when configured, otherwise the view length.
	pub fn total_items(&self) -> usize {
		let state = self.inner.read();
		state.remote_total.unwrap_or(state.view.len())
	}

	/// The compressed page-number sequence for a pagination control.
	pub fn page_tokens(&self, max_visible: usize) -> Vec<PageToken> {
		let state = self.inner.read();
		page_range(state.current_page, state.total_pages(), max_visible)
	}

	/// A snapshot of the full filtered+sorted view.
	pub fn view_snapshot(&self) -> Vec<T> {
		self.inner.read().view.clone()
	}

	/// The current sort state.
	pub fn sort_state(&self) -> SortState {
		self.inner.read().sort.clone()
	}

	/// The current filter state.
	pub fn filter_state(&self) -> FilterState {
		self.inner.read().filters.clone()
	}

	/// The configured columns.
	pub fn columns(&self) -> Vec<Column<T>> {
		self.inner.read().columns.clone()
	}

	fn notify_page_change(&self, before: usize, after: usize) {
		if before != after {
			if let Some(callback) = &self.callbacks.on_page_change {
				callback(after);
			}
		}
	}
}

#[cfg(feature = "export")]
impl<T, I> GridEngine<T, I>
where
	T: Serialize + Clone + Send + Sync + 'static,
	I: Eq + Clone + Send + Sync + 'static,
{
	/// Exports the full filtered+sorted view as CSV, one column per
	/// configured column.
	pub fn export_csv(&self) -> Result<String> {
		let state = self.inner.read();
		crate::export::to_csv(&state.view, &state.columns)
	}

	/// Exports the full filtered+sorted view as JSON.
	pub fn export_json(&self) -> Result<String> {
		let state = self.inner.read();
		crate::export::to_json(&state.view)
	}
}

impl<T, I> Drop for GridEngine<T, I> {
	fn drop(&mut self) {
		// A timer outliving the engine would fire into a dead Weak; cancel
		// it outright so disposal is quiet.
		self.debounce.lock().cancel();
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde::Serialize;

	#[derive(Debug, Clone, Serialize)]
	struct Row {
		name: String,
	}

	fn columns() -> Vec<Column<Row>> {
		vec![Column::new("name", "Name").unwrap()]
	}

	#[test]
	fn test_new_rejects_zero_page_size() {
		let config: GridConfig<Row> = GridConfig {
			pagination: PaginationConfig::new().page_size(0),
			..GridConfig::default()
		};
		assert!(matches!(
			GridEngine::new(Vec::new(), columns(), config),
			Err(TableError::Pagination(_))
		));
	}

	#[test]
	fn test_new_rejects_unknown_default_sort_field() {
		let config: GridConfig<Row> = GridConfig {
			sort: SortConfig::new().default_sort("nonexistent", SortDirection::Ascending),
			..GridConfig::default()
		};
		assert!(matches!(
			GridEngine::new(Vec::new(), columns(), config),
			Err(TableError::UnknownColumn(_))
		));
	}

	#[test]
	fn test_new_rejects_default_filter_on_non_filterable_column() {
		let columns = vec![Column::new("name", "Name").unwrap().filterable(false)];
		let mut filters = FilterState::new();
		filters.set("name", "x");
		let config: GridConfig<Row> = GridConfig {
			filter: FilterConfig::new().default_filters(filters),
			..GridConfig::default()
		};
		assert!(matches!(
			GridEngine::new(Vec::new(), columns, config),
			Err(TableError::ColumnNotFilterable(_))
		));
	}

	#[test]
	fn test_empty_dataset_yields_one_empty_page() {
		let engine: GridEngine<Row> =
			GridEngine::new(Vec::new(), columns(), GridConfig::default()).unwrap();
		let page = engine.page();
		assert_eq!(page.total_pages, 1);
		assert!(page.is_empty());
		assert_eq!(engine.current_page(), 1);
	}
}
