//! Row selection tracking.
//!
//! Selection is tracked by row *identity*, produced by an injected accessor
//! rather than an assumed `id` field, and is resolved against the full
//! filtered+sorted dataset rather than the visible page, so selections stay
//! meaningful across page navigation.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Whether one or many rows may be selected at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionMode {
	/// At most one selected identity; selecting replaces the previous one.
	Single,
	/// An arbitrary set of selected identities.
	Multiple,
}

/// Identity accessor injected by the caller.
pub type GetId<T, I> = Arc<dyn Fn(&T) -> I + Send + Sync>;

/// Snapshot handed to selection-change observers: the selected identities
/// plus the rows they currently resolve to, in view order.
#[derive(Debug, Clone)]
pub struct SelectionChange<T, I> {
	/// Selected identities in selection order.
	pub ids: Vec<I>,
	/// The selected rows present in the current view, in view order.
	pub rows: Vec<T>,
}

/// Tracks selected row identities against an injected identity function.
///
/// Identities that disappear from the view (for example because a filter
/// excluded their rows) are **retained** until explicitly deselected or
/// [`cleared`](SelectionManager::clear); they simply resolve to no row while
/// absent. Filtering is a transient lens over the same dataset, so a
/// keystroke-driven filter must not destroy a selection.
pub struct SelectionManager<T, I> {
	mode: SelectionMode,
	selected: Vec<I>,
	get_id: GetId<T, I>,
}

impl<T, I> SelectionManager<T, I>
where
	I: Eq + Clone,
{
	/// Creates an empty selection in the given mode.
	pub fn new(mode: SelectionMode, get_id: GetId<T, I>) -> Self {
		Self {
			mode,
			selected: Vec::new(),
			get_id,
		}
	}

	/// Creates a selection pre-populated with `initial` identities.
	///
	/// Duplicates are dropped; in [`SelectionMode::Single`] only the last
	/// identity is kept, matching the replace-on-select rule.
	pub fn with_initial(mode: SelectionMode, get_id: GetId<T, I>, initial: Vec<I>) -> Self {
		let mut manager = Self::new(mode, get_id);
		for id in initial {
			manager.toggle(id, true);
		}
		manager
	}

	/// The configured selection mode.
	pub fn mode(&self) -> SelectionMode {
		self.mode
	}

	/// The identity of `row` under the injected accessor.
	pub fn row_id(&self, row: &T) -> I {
		(self.get_id)(row)
	}

	/// Selects (`true`) or deselects (`false`) `id`.
	///
	/// In single mode a select replaces the existing selection. Returns
	/// whether the selection actually changed.
	pub fn toggle(&mut self, id: I, selected: bool) -> bool {
		if selected {
			if self.selected.contains(&id) {
				return false;
			}
			if self.mode == SelectionMode::Single {
				self.selected.clear();
			}
			self.selected.push(id);
			true
		} else {
			let before = self.selected.len();
			self.selected.retain(|existing| existing != &id);
			self.selected.len() != before
		}
	}

	/// Toggles selection for `row` via its identity.
	pub fn toggle_row(&mut self, row: &T, selected: bool) -> bool {
		let id = self.row_id(row);
		self.toggle(id, selected)
	}

	/// True when `id` is selected.
	pub fn is_selected(&self, id: &I) -> bool {
		self.selected.contains(id)
	}

	/// True when `row`'s identity is selected.
	pub fn is_row_selected(&self, row: &T) -> bool {
		self.is_selected(&self.row_id(row))
	}

	/// Selected identities in selection order.
	pub fn selected_ids(&self) -> &[I] {
		&self.selected
	}

	/// Deselects everything. Returns whether anything was selected.
	pub fn clear(&mut self) -> bool {
		let had_selection = !self.selected.is_empty();
		self.selected.clear();
		had_selection
	}

	/// Resolves the selected identities against `view`, in view order.
	///
	/// `view` should be the full filtered+sorted dataset, not a page slice.
	pub fn selected_items<'a>(&self, view: &'a [T]) -> Vec<&'a T> {
		view.iter().filter(|row| self.is_row_selected(row)).collect()
	}

	/// Builds the change snapshot for observers.
	pub fn change(&self, view: &[T]) -> SelectionChange<T, I>
	where
		T: Clone,
	{
		SelectionChange {
			ids: self.selected.clone(),
			rows: self
				.selected_items(view)
				.into_iter()
				.cloned()
				.collect(),
		}
	}
}

impl<T, I: std::fmt::Debug> std::fmt::Debug for SelectionManager<T, I> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("SelectionManager")
			.field("mode", &self.mode)
			.field("selected", &self.selected)
			.finish_non_exhaustive()
	}
}
