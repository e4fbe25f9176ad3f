//! # LoadGrid Pagination
//!
//! Pagination support for LoadGrid data tables: slicing an in-memory dataset
//! into pages and producing the compressed page-number sequence that drives
//! pagination controls.
//!
//! ## Types
//!
//! - [`Paginator`]: validated page size, clamp-and-slice pagination
//! - [`Page`]: a single page of results plus navigation helpers
//! - [`PageToken`] / [`page_range`]: compressed page-number display
//!
//! ## Example
//!
//! ```rust
//! use loadgrid_pagination::Paginator;
//!
//! let paginator = Paginator::new(10).unwrap();
//! let items: Vec<i32> = (1..=23).collect();
//!
//! let page = paginator.paginate(&items, 3);
//! assert_eq!(page.total_pages, 3);
//! assert_eq!(page.items, vec![21, 22, 23]);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced by pagination configuration and navigation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaginationError {
	/// The configured page size was zero.
	#[error("page size must be at least 1")]
	InvalidPageSize,
	/// A navigation request pointed outside the available pages.
	#[error("{0}")]
	InvalidPage(String),
}

/// Result alias for pagination operations.
pub type Result<T> = std::result::Result<T, PaginationError>;

/// A single page of results.
///
/// Carries the materialized items of the page together with enough metadata
/// for a pagination control: the 1-indexed page number, the total page count,
/// the total item count the pages were computed from, and the page size.
#[derive(Debug, Clone)]
pub struct Page<T> {
	/// Items on this page.
	pub items: Vec<T>,
	/// Current page number (1-indexed, already clamped into range).
	pub number: usize,
	/// Total number of pages (always at least 1).
	pub total_pages: usize,
	/// Total number of items across all pages.
	pub total_items: usize,
	/// Items per page.
	pub page_size: usize,
}

impl<T> Page<T> {
	/// Returns the 1-based index of the first item on this page.
	///
	/// # Examples
	///
	/// ```
	/// use loadgrid_pagination::Paginator;
	///
	/// let items: Vec<i32> = (1..=15).collect();
	/// let page = Paginator::new(5).unwrap().paginate(&items, 2);
	/// assert_eq!(page.start_index(), 6);
	/// ```
	pub fn start_index(&self) -> usize {
		if self.items.is_empty() {
			0
		} else {
			(self.number - 1) * self.page_size + 1
		}
	}

	/// Returns the 1-based index of the last item on this page.
	///
	/// # Examples
	///
	/// ```
	/// use loadgrid_pagination::Paginator;
	///
	/// let items: Vec<i32> = (1..=13).collect();
	/// let page = Paginator::new(5).unwrap().paginate(&items, 3);
	/// assert_eq!(page.end_index(), 13);
	/// ```
	pub fn end_index(&self) -> usize {
		if self.items.is_empty() {
			0
		} else {
			self.start_index() + self.items.len() - 1
		}
	}

	/// Returns true if there is a page after this one.
	pub fn has_next(&self) -> bool {
		self.number < self.total_pages
	}

	/// Returns true if there is a page before this one.
	pub fn has_previous(&self) -> bool {
		self.number > 1
	}

	/// Returns true if there are pages other than this one.
	pub fn has_other_pages(&self) -> bool {
		self.has_previous() || self.has_next()
	}

	/// Returns the next page number.
	///
	/// # Errors
	/// Returns [`PaginationError::InvalidPage`] if this is the last page.
	pub fn next_page_number(&self) -> Result<usize> {
		if self.has_next() {
			Ok(self.number + 1)
		} else {
			Err(PaginationError::InvalidPage(
				"that page contains no results".to_string(),
			))
		}
	}

	/// Returns the previous page number.
	///
	/// # Errors
	/// Returns [`PaginationError::InvalidPage`] if this is the first page.
	pub fn previous_page_number(&self) -> Result<usize> {
		if self.has_previous() {
			Ok(self.number - 1)
		} else {
			Err(PaginationError::InvalidPage(
				"that page number is less than 1".to_string(),
			))
		}
	}

	/// Returns the number of items on this page.
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Returns true if this page contains no items.
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Get an item on this page by index.
	pub fn get(&self, index: usize) -> Option<&T> {
		self.items.get(index)
	}
}

impl<T> std::ops::Index<usize> for Page<T> {
	type Output = T;

	fn index(&self, index: usize) -> &Self::Output {
		&self.items[index]
	}
}

impl<T> IntoIterator for Page<T> {
	type Item = T;
	type IntoIter = std::vec::IntoIter<T>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.into_iter()
	}
}

impl<'a, T> IntoIterator for &'a Page<T> {
	type Item = &'a T;
	type IntoIter = std::slice::Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.iter()
	}
}

/// Clamp-and-slice pagination over a materialized dataset.
///
/// A `Paginator` never errors at pagination time: out-of-range page numbers
/// are clamped into `[1, total_pages]` and an empty dataset collapses to a
/// single empty page. The only rejected input is a zero page size, refused
/// at construction.
///
/// # Examples
///
/// ```
/// use loadgrid_pagination::Paginator;
///
/// let paginator = Paginator::new(10).unwrap();
/// let items: Vec<i32> = (1..=23).collect();
///
/// // Out-of-range page numbers clamp to the nearest valid page.
/// let page = paginator.paginate(&items, 99);
/// assert_eq!(page.number, 3);
/// assert_eq!(page.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Paginator {
	page_size: usize,
}

impl Paginator {
	/// Creates a paginator with the given page size.
	///
	/// # Errors
	/// Returns [`PaginationError::InvalidPageSize`] if `page_size` is zero.
	pub fn new(page_size: usize) -> Result<Self> {
		if page_size == 0 {
			return Err(PaginationError::InvalidPageSize);
		}
		Ok(Self { page_size })
	}

	/// Returns the configured page size.
	pub fn page_size(&self) -> usize {
		self.page_size
	}

	/// Returns the number of pages needed for `total_items`.
	///
	/// Always at least 1, so an empty dataset still has one (empty) page.
	///
	/// # Examples
	///
	/// ```
	/// use loadgrid_pagination::Paginator;
	///
	/// let paginator = Paginator::new(10).unwrap();
	/// assert_eq!(paginator.total_pages(0), 1);
	/// assert_eq!(paginator.total_pages(10), 1);
	/// assert_eq!(paginator.total_pages(23), 3);
	/// ```
	pub fn total_pages(&self, total_items: usize) -> usize {
		total_items.div_ceil(self.page_size).max(1)
	}

	/// Slices `rows` into the page indicated by `current_page`.
	///
	/// `current_page` is clamped into `[1, total_pages]` before slicing.
	pub fn paginate<T: Clone>(&self, rows: &[T], current_page: usize) -> Page<T> {
		let total_items = rows.len();
		let total_pages = self.total_pages(total_items);
		let number = current_page.clamp(1, total_pages);

		let start = (number - 1) * self.page_size;
		let end = (start + self.page_size).min(total_items);
		let items = if start < total_items {
			rows[start..end].to_vec()
		} else {
			Vec::new()
		};

		Page {
			items,
			number,
			total_pages,
			total_items,
			page_size: self.page_size,
		}
	}

	/// Paginates against a caller-supplied total, without slicing locally.
	///
	/// Used when the dataset is paged on a server: `rows` holds only the
	/// already-materialized page while `total_items` is the full count known
	/// to exist. The page count is derived from `total_items` and `rows` is
	/// passed through unsliced.
	///
	/// # Examples
	///
	/// ```
	/// use loadgrid_pagination::Paginator;
	///
	/// // 10 rows materialized locally, 95 known to the server.
	/// let rows: Vec<i32> = (1..=10).collect();
	/// let page = Paginator::new(10).unwrap().paginate_remote(&rows, 4, 95);
	/// assert_eq!(page.total_pages, 10);
	/// assert_eq!(page.number, 4);
	/// assert_eq!(page.len(), 10);
	/// ```
	pub fn paginate_remote<T: Clone>(
		&self,
		rows: &[T],
		current_page: usize,
		total_items: usize,
	) -> Page<T> {
		let total_pages = self.total_pages(total_items);
		Page {
			items: rows.to_vec(),
			number: current_page.clamp(1, total_pages),
			total_pages,
			total_items,
			page_size: self.page_size,
		}
	}
}

/// One entry in a compressed page-number sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageToken {
	/// A concrete, navigable page number.
	Page(usize),
	/// A gap of elided pages.
	Ellipsis,
}

/// Computes the compressed page-number sequence for a pagination control.
///
/// When every page fits (`total_pages <= max_visible`) the sequence is simply
/// `1..=total_pages`. Otherwise the first and last pages are always present
/// as anchors, with a window of page numbers positioned by where
/// `current_page` falls:
///
/// - near the start, the window is anchored at page 1;
/// - near the end, the window is anchored at the last page;
/// - in the middle, the window is centered on `current_page`.
///
/// Each gap between an anchor and the window is rendered as a single
/// [`PageToken::Ellipsis`], except a gap of exactly one page, which is
/// rendered as that page number (an ellipsis standing for one page would
/// occupy the same slot while hiding a directly reachable page).
///
/// Elision needs at least five slots (two anchors, a window page, and up to
/// two gap markers), so `max_visible` below 5 is treated as 5 whenever
/// `total_pages > max_visible`. The returned sequence never exceeds the
/// effective `max_visible`, contains no duplicate page, and is strictly
/// increasing.
///
/// # Examples
///
/// ```
/// use loadgrid_pagination::{PageToken, page_range};
///
/// let tokens = page_range(10, 20, 7);
/// assert_eq!(
///     tokens,
///     vec![
///         PageToken::Page(1),
///         PageToken::Ellipsis,
///         PageToken::Page(9),
///         PageToken::Page(10),
///         PageToken::Page(11),
///         PageToken::Ellipsis,
///         PageToken::Page(20),
///     ]
/// );
/// ```
pub fn page_range(current_page: usize, total_pages: usize, max_visible: usize) -> Vec<PageToken> {
	if total_pages == 0 {
		return Vec::new();
	}
	if total_pages <= max_visible {
		return (1..=total_pages).map(PageToken::Page).collect();
	}

	// Two anchors + window + up to two gap markers need five slots.
	let max_visible = max_visible.max(5);
	if total_pages <= max_visible {
		return (1..=total_pages).map(PageToken::Page).collect();
	}

	let current = current_page.clamp(1, total_pages);
	// Window size when the window absorbs one anchor (start/end cases).
	let edge_window = max_visible - 2;
	// How close to an anchor the current page must be for its edge window
	// to still contain it: ceil((max_visible - 2) / 2) + 1.
	let edge_span = (max_visible - 1) / 2 + 1;

	let mut tokens = Vec::with_capacity(max_visible);
	if current <= edge_span {
		for page in 1..=edge_window {
			tokens.push(PageToken::Page(page));
		}
		push_gap(&mut tokens, edge_window + 1, total_pages - 1);
		tokens.push(PageToken::Page(total_pages));
	} else if current > total_pages - edge_span {
		tokens.push(PageToken::Page(1));
		let window_start = total_pages - edge_window + 1;
		push_gap(&mut tokens, 2, window_start - 1);
		for page in window_start..=total_pages {
			tokens.push(PageToken::Page(page));
		}
	} else {
		let window = max_visible - 4;
		let start = current - (window - 1) / 2;
		let end = start + window - 1;
		tokens.push(PageToken::Page(1));
		push_gap(&mut tokens, 2, start - 1);
		for page in start..=end {
			tokens.push(PageToken::Page(page));
		}
		push_gap(&mut tokens, end + 1, total_pages - 1);
		tokens.push(PageToken::Page(total_pages));
	}
	tokens
}

/// Pushes a token covering the elided pages `from..=to`.
///
/// An empty gap pushes nothing; a one-page gap pushes the page itself.
fn push_gap(tokens: &mut Vec<PageToken>, from: usize, to: usize) {
	if from > to {
		return;
	}
	if from == to {
		tokens.push(PageToken::Page(from));
	} else {
		tokens.push(PageToken::Ellipsis);
	}
}
