//! Generic tabular data pipeline for LoadGrid
//!
//! This crate takes an arbitrary in-memory dataset and a declarative column
//! configuration and produces a filtered, sorted, paginated, and selectable
//! view of it. Rows are generic (`T: Serialize`); fields are read by
//! dot-separated path without requiring rows to implement any table-specific
//! interface.
//!
//! # Architecture
//!
//! The pipeline is an explicit composition of pure stages, re-run whenever
//! an input changes:
//!
//! ```text
//! dataset ── filter ── sort ──┬── paginate ── visible page
//!        (debounced input)    └── selection (full view, not the page)
//! ```
//!
//! - [`path`]: total dot-path resolution over serialized rows
//! - [`filtering`]: AND-combined per-column substring predicates
//! - [`sorting`]: stable single-field ordering, missing keys last
//! - [`selection`]: identity-based row selection across pages
//! - [`debounce`]: quiet-window delivery for keystroke-driven filter text
//! - [`engine`]: the composition, its configuration and change callbacks
//!
//! Pagination itself (page slicing and the compressed page-number display)
//! lives in the companion `loadgrid-pagination` crate and is re-exported
//! here.
//!
//! # Example
//!
//! ```rust
//! use loadgrid_tables::{Column, GridConfig, GridEngine};
//! use serde::Serialize;
//!
//! #[derive(Debug, Clone, Serialize)]
//! struct Load {
//!     reference: String,
//!     status: String,
//! }
//!
//! let dataset = vec![
//!     Load { reference: "L-100".into(), status: "AVAILABLE".into() },
//!     Load { reference: "L-101".into(), status: "CANCELLED".into() },
//! ];
//! let columns = vec![
//!     Column::new("reference", "Reference").unwrap(),
//!     Column::new("status", "Status").unwrap(),
//! ];
//!
//! let engine: GridEngine<Load> =
//!     GridEngine::new(dataset, columns, GridConfig::default()).unwrap();
//! engine.set_filter("status", "avail").unwrap();
//! assert_eq!(engine.visible_rows().len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod column;
pub mod debounce;
pub mod engine;
pub mod error;
pub mod filtering;
pub mod path;
pub mod selection;
pub mod sorting;

#[cfg(feature = "export")]
pub mod export;

// Re-exports for convenience
pub use column::{Column, Comparator};
pub use debounce::DebounceScheduler;
pub use engine::{
	FilterConfig, FilterFn, GridCallbacks, GridConfig, GridEngine, PaginationConfig,
	SelectionConfig, SortConfig, SortFn,
};
pub use error::{Result, TableError};
pub use filtering::FilterState;
pub use selection::{GetId, SelectionChange, SelectionManager, SelectionMode};
pub use sorting::{SortDirection, SortState};

pub use loadgrid_pagination::{Page, PageToken, Paginator, page_range};
