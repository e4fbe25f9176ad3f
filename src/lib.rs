//! # LoadGrid
//!
//! A generic tabular data pipeline for freight-matching UIs.
//!
//! LoadGrid takes an arbitrary in-memory dataset and a declarative column
//! configuration and produces a filtered, sorted, paginated, and selectable
//! view of it, together with the compressed page-number sequence pagination
//! controls render and a debounce scheduler for keystroke-driven filter
//! input. It contains no rendering, routing, networking, or persistence:
//! those belong to the applications feeding it data and configuration.
//!
//! ## Core Principles
//!
//! - **Explicit pipeline**: filter → sort → paginate is a composition of
//!   pure functions re-run on every input change, not framework-specific
//!   dependency tracking
//! - **Generic rows**: fields are read by dot-separated path over the serde
//!   value model; identity comes from an injected accessor, never an assumed
//!   `id` field
//! - **Clamp, don't crash**: out-of-range pages, missing fields, and empty
//!   datasets are ordinary inputs, not errors
//!
//! ## Example
//!
//! ```rust
//! use loadgrid::{Column, GridConfig, GridEngine, SortDirection};
//! use serde::Serialize;
//!
//! #[derive(Debug, Clone, Serialize)]
//! struct Load {
//!     reference: String,
//!     status: String,
//!     rate: u32,
//! }
//!
//! let dataset = vec![
//!     Load { reference: "L-100".into(), status: "AVAILABLE".into(), rate: 950 },
//!     Load { reference: "L-101".into(), status: "CANCELLED".into(), rate: 1050 },
//! ];
//! let columns = vec![
//!     Column::new("reference", "Reference").unwrap(),
//!     Column::new("status", "Status").unwrap(),
//!     Column::new("rate", "Rate").unwrap(),
//! ];
//!
//! let engine: GridEngine<Load> =
//!     GridEngine::new(dataset, columns, GridConfig::default()).unwrap();
//! engine.set_sort("rate", SortDirection::Descending).unwrap();
//! assert_eq!(engine.visible_rows()[0].reference, "L-101");
//! ```
//!
//! ## Feature Flags
//!
//! - `export` - CSV/JSON export of the filtered+sorted view

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod pagination;
pub mod tables;

// Key type re-exports
pub use loadgrid_pagination::{Page, PageToken, Paginator, page_range};
pub use loadgrid_tables::{
	Column, DebounceScheduler, FilterConfig, FilterState, GridCallbacks, GridConfig, GridEngine,
	PaginationConfig, SelectionChange, SelectionConfig, SelectionManager, SelectionMode,
	SortConfig, SortDirection, SortState, TableError,
};
