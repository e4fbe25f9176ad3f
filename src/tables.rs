//! Tabular pipeline module.
//!
//! Columns, path resolution, filter/sort stages, selection, debounce, and
//! the composed [`GridEngine`](loadgrid_tables::GridEngine).

pub use loadgrid_tables::*;
