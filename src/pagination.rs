//! Pagination module.
//!
//! Page slicing, navigation metadata, and the compressed page-number
//! sequence for pagination controls.

pub use loadgrid_pagination::*;
