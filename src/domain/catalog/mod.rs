//! Catalog domain module.
//!
//! The read-only department → scheme → detail tree and the navigator
//! that resolves 1-based user selections against it.

mod model;
mod navigator;
mod selection;

pub use model::{Catalog, Department, InputType, Scheme, SchemeDetails};
pub use navigator::{CatalogNavigator, NOT_AVAILABLE};
pub use selection::{parse_selection, resolve_position, SelectionError};
