//! Catalog Adapters.
//!
//! Loads the government scheme catalog from disk at start-up.

mod file_loader;

pub use file_loader::{load_catalog, CatalogLoadError};
