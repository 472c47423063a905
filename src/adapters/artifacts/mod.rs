//! Model Artifact Adapters.
//!
//! Loads the category code tables exported from model training.

mod code_tables;

pub use code_tables::{load_code_tables, ArtifactLoadError};
