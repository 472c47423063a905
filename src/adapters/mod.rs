//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the dialogue core to external systems:
//! - `predictor` - Model predictors (HTTP-served, mock)
//! - `sink` - Output sinks (stdout, recording)
//! - `catalog` - Scheme catalog loading
//! - `artifacts` - Code table loading

pub mod artifacts;
pub mod catalog;
pub mod predictor;
pub mod sink;

pub use artifacts::{load_code_tables, ArtifactLoadError};
pub use catalog::{load_catalog, CatalogLoadError};
pub use predictor::{HttpPredictor, HttpPredictorConfig, MockPredictor, MockResponse};
pub use sink::{RecordingSink, StdoutSink};
