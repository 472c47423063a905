//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the dialogue core and the outside world. Adapters implement these ports.
//!
//! - `Predictor` - A pre-trained classifier (crop or fertilizer model)
//! - `OutputSink` - Destination for the lines a conversation turn produces

mod output_sink;
mod predictor;

pub use output_sink::OutputSink;
pub use predictor::{Prediction, PredictionError, Predictor};
