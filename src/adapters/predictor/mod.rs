//! Predictor Adapters.
//!
//! Implementations of the Predictor port.
//!
//! - `MockPredictor` - Configurable mock for testing and offline runs
//! - `HttpPredictor` - Model served behind an HTTP endpoint

mod http_predictor;
mod mock_predictor;

pub use http_predictor::{HttpPredictor, HttpPredictorConfig};
pub use mock_predictor::{MockPredictor, MockResponse};
