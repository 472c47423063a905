//! Encoding domain module.
//!
//! Maps free-text categorical answers (soil type, crop, variety) to the
//! integer codes the prediction models were trained on, and maps
//! predicted class codes back to display labels.

mod code_table;
mod encoder;
mod errors;

pub use code_table::CodeTable;
pub use encoder::FeatureEncoder;
pub use errors::EncoderError;
