//! Output Sink Adapters.
//!
//! - `StdoutSink` - Terminal output for the interactive binary
//! - `RecordingSink` - Captures turns for tests

mod recording_sink;
mod stdout_sink;

pub use recording_sink::RecordingSink;
pub use stdout_sink::StdoutSink;
