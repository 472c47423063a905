//! Output Sink Port - Where the conversation's reply lines go.
//!
//! The dialogue controller never renders anything itself. Each turn it hands
//! the ordered lines it produced to a sink supplied at construction.

/// Port for displaying conversation output.
///
/// Lines are plain text without markup; one call per processed input.
pub trait OutputSink: Send + Sync {
    /// Displays the lines produced by one turn, in order.
    fn emit(&self, lines: &[String]);
}
