//! In-memory output sink that records every turn.

use std::sync::{Arc, Mutex};

use crate::ports::OutputSink;

/// Sink that keeps each emitted turn for later inspection.
///
/// Clones share the same record, so a test can hand one clone to the
/// controller and read from another.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    turns: Arc<Mutex<Vec<Vec<String>>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines grouped by the turn that emitted them.
    pub fn turns(&self) -> Vec<Vec<String>> {
        self.turns.lock().unwrap().clone()
    }

    /// Lines of the most recent turn.
    pub fn last_turn(&self) -> Vec<String> {
        self.turns.lock().unwrap().last().cloned().unwrap_or_default()
    }

    /// Every line emitted so far, flattened.
    pub fn all_lines(&self) -> Vec<String> {
        self.turns.lock().unwrap().iter().flatten().cloned().collect()
    }

    pub fn turn_count(&self) -> usize {
        self.turns.lock().unwrap().len()
    }
}

impl OutputSink for RecordingSink {
    fn emit(&self, lines: &[String]) {
        self.turns.lock().unwrap().push(lines.to_vec());
    }
}
