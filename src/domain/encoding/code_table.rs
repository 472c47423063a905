//! Bidirectional lookup between category labels and integer codes.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Label-encoder style code table.
///
/// A label's code is its position in the ordered class list, exactly as
/// the training pipeline assigned it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct CodeTable {
    labels: Vec<String>,
    codes: HashMap<String, i64>,
}

impl CodeTable {
    /// Builds a table from the ordered class labels.
    ///
    /// If a label appears twice, the first position wins.
    pub fn new(labels: Vec<String>) -> Self {
        let mut codes = HashMap::with_capacity(labels.len());
        for (position, label) in labels.iter().enumerate() {
            codes.entry(label.clone()).or_insert(position as i64);
        }
        Self { labels, codes }
    }

    /// Returns the code for `label`.
    pub fn code_of(&self, label: &str) -> Option<i64> {
        self.codes.get(label).copied()
    }

    /// Returns the label for `code`.
    pub fn label_of(&self, code: i64) -> Option<&str> {
        usize::try_from(code)
            .ok()
            .and_then(|idx| self.labels.get(idx))
            .map(String::as_str)
    }

    /// Returns the ordered class labels.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl From<Vec<String>> for CodeTable {
    fn from(labels: Vec<String>) -> Self {
        Self::new(labels)
    }
}

impl From<CodeTable> for Vec<String> {
    fn from(table: CodeTable) -> Self {
        table.labels
    }
}
