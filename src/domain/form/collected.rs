//! Raw answers gathered while a form is in progress.

use super::Field;

/// Raw text answers keyed by field, kept in question order.
///
/// Values are stored exactly as typed; conversion and encoding happen
/// only once the whole form is complete.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectedValues {
    entries: Vec<(Field, String)>,
}

impl CollectedValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` for `field`, replacing any earlier answer in place.
    pub fn insert(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(f, _)| *f == field) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((field, value)),
        }
    }

    /// Returns the raw answer for `field`.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, v)| v.as_str())
    }

    /// Iterates answers in the order they were given.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.entries.iter().map(|(f, v)| (*f, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
