//! Read-only traversal of the scheme catalog.

use std::sync::Arc;

use super::selection::resolve_position;
use super::{Catalog, Department, Scheme, SelectionError};

/// Placeholder shown for detail text missing from the catalog.
pub const NOT_AVAILABLE: &str = "N/A";

/// Resolves user selections against a shared catalog.
#[derive(Debug, Clone)]
pub struct CatalogNavigator {
    catalog: Arc<Catalog>,
}

impl CatalogNavigator {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Departments with their 1-based display numbers.
    pub fn list_departments(&self) -> Vec<(usize, &str)> {
        numbered(self.catalog.departments.iter().map(|d| d.name.as_str()))
    }

    /// Resolves a 1-based department selection.
    pub fn select_department(&self, one_based: i64) -> Result<&Department, SelectionError> {
        let position = resolve_position(one_based, self.catalog.departments.len())?;
        Ok(&self.catalog.departments[position])
    }

    /// Schemes of `department` with their 1-based display numbers.
    pub fn list_schemes<'a>(&self, department: &'a Department) -> Vec<(usize, &'a str)> {
        numbered(department.schemes.iter().map(|s| s.name.as_str()))
    }

    /// Resolves a 1-based scheme selection within `department`.
    pub fn select_scheme<'a>(
        &self,
        department: &'a Department,
        one_based: i64,
    ) -> Result<&'a Scheme, SelectionError> {
        let position = resolve_position(one_based, department.schemes.len())?;
        Ok(&department.schemes[position])
    }

    /// Formats every detail block of `scheme` as display lines.
    pub fn render_detail(&self, scheme: &Scheme) -> Vec<String> {
        let mut lines = vec![format!("Scheme: {}", scheme.name)];
        for block in &scheme.input_types {
            let details = &block.details;
            lines.push(format!("* {}", block.name));
            lines.push(format!("  Description: {}", or_na(&details.description)));
            lines.push(format!("  Subsidy: {}", or_na(&details.subsidy)));
            lines.push(format!("  Eligibility: {}", or_na(&details.eligibility)));
            lines.push("  Required Documents:".to_string());
            lines.extend(
                details
                    .documents_required
                    .iter()
                    .map(|doc| format!("    - {}", doc)),
            );
        }
        lines
    }
}

fn numbered<'a>(names: impl Iterator<Item = &'a str>) -> Vec<(usize, &'a str)> {
    names.enumerate().map(|(i, name)| (i + 1, name)).collect()
}

fn or_na(text: &Option<String>) -> &str {
    text.as_deref().unwrap_or(NOT_AVAILABLE)
}
