//! Scheme catalog configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where the government scheme catalog is read from.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// JSON or YAML document, chosen by extension
    #[serde(default = "default_path")]
    pub path: PathBuf,
}

impl CatalogConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("CATALOG__PATH"));
        }
        Ok(())
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

fn default_path() -> PathBuf {
    PathBuf::from("Scheme.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_scheme_json() {
        assert_eq!(CatalogConfig::default().path, PathBuf::from("Scheme.json"));
    }

    #[test]
    fn empty_path_fails_validation() {
        let config = CatalogConfig {
            path: PathBuf::new(),
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("CATALOG__PATH"))
        );
    }
}
