//! Scheme catalog loading from the published scheme document.
//!
//! The document is JSON; `.yaml` / `.yml` files are accepted as well so
//! curated copies can be kept in a friendlier format.

use std::path::Path;
use thiserror::Error;
use tokio::fs;

use crate::domain::catalog::Catalog;
use crate::domain::foundation::ValidationError;

/// Errors loading the catalog at start-up.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML catalog: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("catalog failed validation: {0}")]
    Invalid(#[from] ValidationError),
}

/// Document formats the loader understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CatalogFormat {
    Json,
    Yaml,
}

impl CatalogFormat {
    fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                CatalogFormat::Yaml
            }
            _ => CatalogFormat::Json,
        }
    }
}

/// Reads, parses and validates the catalog at `path`.
pub async fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog, CatalogLoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .await
        .map_err(|source| CatalogLoadError::Io {
            path: path.display().to_string(),
            source,
        })?;

    let catalog = parse_catalog(&text, CatalogFormat::for_path(path))?;
    tracing::info!(
        path = %path.display(),
        departments = catalog.departments.len(),
        "Loaded scheme catalog"
    );
    Ok(catalog)
}

fn parse_catalog(text: &str, format: CatalogFormat) -> Result<Catalog, CatalogLoadError> {
    let catalog: Catalog = match format {
        CatalogFormat::Json => serde_json::from_str(text)?,
        CatalogFormat::Yaml => serde_yaml::from_str(text)?,
    };
    catalog.validate()?;
    Ok(catalog)
}
