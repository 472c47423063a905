//! Code table loading for the feature encoder.
//!
//! Expects a JSON object mapping each encoded column to the ordered class
//! list its label encoder was fitted with:
//!
//! ```text
//! {
//!   "Soil_Type": ["Black", "Clayey", "Loamy", "Red", "Sandy"],
//!   "Variety":   ["Basmati", "Hybrid", ...],
//!   "Crop":      ["Cotton", "Maize", "Rice", ...]
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tokio::fs;

use crate::domain::encoding::{CodeTable, FeatureEncoder};
use crate::domain::form::Field;

/// Tables every flow depends on.
const REQUIRED_TABLES: [Field; 3] = [Field::SoilType, Field::Variety, Field::Crop];

/// Errors loading model artifacts at start-up.
#[derive(Debug, Error)]
pub enum ArtifactLoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid code table document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("code table for {0} is missing")]
    MissingTable(Field),

    #[error("code table for {0} is empty")]
    EmptyTable(Field),
}

/// Reads the code tables at `path` into an encoder.
pub async fn load_code_tables(path: impl AsRef<Path>) -> Result<FeatureEncoder, ArtifactLoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .await
        .map_err(|source| ArtifactLoadError::Io {
            path: path.display().to_string(),
            source,
        })?;

    let encoder = parse_code_tables(&text)?;
    tracing::info!(path = %path.display(), "Loaded code tables");
    Ok(encoder)
}

fn parse_code_tables(text: &str) -> Result<FeatureEncoder, ArtifactLoadError> {
    let raw: HashMap<String, Vec<String>> = serde_json::from_str(text)?;

    let encoder: FeatureEncoder = raw
        .into_iter()
        .filter_map(|(name, labels)| match name.parse::<Field>() {
            Ok(field) if field.is_categorical() => Some((field, CodeTable::new(labels))),
            _ => {
                tracing::debug!(table = %name, "Ignoring code table with no matching field");
                None
            }
        })
        .collect();

    for field in REQUIRED_TABLES {
        let table = encoder
            .table(field)
            .map_err(|_| ArtifactLoadError::MissingTable(field))?;
        if table.is_empty() {
            return Err(ArtifactLoadError::EmptyTable(field));
        }
    }

    Ok(encoder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TABLES: &str = r#"{
        "Soil_Type": ["Black", "Clayey", "Loamy"],
        "Variety": ["Basmati", "Hybrid"],
        "Crop": ["Maize", "Rice"],
        "Season": ["Kharif", "Rabi"]
    }"#;

    #[test]
    fn parses_all_required_tables() {
        let encoder = parse_code_tables(TABLES).unwrap();
        assert_eq!(encoder.encode(Field::SoilType, "Loamy"), Ok(2));
        assert_eq!(encoder.decode(Field::Crop, 1), Ok("Rice"));
    }

    #[test]
    fn ignores_unrelated_tables() {
        let encoder = parse_code_tables(TABLES).unwrap();
        assert!(encoder.table(Field::Nitrogen).is_err());
    }

    #[test]
    fn missing_required_table_is_an_error() {
        let result = parse_code_tables(r#"{"Soil_Type": ["Black"], "Crop": ["Rice"]}"#);
        assert!(matches!(
            result,
            Err(ArtifactLoadError::MissingTable(Field::Variety))
        ));
    }

    #[test]
    fn empty_required_table_is_an_error() {
        let result =
            parse_code_tables(r#"{"Soil_Type": [], "Variety": ["Basmati"], "Crop": ["Rice"]}"#);
        assert!(matches!(
            result,
            Err(ArtifactLoadError::EmptyTable(Field::SoilType))
        ));
    }

    #[tokio::test]
    async fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TABLES.as_bytes()).unwrap();

        let encoder = load_code_tables(file.path()).await.unwrap();
        assert_eq!(encoder.encode(Field::Variety, "Hybrid"), Ok(1));
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        assert!(matches!(
            load_code_tables("/nonexistent/label_encoders.json").await,
            Err(ArtifactLoadError::Io { .. })
        ));
    }
}
