//! Model artifact and predictor configuration

use secrecy::Secret;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::error::ValidationError;

const MAX_TIMEOUT_SECS: u64 = 300;

/// Predictor endpoints and the code tables shared by both models.
#[derive(Debug, Deserialize)]
pub struct ModelsConfig {
    /// Label encoder classes exported at training time
    #[serde(default = "default_code_tables_path")]
    pub code_tables_path: PathBuf,

    /// Crop model inference URL
    pub crop_endpoint: Option<String>,

    /// Fertilizer model inference URL
    pub fertilizer_endpoint: Option<String>,

    /// Fertilizer class names, in model output order
    pub fertilizer_classes: Option<Vec<String>>,

    /// Bearer token sent to both endpoints
    pub api_key: Option<Secret<String>>,

    /// Per-call prediction timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl ModelsConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_endpoint(self.crop_endpoint.as_deref(), "MODELS__CROP_ENDPOINT")?;
        check_endpoint(
            self.fertilizer_endpoint.as_deref(),
            "MODELS__FERTILIZER_ENDPOINT",
        )?;

        if self.code_tables_path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("MODELS__CODE_TABLES_PATH"));
        }

        if !(1..=MAX_TIMEOUT_SECS).contains(&self.timeout_secs) {
            return Err(ValidationError::InvalidTimeout);
        }

        Ok(())
    }
}

fn check_endpoint(endpoint: Option<&str>, key: &'static str) -> Result<(), ValidationError> {
    match endpoint {
        None | Some("") => Err(ValidationError::MissingRequired(key)),
        Some(url) if url.starts_with("http://") || url.starts_with("https://") => Ok(()),
        Some(_) => Err(ValidationError::InvalidEndpoint(key)),
    }
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            code_tables_path: default_code_tables_path(),
            crop_endpoint: None,
            fertilizer_endpoint: None,
            fertilizer_classes: None,
            api_key: None,
            timeout_secs: default_timeout(),
        }
    }
}

fn default_code_tables_path() -> PathBuf {
    PathBuf::from("label_encoders.json")
}

fn default_timeout() -> u64 {
    10
}
