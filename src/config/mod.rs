//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables carry the `AGRO_AID` prefix and
//! nested values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use agro_aid::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Catalog at {}", config.catalog.path.display());
//! ```

mod catalog;
mod error;
mod logging;
mod models;

pub use catalog::CatalogConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use models::ModelsConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Scheme catalog location
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Code tables and predictor endpoints
    #[serde(default)]
    pub models: ModelsConfig,

    /// Tracing subscriber settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads `.env` if present, then reads `AGRO_AID__*` variables:
    ///
    /// - `AGRO_AID__MODELS__CROP_ENDPOINT=...` -> `models.crop_endpoint`
    /// - `AGRO_AID__MODELS__FERTILIZER_CLASSES=DAP,Urea` -> `models.fertilizer_classes`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("AGRO_AID")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("models.fertilizer_classes"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first section that is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.catalog.validate()?;
        self.models.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
