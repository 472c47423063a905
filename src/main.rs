//! Agro Aid console host.
//!
//! Loads configuration and artifacts, then feeds stdin lines to a single
//! dialogue until `quit` or end of input.

use std::sync::Arc;

use secrecy::ExposeSecret;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use agro_aid::adapters::{
    load_catalog, load_code_tables, ArtifactLoadError, CatalogLoadError, HttpPredictor,
    HttpPredictorConfig, StdoutSink,
};
use agro_aid::application::{DialogueController, DialogueDependencies};
use agro_aid::config::{AppConfig, ConfigError, LoggingConfig, ModelsConfig};
use agro_aid::domain::dialogue::messages;
use agro_aid::domain::prediction::{CROP_FEATURE_COUNT, FERTILIZER_FEATURE_COUNT};
use agro_aid::ports::{OutputSink, PredictionError};

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("scheme catalog: {0}")]
    Catalog(#[from] CatalogLoadError),

    #[error("code tables: {0}")]
    Artifacts(#[from] ArtifactLoadError),

    #[error("predictor setup: {0}")]
    Predictor(#[from] PredictionError),

    #[error("reading input: {0}")]
    Input(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("agro-aid: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    init_tracing(&config.logging);
    config.validate().map_err(ConfigError::from)?;

    let catalog = load_catalog(&config.catalog.path).await?;
    let encoder = load_code_tables(&config.models.code_tables_path).await?;
    let (crop_predictor, fertilizer_predictor) = build_predictors(&config.models)?;

    let deps = DialogueDependencies {
        catalog: Arc::new(catalog),
        encoder: Arc::new(encoder),
        crop_predictor: Arc::new(crop_predictor),
        fertilizer_predictor: Arc::new(fertilizer_predictor),
        prediction_timeout: config.models.timeout(),
    };
    let sink = Arc::new(StdoutSink::default());
    let mut controller = DialogueController::new(deps, sink.clone());
    info!(conversation_id = %controller.id(), "Conversation started");
    controller.start();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().eq_ignore_ascii_case("quit") {
            sink.emit(&[messages::GOODBYE.to_string()]);
            break;
        }
        controller.handle_input(&line).await;
    }

    info!(conversation_id = %controller.id(), "Conversation ended");
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(logging.env_filter())
        .with_writer(std::io::stderr);

    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn build_predictors(models: &ModelsConfig) -> Result<(HttpPredictor, HttpPredictor), StartupError> {
    let crop_endpoint = models.crop_endpoint.clone().unwrap_or_default();
    let fertilizer_endpoint = models.fertilizer_endpoint.clone().unwrap_or_default();

    let mut crop = HttpPredictorConfig::new("crop", crop_endpoint)
        .with_timeout(models.timeout())
        .with_feature_count(CROP_FEATURE_COUNT);
    let mut fertilizer = HttpPredictorConfig::new("fertilizer", fertilizer_endpoint)
        .with_timeout(models.timeout())
        .with_feature_count(FERTILIZER_FEATURE_COUNT);

    if let Some(key) = &models.api_key {
        crop = crop.with_api_key(key.expose_secret().clone());
        fertilizer = fertilizer.with_api_key(key.expose_secret().clone());
    }
    match &models.fertilizer_classes {
        Some(classes) => fertilizer = fertilizer.with_classes(classes.clone()),
        None => warn!("No fertilizer class names configured; indices will be shown as-is"),
    }

    Ok((HttpPredictor::new(crop)?, HttpPredictor::new(fertilizer)?))
}
