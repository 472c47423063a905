//! HTTP Predictor - Implementation of Predictor for a model serving endpoint.
//!
//! The pre-trained models are served out of process. Each call POSTs the
//! feature vector and reads back a single class.
//!
//! # Wire format
//!
//! ```text
//! POST <endpoint>
//! {"features": [26.0, 52.0, 38.0, 2.0, 0.0, 37.0, 0.0, 0.0]}
//!
//! 200 OK
//! {"prediction": 4}          or          {"prediction": "Urea"}
//! ```
//!
//! # Configuration
//!
//! ```ignore
//! let config = HttpPredictorConfig::new("fertilizer", "http://localhost:9000/fertilizer")
//!     .with_api_key("token")
//!     .with_classes(vec!["10-26-26".into(), "DAP".into()]);
//!
//! let predictor = HttpPredictor::new(config)?;
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::prediction::FeatureVector;
use crate::ports::{Prediction, PredictionError, Predictor};

/// Configuration for one HTTP-served model.
#[derive(Debug)]
pub struct HttpPredictorConfig {
    /// Short name for logs.
    pub name: String,
    /// Full URL that accepts prediction requests.
    pub endpoint: String,
    /// Optional bearer token.
    api_key: Option<Secret<String>>,
    /// Transport-level timeout.
    pub timeout: Duration,
    /// Ordered class labels of the served model, if known.
    pub classes: Option<Vec<String>>,
    /// Input width of the served model, if known.
    pub feature_count: Option<usize>,
}

impl HttpPredictorConfig {
    pub fn new(name: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            endpoint: endpoint.into(),
            api_key: None,
            timeout: Duration::from_secs(10),
            classes: None,
            feature_count: None,
        }
    }

    /// Sets the bearer token.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(Secret::new(api_key.into()));
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the input width the served model expects.
    pub fn with_feature_count(mut self, count: usize) -> Self {
        self.feature_count = Some(count);
        self
    }

    /// Sets the served model's class labels.
    pub fn with_classes(mut self, classes: Vec<String>) -> Self {
        self.classes = Some(classes);
        self
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_ref().map(|key| key.expose_secret().as_str())
    }
}

/// Predictor backed by an HTTP model server.
pub struct HttpPredictor {
    config: HttpPredictorConfig,
    client: Client,
}

impl HttpPredictor {
    pub fn new(config: HttpPredictorConfig) -> Result<Self, PredictionError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| PredictionError::unavailable(format!("HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    async fn send_request(&self, features: &FeatureVector) -> Result<Response, PredictionError> {
        let mut request = self
            .client
            .post(&self.config.endpoint)
            .json(&PredictRequest { features });
        if let Some(key) = self.config.api_key() {
            request = request.bearer_auth(key);
        }

        request.send().await.map_err(|e| {
            if e.is_timeout() {
                PredictionError::Timeout {
                    timeout: self.config.timeout,
                }
            } else if e.is_connect() {
                PredictionError::network(format!("Connection failed: {}", e))
            } else {
                PredictionError::network(e.to_string())
            }
        })
    }

    async fn handle_response_status(&self, response: Response) -> Result<Response, PredictionError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(status_error(status.as_u16(), &body))
    }
}

impl std::fmt::Debug for HttpPredictor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpPredictor")
            .field("name", &self.config.name)
            .field("endpoint", &self.config.endpoint)
            .finish()
    }
}

#[async_trait]
impl Predictor for HttpPredictor {
    async fn predict(&self, features: &FeatureVector) -> Result<Prediction, PredictionError> {
        let response = self.send_request(features).await?;
        let response = self.handle_response_status(response).await?;

        let body = response
            .text()
            .await
            .map_err(|e| PredictionError::network(e.to_string()))?;
        parse_body(&body)
    }

    fn class_labels(&self) -> Option<&[String]> {
        self.config.classes.as_deref()
    }

    fn name(&self) -> &str {
        &self.config.name
    }

    fn feature_count(&self) -> Option<usize> {
        self.config.feature_count
    }
}

#[derive(Debug, Serialize)]
struct PredictRequest<'a> {
    features: &'a FeatureVector,
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    prediction: Prediction,
}

fn parse_body(body: &str) -> Result<Prediction, PredictionError> {
    serde_json::from_str::<PredictResponse>(body)
        .map(|r| r.prediction)
        .map_err(|e| PredictionError::parse(format!("{}: {}", e, body)))
}

fn status_error(status: u16, body: &str) -> PredictionError {
    match status {
        400 | 422 => PredictionError::parse(format!("model rejected features: {}", body)),
        401 | 403 => PredictionError::unavailable(format!("not authorized ({})", status)),
        408 | 504 => PredictionError::unavailable(format!("gateway timeout ({})", status)),
        500..=599 => PredictionError::unavailable(format!("Server error {}: {}", status, body)),
        _ => PredictionError::network(format!("Unexpected status {}: {}", status, body)),
    }
}
