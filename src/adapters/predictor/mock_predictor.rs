//! Mock Predictor for testing.
//!
//! Provides a configurable mock implementation of the Predictor port,
//! allowing tests and offline runs without a model service.
//!
//! # Features
//!
//! - Pre-configured predictions (consumed in order)
//! - Simulated delays for timeout testing
//! - Error injection
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let predictor = MockPredictor::new("crop")
//!     .with_index(3)
//!     .with_delay(Duration::from_millis(100));
//!
//! let prediction = predictor.predict(&features).await?;
//! assert_eq!(prediction, Prediction::Index(3));
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::prediction::FeatureVector;
use crate::ports::{Prediction, PredictionError, Predictor};

/// Mock predictor for testing.
///
/// Clones share the response queue and call history.
#[derive(Debug, Clone)]
pub struct MockPredictor {
    name: String,
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    classes: Option<Vec<String>>,
    feature_count: Option<usize>,
    delay: Duration,
    calls: Arc<Mutex<Vec<FeatureVector>>>,
}

/// A configured mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a prediction.
    Success(Prediction),
    /// Return an error.
    Error(PredictionError),
}

impl MockPredictor {
    /// Creates a mock that predicts class 0 until configured otherwise.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            responses: Arc::new(Mutex::new(VecDeque::new())),
            classes: None,
            feature_count: None,
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queues a response.
    pub fn with_response(self, response: MockResponse) -> Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    /// Queues a class index prediction.
    pub fn with_index(self, index: i64) -> Self {
        self.with_response(MockResponse::Success(Prediction::Index(index)))
    }

    /// Queues a label prediction.
    pub fn with_label(self, label: impl Into<String>) -> Self {
        self.with_response(MockResponse::Success(Prediction::Label(label.into())))
    }

    /// Sets the class labels reported by `class_labels`.
    pub fn with_classes(mut self, classes: Vec<String>) -> Self {
        self.classes = Some(classes);
        self
    }

    /// Sets the input width reported by `feature_count`.
    pub fn with_feature_count(mut self, count: usize) -> Self {
        self.feature_count = Some(count);
        self
    }

    /// Sets simulated latency per call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns the number of calls made.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Returns the feature vectors received, in order.
    pub fn get_calls(&self) -> Vec<FeatureVector> {
        self.calls.lock().unwrap().clone()
    }

    fn next_response(&self) -> MockResponse {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(MockResponse::Success(Prediction::Index(0)))
    }
}

#[async_trait]
impl Predictor for MockPredictor {
    async fn predict(&self, features: &FeatureVector) -> Result<Prediction, PredictionError> {
        self.calls.lock().unwrap().push(features.clone());

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match self.next_response() {
            MockResponse::Success(prediction) => Ok(prediction),
            MockResponse::Error(err) => Err(err),
        }
    }

    fn class_labels(&self) -> Option<&[String]> {
        self.classes.as_deref()
    }

    fn feature_count(&self) -> Option<usize> {
        self.feature_count
    }

    fn name(&self) -> &str {
        &self.name
    }
}
