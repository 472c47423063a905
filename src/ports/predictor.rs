//! Predictor Port - Interface for pre-trained model integrations.
//!
//! A predictor takes an ordered numeric feature vector and returns a single
//! class. The crop and fertilizer models are both exposed through this port;
//! how they are hosted (in-process, behind HTTP, mocked) is an adapter concern.
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct AlwaysFirst;
//!
//! #[async_trait]
//! impl Predictor for AlwaysFirst {
//!     async fn predict(&self, _features: &FeatureVector) -> Result<Prediction, PredictionError> {
//!         Ok(Prediction::Index(0))
//!     }
//!
//!     fn class_labels(&self) -> Option<&[String]> {
//!         None
//!     }
//!
//!     fn name(&self) -> &str {
//!         "always-first"
//!     }
//! }
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

use crate::domain::prediction::FeatureVector;

/// Port for a single pre-trained classifier.
#[async_trait]
pub trait Predictor: Send + Sync {
    /// Classifies one feature vector.
    async fn predict(&self, features: &FeatureVector) -> Result<Prediction, PredictionError>;

    /// Ordered class labels the model was trained on, if known.
    ///
    /// Used to resolve a predicted class index when no shared code table
    /// covers the label space.
    fn class_labels(&self) -> Option<&[String]>;

    /// Short name for logs.
    fn name(&self) -> &str;

    /// Number of columns the model was trained on, if known.
    fn feature_count(&self) -> Option<usize> {
        None
    }
}

/// Raw output of a predictor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Prediction {
    /// Class index into the model's label space.
    Index(i64),
    /// Class label, when the model already resolves it.
    Label(String),
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prediction::Index(idx) => write!(f, "{}", idx),
            Prediction::Label(label) => write!(f, "{}", label),
        }
    }
}

/// Errors from a predictor call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredictionError {
    /// Call exceeded the configured wait.
    #[error("prediction timed out after {}ms", timeout.as_millis())]
    Timeout {
        /// Configured timeout.
        timeout: Duration,
    },

    /// Model service is down or refused the request.
    #[error("predictor unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Model response could not be understood.
    #[error("parse error: {0}")]
    Parse(String),

    /// Feature vector has the wrong shape for this model.
    #[error("expected {expected} features, got {actual}")]
    FeatureCount {
        /// Columns the model was trained on.
        expected: usize,
        /// Columns supplied.
        actual: usize,
    },
}

impl PredictionError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        PredictionError::Unavailable {
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        PredictionError::Network(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        PredictionError::Parse(message.into())
    }

    /// Returns true if the same call might succeed later.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            PredictionError::Timeout { .. }
                | PredictionError::Unavailable { .. }
                | PredictionError::Network(_)
        )
    }
}
