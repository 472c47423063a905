//! PredictionGateway - Assemble feature vectors and dispatch to predictors.

use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info, warn};

use crate::domain::encoding::FeatureEncoder;
use crate::domain::form::{CollectedValues, Field};
use crate::domain::prediction::{crop_features, fertilizer_features, FeatureVector};
use crate::ports::{Prediction, PredictionError, Predictor};

use super::FlowError;

/// Uniform front for the crop and fertilizer predictors.
///
/// Cheap to clone; all collaborators are shared.
#[derive(Clone)]
pub struct PredictionGateway {
    encoder: Arc<FeatureEncoder>,
    crop: Arc<dyn Predictor>,
    fertilizer: Arc<dyn Predictor>,
    timeout: Duration,
}

impl PredictionGateway {
    pub fn new(
        encoder: Arc<FeatureEncoder>,
        crop: Arc<dyn Predictor>,
        fertilizer: Arc<dyn Predictor>,
        timeout: Duration,
    ) -> Self {
        Self {
            encoder,
            crop,
            fertilizer,
            timeout,
        }
    }

    /// Predicts the crop name for a completed crop form.
    pub async fn recommend_crop(&self, answers: &CollectedValues) -> Result<String, FlowError> {
        let features = crop_features(answers, &self.encoder)?;
        match self.dispatch(self.crop.as_ref(), &features).await? {
            Prediction::Label(label) => Ok(label),
            Prediction::Index(code) => match self.encoder.decode(Field::Crop, code) {
                Ok(label) => Ok(label.to_string()),
                Err(err) => {
                    error!(
                        code,
                        predictor = self.crop.name(),
                        "Crop predictor returned a code outside the crop table"
                    );
                    Err(FlowError::prediction_failure(err.to_string()))
                }
            },
        }
    }

    /// Recommends a fertilizer for a completed fertilizer form.
    ///
    /// Indices resolve against the predictor's own class list; an index
    /// that cannot be resolved is shown as-is.
    pub async fn recommend_fertilizer(
        &self,
        answers: &CollectedValues,
    ) -> Result<String, FlowError> {
        let features = fertilizer_features(answers, &self.encoder)?;
        let prediction = self.dispatch(self.fertilizer.as_ref(), &features).await?;
        Ok(resolve_class(prediction, self.fertilizer.class_labels()))
    }

    async fn dispatch(
        &self,
        predictor: &dyn Predictor,
        features: &FeatureVector,
    ) -> Result<Prediction, PredictionError> {
        if let Some(expected) = predictor.feature_count() {
            if expected != features.len() {
                error!(
                    predictor = predictor.name(),
                    expected,
                    actual = features.len(),
                    "Feature vector does not match the model input width"
                );
                return Err(PredictionError::FeatureCount {
                    expected,
                    actual: features.len(),
                });
            }
        }

        info!(
            predictor = predictor.name(),
            features = features.len(),
            "Dispatching prediction"
        );
        let result = match tokio::time::timeout(self.timeout, predictor.predict(features)).await {
            Ok(result) => result,
            Err(_) => Err(PredictionError::Timeout {
                timeout: self.timeout,
            }),
        };
        if let Err(err) = &result {
            warn!(
                predictor = predictor.name(),
                retryable = err.is_retryable(),
                %err,
                "Prediction call failed"
            );
        }
        result
    }
}

impl std::fmt::Debug for PredictionGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PredictionGateway")
            .field("crop", &self.crop.name())
            .field("fertilizer", &self.fertilizer.name())
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn resolve_class(prediction: Prediction, classes: Option<&[String]>) -> String {
    match prediction {
        Prediction::Label(label) => label,
        Prediction::Index(idx) => usize::try_from(idx)
            .ok()
            .and_then(|i| classes.and_then(|c| c.get(i)))
            .cloned()
            .unwrap_or_else(|| idx.to_string()),
    }
}
