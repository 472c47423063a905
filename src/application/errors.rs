//! Errors a conversation turn can recover from.

use thiserror::Error;

use crate::domain::catalog::SelectionError;
use crate::domain::encoding::EncoderError;
use crate::domain::form::Field;
use crate::domain::prediction::FeatureError;
use crate::ports::PredictionError;

/// Failures the controller turns into a notice plus a state change.
///
/// None of these ever reach the caller of `handle_input`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FlowError {
    /// Non-numeric or out-of-range selection. The user is re-prompted.
    #[error("invalid selection: {0}")]
    InvalidSelection(#[from] SelectionError),

    /// A categorical answer has no code. The gateway is not called.
    #[error("unknown {field} '{value}'")]
    UnknownCategory { field: Field, value: String },

    /// Anything else that went wrong producing a prediction.
    #[error("{0}")]
    PredictionFailure(String),
}

impl FlowError {
    pub fn prediction_failure(cause: impl Into<String>) -> Self {
        FlowError::PredictionFailure(cause.into())
    }
}

impl From<EncoderError> for FlowError {
    fn from(err: EncoderError) -> Self {
        match err {
            EncoderError::UnknownCategory { field, value } => {
                FlowError::UnknownCategory { field, value }
            }
            other => FlowError::PredictionFailure(other.to_string()),
        }
    }
}

impl From<FeatureError> for FlowError {
    fn from(err: FeatureError) -> Self {
        match err {
            FeatureError::Encoding(encoding) => encoding.into(),
            other => FlowError::PredictionFailure(other.to_string()),
        }
    }
}

impl From<PredictionError> for FlowError {
    fn from(err: PredictionError) -> Self {
        FlowError::PredictionFailure(err.to_string())
    }
}
