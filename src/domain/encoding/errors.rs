//! Encoder error types.

use thiserror::Error;

use crate::domain::form::Field;

/// Errors raised while translating between labels and model codes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncoderError {
    /// The value was never seen when the model was trained.
    #[error("Unknown {field} '{value}'")]
    UnknownCategory { field: Field, value: String },

    /// A model produced a code outside the table. Never expected in practice.
    #[error("No {field} label for code {code}")]
    UnknownCode { field: Field, code: i64 },

    /// No code table was loaded for the field.
    #[error("No code table loaded for {0}")]
    UnknownField(Field),
}

impl EncoderError {
    pub fn unknown_category(field: Field, value: impl Into<String>) -> Self {
        EncoderError::UnknownCategory {
            field,
            value: value.into(),
        }
    }

    pub fn unknown_code(field: Field, code: i64) -> Self {
        EncoderError::UnknownCode { field, code }
    }
}
