//! Feature vector assembly from completed forms.
//!
//! Each predictor expects its own column order. Vectors are rebuilt for
//! every call and never stored.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::encoding::{EncoderError, FeatureEncoder};
use crate::domain::form::{CollectedValues, Field};

/// Continuous crop measurements, in model column order.
const CROP_MEASUREMENTS: [Field; 7] = [
    Field::Nitrogen,
    Field::Phosphorus,
    Field::Potassium,
    Field::Temperature,
    Field::Humidity,
    Field::PhValue,
    Field::Rainfall,
];

/// Width of the crop model input.
pub const CROP_FEATURE_COUNT: usize = 9;

/// Width of the fertilizer model input.
pub const FERTILIZER_FEATURE_COUNT: usize = 8;

/// Ordered numeric inputs for one prediction call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureVector(Vec<f64>);

impl FeatureVector {
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Why a completed form could not be turned into a feature vector.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeatureError {
    #[error("{field} must be a number, got '{value}'")]
    InvalidNumber { field: Field, value: String },

    #[error("no value collected for {0}")]
    MissingField(Field),

    #[error(transparent)]
    Encoding(#[from] EncoderError),
}

/// Builds the 9-column crop vector: seven measurements as floats, then
/// the soil type and variety codes.
pub fn crop_features(
    collected: &CollectedValues,
    encoder: &FeatureEncoder,
) -> Result<FeatureVector, FeatureError> {
    let mut values = CROP_MEASUREMENTS
        .iter()
        .map(|field| number(collected, *field))
        .collect::<Result<Vec<_>, _>>()?;

    values.push(code(collected, encoder, Field::SoilType)? as f64);
    values.push(code(collected, encoder, Field::Variety)? as f64);

    Ok(FeatureVector::new(values))
}

/// Builds the 8-column fertilizer vector. Measurements are truncated
/// toward zero, never rounded.
pub fn fertilizer_features(
    collected: &CollectedValues,
    encoder: &FeatureEncoder,
) -> Result<FeatureVector, FeatureError> {
    let temperature = number(collected, Field::Temperature)?;
    let humidity = number(collected, Field::Humidity)?;
    let moisture = number(collected, Field::Moisture)?;
    let nitrogen = number(collected, Field::Nitrogen)?;
    let potassium = number(collected, Field::Potassium)?;
    let phosphorus = number(collected, Field::Phosphorus)?;

    let soil = code(collected, encoder, Field::SoilType)?;
    let crop = code(collected, encoder, Field::Crop)?;

    Ok(FeatureVector::new(vec![
        temperature.trunc(),
        humidity.trunc(),
        moisture.trunc(),
        soil as f64,
        crop as f64,
        nitrogen.trunc(),
        potassium.trunc(),
        phosphorus.trunc(),
    ]))
}

fn raw(collected: &CollectedValues, field: Field) -> Result<&str, FeatureError> {
    collected.get(field).ok_or(FeatureError::MissingField(field))
}

fn number(collected: &CollectedValues, field: Field) -> Result<f64, FeatureError> {
    let value = raw(collected, field)?;
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| FeatureError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

fn code(
    collected: &CollectedValues,
    encoder: &FeatureEncoder,
    field: Field,
) -> Result<i64, FeatureError> {
    Ok(encoder.encode(field, raw(collected, field)?)?)
}
