//! The two multi-step forms and their fixed question order.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Field;

/// Question order for the crop prediction form.
pub const CROP_FIELDS: [Field; 9] = [
    Field::Nitrogen,
    Field::Phosphorus,
    Field::Potassium,
    Field::Temperature,
    Field::Humidity,
    Field::PhValue,
    Field::Rainfall,
    Field::SoilType,
    Field::Variety,
];

/// Question order for the fertilizer recommendation form.
pub const FERTILIZER_FIELDS: [Field; 8] = [
    Field::Temperature,
    Field::Humidity,
    Field::Moisture,
    Field::SoilType,
    Field::Crop,
    Field::Nitrogen,
    Field::Potassium,
    Field::Phosphorus,
];

/// A multi-step form the user can fill in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormKind {
    Crop,
    Fertilizer,
}

impl FormKind {
    /// Returns the ordered fields this form asks for.
    pub fn fields(&self) -> &'static [Field] {
        match self {
            FormKind::Crop => &CROP_FIELDS,
            FormKind::Fertilizer => &FERTILIZER_FIELDS,
        }
    }

    /// Returns the field asked at `step`, if the form has that many steps.
    pub fn field_at(&self, step: usize) -> Option<Field> {
        self.fields().get(step).copied()
    }

    /// Returns the number of questions in the form.
    pub fn len(&self) -> usize {
        self.fields().len()
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            FormKind::Crop => "Crop Prediction",
            FormKind::Fertilizer => "Fertilizer Recommendation",
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
