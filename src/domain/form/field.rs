//! Field enum naming every value a form can collect.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single named input collected by one of the forms.
///
/// The wire names match the column names the prediction models were
/// trained on (`Soil_Type`, `pH_Value`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Nitrogen,
    Phosphorus,
    Potassium,
    Temperature,
    Humidity,
    #[serde(rename = "pH_Value")]
    PhValue,
    Rainfall,
    Moisture,
    #[serde(rename = "Soil_Type")]
    SoilType,
    Variety,
    Crop,
}

impl Field {
    /// Returns every field.
    pub fn all() -> &'static [Field] {
        &[
            Field::Nitrogen,
            Field::Phosphorus,
            Field::Potassium,
            Field::Temperature,
            Field::Humidity,
            Field::PhValue,
            Field::Rainfall,
            Field::Moisture,
            Field::SoilType,
            Field::Variety,
            Field::Crop,
        ]
    }

    /// Returns the name used in prompts and in code tables.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Nitrogen => "Nitrogen",
            Field::Phosphorus => "Phosphorus",
            Field::Potassium => "Potassium",
            Field::Temperature => "Temperature",
            Field::Humidity => "Humidity",
            Field::PhValue => "pH_Value",
            Field::Rainfall => "Rainfall",
            Field::Moisture => "Moisture",
            Field::SoilType => "Soil_Type",
            Field::Variety => "Variety",
            Field::Crop => "Crop",
        }
    }

    /// Returns true for free-text fields that must go through a code table.
    pub fn is_categorical(&self) -> bool {
        matches!(self, Field::SoilType | Field::Variety | Field::Crop)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::all()
            .iter()
            .find(|field| field.name() == s)
            .copied()
            .ok_or_else(|| format!("unknown field: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_round_trips_through_from_str() {
        for field in Field::all() {
            assert_eq!(field.name().parse::<Field>(), Ok(*field));
        }
    }

    #[test]
    fn serializes_with_model_column_names() {
        assert_eq!(serde_json::to_string(&Field::SoilType).unwrap(), "\"Soil_Type\"");
        assert_eq!(serde_json::to_string(&Field::PhValue).unwrap(), "\"pH_Value\"");
        assert_eq!(serde_json::to_string(&Field::Rainfall).unwrap(), "\"Rainfall\"");
    }

    #[test]
    fn only_text_fields_are_categorical() {
        let categorical: Vec<_> = Field::all().iter().filter(|f| f.is_categorical()).collect();
        assert_eq!(categorical, vec![&Field::SoilType, &Field::Variety, &Field::Crop]);
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert!("soil_type".parse::<Field>().is_err());
    }
}
