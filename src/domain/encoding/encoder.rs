//! Feature encoder over the per-field code tables.

use std::collections::HashMap;

use super::{CodeTable, EncoderError};
use crate::domain::form::Field;

/// Translates categorical answers to model codes and back.
///
/// Each categorical field has its own independent table. The encoder is
/// immutable after load and is shared across conversations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureEncoder {
    tables: HashMap<Field, CodeTable>,
}

impl FeatureEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the table for `field`.
    pub fn with_table(mut self, field: Field, table: CodeTable) -> Self {
        self.tables.insert(field, table);
        self
    }

    /// Returns the code a model expects for `raw` in `field`.
    pub fn encode(&self, field: Field, raw: &str) -> Result<i64, EncoderError> {
        self.table(field)?
            .code_of(raw)
            .ok_or_else(|| EncoderError::unknown_category(field, raw))
    }

    /// Returns the display label for a code produced by a model.
    pub fn decode(&self, field: Field, code: i64) -> Result<&str, EncoderError> {
        self.table(field)?
            .label_of(code)
            .ok_or(EncoderError::unknown_code(field, code))
    }

    /// Returns the table for `field`.
    pub fn table(&self, field: Field) -> Result<&CodeTable, EncoderError> {
        self.tables.get(&field).ok_or(EncoderError::UnknownField(field))
    }
}

impl FromIterator<(Field, CodeTable)> for FeatureEncoder {
    fn from_iter<I: IntoIterator<Item = (Field, CodeTable)>>(iter: I) -> Self {
        Self {
            tables: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn encoder() -> FeatureEncoder {
        FeatureEncoder::new()
            .with_table(
                Field::SoilType,
                CodeTable::new(vec!["Black".into(), "Clayey".into(), "Loamy".into()]),
            )
            .with_table(
                Field::Crop,
                CodeTable::new(vec!["Cotton".into(), "Rice".into(), "Wheat".into()]),
            )
    }

    mod encode {
        use super::*;

        #[test]
        fn known_label_returns_its_code() {
            assert_eq!(encoder().encode(Field::SoilType, "Loamy"), Ok(2));
        }

        #[test]
        fn unseen_label_is_unknown_category() {
            assert_eq!(
                encoder().encode(Field::SoilType, "Sandy"),
                Err(EncoderError::unknown_category(Field::SoilType, "Sandy"))
            );
        }

        #[test]
        fn field_without_table_is_unknown_field() {
            assert_eq!(
                encoder().encode(Field::Variety, "Basmati"),
                Err(EncoderError::UnknownField(Field::Variety))
            );
        }

        #[test]
        fn tables_are_independent() {
            assert!(encoder().encode(Field::Crop, "Loamy").is_err());
        }
    }

    mod decode {
        use super::*;

        #[test]
        fn known_code_returns_label() {
            assert_eq!(encoder().decode(Field::Crop, 1), Ok("Rice"));
        }

        #[test]
        fn out_of_range_code_is_unknown_code() {
            assert_eq!(
                encoder().decode(Field::Crop, 3),
                Err(EncoderError::unknown_code(Field::Crop, 3))
            );
            assert_eq!(
                encoder().decode(Field::Crop, -1),
                Err(EncoderError::unknown_code(Field::Crop, -1))
            );
        }
    }

    proptest! {
        #[test]
        fn decode_then_encode_round_trips(
            labels in proptest::collection::hash_set("[A-Za-z]{1,12}", 1..40),
            pick in any::<prop::sample::Index>(),
        ) {
            let labels: Vec<String> = labels.into_iter().collect();
            let encoder = FeatureEncoder::new().with_table(Field::Crop, CodeTable::new(labels.clone()));
            let code = pick.index(labels.len()) as i64;

            let label = encoder.decode(Field::Crop, code).unwrap().to_string();
            prop_assert_eq!(encoder.encode(Field::Crop, &label), Ok(code));
        }
    }
}
