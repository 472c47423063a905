//! Government scheme catalog tree.
//!
//! Field names on the wire follow the published scheme document
//! (`deptName`, `schemeName`, `inputTypes`, ...).

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Root of the catalog: an ordered list of departments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub departments: Vec<Department>,
}

/// A government department offering schemes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    #[serde(rename = "deptName")]
    pub name: String,
    #[serde(default)]
    pub schemes: Vec<Scheme>,
}

/// A scheme, described by one block per input type it subsidises.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scheme {
    #[serde(rename = "schemeName")]
    pub name: String,
    #[serde(rename = "inputTypes", default)]
    pub input_types: Vec<InputType>,
}

/// One detail block of a scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputType {
    #[serde(rename = "inputTypeName")]
    pub name: String,
    #[serde(default)]
    pub details: SchemeDetails,
}

/// Free-text description of what an input type offers and to whom.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeDetails {
    #[serde(rename = "schemeDescription", default)]
    pub description: Option<String>,
    #[serde(default)]
    pub subsidy: Option<String>,
    #[serde(rename = "Eligibility", default)]
    pub eligibility: Option<String>,
    #[serde(rename = "documentsRequired", default)]
    pub documents_required: Vec<String>,
}

impl Catalog {
    pub fn new(departments: Vec<Department>) -> Self {
        Self { departments }
    }

    /// Rejects departments and schemes without a display name.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for dept in &self.departments {
            if dept.name.trim().is_empty() {
                return Err(ValidationError::empty_field("deptName"));
            }
            for scheme in &dept.schemes {
                if scheme.name.trim().is_empty() {
                    return Err(ValidationError::empty_field("schemeName"));
                }
            }
        }
        Ok(())
    }
}

impl Department {
    pub fn new(name: impl Into<String>, schemes: Vec<Scheme>) -> Self {
        Self {
            name: name.into(),
            schemes,
        }
    }
}

impl Scheme {
    pub fn new(name: impl Into<String>, input_types: Vec<InputType>) -> Self {
        Self {
            name: name.into(),
            input_types,
        }
    }
}

impl InputType {
    pub fn new(name: impl Into<String>, details: SchemeDetails) -> Self {
        Self {
            name: name.into(),
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = r#"{
        "departments": [{
            "deptName": "Agriculture",
            "schemes": [{
                "schemeName": "Seed Subsidy",
                "inputTypes": [{
                    "inputTypeName": "Certified Seeds",
                    "details": {
                        "schemeDescription": "Quality seed supply",
                        "subsidy": "50%",
                        "Eligibility": "Small farmers",
                        "documentsRequired": ["Aadhaar", "7/12 extract"]
                    }
                }]
            }]
        }]
    }"#;

    #[test]
    fn deserializes_published_field_names() {
        let catalog: Catalog = serde_json::from_str(DOCUMENT).unwrap();
        let block = &catalog.departments[0].schemes[0].input_types[0];

        assert_eq!(catalog.departments[0].name, "Agriculture");
        assert_eq!(block.name, "Certified Seeds");
        assert_eq!(block.details.eligibility.as_deref(), Some("Small farmers"));
        assert_eq!(block.details.documents_required.len(), 2);
    }

    #[test]
    fn missing_optional_sections_default_to_empty() {
        let catalog: Catalog = serde_json::from_str(
            r#"{"departments": [{"deptName": "Horticulture", "schemes": [{"schemeName": "Drip", "inputTypes": [{"inputTypeName": "Pipes"}]}]}]}"#,
        )
        .unwrap();
        let details = &catalog.departments[0].schemes[0].input_types[0].details;

        assert_eq!(details, &SchemeDetails::default());
    }

    #[test]
    fn missing_departments_key_is_empty_catalog() {
        let catalog: Catalog = serde_json::from_str("{}").unwrap();
        assert!(catalog.departments.is_empty());
    }

    #[test]
    fn validate_rejects_blank_department_name() {
        let catalog = Catalog::new(vec![Department::new("  ", vec![])]);
        assert_eq!(
            catalog.validate(),
            Err(ValidationError::empty_field("deptName"))
        );
    }

    #[test]
    fn validate_accepts_published_document() {
        let catalog: Catalog = serde_json::from_str(DOCUMENT).unwrap();
        assert!(catalog.validate().is_ok());
    }
}
