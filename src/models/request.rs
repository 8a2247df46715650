use serde::Deserialize;
use serde_json::Value;

use crate::constants::TYPE_FIELD;
use crate::error::AppError;
use crate::models::{FormKind, Submission};
use crate::store::Document;

/// NGO request form payload
#[derive(Debug, Clone, Deserialize)]
pub struct NgoRequestSubmission {
    #[serde(default, rename = "ngoName")]
    pub ngo_name: String,
    #[serde(default, rename = "foodNeeded")]
    pub food_needed: String,
    #[serde(default)]
    pub location: String,
}

impl NgoRequestSubmission {
    /// Check required-field presence
    pub fn validate(&self) -> Result<(), AppError> {
        for (name, value) in [
            ("ngoName", &self.ngo_name),
            ("foodNeeded", &self.food_needed),
            ("location", &self.location),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::MissingField(name));
            }
        }
        Ok(())
    }
}

impl Submission for NgoRequestSubmission {
    const KIND: FormKind = FormKind::Ngo;

    fn into_document(self) -> Document {
        let mut document = Document::new();
        document.insert("ngoName".to_string(), Value::from(self.ngo_name));
        document.insert("foodNeeded".to_string(), Value::from(self.food_needed));
        document.insert("location".to_string(), Value::from(self.location));
        document.insert(
            TYPE_FIELD.to_string(),
            Value::from(Self::KIND.type_tag()),
        );
        document
    }
}
