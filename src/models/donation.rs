use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::constants::TYPE_FIELD;
use crate::error::AppError;
use crate::models::{FormKind, Submission};
use crate::store::Document;

/// Expiry window in hours, as entered on the form.
///
/// The form field is free text. Parsing takes an optional sign and the
/// leading run of digits, the way the original web form treated the value;
/// anything that yields no integer is kept as `None` and stored as null
/// rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryHours(pub Option<i64>);

impl ExpiryHours {
    /// Leading-integer parse: optional `+`/`-`, then digits; the rest of
    /// the input is ignored. Whitespace around the value is tolerated.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim_start();
        let (sign, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (-1, rest),
            None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let leading: String = digits.chars().take_while(|c| c.is_ascii_digit()).collect();
        match leading.parse::<i64>() {
            Ok(n) => ExpiryHours(Some(sign * n)),
            Err(_) => ExpiryHours(None),
        }
    }
}

impl From<ExpiryHours> for Value {
    fn from(expiry: ExpiryHours) -> Self {
        match expiry.0 {
            Some(hours) => Value::from(hours),
            None => Value::Null,
        }
    }
}

impl Serialize for ExpiryHours {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ExpiryHours {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ExpiryVisitor;

        impl<'de> Visitor<'de> for ExpiryVisitor {
            type Value = ExpiryHours;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("an integer, a string, or null")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(ExpiryHours(Some(v)))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(ExpiryHours(i64::try_from(v).ok()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                if v.is_finite() {
                    Ok(ExpiryHours(Some(v.trunc() as i64)))
                } else {
                    Ok(ExpiryHours(None))
                }
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(ExpiryHours::parse(v))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(ExpiryHours(None))
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(ExpiryHours(None))
            }
        }

        deserializer.deserialize_any(ExpiryVisitor)
    }
}

/// Donor form payload
#[derive(Debug, Clone, Deserialize)]
pub struct DonationSubmission {
    #[serde(default, rename = "foodType")]
    pub food_type: String,
    #[serde(default)]
    pub quantity: String,
    #[serde(default, rename = "expiryTime")]
    pub expiry_time: Option<ExpiryHours>,
    #[serde(default)]
    pub location: String,
}

impl DonationSubmission {
    /// Check required-field presence.
    ///
    /// Presence is the only validation this service performs; an
    /// unparseable expiry value is present, just null.
    pub fn validate(&self) -> Result<(), AppError> {
        for (name, value) in [("foodType", &self.food_type), ("quantity", &self.quantity)] {
            if value.trim().is_empty() {
                return Err(AppError::MissingField(name));
            }
        }
        if self.expiry_time.is_none() {
            return Err(AppError::MissingField("expiryTime"));
        }
        if self.location.trim().is_empty() {
            return Err(AppError::MissingField("location"));
        }
        Ok(())
    }
}

impl Submission for DonationSubmission {
    const KIND: FormKind = FormKind::Donor;

    fn into_document(self) -> Document {
        let mut document = Document::new();
        document.insert("foodType".to_string(), Value::from(self.food_type));
        document.insert("quantity".to_string(), Value::from(self.quantity));
        document.insert(
            "expiryTime".to_string(),
            self.expiry_time.unwrap_or(ExpiryHours(None)).into(),
        );
        document.insert("location".to_string(), Value::from(self.location));
        document.insert(
            TYPE_FIELD.to_string(),
            Value::from(Self::KIND.type_tag()),
        );
        document
    }
}
