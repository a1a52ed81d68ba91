use serde::{Deserialize, Deserializer};
use thiserror::Error;
use validator::Validate;

pub const DEFAULT_SUBJECT: &str = "General Inquiry";
pub const PHONE_NOT_PROVIDED: &str = "Not provided";

/// A contact form submission exactly as it arrived. Every field may be missing;
/// use [`ContactSubmission::into_valid`] before rendering it. Numbers and booleans
/// are taken as their text form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
pub struct ContactSubmission {
    #[serde(default, deserialize_with = "optional_text")]
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub subject: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    #[validate(required, length(min = 1))]
    pub message: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Bool(bool),
}

fn optional_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Option::<Scalar>::deserialize(deserializer)?;
    Ok(value.map(|scalar| match scalar {
        Scalar::Text(s) => s,
        Scalar::Integer(n) => n.to_string(),
        Scalar::Unsigned(n) => n.to_string(),
        Scalar::Float(n) => n.to_string(),
        Scalar::Bool(b) => b.to_string(),
    }))
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing required fields: {}", .missing.join(", "))]
pub struct InvalidSubmission {
    pub missing: Vec<String>,
}

/// A submission whose required fields are present and non-empty, with the
/// optional-field defaults already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidContact {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn into_valid(self) -> Result<ValidContact, InvalidSubmission> {
        if let Err(errors) = self.validate() {
            let mut missing: Vec<String> = errors
                .field_errors()
                .keys()
                .map(|field| field.to_string())
                .collect();
            missing.sort();
            return Err(InvalidSubmission { missing });
        }

        // Empty optional values fall back exactly like absent ones.
        let phone = self.phone.filter(|phone| !phone.is_empty());
        let subject = self
            .subject
            .filter(|subject| !subject.is_empty())
            .unwrap_or_else(|| DEFAULT_SUBJECT.to_string());

        Ok(ValidContact {
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            phone,
            subject,
            message: self.message.unwrap_or_default(),
        })
    }
}

impl ValidContact {
    pub fn phone_or_default(&self) -> &str {
        self.phone.as_deref().unwrap_or(PHONE_NOT_PROVIDED)
    }
}
