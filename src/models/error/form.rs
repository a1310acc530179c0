//! Validation errors raised while reading form fields.
//!
//! These are reported before any network call is made.

use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Serialize, Clone, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum FormError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for field {field}: {reason}")]
    InvalidField { field: String, reason: String },

    #[error("Invalid secret key in field {field}: invalid encoded string")]
    InvalidSecretKey { field: String },

    #[error("Unknown operation type: {0}")]
    UnknownOperation(String),

    #[error("{0}")]
    Constraint(String),
}

impl FormError {
    pub fn invalid(field: &str, reason: impl Into<String>) -> Self {
        FormError::InvalidField {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FormError::MissingField("assetCode".to_string()).to_string(),
            "Missing required field: assetCode"
        );
        assert_eq!(
            FormError::invalid("amount", "not a number").to_string(),
            "Invalid value for field amount: not a number"
        );
        assert!(FormError::InvalidSecretKey {
            field: "issuerSecretKey".to_string()
        }
        .to_string()
        .contains("invalid encoded string"));
    }

    #[test]
    fn test_serialization() {
        let error = FormError::MissingField("trustor".to_string());
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"MissingField\""));
        assert!(json.contains("\"details\":\"trustor\""));
    }
}
