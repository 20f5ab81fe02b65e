use serde::{Deserialize, Serialize};
use serde_json::Error as JsonError;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error, Serialize, Deserialize)]
pub enum SharedError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Rate limited: retry in {wait_seconds}s")]
    RateLimited { wait_seconds: u32 },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Conversion error: {0}")]
    Conversion(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ValidationErrors> for SharedError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

impl From<JsonError> for SharedError {
    fn from(error: JsonError) -> Self {
        Self::Conversion(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SharedError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rate_limited_display_carries_wait() {
        let err = SharedError::RateLimited { wait_seconds: 42 };
        assert_eq!(err.to_string(), "Rate limited: retry in 42s");
    }

    #[test]
    fn test_validation_errors_convert() {
        use validator::Validate;

        #[derive(Validate)]
        struct Probe {
            #[validate(email)]
            email: String,
        }

        let probe = Probe {
            email: "not-an-email".to_string(),
        };
        let err: SharedError = probe.validate().unwrap_err().into();
        assert!(matches!(err, SharedError::Validation(_)));
    }

    #[test]
    fn test_json_error_converts() {
        let bad = serde_json::from_str::<u32>("\"nope\"").unwrap_err();
        let err: SharedError = bad.into();
        assert!(matches!(err, SharedError::Conversion(_)));
    }

    #[test]
    fn test_error_serializes_for_wire() {
        let err = SharedError::Forbidden("staff only".to_string());
        let json = serde_json::to_string(&err).unwrap();
        let back: SharedError = serde_json::from_str(&json).unwrap();
        assert!(matches!(back, SharedError::Forbidden(msg) if msg == "staff only"));
    }
}
