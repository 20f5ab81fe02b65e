use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::user::UserDto;

/// Request for user login
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// User's email address
    #[validate(email)]
    pub email: String,

    /// User's password
    #[validate(length(min = 8))]
    pub password: String,
}

/// Response for successful login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// The authenticated user's data
    pub user: UserDto,
    /// Session ID for authentication
    pub session_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use validator::Validate;

    fn sample_request() -> LoginRequest {
        LoginRequest {
            email: "test@example.com".to_string(),
            password: "password123".to_string(),
        }
    }

    #[test]
    fn test_login_request_validation() {
        assert!(sample_request().validate().is_ok());
    }

    #[test]
    fn test_login_request_rejects_short_password() {
        let mut request = sample_request();
        request.password = "1234567".to_string();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn test_login_request_rejects_invalid_email() {
        let mut request = sample_request();
        request.email = "invalid-email".to_string();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_login_request_serialization() {
        let request = sample_request();
        let json = serde_json::to_string(&request).unwrap();
        let back: LoginRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back.email, request.email);
        assert_eq!(back.password, request.password);
    }
}
