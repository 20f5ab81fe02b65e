use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::group::GroupDto;
use crate::dto::role::RoleDto;

/// Data Transfer Object for a platform user (player or staff member).
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct UserDto {
    pub id: String,
    #[validate(length(min = 1, message = "First name is required"))]
    pub firstname: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub lastname: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// Blocked users keep their account but cannot log in.
    #[serde(default)]
    pub blocked: bool,

    #[serde(default)]
    pub last_connected: Option<DateTime<FixedOffset>>,

    /// Staff roles. Players hold none.
    #[serde(default)]
    pub roles: Vec<RoleDto>,

    /// Player groups, granting access to competitions.
    #[serde(default)]
    pub groups: Vec<GroupDto>,
}

/// Self-service profile update.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 100))]
    pub firstname: String,
    #[validate(length(min = 1, max = 100))]
    pub lastname: String,
    #[validate(email)]
    pub email: String,
}

/// Self-service password change.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    #[validate(length(min = 1))]
    pub old_password: String,
    #[validate(length(min = 8))]
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use validator::Validate;

    fn sample_user() -> UserDto {
        UserDto {
            id: "user/42".to_string(),
            firstname: "Grace".to_string(),
            lastname: "Hopper".to_string(),
            email: "grace@example.com".to_string(),
            blocked: false,
            last_connected: None,
            roles: vec![],
            groups: vec![],
        }
    }

    #[test]
    fn test_user_dto_validates() {
        assert!(sample_user().validate().is_ok());
    }

    #[test]
    fn test_user_dto_rejects_bad_email() {
        let mut user = sample_user();
        user.email = "not-an-email".to_string();
        let errors = user.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_user_dto_defaults_optional_collections() {
        // The backend omits roles/groups for plain players.
        let json = r#"{
            "id": "user/7",
            "firstname": "Alan",
            "lastname": "Turing",
            "email": "alan@example.com"
        }"#;
        let user: UserDto = serde_json::from_str(json).unwrap();
        assert!(user.roles.is_empty());
        assert!(user.groups.is_empty());
        assert!(!user.blocked);
        assert_eq!(user.last_connected, None);
    }

    #[test]
    fn test_change_password_requires_min_length() {
        let request = ChangePasswordRequest {
            old_password: "old-secret".to_string(),
            new_password: "short".to_string(),
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("new_password"));
    }

    #[test]
    fn test_update_profile_roundtrip() {
        let request = UpdateProfileRequest {
            firstname: "Grace".to_string(),
            lastname: "Hopper".to_string(),
            email: "grace@example.com".to_string(),
        };
        let json = serde_json::to_string(&request).unwrap();
        let back: UpdateProfileRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back.email, request.email);
    }
}
