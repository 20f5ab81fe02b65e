pub mod dto {
    pub mod auth;
    pub mod catalog;
    pub mod common;
    pub mod competition;
    pub mod group;
    pub mod puzzle;
    pub mod role;
    pub mod scope;
    pub mod user;
}

pub mod error;
pub mod permissions;

// Re-export commonly used items
pub use error::{Result, SharedError};

// Re-export DTOs
pub use dto::{
    auth::{LoginRequest, LoginResponse},
    catalog::CatalogDto,
    common::ErrorResponse,
    competition::{CompetitionDto, CompetitionStatsDto},
    group::GroupDto,
    puzzle::{
        AnswerVerdict, Difficulty, PuzzleDto, PuzzleInputResponse, SubmitAnswerRequest, TryDto,
    },
    role::RoleDto,
    scope::ScopeDto,
    user::{ChangePasswordRequest, UpdateProfileRequest, UserDto},
};

pub use permissions::{has_permission, is_owner, is_staff, Permission};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_reexports_are_usable() {
        let err = SharedError::Validation("missing field".to_string());
        assert_eq!(err.to_string(), "Validation error: missing field");

        let role = RoleDto {
            id: "role/1".to_string(),
            name: "Moderator".to_string(),
            permissions: Permission::Users as u64,
            scopes: vec![],
        };
        assert!(role.allows(Permission::Users));
        assert!(!role.allows(Permission::Catalogs));
    }
}
