use serde::{Deserialize, Serialize};

use crate::dto::scope::ScopeDto;

/// Staff role: a named capability bitmask plus the scopes it applies to.
/// Capability semantics live in [`crate::permissions`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoleDto {
    pub id: String,
    pub name: String,
    pub permissions: u64,
    #[serde(default)]
    pub scopes: Vec<ScopeDto>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_scopes_default_when_absent() {
        let json = r#"{"id": "role/3", "name": "Jury", "permissions": 1}"#;
        let role: RoleDto = serde_json::from_str(json).unwrap();
        assert!(role.scopes.is_empty());
    }
}
