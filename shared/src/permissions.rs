//! Capability checks for staff roles.
//!
//! A role carries a `u64` capability bitmask. Users hold a set of roles;
//! whether an action is allowed is answered by the pure predicates below,
//! never by inspecting role names.

use crate::dto::role::RoleDto;
use crate::dto::user::UserDto;

/// One capability bit per administrative area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u64)]
pub enum Permission {
    Competitions = 1 << 0,
    Groups = 1 << 1,
    Users = 1 << 2,
    Roles = 1 << 3,
    Scopes = 1 << 4,
    Catalogs = 1 << 5,
}

/// Mask covering every capability. A role granting all of them is an
/// owner role.
pub const OWNER_MASK: u64 = (1 << 6) - 1;

impl Permission {
    pub const ALL: [Permission; 6] = [
        Permission::Competitions,
        Permission::Groups,
        Permission::Users,
        Permission::Roles,
        Permission::Scopes,
        Permission::Catalogs,
    ];
}

impl RoleDto {
    /// Whether this role grants the given capability.
    pub fn allows(&self, permission: Permission) -> bool {
        self.is_owner() || self.permissions & (permission as u64) != 0
    }

    pub fn is_owner(&self) -> bool {
        self.permissions & OWNER_MASK == OWNER_MASK
    }
}

/// Staff members are users holding at least one role. Players hold none.
pub fn is_staff(user: &UserDto) -> bool {
    !user.roles.is_empty()
}

pub fn is_owner(user: &UserDto) -> bool {
    user.roles.iter().any(RoleDto::is_owner)
}

pub fn has_permission(user: &UserDto, permission: Permission) -> bool {
    user.roles.iter().any(|role| role.allows(permission))
}

pub fn can_manage_users(user: &UserDto) -> bool {
    has_permission(user, Permission::Users)
}

pub fn can_manage_roles(user: &UserDto) -> bool {
    has_permission(user, Permission::Roles)
}

pub fn can_manage_scopes(user: &UserDto) -> bool {
    has_permission(user, Permission::Scopes)
}

pub fn can_manage_catalogs(user: &UserDto) -> bool {
    has_permission(user, Permission::Catalogs)
}

pub fn can_manage_groups(user: &UserDto) -> bool {
    has_permission(user, Permission::Groups)
}

pub fn can_manage_competitions(user: &UserDto) -> bool {
    has_permission(user, Permission::Competitions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn role(permissions: u64) -> RoleDto {
        RoleDto {
            id: "role/1".to_string(),
            name: "test".to_string(),
            permissions,
            scopes: vec![],
        }
    }

    fn user_with_roles(roles: Vec<RoleDto>) -> UserDto {
        UserDto {
            id: "user/1".to_string(),
            firstname: "Ada".to_string(),
            lastname: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            blocked: false,
            last_connected: None,
            roles,
            groups: vec![],
        }
    }

    #[test]
    fn test_player_without_roles_is_not_staff() {
        let player = user_with_roles(vec![]);
        assert!(!is_staff(&player));
        assert!(!is_owner(&player));
        assert!(!has_permission(&player, Permission::Users));
    }

    #[test]
    fn test_any_role_makes_staff() {
        let staff = user_with_roles(vec![role(Permission::Groups as u64)]);
        assert!(is_staff(&staff));
        assert!(!is_owner(&staff));
    }

    #[test]
    fn test_owner_role_grants_everything() {
        let owner = user_with_roles(vec![role(OWNER_MASK)]);
        assert!(is_owner(&owner));
        for permission in Permission::ALL {
            assert!(has_permission(&owner, permission));
        }
    }

    #[test]
    fn test_capabilities_are_independent_bits() {
        let mask = Permission::Users as u64 | Permission::Roles as u64;
        let staff = user_with_roles(vec![role(mask)]);
        assert!(can_manage_users(&staff));
        assert!(can_manage_roles(&staff));
        assert!(!can_manage_scopes(&staff));
        assert!(!can_manage_catalogs(&staff));
    }

    #[test]
    fn test_permissions_accumulate_across_roles() {
        let staff = user_with_roles(vec![
            role(Permission::Scopes as u64),
            role(Permission::Catalogs as u64),
        ]);
        assert!(can_manage_scopes(&staff));
        assert!(can_manage_catalogs(&staff));
        assert!(!can_manage_users(&staff));
    }

    #[test_case(Permission::Competitions, 1)]
    #[test_case(Permission::Groups, 2)]
    #[test_case(Permission::Users, 4)]
    #[test_case(Permission::Roles, 8)]
    #[test_case(Permission::Scopes, 16)]
    #[test_case(Permission::Catalogs, 32)]
    fn test_bit_values_are_stable(permission: Permission, expected: u64) {
        // Bitmask values are part of the wire contract with the backend.
        assert_eq!(permission as u64, expected);
    }
}
