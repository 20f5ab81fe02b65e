use crate::api::api_url;
use crate::api::utils::{authenticated_get, authenticated_put};
use log::debug;
use shared::{ChangePasswordRequest, ErrorResponse, UpdateProfileRequest, UserDto};

pub async fn fetch_users() -> Result<Vec<UserDto>, String> {
    debug!("Fetching all users");

    let response = authenticated_get(&api_url("/api/users/"))
        .send()
        .await
        .map_err(|e| format!("Failed to fetch users: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<Vec<UserDto>>()
        .await
        .map_err(|e| format!("Failed to parse users response: {}", e))
}

/// Fetch the users holding any of the given roles (staff listing filter).
pub async fn fetch_users_with_roles(roles: &[String]) -> Result<Vec<UserDto>, String> {
    debug!("Fetching users for roles: {:?}", roles);

    let encoded = urlencoding::encode(&roles.join(",")).into_owned();
    let url = format!("{}?roles={}", api_url("/api/users/roles"), encoded);
    let response = authenticated_get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to fetch users: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<Vec<UserDto>>()
        .await
        .map_err(|e| format!("Failed to parse users response: {}", e))
}

pub async fn update_profile(request: &UpdateProfileRequest) -> Result<UserDto, String> {
    debug!("Updating own profile");

    let response = authenticated_put(&api_url("/api/users/profile"))
        .json(request)
        .map_err(|e| format!("Failed to serialize profile update: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send profile update: {}", e))?;

    if !response.ok() {
        let error = response
            .json::<ErrorResponse>()
            .await
            .map(|e| e.error)
            .unwrap_or_else(|_| format!("HTTP {}", response.status()));
        return Err(error);
    }

    let updated = response
        .json::<UserDto>()
        .await
        .map_err(|e| format!("Failed to parse profile response: {}", e))?;

    debug!("Successfully updated profile for {}", updated.email);
    Ok(updated)
}

pub async fn change_password(request: &ChangePasswordRequest) -> Result<(), String> {
    debug!("Changing own password");

    let response = authenticated_put(&api_url("/api/users/profile/password"))
        .json(request)
        .map_err(|e| format!("Failed to serialize password change: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send password change: {}", e))?;

    if !response.ok() {
        let error = response
            .json::<ErrorResponse>()
            .await
            .map(|e| e.error)
            .unwrap_or_else(|_| format!("HTTP {}", response.status()));
        return Err(error);
    }

    debug!("Password changed");
    Ok(())
}
