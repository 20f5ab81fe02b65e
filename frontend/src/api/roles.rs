use crate::api::api_url;
use crate::api::utils::authenticated_get;
use log::debug;
use shared::RoleDto;

pub async fn fetch_roles() -> Result<Vec<RoleDto>, String> {
    debug!("Fetching roles");

    let response = authenticated_get(&api_url("/api/roles/"))
        .send()
        .await
        .map_err(|e| format!("Failed to fetch roles: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<Vec<RoleDto>>()
        .await
        .map_err(|e| format!("Failed to parse roles response: {}", e))
}
