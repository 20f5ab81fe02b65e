use crate::api::api_url;
use crate::api::utils::authenticated_get;
use log::debug;
use shared::GroupDto;

pub async fn fetch_groups() -> Result<Vec<GroupDto>, String> {
    debug!("Fetching groups");

    let response = authenticated_get(&api_url("/api/groups/"))
        .send()
        .await
        .map_err(|e| format!("Failed to fetch groups: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<Vec<GroupDto>>()
        .await
        .map_err(|e| format!("Failed to parse groups response: {}", e))
}
