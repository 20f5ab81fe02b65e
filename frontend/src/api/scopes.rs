use crate::api::api_url;
use crate::api::utils::authenticated_get;
use log::debug;
use shared::ScopeDto;

pub async fn fetch_scopes() -> Result<Vec<ScopeDto>, String> {
    debug!("Fetching scopes");

    let response = authenticated_get(&api_url("/api/scopes/"))
        .send()
        .await
        .map_err(|e| format!("Failed to fetch scopes: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<Vec<ScopeDto>>()
        .await
        .map_err(|e| format!("Failed to parse scopes response: {}", e))
}
