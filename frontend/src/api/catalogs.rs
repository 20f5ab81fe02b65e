use crate::api::api_url;
use crate::api::utils::authenticated_get;
use log::debug;
use shared::CatalogDto;

pub async fn fetch_catalogs() -> Result<Vec<CatalogDto>, String> {
    debug!("Fetching catalogs");

    let response = authenticated_get(&api_url("/api/catalogs/"))
        .send()
        .await
        .map_err(|e| format!("Failed to fetch catalogs: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<Vec<CatalogDto>>()
        .await
        .map_err(|e| format!("Failed to parse catalogs response: {}", e))
}
