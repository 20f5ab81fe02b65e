use serde::{Deserialize, Serialize};

use crate::dto::catalog::CatalogDto;

/// A scope groups puzzle catalogs and bounds what a staff role may manage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScopeDto {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub catalogs: Vec<CatalogDto>,
}
