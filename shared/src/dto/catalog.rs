use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

lazy_static! {
    static ref ADDRESS_REGEX: Regex = Regex::new(r"^https?://").unwrap();
}

/// A puzzle catalog: a backend service hosting puzzle themes.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct CatalogDto {
    pub id: String,
    #[validate(length(min = 1))]
    pub name: String,
    /// Base address of the catalog service.
    #[validate(regex(path = "ADDRESS_REGEX", message = "Address must be an http(s) URL"))]
    pub address: String,
    #[serde(default)]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_catalog_address_must_be_url() {
        let mut catalog = CatalogDto {
            id: "catalog/1".to_string(),
            name: "Winter puzzles".to_string(),
            address: "https://catalog.internal:8080".to_string(),
            description: String::new(),
        };
        assert!(catalog.validate().is_ok());

        catalog.address = "catalog.internal".to_string();
        let errors = catalog.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("address"));
    }
}
