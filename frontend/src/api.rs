// Re-export all API modules
pub mod auth;
pub mod catalogs;
pub mod competitions;
pub mod groups;
pub mod roles;
pub mod scopes;
pub mod users;
pub mod utils;

use crate::config::Config;

pub fn api_url(path: &str) -> String {
    let base_url = Config::api_base_url();
    if base_url.is_empty() {
        path.to_string()
    } else {
        format!("{}{}", base_url, path)
    }
}
