pub struct Config;

impl Config {
    pub fn api_base_url() -> String {
        // Relative URLs in every environment: the dev server proxies /api/
        // to the backend, and nginx does the same in production.
        "".to_string()
    }
}
