use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub scrape_url: String,
    pub default_total: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            scrape_url: env::var("SCRAPE_URL")
                .unwrap_or_else(|_| "http://localhost:5000".to_string()),
            default_total: env::var("DEFAULT_TOTAL").unwrap_or_else(|_| "10".to_string()),
        }
    }
}
