use std::env;

const DEFAULT_CREDENTIALS_PATH: &str = "data/api_keys.json";
const DEFAULT_DATABASE_PATH: &str = "data/database.json";

/// Runtime configuration, sourced from the environment.
pub struct Config {
    /// Path to the JSON credential store (TS_CREDENTIALS_PATH)
    pub credentials_path: String,
    /// Path to the JSON fallback database (TS_DATABASE_PATH)
    pub database_path: String,
    /// Override for the search endpoint base URL (TS_SEARCH_BASE_URL)
    pub search_base_url: Option<String>,
    /// Log output format, "text" or "json" (TS_LOG_FORMAT)
    pub log_format: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            credentials_path: env::var("TS_CREDENTIALS_PATH")
                .unwrap_or_else(|_| DEFAULT_CREDENTIALS_PATH.to_string()),
            database_path: env::var("TS_DATABASE_PATH")
                .unwrap_or_else(|_| DEFAULT_DATABASE_PATH.to_string()),
            search_base_url: env::var("TS_SEARCH_BASE_URL").ok(),
            log_format: env::var("TS_LOG_FORMAT").unwrap_or_else(|_| "text".to_string()),
        }
    }
}
