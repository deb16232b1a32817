//! Build-time Configuration
//!
//! Values are baked in when the wasm bundle is compiled
//! (`TODO_API_URL=https://api.example.com trunk build`).

use log::LevelFilter;

pub const DEFAULT_API_URL: &str = "http://localhost:3000";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Backend base URL, without trailing slash
    pub api_url: String,
    pub log_level: LevelFilter,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_values(option_env!("TODO_API_URL"), option_env!("TODO_LOG_LEVEL"))
    }

    fn from_values(api_url: Option<&str>, log_level: Option<&str>) -> Self {
        let api_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();

        let log_level = log_level
            .and_then(|level| level.trim().parse().ok())
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self { api_url, log_level }
    }
}
