use log::info;
use std::env;
use std::time::Duration;

/// Base URL of the blog admin API when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            api_base_url: normalize_base_url(
                &env::var("BLOG_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
            ),
            request_timeout_secs: env::var("BLOG_API_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string()),
        }
    }

    /// Same as `Default`, but pointed at a different API root.
    pub fn with_base_url(base_url: &str) -> Self {
        Config {
            api_base_url: normalize_base_url(base_url),
            ..Config::default()
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn log_level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    pub fn validate_and_log(&self) {
        info!("Blog API base URL: {}", self.api_base_url);
        info!("Request timeout: {}s", self.request_timeout_secs);
        info!("Log level: {}", self.log_level);
    }
}

/// Endpoints start with `/`, so a trailing slash on the base would double it.
pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}
