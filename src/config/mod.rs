pub mod settings;

pub use settings::{Config, DEFAULT_API_BASE_URL};

use crate::error::ClientError;
use std::sync::Arc;

/// Loads and returns the application configuration as an `Arc<Config>`.
/// Reads `.env` if present, then the process environment.
pub fn load_config() -> Result<Arc<Config>, ClientError> {
    dotenv::dotenv().ok(); // Load .env file if present, ignore errors

    let config = Config::from_env();
    validate(&config)?;
    config.validate_and_log();

    Ok(Arc::new(config))
}

/// Checks that the base URL is an absolute http(s) URL.
pub fn validate(config: &Config) -> Result<(), ClientError> {
    if config.api_base_url.is_empty() {
        return Err(ClientError::Config("BLOG_API_BASE_URL cannot be empty".to_string()));
    }
    let parsed = url::Url::parse(&config.api_base_url)?;
    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(ClientError::Config(format!(
                "BLOG_API_BASE_URL must use http or https, got '{}'",
                other
            )))
        }
    }
    if config.request_timeout_secs == 0 {
        return Err(ClientError::Config("BLOG_API_TIMEOUT_SECS must be positive".to_string()));
    }
    Ok(())
}
