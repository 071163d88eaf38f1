//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `MERCADITO_API_URL` - Base URL of the marketplace REST API
//!   (default: `http://localhost:8080/api`)
//! - `MERCADITO_DATA_DIR` - Directory for persisted collections
//!   (default: `.mercadito`)
//! - `MERCADITO_HTTP_TIMEOUT_SECS` - Request timeout in seconds (default: 10)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

const DEFAULT_API_URL: &str = "http://localhost:8080/api";
const DEFAULT_DATA_DIR: &str = ".mercadito";
const DEFAULT_TIMEOUT_SECS: &str = "10";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront client configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Base URL of the marketplace REST API
    pub api_url: Url,
    /// Directory holding the persisted collections
    pub data_dir: PathBuf,
    /// Timeout applied to every API request
    pub request_timeout: Duration,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid. Absent
    /// variables fall back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_url = parse_api_url(&get_env_or_default("MERCADITO_API_URL", DEFAULT_API_URL))?;
        let data_dir = PathBuf::from(get_env_or_default("MERCADITO_DATA_DIR", DEFAULT_DATA_DIR));
        let timeout_secs = get_env_or_default("MERCADITO_HTTP_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)
            .parse::<u64>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("MERCADITO_HTTP_TIMEOUT_SECS".to_string(), e.to_string())
            })?;

        Ok(Self {
            api_url,
            data_dir,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Parse and validate the API base URL.
///
/// The client appends path segments to this URL, so it must be an absolute
/// http(s) URL.
fn parse_api_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw)
        .map_err(|e| ConfigError::InvalidEnvVar("MERCADITO_API_URL".to_string(), e.to_string()))?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar(
            "MERCADITO_API_URL".to_string(),
            format!("expected an absolute http(s) URL, got '{raw}'"),
        ));
    }
    Ok(url)
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_api_url_is_valid() {
        let url = parse_api_url(DEFAULT_API_URL).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api");
    }

    #[test]
    fn test_rejects_non_http_schemes() {
        assert!(parse_api_url("ftp://example.com").is_err());
        assert!(parse_api_url("data:text/plain,hi").is_err());
    }

    #[test]
    fn test_rejects_relative_urls() {
        assert!(parse_api_url("/api").is_err());
    }
}
