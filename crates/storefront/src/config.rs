//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `MERCATO_DATA_DIR` - Directory for the persisted key-value store
//!   (default: `./data`)
//! - `MERCATO_PAGE_SIZE` - Products per listing page (default: 6, min: 1)
//! - `MERCATO_LOGIN_DELAY_MS` - Simulated network delay for the session
//!   stub, in milliseconds (default: 1000)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

const DEFAULT_DATA_DIR: &str = "./data";
const DEFAULT_PAGE_SIZE: usize = 6;
const DEFAULT_LOGIN_DELAY_MS: u64 = 1000;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Directory holding the persisted key-value store
    pub data_dir: PathBuf,
    /// Number of products per listing page
    pub page_size: usize,
    /// Simulated network delay for session login/register
    pub login_delay: Duration,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a numeric variable is present but does not
    /// parse, or if `MERCATO_PAGE_SIZE` is zero.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = PathBuf::from(get_env_or_default("MERCATO_DATA_DIR", DEFAULT_DATA_DIR));
        let page_size = parse_env("MERCATO_PAGE_SIZE", DEFAULT_PAGE_SIZE)?;
        if page_size == 0 {
            return Err(ConfigError::InvalidEnvVar(
                "MERCATO_PAGE_SIZE".to_owned(),
                "page size must be at least 1".to_owned(),
            ));
        }
        let delay_ms = parse_env("MERCATO_LOGIN_DELAY_MS", DEFAULT_LOGIN_DELAY_MS)?;

        Ok(Self {
            data_dir,
            page_size,
            login_delay: Duration::from_millis(delay_ms),
        })
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            page_size: DEFAULT_PAGE_SIZE,
            login_delay: Duration::from_millis(DEFAULT_LOGIN_DELAY_MS),
        }
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse an environment variable, falling back to a default when absent.
fn parse_env<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidEnvVar(key.to_owned(), e.to_string())),
        Err(_) => Ok(default),
    }
}
