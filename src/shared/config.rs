//! Application configuration loaded from the environment
//!
//! `.env` is read first (dotenvy), then individual variables fall back to
//! defaults. Only the catalog API key is mandatory.

use crate::shared::errors::{AppError, AppResult};
use crate::{log_info, log_warn};
use std::{env, fmt::Display, path::PathBuf, str::FromStr, time::Duration};

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";
pub const DEFAULT_LANGUAGE: &str = "en-US";
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 500;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub base_url: String,
    pub image_base_url: String,
    pub language: String,
    /// Directory holding the durable key-value files
    pub storage_dir: PathBuf,
    pub search_debounce: Duration,
    /// None means requests never time out
    pub request_timeout: Option<Duration>,
    /// Artificial delay of the mock auth backend
    pub auth_latency: Duration,
    /// Platform-reported color scheme ("light" / "dark"), if any
    pub preferred_theme: Option<String>,
}

impl AppConfig {
    /// Load configuration from `.env` and the process environment
    pub fn from_env() -> AppResult<Self> {
        if dotenvy::dotenv().is_err() {
            log_info!("No .env file found, using process environment only");
        }

        let api_key = env::var("TMDB_API_KEY")
            .map_err(|_| AppError::ConfigError("TMDB_API_KEY is not set".to_string()))?;
        if api_key.trim().is_empty() {
            return Err(AppError::ConfigError("TMDB_API_KEY is empty".to_string()));
        }

        let timeout_secs: u64 = try_load("POPCORN_REQUEST_TIMEOUT_SECS", 0)?;

        Ok(Self {
            api_key,
            base_url: string_or("TMDB_BASE_URL", DEFAULT_BASE_URL),
            image_base_url: string_or("TMDB_IMAGE_BASE_URL", DEFAULT_IMAGE_BASE_URL),
            language: string_or("TMDB_LANGUAGE", DEFAULT_LANGUAGE),
            storage_dir: PathBuf::from(string_or("POPCORN_STORAGE_DIR", ".popcorn")),
            search_debounce: Duration::from_millis(try_load(
                "POPCORN_SEARCH_DEBOUNCE_MS",
                DEFAULT_SEARCH_DEBOUNCE_MS,
            )?),
            request_timeout: (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs)),
            auth_latency: Duration::from_millis(try_load("POPCORN_AUTH_LATENCY_MS", 0)?),
            preferred_theme: env::var("POPCORN_PREFERRED_THEME").ok(),
        })
    }

    /// Hermetic configuration for tests: no network defaults are relied upon
    pub fn for_testing(storage_dir: impl Into<PathBuf>) -> Self {
        Self {
            api_key: "test-key".to_string(),
            base_url: "http://127.0.0.1:9".to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            storage_dir: storage_dir.into(),
            search_debounce: Duration::from_millis(DEFAULT_SEARCH_DEBOUNCE_MS),
            request_timeout: Some(Duration::from_secs(1)),
            auth_latency: Duration::ZERO,
            preferred_theme: None,
        }
    }
}

fn string_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn try_load<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr + Display,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|e| {
            log_warn!("Invalid {} value '{}': {}", key, raw, e);
            AppError::ConfigError(format!("Invalid {}: {}", key, e))
        }),
        Err(_) => Ok(default),
    }
}
