//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use catalog::{GalleryTuning, MoneyFormat, MotionMode, StoreSettings};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 10;

/// Error returned by [`ServerConfig::from_env`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is unset or blank.
    #[error("missing required env var {0}")]
    Missing(&'static str),
    /// A variable is set but cannot be parsed.
    #[error("invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    pub store_id: String,
    /// Backend origin without trailing slash.
    pub backend_url: String,
    pub backend_api_key: String,
    pub backend_timeout_secs: u64,
    pub settings: StoreSettings,
}

impl ServerConfig {
    /// Build typed config from the process environment.
    ///
    /// Required:
    /// - `STORE_ID`
    /// - `BACKEND_URL`
    /// - `BACKEND_API_KEY`
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BACKEND_TIMEOUT_SECS`: default 10
    /// - `STORE_NAME`: default "Chaos Theory"
    /// - `STORE_CURRENCY`: ISO code, default `USD`
    /// - `GALLERY_MAPPING_MODE`: `centered` (default), `absolute`, `delta`, `momentum`
    /// - `GALLERY_OVERFLOW_RATIO`: default 0.5
    /// - `GALLERY_SENSITIVITY`: default 1.0
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for a missing required or unparseable variable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] over an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for a missing required or unparseable variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &'static str| lookup(var).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
        let required = |var: &'static str| get(var).ok_or(ConfigError::Missing(var));

        let store_id = required("STORE_ID")?;
        let backend_url = required("BACKEND_URL")?.trim_end_matches('/').to_owned();
        if !(backend_url.starts_with("http://") || backend_url.starts_with("https://")) {
            return Err(ConfigError::Invalid { var: "BACKEND_URL", reason: "expected an http(s) URL".into() });
        }
        let backend_api_key = required("BACKEND_API_KEY")?;

        let port = parse_or("PORT", get("PORT"), DEFAULT_PORT)?;
        let backend_timeout_secs = parse_or("BACKEND_TIMEOUT_SECS", get("BACKEND_TIMEOUT_SECS"), DEFAULT_BACKEND_TIMEOUT_SECS)?;

        let defaults = StoreSettings::default();
        let money = match get("STORE_CURRENCY") {
            Some(code) => MoneyFormat::for_currency(&code)
                .map_err(|e| ConfigError::Invalid { var: "STORE_CURRENCY", reason: e.to_string() })?,
            None => defaults.money,
        };
        let gallery_defaults = GalleryTuning::default();
        let gallery = GalleryTuning {
            mode: parse_or::<MotionMode>("GALLERY_MAPPING_MODE", get("GALLERY_MAPPING_MODE"), gallery_defaults.mode)?,
            overflow_ratio: parse_or("GALLERY_OVERFLOW_RATIO", get("GALLERY_OVERFLOW_RATIO"), gallery_defaults.overflow_ratio)?,
            sensitivity: parse_or("GALLERY_SENSITIVITY", get("GALLERY_SENSITIVITY"), gallery_defaults.sensitivity)?,
        };
        let settings = StoreSettings {
            store_id: store_id.clone(),
            store_name: get("STORE_NAME").unwrap_or(defaults.store_name),
            money,
            gallery,
        };

        Ok(Self { port, store_id, backend_url, backend_api_key, backend_timeout_secs, settings })
    }
}

fn parse_or<T>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        None => Ok(default),
        Some(raw) => raw
            .parse::<T>()
            .map_err(|e| ConfigError::Invalid { var, reason: format!("{raw:?}: {e}") }),
    }
}
