//! Application configuration module
//!
//! Provides configuration types for the storefront client. Values come from
//! compiled-in defaults, an optional TOML file, and environment overrides
//! (see `egui_app::config`).

use std::path::PathBuf;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// Production API, unless overridden when the crate is built
pub const DEFAULT_API_URL: &str = match option_env!("EMARKET_API_URL") {
    Some(url) => url,
    None => "https://e-market-api-0k8r.onrender.com",
};

pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 6;
pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_TOAST_SECONDS: f32 = 2.5;

/// Where screens get their data from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    /// Profile is fetched from the API
    #[default]
    Live,
    /// Profile is the built-in demo account, nothing is fetched
    Fixture,
}

impl FromStr for DataSource {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "live" => Ok(Self::Live),
            "fixture" | "demo" => Ok(Self::Fixture),
            other => Err(ConfigError::InvalidValue {
                key: "data_source",
                message: format!("expected `live` or `fixture`, got `{other}`"),
            }),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the auth API
    pub api_base_url: String,
    /// Live API or built-in fixtures
    pub data_source: DataSource,
    /// Minimum accepted password length
    pub min_password_length: usize,
    /// Number of generated catalog entries
    pub catalog_size: u32,
    /// Products revealed per "load more"
    pub page_size: usize,
    /// Location of the session database; platform default when unset
    pub session_db_path: Option<PathBuf>,
    /// How long transient notifications stay on screen
    pub toast_seconds: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            data_source: DataSource::Live,
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
            catalog_size: crate::shared::catalog::DEFAULT_CATALOG_SIZE,
            page_size: DEFAULT_PAGE_SIZE,
            session_db_path: None,
            toast_seconds: DEFAULT_TOAST_SECONDS,
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.api_base_url.trim();
        let has_scheme = url.starts_with("http://") || url.starts_with("https://");
        let has_host = url
            .split_once("://")
            .is_some_and(|(_, rest)| !rest.trim_matches('/').is_empty());
        if !has_scheme || !has_host {
            return Err(ConfigError::InvalidUrl(self.api_base_url.clone()));
        }
        if self.min_password_length == 0 {
            return Err(ConfigError::InvalidValue {
                key: "min_password_length",
                message: "must be at least 1".to_string(),
            });
        }
        if self.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                key: "page_size",
                message: "must be at least 1".to_string(),
            });
        }
        if self.catalog_size == 0 {
            return Err(ConfigError::InvalidValue {
                key: "catalog_size",
                message: "must be at least 1".to_string(),
            });
        }
        if !(self.toast_seconds.is_finite() && self.toast_seconds > 0.0) {
            return Err(ConfigError::InvalidValue {
                key: "toast_seconds",
                message: "must be a positive number".to_string(),
            });
        }
        Ok(())
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        self.api_base_url.trim().trim_end_matches('/')
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    config: Option<AppConfig>,
}

impl AppConfigBuilder {
    /// Start from an existing configuration instead of the defaults
    pub fn from_config(config: AppConfig) -> Self {
        Self {
            config: Some(config),
        }
    }

    fn config(&mut self) -> &mut AppConfig {
        self.config.get_or_insert_with(AppConfig::default)
    }

    /// Set the API base URL
    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.config().api_base_url = url.into();
        self
    }

    pub fn data_source(mut self, source: DataSource) -> Self {
        self.config().data_source = source;
        self
    }

    pub fn min_password_length(mut self, len: usize) -> Self {
        self.config().min_password_length = len;
        self
    }

    pub fn catalog_size(mut self, size: u32) -> Self {
        self.config().catalog_size = size;
        self
    }

    pub fn page_size(mut self, size: usize) -> Self {
        self.config().page_size = size;
        self
    }

    pub fn session_db_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config().session_db_path = Some(path.into());
        self
    }

    pub fn toast_seconds(mut self, seconds: f32) -> Self {
        self.config().toast_seconds = seconds;
        self
    }

    /// Build the configuration
    pub fn build(mut self) -> Result<AppConfig, ConfigError> {
        let config = self.config.take().unwrap_or_default();
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },
    #[error("failed to parse config file: {0}")]
    Parse(String),
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
}
