use std::path::{Path, PathBuf};

use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError, DataSource};

/// Environment variable overriding the API base URL at runtime
pub const API_URL_ENV: &str = "EMARKET_API_URL";
/// Environment variable selecting `live` or `fixture` data
pub const DATA_SOURCE_ENV: &str = "EMARKET_DATA_SOURCE";

const APP_DIR: &str = "emarket";

/// Client configuration wrapper.
#[derive(Debug, Clone, Default)]
pub struct Config {
    app: AppConfig,
}

impl Config {
    /// Create a configuration from already validated settings
    pub fn new(app: AppConfig) -> Self {
        Self { app }
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        Ok(Self::new(builder.build()?))
    }

    /// Load `<config dir>/emarket/config.toml` if present, then apply
    /// environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let base = match Self::config_file_path() {
            Some(path) if path.exists() => {
                tracing::info!(path = %path.display(), "Loading config file");
                Self::read_file(&path)?
            }
            _ => AppConfig::default(),
        };
        Self::apply_env(base)
    }

    /// Read a config file without applying the environment
    pub fn read_file(path: &Path) -> Result<AppConfig, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        AppConfig::from_toml_str(&source)
    }

    /// Apply `EMARKET_API_URL` / `EMARKET_DATA_SOURCE` on top of `base`
    pub fn apply_env(base: AppConfig) -> Result<Self, ConfigError> {
        let mut builder = AppConfigBuilder::from_config(base);
        if let Ok(url) = std::env::var(API_URL_ENV) {
            builder = builder.api_base_url(url);
        }
        if let Ok(source) = std::env::var(DATA_SOURCE_ENV) {
            builder = builder.data_source(source.parse::<DataSource>()?);
        }
        Self::with_builder(builder)
    }

    fn config_file_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
    }

    pub fn app(&self) -> &AppConfig {
        &self.app
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.app.base_url(), path)
    }

    pub fn data_source(&self) -> DataSource {
        self.app.data_source
    }

    pub fn min_password_length(&self) -> usize {
        self.app.min_password_length
    }

    /// Session database location; platform data directory unless configured
    pub fn session_db_path(&self) -> PathBuf {
        if let Some(path) = &self.app.session_db_path {
            return path.clone();
        }
        let mut path = dirs::data_dir().unwrap_or_else(std::env::temp_dir);
        path.push(APP_DIR);
        path.push("session.db");
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var(API_URL_ENV);
        std::env::remove_var(DATA_SOURCE_ENV);
    }

    #[test]
    fn test_api_url() {
        let config = Config::with_builder(
            AppConfig::builder().api_base_url("http://127.0.0.1:3000/"),
        )
        .unwrap();
        assert_eq!(config.api_url("/auth/login"), "http://127.0.0.1:3000/auth/login");
    }

    #[test]
    fn test_configured_session_path() {
        let config = Config::with_builder(AppConfig::builder().session_db_path("/tmp/s.db")).unwrap();
        assert_eq!(config.session_db_path(), PathBuf::from("/tmp/s.db"));
    }

    #[test]
    fn test_default_session_path() {
        let config = Config::default();
        assert!(config.session_db_path().ends_with("emarket/session.db"));
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        clear_env();
        std::env::set_var(API_URL_ENV, "http://localhost:9999");
        std::env::set_var(DATA_SOURCE_ENV, "fixture");
        let config = Config::apply_env(AppConfig::default()).unwrap();
        clear_env();
        assert_eq!(config.api_url("/x"), "http://localhost:9999/x");
        assert_eq!(config.data_source(), DataSource::Fixture);
    }

    #[test]
    #[serial]
    fn test_bad_env_value_is_an_error() {
        clear_env();
        std::env::set_var(DATA_SOURCE_ENV, "offline");
        let result = Config::apply_env(AppConfig::default());
        clear_env();
        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_read_file() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "page_size = 3\n").unwrap();
        let app = Config::read_file(&path).unwrap();
        assert_eq!(app.page_size, 3);
    }
}
