use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use validator::Validate;

use crate::services::face_api::DEFAULT_ENDPOINT;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct Settings {
    #[validate(nested)]
    #[serde(default)]
    pub service: ServiceSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ServiceSettings {
    #[validate(url)]
    #[serde(default = "default_service_url")]
    pub url: String,
    #[validate(range(min = 1))]
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[validate(range(min = 1, max = 64))]
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

impl ServiceSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            url: default_service_url(),
            timeout_secs: default_timeout_secs(),
            concurrency: default_concurrency(),
        }
    }
}

fn default_service_url() -> String { DEFAULT_ENDPOINT.to_string() }
fn default_timeout_secs() -> u64 { 30 }
fn default_concurrency() -> usize { 1 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

/// Errors raised while loading settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Configuration error: {0}")]
    Load(#[from] ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] validator::ValidationErrors),
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml), or `path` when given
    /// 4. Environment variables (prefixed with FACEBATCH_)
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        let mut builder = Config::builder()
            .add_source(File::with_name("config/default").required(false));

        builder = match path {
            Some(path) => builder.add_source(File::from(path)),
            None => builder.add_source(File::with_name("config/local").required(false)),
        };

        // e.g., FACEBATCH__SERVICE__TIMEOUT_SECS -> service.timeout_secs
        let settings = builder
            .add_source(
                Environment::with_prefix("FACEBATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Self::from_config(settings)
    }

    fn from_config(config: Config) -> Result<Self, SettingsError> {
        let settings: Settings = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            service: ServiceSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}
