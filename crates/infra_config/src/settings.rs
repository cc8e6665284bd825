//! Settings and configuration structures.

use std::path::Path;

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use tracing::debug;

use crate::error::ConfigError;

/// Prefix for environment overrides (`LEBKIT__RATES__FIXED_RATE=89500`).
pub const ENV_PREFIX: &str = "LEBKIT";

/// Main application settings.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    /// General configuration
    #[serde(default)]
    pub general: GeneralConfig,
    /// Exchange rate configuration
    #[serde(default)]
    pub rates: RatesConfig,
    /// Holiday data configuration
    #[serde(default)]
    pub holidays: HolidaysConfig,
}

impl Settings {
    /// Load settings from configuration files and environment variables.
    ///
    /// Configuration is loaded in the following order (later sources override earlier):
    /// 1. `config/default.toml`
    /// 2. `config/{environment}.toml` (based on `LEBKIT_ENV`)
    /// 3. Environment variables prefixed with `LEBKIT__`
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var("LEBKIT_ENV").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        Self::from_config(config)
    }

    /// Load settings from an explicit TOML file, still honouring environment overrides.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let config = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        Self::from_config(config)
    }

    /// Parse settings from TOML text, without environment overrides.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::from_str(text, FileFormat::Toml))
            .build()?;

        Self::from_config(config)
    }

    fn from_config(config: Config) -> Result<Self, ConfigError> {
        let settings: Settings = config.try_deserialize()?;
        settings.validate()?;
        debug!(?settings, "configuration loaded");
        Ok(settings)
    }

    /// Check value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(rate) = self.rates.fixed_rate {
            if !rate.is_finite() || rate <= 0.0 {
                return Err(ConfigError::InvalidValue {
                    key: "rates.fixed_rate".into(),
                    message: format!("must be a positive number, got {}", rate),
                });
            }
        }
        if self.rates.source.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "rates.source".into(),
                message: "must not be empty".into(),
            });
        }
        Ok(())
    }
}

/// General configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct GeneralConfig {
    /// Default log filter directive (overridden by `RUST_LOG`)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Exchange rate configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct RatesConfig {
    /// LBP per 1 USD used when no live quote is supplied
    #[serde(default)]
    pub fixed_rate: Option<f64>,
    /// Name reported for the configured rate
    #[serde(default = "default_rate_source")]
    pub source: String,
}

impl Default for RatesConfig {
    fn default() -> Self {
        Self {
            fixed_rate: None,
            source: default_rate_source(),
        }
    }
}

fn default_rate_source() -> String {
    "config".to_string()
}

/// Holiday data configuration.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct HolidaysConfig {
    /// CSV file replacing the built-in holiday table
    #[serde(default)]
    pub data_file: Option<String>,
}
