//! Application configuration management.

use serde::Deserialize;

use crate::types::money::Currency;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Tax calculation defaults.
    #[serde(default)]
    pub tax: TaxConfig,
    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,
}

/// Tax calculation defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxConfig {
    /// Rate in basis points used when a command does not specify one.
    #[serde(default)]
    pub default_rate_bps: i64,
    /// Currency amounts are reported in when none is given.
    #[serde(default = "default_currency")]
    pub default_currency: Currency,
}

impl Default for TaxConfig {
    fn default() -> Self {
        Self {
            default_rate_bps: 0,
            default_currency: default_currency(),
        }
    }
}

fn default_currency() -> Currency {
    Currency::Usd
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogConfig {
    /// Output format of the log layer.
    #[serde(default)]
    pub format: LogFormat,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable, one event per line.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl AppConfig {
    /// Loads configuration from the `config/` directory and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Loads configuration from `{dir}/default`, `{dir}/{RUN_MODE}` and
    /// `LEDGERLY__*` environment variables, later sources winning.
    ///
    /// # Errors
    ///
    /// Returns an error if a present file is malformed or a value has the
    /// wrong type.
    pub fn load_from(dir: &str) -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name(&format!("{dir}/default")).required(false))
            .add_source(config::File::with_name(&format!("{dir}/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("LEDGERLY")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
