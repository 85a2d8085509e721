//! Configuration management for `travelbrief`
//!
//! Handles loading configuration from a TOML file and environment variables,
//! and validates every setting before the pipeline is built from it.

use crate::TravelBriefError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Default encyclopedic provider endpoint
pub const DEFAULT_WIKIPEDIA_API_URL: &str = "https://en.wikipedia.org/w/api.php";
/// Default weather provider base URL
pub const DEFAULT_WEATHER_BASE_URL: &str = "https://api.open-meteo.com/v1";
/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
/// Default user agent sent to both providers
pub const DEFAULT_USER_AGENT: &str = concat!("travelbrief/", env!("CARGO_PKG_VERSION"));

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TravelBriefConfig {
    /// External provider endpoints and HTTP settings
    #[serde(default)]
    pub providers: ProvidersConfig,
    /// Output defaults
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Provider endpoint settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvidersConfig {
    /// Wikipedia `api.php` endpoint used for coordinates and summaries
    #[serde(default = "default_wikipedia_api_url")]
    pub wikipedia_api_url: String,
    /// Open-Meteo base URL; `/forecast` is appended
    #[serde(default = "default_weather_base_url")]
    pub weather_base_url: String,
    /// Request timeout in seconds, applied to every outbound call
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    /// User agent header
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Default output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Output format (json or brief)
    #[serde(default = "default_output_format")]
    pub output_format: String,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_wikipedia_api_url() -> String {
    DEFAULT_WIKIPEDIA_API_URL.to_string()
}

fn default_weather_base_url() -> String {
    DEFAULT_WEATHER_BASE_URL.to_string()
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_output_format() -> String {
    "json".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            wikipedia_api_url: default_wikipedia_api_url(),
            weather_base_url: default_weather_base_url(),
            timeout_seconds: default_timeout_seconds(),
            user_agent: default_user_agent(),
        }
    }
}

impl ProvidersConfig {
    /// Request timeout as a `Duration`
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            output_format: default_output_format(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl TravelBriefConfig {
    /// Load configuration from the default location and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // TRAVELBRIEF_PROVIDERS__TIMEOUT_SECONDS=5 and friends
        builder = builder.add_source(
            Environment::with_prefix("TRAVELBRIEF")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| format!("Failed to build configuration from {}", config_file.display()))?;

        let mut config: TravelBriefConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("travelbrief").join("config.toml"))
    }

    /// Apply default values to empty configuration fields
    pub fn apply_defaults(&mut self) {
        if self.providers.wikipedia_api_url.is_empty() {
            self.providers.wikipedia_api_url = default_wikipedia_api_url();
        }
        if self.providers.weather_base_url.is_empty() {
            self.providers.weather_base_url = default_weather_base_url();
        }
        if self.providers.timeout_seconds == 0 {
            self.providers.timeout_seconds = default_timeout_seconds();
        }
        if self.providers.user_agent.is_empty() {
            self.providers.user_agent = default_user_agent();
        }
        if self.defaults.output_format.is_empty() {
            self.defaults.output_format = default_output_format();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    fn validate_numeric_ranges(&self) -> Result<()> {
        if !(1..=120).contains(&self.providers.timeout_seconds) {
            return Err(TravelBriefError::config(
                "Provider timeout must be between 1 and 120 seconds",
            )
            .into());
        }
        Ok(())
    }

    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(TravelBriefError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(TravelBriefError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        let valid_output_formats = ["json", "brief"];
        if !valid_output_formats.contains(&self.defaults.output_format.as_str()) {
            return Err(TravelBriefError::config(format!(
                "Invalid output format '{}'. Must be one of: {}",
                self.defaults.output_format,
                valid_output_formats.join(", ")
            ))
            .into());
        }

        for (name, url) in [
            ("Wikipedia API URL", &self.providers.wikipedia_api_url),
            ("Weather API base URL", &self.providers.weather_base_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(TravelBriefError::config(format!(
                    "{name} must be a valid HTTP or HTTPS URL"
                ))
                .into());
            }
        }

        Ok(())
    }
}
