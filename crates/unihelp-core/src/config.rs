use crate::error::{Result, UnihelpError};
use crate::models::request::Coordinate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered configuration for the UniHelp client
///
/// Precedence: CLI arguments > environment variables > config file > defaults.
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    /// Base URL of the campus backend API
    pub api_url: ConfigValue<String>,
    /// Bearer token for authenticated calls; absent for anonymous browsing
    pub token: ConfigValue<Option<String>>,
    /// Page size requested from list endpoints
    pub page_size: ConfigValue<u32>,
    /// Fixed origin used instead of a device location fix, when set
    pub origin: ConfigValue<Option<Coordinate>>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            api_url: ConfigValue::new("http://localhost:8080".to_string(), ConfigSource::Default),
            token: ConfigValue::new(None, ConfigSource::Default),
            page_size: ConfigValue::new(5, ConfigSource::Default),
            origin: ConfigValue::new(None, ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| UnihelpError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| UnihelpError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(api_url) = file_config.api_url {
            self.api_url.update(api_url, ConfigSource::File);
        }

        if let Some(token) = file_config.token {
            self.token.update(Some(token), ConfigSource::File);
        }

        if let Some(page_size) = file_config.page_size {
            self.page_size.update(page_size, ConfigSource::File);
        }

        if let (Some(latitude), Some(longitude)) = (file_config.latitude, file_config.longitude) {
            self.origin
                .update(Some(Coordinate::new(latitude, longitude)), ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        if let Ok(api_url) = env::var("UNIHELP_API_URL") {
            self.api_url.update(api_url, ConfigSource::Environment);
        }

        if let Ok(token) = env::var("UNIHELP_TOKEN") {
            self.token.update(Some(token), ConfigSource::Environment);
        }

        if let Ok(size_str) = env::var("UNIHELP_PAGE_SIZE") {
            match size_str.parse::<u32>() {
                Ok(size) => self.page_size.update(size, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid UNIHELP_PAGE_SIZE value '{}': expected positive integer",
                    size_str
                ),
            }
        }

        // Both halves of the coordinate are required for a usable origin
        if let (Ok(lat_str), Ok(lon_str)) = (env::var("UNIHELP_LAT"), env::var("UNIHELP_LON")) {
            match (lat_str.parse::<f64>(), lon_str.parse::<f64>()) {
                (Ok(latitude), Ok(longitude)) => self.origin.update(
                    Some(Coordinate::new(latitude, longitude)),
                    ConfigSource::Environment,
                ),
                _ => tracing::warn!(
                    "Invalid UNIHELP_LAT/UNIHELP_LON values '{}'/'{}': expected decimal degrees",
                    lat_str,
                    lon_str
                ),
            }
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(api_url) = overrides.api_url {
            self.api_url.update(api_url, ConfigSource::Cli);
        }

        if let Some(token) = overrides.token {
            self.token.update(Some(token), ConfigSource::Cli);
        }

        if let Some(page_size) = overrides.page_size {
            self.page_size.update(page_size, ConfigSource::Cli);
        }

        if let Some(origin) = overrides.origin {
            self.origin.update(Some(origin), ConfigSource::Cli);
        }
    }

    /// The bearer token, or a typed error when an authenticated call needs one
    pub fn require_token(&self) -> Result<&str> {
        self.token
            .value
            .as_deref()
            .ok_or_else(|| UnihelpError::ConfigMissing {
                key: "token".to_string(),
            })
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        map.insert(
            "api_url".to_string(),
            (self.api_url.value.clone(), self.api_url.source),
        );

        map.insert(
            "token".to_string(),
            (
                match &self.token.value {
                    Some(_) => "(set)".to_string(),
                    None => "(unset)".to_string(),
                },
                self.token.source,
            ),
        );

        map.insert(
            "page_size".to_string(),
            (self.page_size.value.to_string(), self.page_size.source),
        );

        map.insert(
            "origin".to_string(),
            (
                match &self.origin.value {
                    Some(c) => format!("{},{}", c.latitude, c.longitude),
                    None => "(device location)".to_string(),
                },
                self.origin.source,
            ),
        );

        map
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    api_url: Option<String>,
    token: Option<String>,
    page_size: Option<u32>,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub api_url: Option<String>,
    pub token: Option<String>,
    pub page_size: Option<u32>,
    pub origin: Option<Coordinate>,
}
