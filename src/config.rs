//! Configuration for the address metadata engine

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Country answered when a query names none
pub const DEFAULT_COUNTRY: &str = "US";

/// Default time to wait for the engine
pub const DEFAULT_QUERY_TIMEOUT_MS: u64 = 5_000;

const DEFAULT_COUNTRY_ENV: &str = "ADDRESS_METADATA_DEFAULT_COUNTRY";
const LAYOUTS_PATH_ENV: &str = "ADDRESS_METADATA_LAYOUTS";

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LayoutConfig {
    /// Fallback country for queries without one
    pub default_country: Option<String>,
    /// Engine query timeout in milliseconds
    pub query_timeout_ms: Option<u64>,
    /// Extra layouts overriding the built-in ones
    pub layouts_path: Option<PathBuf>,
}

impl LayoutConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "address-metadata", "address-metadata")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::load_file()?;
        config.apply_env(
            std::env::var(DEFAULT_COUNTRY_ENV).ok(),
            std::env::var(LAYOUTS_PATH_ENV).ok(),
        );
        Ok(config)
    }

    fn load_file() -> Result<Self> {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: LayoutConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    fn apply_env(&mut self, default_country: Option<String>, layouts_path: Option<String>) {
        if let Some(country) = default_country.filter(|c| !c.is_empty()) {
            self.default_country = Some(country);
        }
        if let Some(path) = layouts_path.filter(|p| !p.is_empty()) {
            self.layouts_path = Some(PathBuf::from(path));
        }
    }

    pub fn default_country(&self) -> &str {
        self.default_country
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_COUNTRY)
    }

    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout_ms.unwrap_or(DEFAULT_QUERY_TIMEOUT_MS))
    }
}
