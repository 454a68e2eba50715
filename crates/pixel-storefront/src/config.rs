//! Storefront configuration.

use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Storefront configuration file (`pixelmart.toml`).
///
/// Every field has a usable default; `PIXELMART_ENDPOINT` and
/// `PIXELMART_API_KEY` override the file so deployments can keep credentials
/// out of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Base URL of the search endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// API key sent as `x-api-key`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Staleness window for cached search responses, in seconds.
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,

    /// Debounce delay for price-range edits, in milliseconds.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Items per rendered page.
    #[serde(default = "default_page_size")]
    pub page_size: i64,
}

fn default_endpoint() -> String {
    "http://localhost:8090".to_string()
}

fn default_cache_ttl_secs() -> u64 {
    60
}

fn default_debounce_ms() -> u64 {
    550
}

fn default_page_size() -> i64 {
    24
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: None,
            cache_ttl_secs: default_cache_ttl_secs(),
            debounce_ms: default_debounce_ms(),
            page_size: default_page_size(),
        }
    }
}

impl StorefrontConfig {
    /// Load config from a TOML file, then apply environment overrides.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config: {}", path))?;
        Ok(config.with_env_overrides())
    }

    /// Defaults plus environment overrides; used when no file is given.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(endpoint) = std::env::var("PIXELMART_ENDPOINT") {
            if !endpoint.is_empty() {
                self.endpoint = endpoint;
            }
        }
        if let Ok(key) = std::env::var("PIXELMART_API_KEY") {
            if !key.is_empty() {
                self.api_key = Some(key);
            }
        }
        self
    }

    /// Cache staleness window.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// Debounce delay.
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
