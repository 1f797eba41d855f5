//! Client configuration, read from `tandem.toml` when present.

use serde::{Deserialize, Serialize};

use crate::cache::CacheConfig;

fn default_api_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_stale_time_secs() -> u64 {
    300
}

fn default_gc_time_secs() -> u64 {
    600
}

fn default_retry() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_stale_time_secs")]
    pub stale_time_secs: u64,
    #[serde(default = "default_gc_time_secs")]
    pub gc_time_secs: u64,
    #[serde(default = "default_retry")]
    pub retry: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            stale_time_secs: default_stale_time_secs(),
            gc_time_secs: default_gc_time_secs(),
            retry: default_retry(),
        }
    }
}

impl ClientConfig {
    pub fn filename() -> &'static str {
        "tandem.toml"
    }

    pub fn from_toml(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }

    /// Load the configuration for this platform. On the web there is no
    /// filesystem, so defaults apply; natively a `tandem.toml` in the
    /// working directory overrides them.
    pub fn load() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Ok(raw) = std::fs::read_to_string(Self::filename()) {
                match Self::from_toml(&raw) {
                    Ok(config) => return config,
                    Err(err) => {
                        tracing::warn!("ignoring invalid {}: {err}", Self::filename());
                    }
                }
            }
        }
        Self::default()
    }

    pub fn cache_config(&self) -> CacheConfig {
        CacheConfig {
            stale_time_ms: self.stale_time_secs * 1000,
            gc_time_ms: self.gc_time_secs * 1000,
            retry: self.retry,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:5000");
        let cache = config.cache_config();
        assert_eq!(cache.stale_time_ms, 300_000);
        assert_eq!(cache.gc_time_ms, 600_000);
        assert_eq!(cache.retry, 1);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = ClientConfig::from_toml("api_base_url = \"https://api.tandem.app\"").unwrap();
        assert_eq!(config.api_base_url, "https://api.tandem.app");
        assert_eq!(config.stale_time_secs, 300);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ClientConfig {
            api_base_url: "https://api.tandem.app".to_string(),
            stale_time_secs: 60,
            gc_time_secs: 120,
            retry: 2,
        };
        let parsed = ClientConfig::from_toml(&config.to_toml()).unwrap();
        assert_eq!(parsed, config);
    }
}
