//! Configuration module
//!
//! Handles loading and managing configuration.

mod env;
mod file;

pub use env::EnvConfig;
pub use file::{expand_path, find_config_file};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::clients::http::DEFAULT_TIMEOUT_SECS;

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Completion provider settings
    pub provider: ProviderConfig,

    /// Market data endpoint settings
    pub market_data: MarketDataConfig,

    /// Default report path
    pub output_path: String,

    /// Default log level
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            provider: ProviderConfig::default(),
            market_data: MarketDataConfig::default(),
            output_path: "test_report.json".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = if is_yaml_file(path) {
            serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse YAML config: {}", path.display()))?
        } else {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))?
        };

        config.validate()?;
        Ok(config)
    }

    /// Load from an explicit path, else the first discovered file, else defaults
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => match find_config_file() {
                Some(path) => Self::load(path),
                None => Ok(Self::default()),
            },
        }
    }

    /// Apply environment overrides
    pub fn with_env(mut self, env: &EnvConfig) -> Self {
        if let Some(key) = &env.provider_api_key {
            self.provider.api_key = Some(key.clone());
        }
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.provider.endpoint.trim().is_empty() {
            anyhow::bail!("provider.endpoint must not be empty");
        }
        if self.provider.timeout_secs == 0 {
            anyhow::bail!("provider.timeout_secs must be greater than zero");
        }
        if self.market_data.base_url.trim().is_empty() {
            anyhow::bail!("market_data.base_url must not be empty");
        }
        if self.market_data.timeout_secs == 0 {
            anyhow::bail!("market_data.timeout_secs must be greater than zero");
        }
        Ok(())
    }
}

/// Completion provider configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Completions endpoint URL
    pub endpoint: String,

    /// Model name sent with each request
    pub model: String,

    /// Credential; generation uses templates when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.openai.com/v1/completions".to_string(),
            model: "gpt-3.5-turbo-instruct".to_string(),
            api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ProviderConfig {
    /// Credential if present and non-blank
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }
}

/// Market data configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketDataConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

impl Default for MarketDataConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.alphavantage.co/query".to_string(),
            api_key: "demo".to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Check if file is YAML based on extension
fn is_yaml_file(path: &Path) -> bool {
    path.extension()
        .map(|e| e == "yaml" || e == "yml")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.output_path, "test_report.json");
        assert_eq!(config.market_data.timeout_secs, 30);
        assert_eq!(config.market_data.api_key, "demo");
        assert!(config.provider.credential().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_blank_credential_is_absent() {
        let provider = ProviderConfig {
            api_key: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(provider.credential().is_none());
    }

    #[test]
    fn test_env_override() {
        let env = EnvConfig {
            provider_api_key: Some("sk-test".to_string()),
        };
        let config = AppConfig::default().with_env(&env);
        assert_eq!(config.provider.credential(), Some("sk-test"));
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fintest-ai.yaml");
        std::fs::write(&path, "market_data:\n  api_key: secret\n").unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.market_data.api_key, "secret");
        assert_eq!(config.market_data.base_url, "https://www.alphavantage.co/query");
        assert_eq!(config.provider.model, "gpt-3.5-turbo-instruct");
    }

    #[test]
    fn test_load_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{"output_path": "out/report.json", "provider": {"timeout_secs": 10}}"#,
        )
        .unwrap();

        let loaded = AppConfig::load(&path).unwrap();
        assert_eq!(loaded.output_path, "out/report.json");
        assert_eq!(loaded.provider.timeout_secs, 10);
        assert_eq!(loaded.market_data.timeout_secs, 30);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fintest-ai.yml");
        std::fs::write(&path, r#"provider:
  endpoint: ""
"#).unwrap();
        assert!(AppConfig::load(&path).is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = AppConfig::default();
        config.market_data.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_resolve_explicit_missing_file_errors() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.yaml");
        assert!(AppConfig::resolve(Some(&missing)).is_err());
    }
}
