//! Environment variable configuration
//!
//! The only value read from the environment is the provider credential.

use std::env;

/// Variable holding the completion provider credential
pub const PROVIDER_KEY_VAR: &str = "OPENAI_API_KEY";

/// Configuration from environment variables
#[derive(Clone, Debug, Default)]
pub struct EnvConfig {
    /// Provider credential from OPENAI_API_KEY
    pub provider_api_key: Option<String>,
}

impl EnvConfig {
    /// Load configuration from environment variables
    pub fn load() -> Self {
        Self {
            provider_api_key: env::var(PROVIDER_KEY_VAR)
                .ok()
                .filter(|v| !v.trim().is_empty()),
        }
    }
}
