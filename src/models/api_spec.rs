//! API specifications that drive test generation

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Kind of API under test, taken from the spec's `type` field
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ApiKind {
    Stock,
    Banking,
    Currency,
    /// Any type string the executor has no client for, kept verbatim
    Other(String),
}

impl ApiKind {
    pub fn as_str(&self) -> &str {
        match self {
            ApiKind::Stock => "stock_api",
            ApiKind::Banking => "banking_api",
            ApiKind::Currency => "currency_api",
            ApiKind::Other(s) => s,
        }
    }
}

impl Default for ApiKind {
    fn default() -> Self {
        ApiKind::Other("unknown".to_string())
    }
}

impl From<String> for ApiKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "stock_api" => ApiKind::Stock,
            "banking_api" => ApiKind::Banking,
            "currency_api" => ApiKind::Currency,
            _ => ApiKind::Other(s),
        }
    }
}

impl From<&str> for ApiKind {
    fn from(s: &str) -> Self {
        ApiKind::from(s.to_string())
    }
}

impl From<ApiKind> for String {
    fn from(kind: ApiKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for ApiKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Description of an API handed to the generator and executor
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiSpec {
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(rename = "type", default)]
    pub kind: ApiKind,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub endpoints: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authentication: Option<String>,
}

fn default_name() -> String {
    "Unknown API".to_string()
}

impl ApiSpec {
    pub fn new(name: impl Into<String>, kind: impl Into<ApiKind>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            description: String::new(),
            endpoints: Vec::new(),
            authentication: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_endpoints(mut self, endpoints: &[&str]) -> Self {
        self.endpoints = endpoints.iter().map(|e| e.to_string()).collect();
        self
    }

    pub fn with_authentication(mut self, authentication: impl Into<String>) -> Self {
        self.authentication = Some(authentication.into());
        self
    }

    /// Built-in specs used when no spec file is given
    pub fn samples() -> Vec<ApiSpec> {
        vec![
            ApiSpec::new("Stock Market API", ApiKind::Stock)
                .with_description("API for retrieving stock market data")
                .with_endpoints(&["/quote", "/historical"])
                .with_authentication("API Key"),
            ApiSpec::new("Banking API", ApiKind::Banking)
                .with_description("Core banking operations API")
                .with_endpoints(&["/balance", "/transfer", "/history"])
                .with_authentication("OAuth 2.0"),
            ApiSpec::new("Currency Exchange API", ApiKind::Currency)
                .with_description("Real-time currency exchange rates")
                .with_endpoints(&["/rates", "/convert"])
                .with_authentication("API Key"),
        ]
    }

    /// Load a list of specs from a YAML or JSON file
    pub fn load_all(path: impl AsRef<Path>) -> Result<Vec<ApiSpec>> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read spec file: {}", path.display()))?;

        let is_yaml = path
            .extension()
            .map(|e| e == "yaml" || e == "yml")
            .unwrap_or(false);

        let specs: Vec<ApiSpec> = if is_yaml {
            serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse YAML specs: {}", path.display()))?
        } else {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON specs: {}", path.display()))?
        };

        Ok(specs)
    }
}
