//! Completion provider abstraction
//!
//! One prompt in, one block of text out. The OpenAI-compatible
//! implementation talks to a `/v1/completions` style endpoint.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::debug;

use crate::clients::HttpClient;
use crate::config::ProviderConfig;

/// Provider errors
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider request failed: {0}")]
    Request(String),

    #[error("Provider returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),
}

/// Budget and sampling settings for one completion
#[derive(Clone, Debug, PartialEq)]
pub struct CompletionRequest {
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl CompletionRequest {
    pub fn new(prompt: impl Into<String>, max_tokens: u32, temperature: f32) -> Self {
        Self {
            prompt: prompt.into(),
            max_tokens,
            temperature,
        }
    }
}

#[async_trait]
pub trait CompletionProvider: Send + Sync {
    fn name(&self) -> &str;

    async fn complete(&self, request: CompletionRequest) -> Result<String, ProviderError>;
}

/// OpenAI-compatible text completion provider
pub struct OpenAiCompletionProvider {
    client: HttpClient,
    endpoint: String,
    model: String,
    api_key: String,
}

impl OpenAiCompletionProvider {
    pub fn new(config: &ProviderConfig, api_key: impl Into<String>) -> anyhow::Result<Self> {
        Ok(Self {
            client: HttpClient::with_timeout(config.timeout_secs)?,
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            api_key: api_key.into(),
        })
    }

    fn request_body(&self, request: &CompletionRequest) -> Value {
        json!({
            "model": self.model,
            "prompt": request.prompt,
            "max_tokens": request.max_tokens,
            "temperature": request.temperature,
        })
    }
}

#[async_trait]
impl CompletionProvider for OpenAiCompletionProvider {
    fn name(&self) -> &str {
        &self.model
    }

    async fn complete(&self, request: CompletionRequest) -> Result<String, ProviderError> {
        let mut headers = BTreeMap::new();
        headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", self.api_key),
        );

        debug!(
            "Requesting completion from {} (max_tokens={}, temperature={})",
            self.model, request.max_tokens, request.temperature
        );

        let response = self
            .client
            .post_json(&self.endpoint, &self.request_body(&request), headers)
            .await
            .map_err(|e| ProviderError::Request(e.to_string()))?;

        if !response.is_success() {
            return Err(ProviderError::Api {
                status: response.status_code,
                message: response.body,
            });
        }

        let body: Value = response
            .json()
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        body["choices"][0]["text"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| ProviderError::InvalidResponse("Missing choices[0].text".to_string()))
    }
}
