//! Test case generation
//!
//! `TestCaseGenerator` is chosen once from configuration: provider-backed
//! when a credential is present, template-backed otherwise. A provider
//! failure never reaches the caller; each operation degrades to its
//! deterministic template.

mod data;
pub mod prompt;
mod provider;
mod template;

pub use data::fabricate;
pub use provider::{CompletionProvider, CompletionRequest, OpenAiCompletionProvider};
pub use template::TemplateGenerator;

#[cfg(test)]
pub use provider::ProviderError;
#[cfg(test)]
pub use template::summarize;

use anyhow::Result;
use serde_json::Value;
use tracing::{info, warn};

use crate::config::ProviderConfig;
use crate::models::{Analysis, ApiSpec, TestCase, TestResult};
use prompt::{
    ANALYSIS_MAX_TOKENS, ANALYSIS_TEMPERATURE, TEST_CASE_MAX_TOKENS, TEST_CASE_TEMPERATURE,
    TEST_DATA_MAX_TOKENS, TEST_DATA_TEMPERATURE,
};

/// Generation backed by a completion provider, with template fallback
pub struct ProviderGenerator {
    provider: Box<dyn CompletionProvider>,
    fallback: TemplateGenerator,
}

impl ProviderGenerator {
    pub fn new(provider: Box<dyn CompletionProvider>) -> Self {
        Self {
            provider,
            fallback: TemplateGenerator,
        }
    }

    async fn generate_test_cases(&self, spec: &ApiSpec, context: &str) -> Vec<TestCase> {
        let request = CompletionRequest::new(
            prompt::test_case_prompt(spec, context),
            TEST_CASE_MAX_TOKENS,
            TEST_CASE_TEMPERATURE,
        );

        match self
            .provider
            .complete(request)
            .await
            .and_then(|text| prompt::parse_test_cases(&text))
        {
            Ok(cases) => {
                info!(
                    "{} generated {} test cases for {}",
                    self.provider.name(),
                    cases.len(),
                    spec.name
                );
                cases
            }
            Err(e) => {
                warn!("AI generation failed for {}: {}", spec.name, e);
                self.fallback.generate_test_cases(spec)
            }
        }
    }

    async fn analyze_test_results(&self, results: &[TestResult]) -> Analysis {
        let request = CompletionRequest::new(
            prompt::analysis_prompt(results),
            ANALYSIS_MAX_TOKENS,
            ANALYSIS_TEMPERATURE,
        );

        match self.provider.complete(request).await {
            Ok(text) => Analysis::Narrative {
                analysis: text.trim().to_string(),
            },
            Err(e) => {
                warn!("Analysis failed: {}", e);
                Analysis::Summary(self.fallback.analyze_test_results(results))
            }
        }
    }

    async fn generate_test_data(&self, data_type: &str, count: usize) -> Vec<Value> {
        let request = CompletionRequest::new(
            prompt::test_data_prompt(data_type, count),
            TEST_DATA_MAX_TOKENS,
            TEST_DATA_TEMPERATURE,
        );

        match self
            .provider
            .complete(request)
            .await
            .and_then(|text| prompt::parse_test_data(&text))
        {
            Ok(rows) => rows,
            Err(e) => {
                warn!("Test data generation failed: {}", e);
                fabricate(data_type, count, &mut rand::rng())
            }
        }
    }
}

/// Test case, analysis and test data generation
pub enum TestCaseGenerator {
    ProviderBacked(ProviderGenerator),
    TemplateBacked(TemplateGenerator),
}

impl TestCaseGenerator {
    /// Provider-backed when a credential is configured
    pub fn from_config(config: &ProviderConfig) -> Result<Self> {
        match config.credential() {
            Some(key) => {
                let provider = OpenAiCompletionProvider::new(config, key)?;
                info!("Using {} for test generation", config.model);
                Ok(Self::with_provider(provider))
            }
            None => {
                info!("No provider credential configured; using template generation");
                Ok(Self::template())
            }
        }
    }

    pub fn template() -> Self {
        Self::TemplateBacked(TemplateGenerator)
    }

    pub fn with_provider(provider: impl CompletionProvider + 'static) -> Self {
        Self::ProviderBacked(ProviderGenerator::new(Box::new(provider)))
    }

    pub fn mode(&self) -> &'static str {
        match self {
            Self::ProviderBacked(_) => "provider",
            Self::TemplateBacked(_) => "template",
        }
    }

    pub async fn generate_test_cases(&self, spec: &ApiSpec, context: &str) -> Vec<TestCase> {
        match self {
            Self::ProviderBacked(generator) => generator.generate_test_cases(spec, context).await,
            Self::TemplateBacked(generator) => generator.generate_test_cases(spec),
        }
    }

    pub async fn analyze_test_results(&self, results: &[TestResult]) -> Analysis {
        match self {
            Self::ProviderBacked(generator) => generator.analyze_test_results(results).await,
            Self::TemplateBacked(generator) => {
                Analysis::Summary(generator.analyze_test_results(results))
            }
        }
    }

    pub async fn generate_test_data(&self, data_type: &str, count: usize) -> Vec<Value> {
        match self {
            Self::ProviderBacked(generator) => generator.generate_test_data(data_type, count).await,
            Self::TemplateBacked(_) => fabricate(data_type, count, &mut rand::rng()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ApiKind, Priority, TestStatus};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    /// Provider replaying a canned reply and recording requests
    struct ScriptedProvider {
        reply: Result<String, String>,
        seen: Arc<Mutex<Vec<CompletionRequest>>>,
    }

    impl ScriptedProvider {
        fn replying(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                seen: Arc::default(),
            }
        }

        fn failing() -> Self {
            Self {
                reply: Err("connection reset".to_string()),
                seen: Arc::default(),
            }
        }
    }

    #[async_trait]
    impl CompletionProvider for ScriptedProvider {
        fn name(&self) -> &str {
            "scripted"
        }

        async fn complete(&self, request: CompletionRequest) -> Result<String, ProviderError> {
            self.seen.lock().unwrap().push(request);
            self.reply.clone().map_err(ProviderError::Request)
        }
    }

    fn banking_spec() -> ApiSpec {
        ApiSpec::new("Banking API", ApiKind::Banking)
    }

    #[test]
    fn test_from_config_without_credential() {
        let generator = TestCaseGenerator::from_config(&ProviderConfig::default()).unwrap();
        assert_eq!(generator.mode(), "template");
    }

    #[test]
    fn test_from_config_with_credential() {
        let config = ProviderConfig {
            api_key: Some("sk-test".to_string()),
            ..Default::default()
        };
        let generator = TestCaseGenerator::from_config(&config).unwrap();
        assert_eq!(generator.mode(), "provider");
    }

    #[tokio::test]
    async fn test_provider_cases_are_used() {
        let provider = ScriptedProvider::replying(
            r#"[{"name": "Banking API transfer limit", "description": "d",
                 "test_type": "edge_case", "priority": "critical",
                 "steps": ["s"], "expected_result": "rejected"}]"#,
        );
        let seen = provider.seen.clone();
        let generator = TestCaseGenerator::with_provider(provider);

        let cases = generator.generate_test_cases(&banking_spec(), "ctx").await;
        assert_eq!(cases.len(), 1);
        assert_eq!(cases[0].priority, Priority::Critical);

        let seen = seen.lock().unwrap();
        assert_eq!(seen[0].max_tokens, 2000);
        assert_eq!(seen[0].temperature, 0.7);
        assert!(seen[0].prompt.contains("Banking API"));
    }

    #[tokio::test]
    async fn test_unparseable_output_falls_back() {
        let generator = TestCaseGenerator::with_provider(ScriptedProvider::replying(
            "I cannot produce JSON today.",
        ));
        let cases = generator.generate_test_cases(&banking_spec(), "").await;
        assert_eq!(cases, TemplateGenerator.generate_test_cases(&banking_spec()));
    }

    #[tokio::test]
    async fn test_provider_error_falls_back() {
        let generator = TestCaseGenerator::with_provider(ScriptedProvider::failing());
        let cases = generator.generate_test_cases(&banking_spec(), "").await;
        assert_eq!(cases.len(), 3);
        assert_eq!(cases[0].name, "Banking API Happy Path Test");
    }

    #[test]
    fn test_template_analysis() {
        let generator = TestCaseGenerator::template();
        let case = TestCase::new("c", "d", "functional", Priority::High);
        let results = vec![
            TestResult::from_outcome(&case, true, "", 0.0),
            TestResult::new(&case, TestStatus::Failed, "", 0.0),
        ];

        let analysis = tokio_test::block_on(generator.analyze_test_results(&results));
        match analysis {
            Analysis::Summary(summary) => {
                assert_eq!(summary.success_rate, "50.0%");
                assert_eq!(summary.overall_health, "Needs Attention");
            }
            other => panic!("unexpected analysis: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_provider_analysis_is_trimmed_text() {
        let provider = ScriptedProvider::replying("\n  Healthy run.  \n");
        let seen = provider.seen.clone();
        let generator = TestCaseGenerator::with_provider(provider);

        let analysis = generator.analyze_test_results(&[]).await;
        assert_eq!(
            analysis,
            Analysis::Narrative {
                analysis: "Healthy run.".to_string()
            }
        );
        let seen = seen.lock().unwrap();
        assert_eq!(seen[0].max_tokens, 1000);
        assert_eq!(seen[0].temperature, 0.3);
    }

    #[tokio::test]
    async fn test_provider_analysis_failure_uses_summary() {
        let generator = TestCaseGenerator::with_provider(ScriptedProvider::failing());
        let analysis = generator.analyze_test_results(&[]).await;
        assert!(matches!(analysis, Analysis::Summary(_)));
    }

    #[tokio::test]
    async fn test_test_data_paths() {
        let template = TestCaseGenerator::template();
        assert_eq!(template.generate_test_data("credit_card", 4).await.len(), 4);

        let provider = ScriptedProvider::replying(r#"[{"card_number": "0000-1111"}]"#);
        let seen = provider.seen.clone();
        let generator = TestCaseGenerator::with_provider(provider);
        let rows = generator.generate_test_data("credit_card", 4).await;
        assert_eq!(rows.len(), 1);
        assert_eq!(seen.lock().unwrap()[0].temperature, 0.8);

        let generator = TestCaseGenerator::with_provider(ScriptedProvider::failing());
        assert_eq!(generator.generate_test_data("bank_transaction", 2).await.len(), 2);
    }
}
