//! Prompt construction and parsing of provider output

use serde_json::Value;

use super::provider::ProviderError;
use crate::models::{ApiSpec, TestCase, TestResult};

pub const TEST_CASE_MAX_TOKENS: u32 = 2000;
pub const TEST_CASE_TEMPERATURE: f32 = 0.7;
pub const ANALYSIS_MAX_TOKENS: u32 = 1000;
pub const ANALYSIS_TEMPERATURE: f32 = 0.3;
pub const TEST_DATA_MAX_TOKENS: u32 = 1000;
pub const TEST_DATA_TEMPERATURE: f32 = 0.8;

pub fn test_case_prompt(spec: &ApiSpec, context: &str) -> String {
    let spec_json = serde_json::to_string_pretty(spec).unwrap_or_default();
    format!(
        "As an expert financial software tester, generate comprehensive test cases for this API:

API Specification: {spec_json}
Context: {context}

Generate test cases covering:
1. Happy path scenarios
2. Edge cases and boundary conditions
3. Error handling
4. Security vulnerabilities
5. Performance considerations
6. Financial compliance scenarios

Return a JSON array of test cases. Each test case is an object with the fields
name, description, test_type, priority (critical, high, medium or low), steps
(array of strings), expected_result, api_endpoint and test_data (object)."
    )
}

pub fn analysis_prompt(results: &[TestResult]) -> String {
    let results_json = serde_json::to_string_pretty(results).unwrap_or_default();
    format!(
        "Analyze these test results and provide insights:

Results: {results_json}

Provide analysis including:
1. Overall test health
2. Failure patterns
3. Risk assessment
4. Recommendations for improvement
5. Potential issues to investigate"
    )
}

pub fn test_data_prompt(data_type: &str, count: usize) -> String {
    format!(
        "Generate {count} realistic {data_type} test data samples for financial testing.

For example, if data_type is \"bank_transaction\", generate realistic bank transactions.
If it's \"credit_card\", generate realistic credit card data (use fake numbers).

Return as JSON array with realistic but fake data suitable for testing."
    )
}

/// Span from the first `[` to the last `]`, inclusive
pub fn extract_json_array(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    (end > start).then(|| &text[start..=end])
}

fn parse_array(text: &str) -> Result<Vec<Value>, ProviderError> {
    let span = extract_json_array(text)
        .ok_or_else(|| ProviderError::InvalidResponse("No JSON array in output".to_string()))?;
    serde_json::from_str(span).map_err(|e| ProviderError::InvalidResponse(e.to_string()))
}

/// Parse test cases out of provider text.
///
/// Non-object elements are ignored; a malformed object fails the whole parse.
pub fn parse_test_cases(text: &str) -> Result<Vec<TestCase>, ProviderError> {
    parse_array(text)?
        .into_iter()
        .filter(Value::is_object)
        .map(|v| {
            serde_json::from_value(v).map_err(|e| ProviderError::InvalidResponse(e.to_string()))
        })
        .collect()
}

pub fn parse_test_data(text: &str) -> Result<Vec<Value>, ProviderError> {
    parse_array(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ApiKind, Priority, TestAction};

    #[test]
    fn test_prompt_embeds_spec_and_categories() {
        let spec = ApiSpec::new("Banking API", ApiKind::Banking);
        let prompt = test_case_prompt(&spec, "compliance focus");
        assert!(prompt.contains("\"name\": \"Banking API\""));
        assert!(prompt.contains("\"type\": \"banking_api\""));
        assert!(prompt.contains("Context: compliance focus"));
        assert!(prompt.contains("Financial compliance scenarios"));
    }

    #[test]
    fn test_extract_json_array() {
        assert_eq!(extract_json_array("Sure! [1, [2]] done"), Some("[1, [2]]"));
        assert_eq!(extract_json_array("no array"), None);
        assert_eq!(extract_json_array("] before ["), None);
    }

    #[test]
    fn test_parse_test_cases() {
        let text = r#"Here you go:
[
  {"name": "Transfer over limit", "description": "d", "test_type": "edge_case",
   "priority": "high", "steps": ["send"], "expected_result": "400",
   "test_data": {"amount": 999999}},
  "stray string",
  {"name": "Balance check", "description": "d", "test_type": "functional",
   "priority": "low", "steps": [], "expected_result": "200"}
]"#;

        let cases = parse_test_cases(text).unwrap();
        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].action, TestAction::Transfer);
        assert_eq!(cases[1].action, TestAction::AccountBalance);
    }

    #[test]
    fn test_parse_keeps_loose_priority_and_data() {
        let text = r#"[
  {"name": "Transfer spike", "description": "d", "test_type": "load",
   "priority": "urgent", "steps": [], "expected_result": "429",
   "test_data": "amount=5"},
  {"name": "Balance check", "description": "d", "test_type": "functional",
   "priority": "Medium", "steps": [], "expected_result": "200"}
]"#;

        let cases = parse_test_cases(text).unwrap();
        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].priority, Priority::Other("urgent".to_string()));
        assert_eq!(cases[0].test_data, Some(Value::from("amount=5")));
        assert_eq!(cases[1].priority, Priority::Medium);
    }

    #[test]
    fn test_parse_rejects_malformed_object() {
        let text = r#"[{"name": "missing everything"}]"#;
        assert!(parse_test_cases(text).is_err());
        assert!(parse_test_cases("[not json]").is_err());
        assert!(parse_test_cases("plain prose").is_err());
    }

    #[test]
    fn test_parse_test_data() {
        let rows = parse_test_data("```json\n[{\"id\": 1}, {\"id\": 2}]\n```").unwrap();
        assert_eq!(rows.len(), 2);
    }
}
