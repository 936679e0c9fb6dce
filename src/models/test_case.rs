//! Generated test case descriptors

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Test priority. Labels outside the four known levels are kept verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
    Other(String),
}

impl Priority {
    pub fn as_str(&self) -> &str {
        match self {
            Priority::Critical => "critical",
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
            Priority::Other(label) => label,
        }
    }
}

impl From<String> for Priority {
    fn from(s: String) -> Self {
        match s.trim().to_lowercase().as_str() {
            "critical" => Priority::Critical,
            "high" => Priority::High,
            "medium" => Priority::Medium,
            "low" => Priority::Low,
            _ => Priority::Other(s),
        }
    }
}

impl From<Priority> for String {
    fn from(p: Priority) -> Self {
        match p {
            Priority::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Client operation a test case exercises.
///
/// Fixed when the case is generated so the executor dispatches on a tag
/// instead of re-reading the free-text name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestAction {
    StockPrice,
    AccountBalance,
    Transfer,
    ExchangeRate,
    #[default]
    Unsupported,
}

impl TestAction {
    /// Derive the action from keywords in a test name (case-insensitive)
    pub fn infer(name: &str) -> Self {
        let name = name.to_lowercase();
        if name.contains("get_stock_price") {
            TestAction::StockPrice
        } else if name.contains("balance") {
            TestAction::AccountBalance
        } else if name.contains("transfer") {
            TestAction::Transfer
        } else if name.contains("exchange_rate") {
            TestAction::ExchangeRate
        } else {
            TestAction::Unsupported
        }
    }
}

/// A single generated test case
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "ProposedTestCase")]
pub struct TestCase {
    pub name: String,
    pub description: String,
    pub test_type: String,
    pub priority: Priority,
    pub steps: Vec<String>,
    pub expected_result: String,
    pub api_endpoint: Option<String>,
    /// Usually an object of named inputs; kept as sent
    pub test_data: Option<Value>,
    pub action: TestAction,
}

impl TestCase {
    /// Create a test case; the action is inferred from the name
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        test_type: impl Into<String>,
        priority: Priority,
    ) -> Self {
        let name = name.into();
        let action = TestAction::infer(&name);
        Self {
            name,
            description: description.into(),
            test_type: test_type.into(),
            priority,
            steps: Vec::new(),
            expected_result: String::new(),
            api_endpoint: None,
            test_data: None,
            action,
        }
    }

    pub fn with_steps(mut self, steps: &[&str]) -> Self {
        self.steps = steps.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_expected_result(mut self, expected: impl Into<String>) -> Self {
        self.expected_result = expected.into();
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.api_endpoint = Some(endpoint.into());
        self
    }

    pub fn with_test_data(mut self, data: Value) -> Self {
        self.test_data = Some(data);
        self
    }
}

impl fmt::Display for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}/{}]", self.name, self.test_type, self.priority)
    }
}

/// Wire shape of a test case as produced by a completion provider
#[derive(Deserialize)]
struct ProposedTestCase {
    name: String,
    description: String,
    test_type: String,
    priority: Priority,
    steps: Vec<String>,
    expected_result: String,
    #[serde(default)]
    api_endpoint: Option<String>,
    #[serde(default)]
    test_data: Option<Value>,
    #[serde(default)]
    action: Option<TestAction>,
}

impl From<ProposedTestCase> for TestCase {
    fn from(p: ProposedTestCase) -> Self {
        let action = p.action.unwrap_or_else(|| TestAction::infer(&p.name));
        Self {
            name: p.name,
            description: p.description,
            test_type: p.test_type,
            priority: p.priority,
            steps: p.steps,
            expected_result: p.expected_result,
            api_endpoint: p.api_endpoint,
            test_data: p.test_data,
            action,
        }
    }
}
