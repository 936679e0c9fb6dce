//! Test result models
//!
//! Defines per-case results, status types and the run-level breakdown.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::test_case::{Priority, TestCase};

/// Test execution status
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestStatus {
    Passed,
    Failed,
    Skipped,
    Error,
}

impl TestStatus {
    pub fn symbol(&self) -> &'static str {
        match self {
            TestStatus::Passed => "✓",
            TestStatus::Failed => "✗",
            TestStatus::Skipped => "○",
            TestStatus::Error => "!",
        }
    }
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestStatus::Passed => write!(f, "PASS"),
            TestStatus::Failed => write!(f, "FAIL"),
            TestStatus::Skipped => write!(f, "SKIP"),
            TestStatus::Error => write!(f, "ERROR"),
        }
    }
}

/// Result of executing one test case
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    pub test_name: String,
    pub test_type: String,
    pub priority: Priority,
    pub api_endpoint: Option<String>,
    pub status: TestStatus,
    pub message: String,
    /// Seconds, copied from the client response
    pub response_time: f64,
    pub timestamp: DateTime<Utc>,
}

impl TestResult {
    pub fn new(
        test_case: &TestCase,
        status: TestStatus,
        message: impl Into<String>,
        response_time: f64,
    ) -> Self {
        Self {
            test_name: test_case.name.clone(),
            test_type: test_case.test_type.clone(),
            priority: test_case.priority.clone(),
            api_endpoint: test_case.api_endpoint.clone(),
            status,
            message: message.into(),
            response_time,
            timestamp: Utc::now(),
        }
    }

    /// Passed when `success` is true, failed otherwise
    pub fn from_outcome(
        test_case: &TestCase,
        success: bool,
        message: impl Into<String>,
        response_time: f64,
    ) -> Self {
        let status = if success {
            TestStatus::Passed
        } else {
            TestStatus::Failed
        };
        Self::new(test_case, status, message, response_time)
    }

    pub fn skip(test_case: &TestCase, reason: impl Into<String>) -> Self {
        Self::new(test_case, TestStatus::Skipped, reason, 0.0)
    }

    pub fn error(test_case: &TestCase, error: impl Into<String>) -> Self {
        Self::new(test_case, TestStatus::Error, error, 0.0)
    }
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} [{:.3}s]",
            self.status.symbol(),
            self.test_name,
            self.response_time
        )?;
        if !self.message.is_empty() {
            write!(f, " - {}", self.message)?;
        }
        Ok(())
    }
}

/// Status breakdown over a set of results
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub errors: usize,
    pub total_response_time: f64,
}

impl RunSummary {
    pub fn from_results(results: &[TestResult]) -> Self {
        let count = |status: TestStatus| results.iter().filter(|r| r.status == status).count();

        Self {
            total: results.len(),
            passed: count(TestStatus::Passed),
            failed: count(TestStatus::Failed),
            skipped: count(TestStatus::Skipped),
            errors: count(TestStatus::Error),
            total_response_time: results.iter().map(|r| r.response_time).sum(),
        }
    }

    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.passed as f64 / self.total as f64) * 100.0
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total: {} | Pass: {} | Fail: {} | Skip: {} | Error: {} | Pass Rate: {:.1}%",
            self.total,
            self.passed,
            self.failed,
            self.skipped,
            self.errors,
            self.pass_rate()
        )
    }
}
