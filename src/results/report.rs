//! Report record and aggregation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::knowledge::{ComplianceRequirements, DomainScenario};
use crate::models::{Analysis, RunSummary, TestResult, TestStatus};

/// Knowledge-derived scenarios for one API spec
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpecScenarios {
    pub api_name: String,
    pub scenarios: Vec<DomainScenario>,
    pub compliance: ComplianceRequirements,
}

/// Fabricated or provider-generated records attached to a run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SampleData {
    pub data_type: String,
    pub records: Vec<Value>,
}

/// Final record of a run, written as the JSON report
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TestReport {
    pub test_results: Vec<TestResult>,
    pub ai_analysis: Analysis,
    pub total_tests: usize,
    pub passed_tests: usize,

    /// Everything that did not pass, skipped and error included
    pub failed_tests: usize,

    pub timestamp: DateTime<Utc>,

    #[serde(default)]
    pub domain_scenarios: Vec<SpecScenarios>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_data: Option<SampleData>,
}

impl TestReport {
    /// Per-status breakdown of the results
    pub fn summary(&self) -> RunSummary {
        RunSummary::from_results(&self.test_results)
    }

    /// Passed over total as a percentage, 0 for an empty run
    pub fn success_rate(&self) -> f64 {
        if self.total_tests == 0 {
            0.0
        } else {
            self.passed_tests as f64 / self.total_tests as f64 * 100.0
        }
    }

    pub fn with_sample_data(mut self, sample_data: SampleData) -> Self {
        self.sample_data = Some(sample_data);
        self
    }
}

/// Builds the report from executed results
pub struct TestAggregator;

impl TestAggregator {
    pub fn build_report(
        results: Vec<TestResult>,
        analysis: Analysis,
        scenarios: Vec<SpecScenarios>,
    ) -> TestReport {
        let total_tests = results.len();
        let passed_tests = results
            .iter()
            .filter(|r| r.status == TestStatus::Passed)
            .count();

        TestReport {
            test_results: results,
            ai_analysis: analysis,
            total_tests,
            passed_tests,
            failed_tests: total_tests - passed_tests,
            timestamp: Utc::now(),
            domain_scenarios: scenarios,
            sample_data: None,
        }
    }
}
