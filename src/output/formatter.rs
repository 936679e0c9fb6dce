//! Output formatters for run reports
//!
//! Provides table, JSON and summary renderings of a `TestReport`.

use std::fmt::Write;

use crate::models::{Analysis, TestResult, TestStatus};
use crate::results::TestReport;

/// Output format options
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    JsonPretty,
    Summary,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "table" => Some(OutputFormat::Table),
            "json" => Some(OutputFormat::Json),
            "json-pretty" | "jsonpretty" => Some(OutputFormat::JsonPretty),
            "summary" => Some(OutputFormat::Summary),
            _ => None,
        }
    }
}

/// Report formatter
pub struct ResultFormatter {
    format: OutputFormat,
    colorize: bool,
}

impl ResultFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            colorize: true,
        }
    }

    pub fn no_color(mut self) -> Self {
        self.colorize = false;
        self
    }

    fn status_label(&self, status: TestStatus) -> &'static str {
        if self.colorize {
            match status {
                TestStatus::Passed => "\x1b[32m✓ PASS \x1b[0m",
                TestStatus::Failed => "\x1b[31m✗ FAIL \x1b[0m",
                TestStatus::Skipped => "\x1b[33m○ SKIP \x1b[0m",
                TestStatus::Error => "\x1b[31m! ERROR\x1b[0m",
            }
        } else {
            match status {
                TestStatus::Passed => "✓ PASS ",
                TestStatus::Failed => "✗ FAIL ",
                TestStatus::Skipped => "○ SKIP ",
                TestStatus::Error => "! ERROR",
            }
        }
    }

    fn format_result_table(&self, result: &TestResult) -> String {
        format!(
            "{:40} {:8} {} [{:>8.1}ms] {}",
            truncate(&result.test_name, 40),
            result.priority,
            self.status_label(result.status),
            result.response_time * 1000.0,
            result.message
        )
    }

    /// Format a whole report
    pub fn format_report(&self, report: &TestReport) -> String {
        match self.format {
            OutputFormat::Table => self.format_report_table(report),
            OutputFormat::Json => serde_json::to_string(report).unwrap_or_default(),
            OutputFormat::JsonPretty => serde_json::to_string_pretty(report).unwrap_or_default(),
            OutputFormat::Summary => self.format_report_summary(report),
        }
    }

    fn format_report_table(&self, report: &TestReport) -> String {
        let mut output = String::new();

        let _ = writeln!(output, "\n{:═^80}", " Test Results ");
        for result in &report.test_results {
            let _ = writeln!(output, " {}", self.format_result_table(result));
        }
        let _ = writeln!(output, "{:─^80}", "");

        let summary = report.summary();
        let rate = report.success_rate();
        let rate_str = format!("{rate:.1}%");
        let rate_colored = if self.colorize {
            if rate >= 90.0 {
                format!("\x1b[32m{rate_str}\x1b[0m")
            } else if rate >= 50.0 {
                format!("\x1b[33m{rate_str}\x1b[0m")
            } else {
                format!("\x1b[31m{rate_str}\x1b[0m")
            }
        } else {
            rate_str
        };

        let _ = writeln!(
            output,
            " Total: {} | Pass: {} | Fail: {} | Skip: {} | Error: {} | Success Rate: {}",
            summary.total, summary.passed, summary.failed, summary.skipped, summary.errors, rate_colored
        );

        if !report.domain_scenarios.is_empty() {
            let _ = writeln!(output, "\n{:─^80}", " Domain Scenarios ");
            for spec in &report.domain_scenarios {
                let _ = writeln!(output, " {}", spec.api_name);
                for scenario in &spec.scenarios {
                    let _ = writeln!(
                        output,
                        "   - {} [{}/{}]",
                        scenario.name, scenario.scenario_type, scenario.priority
                    );
                }
            }
        }

        let _ = write!(output, "{}", self.format_analysis(&report.ai_analysis));
        let _ = writeln!(output, "{:═^80}", "");
        output
    }

    fn format_report_summary(&self, report: &TestReport) -> String {
        let mut output = String::new();

        let _ = writeln!(output, "\n=== AI-Enhanced Test Report ===");
        let _ = writeln!(output, "Total Tests: {}", report.total_tests);
        let _ = writeln!(output, "Passed: {}", report.passed_tests);
        let _ = writeln!(output, "Failed: {}", report.failed_tests);
        let _ = writeln!(output, "Success Rate: {:.1}%", report.success_rate());
        let _ = write!(output, "{}", self.format_analysis(&report.ai_analysis));
        output
    }

    fn format_analysis(&self, analysis: &Analysis) -> String {
        let mut output = String::new();
        let _ = writeln!(output, "\n=== AI Analysis ===");

        match analysis {
            Analysis::Narrative { analysis } => {
                let _ = writeln!(output, "{analysis}");
            }
            Analysis::Summary(summary) => {
                let _ = writeln!(output, "Overall Health: {}", summary.overall_health);
                let _ = writeln!(
                    output,
                    "Success Rate: {} ({}/{} passed)",
                    summary.success_rate, summary.passed_tests, summary.total_tests
                );
                let _ = writeln!(output, "Recommendations:");
                for recommendation in &summary.recommendations {
                    let _ = writeln!(output, "  - {recommendation}");
                }
            }
        }

        output
    }
}

impl Default for ResultFormatter {
    fn default() -> Self {
        Self::new(OutputFormat::Table)
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
