//! Data models for the financial API test harness
//!
//! This module contains all data structures shared by generation, execution
//! and reporting.

mod analysis;
mod api_response;
mod api_spec;
mod test_case;
mod test_result;

pub use analysis::{Analysis, AnalysisSummary};
pub use api_response::ApiResponse;
pub use api_spec::{ApiKind, ApiSpec};
pub use test_case::{Priority, TestAction, TestCase};
pub use test_result::{RunSummary, TestResult, TestStatus};
