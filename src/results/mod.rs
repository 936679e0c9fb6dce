//! Result aggregation and report storage

mod report;
mod storage;

pub use report::{SampleData, SpecScenarios, TestAggregator, TestReport};
pub use storage::ReportWriter;
