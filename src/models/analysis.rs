//! Analysis attached to a finished run

use serde::{Deserialize, Serialize};

/// Outcome of the analysis step.
///
/// Serialized untagged so the report carries either the provider's free
/// text under `analysis` or the computed summary fields directly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Analysis {
    Narrative { analysis: String },
    Summary(AnalysisSummary),
}

/// Deterministic analysis computed without a provider
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub overall_health: String,
    pub success_rate: String,
    pub total_tests: usize,
    pub passed_tests: usize,
    pub failed_tests: usize,
    pub recommendations: Vec<String>,
}
