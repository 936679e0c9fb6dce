//! Report persistence
//!
//! Reports are written as pretty-printed JSON files.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

use super::report::TestReport;

/// Writes JSON reports
pub struct ReportWriter;

impl ReportWriter {
    /// Save a report, creating parent directories as needed
    pub fn save(report: &TestReport, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create report directory: {}", parent.display())
            })?;
        }

        let file = File::create(path)
            .with_context(|| format!("Failed to create report file: {}", path.display()))?;
        let mut writer = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, report).context("Failed to serialize report")?;
        writer.flush()?;

        info!("Saved report to {}", path.display());
        Ok(())
    }
}
