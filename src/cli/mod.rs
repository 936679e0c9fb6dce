//! CLI argument parsing
//!
//! Defines command-line interface using clap.

use clap::Parser;
use std::path::PathBuf;

/// AI-assisted test generation and execution for financial APIs
#[derive(Parser, Debug)]
#[command(name = "fintest-ai")]
#[command(version)]
#[command(about = "Generate, run and report tests against mock financial APIs")]
#[command(long_about = None)]
pub struct Args {
    /// API spec file (YAML or JSON list); built-in samples when omitted
    #[arg(short, long)]
    pub specs: Option<PathBuf>,

    /// Report path (overrides the config's output_path)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file (YAML or JSON)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format (table, json, json-pretty, summary)
    #[arg(short, long, default_value = "summary")]
    pub format: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Also generate sample records of this type (bank_transaction, credit_card, ...)
    #[arg(long)]
    pub sample_data: Option<String>,

    /// Number of sample records
    #[arg(long, default_value = "5")]
    pub sample_count: usize,
}
