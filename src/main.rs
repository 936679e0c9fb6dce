//! fintest-ai - AI-assisted test generation for financial APIs
//!
//! Generates test cases for a set of API specs (through a completion
//! provider when a credential is configured, from templates otherwise),
//! runs them against mock banking, market data and currency clients, and
//! writes a JSON report with an analysis of the run.
//!
//! ## Usage
//!
//! ```bash
//! # Run the built-in sample specs
//! fintest-ai
//!
//! # Run specs from a file and print a table
//! fintest-ai --specs apis.yaml --format table
//!
//! # Use a config file and write the report elsewhere
//! fintest-ai --config fintest-ai.yaml --output reports/run.json
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::info;

mod cli;
mod clients;
mod config;
mod executor;
mod generator;
mod knowledge;
mod models;
mod output;
mod results;
mod utils;

use cli::Args;
use config::{expand_path, AppConfig, EnvConfig};
use executor::{TestExecutor, TestPipeline};
use generator::TestCaseGenerator;
use knowledge::{FinancialKnowledge, KnowledgeBase};
use models::ApiSpec;
use output::{OutputFormat, ResultFormatter};
use results::ReportWriter;
use utils::{init_logger, resolve_level};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let env = EnvConfig::load();
    let config = AppConfig::resolve(args.config.as_deref())?.with_env(&env);

    let requested = args.log_level.as_deref().unwrap_or(&config.log_level);
    init_logger(resolve_level(args.verbose, requested));

    let specs = match &args.specs {
        Some(path) => ApiSpec::load_all(path)?,
        None => {
            info!("No spec file given; using built-in sample specs");
            ApiSpec::samples()
        }
    };

    let generator = TestCaseGenerator::from_config(&config.provider)?;
    let knowledge = FinancialKnowledge::new(KnowledgeBase::financial_domain());
    let executor = TestExecutor::new(config.market_data.clone());

    let mut pipeline = TestPipeline::new(generator, knowledge, executor);
    if let Some(data_type) = &args.sample_data {
        pipeline = pipeline.with_sample_data(data_type, args.sample_count);
    }

    let report = pipeline.run(&specs).await;

    let output_path = args
        .output
        .unwrap_or_else(|| expand_path(&config.output_path));
    ReportWriter::save(&report, &output_path)?;

    let mut formatter =
        ResultFormatter::new(OutputFormat::from_str(&args.format).unwrap_or(OutputFormat::Summary));
    if args.no_color {
        formatter = formatter.no_color();
    }

    println!("{}", formatter.format_report(&report));
    println!("Detailed report saved to: {}", output_path.display());

    Ok(())
}
