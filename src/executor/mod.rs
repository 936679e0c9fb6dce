//! Test execution engine
//!
//! Runs generated cases against the mock clients and drives full runs.

mod dispatch;
mod runner;
mod test_data;

pub use dispatch::TestExecutor;
pub use runner::TestPipeline;
