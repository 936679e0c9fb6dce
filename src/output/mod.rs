//! Output formatting module
//!
//! Renders run reports for the terminal.

mod formatter;

pub use formatter::{OutputFormat, ResultFormatter};
