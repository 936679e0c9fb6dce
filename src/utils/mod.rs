//! Shared utilities
//!
//! Timing and logging helpers used across the harness.

pub mod logger;
pub mod timer;

pub use logger::{init_logger, resolve_level};
pub use timer::{Stopwatch, Timer};
