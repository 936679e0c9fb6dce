//! tracing subscriber setup for the binary

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Level for this run. `--verbose` wins; unknown names fall back to info.
pub fn resolve_level(verbose: bool, requested: &str) -> Level {
    if verbose {
        return Level::DEBUG;
    }
    match requested.trim().to_ascii_lowercase().as_str() {
        "warning" => Level::WARN,
        name => name.parse().unwrap_or(Level::INFO),
    }
}

/// Install the global subscriber. Logs go to stderr so stdout only carries
/// the report. Call once from `main`.
pub fn init_logger(level: Level) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("fintest_ai={level}")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_named_levels() {
        assert_eq!(resolve_level(false, "info"), Level::INFO);
        assert_eq!(resolve_level(false, "ERROR"), Level::ERROR);
        assert_eq!(resolve_level(false, " WARNING "), Level::WARN);
    }

    #[test]
    fn test_resolve_unknown_falls_back_to_info() {
        assert_eq!(resolve_level(false, "verbose"), Level::INFO);
        assert_eq!(resolve_level(false, ""), Level::INFO);
    }

    #[test]
    fn test_verbose_forces_debug() {
        assert_eq!(resolve_level(true, "error"), Level::DEBUG);
    }
}
