//! Configuration file discovery

use std::path::PathBuf;

/// Configuration file locations (in order of precedence)
const CONFIG_LOCATIONS: &[&str] = &[
    "./fintest-ai.yaml",
    "./fintest-ai.yml",
    "./fintest-ai.json",
    "~/.config/fintest-ai/config.yaml",
];

/// First existing configuration file in the standard locations
pub fn find_config_file() -> Option<PathBuf> {
    CONFIG_LOCATIONS
        .iter()
        .map(|location| expand_path(location))
        .find(|path| path.exists())
}

/// Expand ~ to home directory
pub fn expand_path(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_relative_path() {
        assert_eq!(expand_path("./test.yaml"), PathBuf::from("./test.yaml"));
    }

    #[test]
    fn test_expand_home_path() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(
                expand_path("~/.config/fintest-ai/config.yaml"),
                home.join(".config/fintest-ai/config.yaml")
            );
        }
    }
}
