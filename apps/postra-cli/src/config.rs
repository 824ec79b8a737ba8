//! CLI configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use postra_infra::address::DEFAULT_PREFIX;

pub const DEFAULT_STATE_FILE: &str = "postra-state.json";

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub state_file: PathBuf,
    pub address_prefix: String,
    /// Emit JSON log lines instead of pretty output.
    pub json_logs: bool,
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            state_file: env::var("POSTRA_STATE_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_STATE_FILE)),
            address_prefix: env::var("POSTRA_ADDRESS_PREFIX")
                .ok()
                .filter(|p| !p.is_empty())
                .unwrap_or_else(|| DEFAULT_PREFIX.to_string()),
            json_logs: env::var("LOG_FORMAT")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(false),
        }
    }

    /// Apply command-line overrides.
    pub fn with_overrides(mut self, state_file: Option<PathBuf>, prefix: Option<String>) -> Self {
        if let Some(path) = state_file {
            self.state_file = path;
        }
        if let Some(prefix) = prefix {
            self.address_prefix = prefix;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_win() {
        let config = CliConfig {
            state_file: PathBuf::from(DEFAULT_STATE_FILE),
            address_prefix: DEFAULT_PREFIX.to_string(),
            json_logs: false,
        }
        .with_overrides(Some(PathBuf::from("/tmp/other.json")), None);

        assert_eq!(config.state_file, PathBuf::from("/tmp/other.json"));
        assert_eq!(config.address_prefix, DEFAULT_PREFIX);
    }
}
