use std::fs;
use std::path::Path;

use anyhow::{self, Context};
use serde::{Deserialize, Serialize};

/// Startup policy knobs for the interactive shell.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Re-validate the PIN immediately after loading a persisted ledger,
    /// refusing to start on failure.
    #[serde(default)]
    pub reauthenticate_on_load: bool,
}

impl AppConfig {
    pub fn read(filepath: impl AsRef<Path>) -> anyhow::Result<Self> {
        let file_content = fs::read_to_string(filepath)
            .with_context(|| "failed to read config file")?;
        let config = toml::from_str(&file_content)
            .with_context(|| "failed to parse config file")?;
        return Ok(config);
    }
}

#[cfg(test)]
mod tests {
    use super::AppConfig;

    #[test]
    fn defaults_to_no_reauthentication() {
        let config = AppConfig::default();
        assert!(!config.reauthenticate_on_load);
    }

    #[test]
    fn parses_the_policy_flag() {
        let config: AppConfig = toml::from_str("reauthenticate_on_load = true").unwrap();
        assert!(config.reauthenticate_on_load);
    }

    #[test]
    fn missing_key_falls_back_to_default() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert!(!config.reauthenticate_on_load);
    }
}
