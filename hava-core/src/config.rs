use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

/// Built-in demo key used when no key has been configured, so the app works
/// on first run. Rate-limited; run `hava configure` for serious use.
const DEFAULT_API_KEY: &str = "9b083c44e952430b983122109251110";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// weatherapi.com API key. Falls back to the built-in demo key when unset.
    pub api_key: Option<String>,
}

impl Config {
    /// Key to authenticate lookups with.
    pub fn resolved_api_key(&self) -> &str {
        self.api_key.as_deref().unwrap_or(DEFAULT_API_KEY)
    }

    pub fn has_own_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "hava", "hava-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_demo_key() {
        let cfg = Config::default();

        assert!(!cfg.has_own_key());
        assert_eq!(cfg.resolved_api_key(), DEFAULT_API_KEY);
    }

    #[test]
    fn configured_key_wins_over_demo_key() {
        let mut cfg = Config::default();
        cfg.set_api_key("MY_KEY".into());

        assert!(cfg.has_own_key());
        assert_eq!(cfg.resolved_api_key(), "MY_KEY");
    }

    #[test]
    fn config_round_trips_through_toml() {
        let mut cfg = Config::default();
        cfg.set_api_key("MY_KEY".into());

        let toml = toml::to_string_pretty(&cfg).expect("serialize");
        let parsed: Config = toml::from_str(&toml).expect("parse");

        assert_eq!(parsed.api_key.as_deref(), Some("MY_KEY"));
    }

    #[test]
    fn empty_toml_parses_to_default() {
        let parsed: Config = toml::from_str("").expect("parse");
        assert!(!parsed.has_own_key());
    }
}
