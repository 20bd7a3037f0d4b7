//! Application configuration.
//!
//! Loaded from ~/.config/wizlauncher/wizlauncher.yml or ./wizlauncher.yml

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::registry::VersionPolicy;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log level used when RUST_LOG is unset.
    #[serde(rename = "log-level")]
    pub log_level: Option<String>,

    /// Registry file; overrides the registry search paths.
    pub registry: Option<PathBuf>,

    /// Whether unknown versions may be launched.
    #[serde(rename = "version-policy")]
    pub version_policy: VersionPolicy,

    pub tui: TuiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    #[serde(rename = "tick-rate-ms")]
    pub tick_rate_ms: u64,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self { tick_rate_ms: 250 }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: Some("info".to_string()),
            registry: None,
            version_policy: VersionPolicy::Strict,
            tui: TuiConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        Self::load_first_found(Self::search_paths())
    }

    /// Discovered config locations, in priority order
    fn search_paths() -> Vec<PathBuf> {
        let project_name = env!("CARGO_PKG_NAME");
        let mut paths = Vec::new();

        // Primary location: ~/.config/<project>/<project>.yml
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join(project_name).join(format!("{}.yml", project_name)));
        }

        // Fallback location: ./<project>.yml
        paths.push(PathBuf::from(format!("{}.yml", project_name)));
        paths
    }

    /// Load the first existing file. A file that exists but fails to load is an error.
    fn load_first_found(candidates: impl IntoIterator<Item = PathBuf>) -> Result<Self> {
        for candidate in candidates {
            if candidate.exists() {
                return Self::load_from_file(&candidate)
                    .context(format!("Failed to load config from {}", candidate.display()));
            }
        }

        // No config file found, use defaults
        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;
        config.validate()?;

        log::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.tui.tick_rate_ms == 0 {
            eyre::bail!("tui.tick-rate-ms must be > 0");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.log_level.as_deref(), Some("info"));
        assert!(config.registry.is_none());
        assert_eq!(config.version_policy, VersionPolicy::Strict);
        assert_eq!(config.tui.tick_rate_ms, 250);
    }

    #[test]
    fn test_load_explicit_file() {
        let file = write_config(
            "log-level: debug\nregistry: /srv/pipeline/registry.yml\nversion-policy: permissive\ntui:\n  tick-rate-ms: 100\n",
        );

        let config = Config::load(Some(&file.path().to_path_buf())).unwrap();
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.registry, Some(PathBuf::from("/srv/pipeline/registry.yml")));
        assert_eq!(config.version_policy, VersionPolicy::Permissive);
        assert_eq!(config.tui.tick_rate_ms, 100);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let file = write_config("version-policy: strict\n");

        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.version_policy, VersionPolicy::Strict);
        assert_eq!(config.tui.tick_rate_ms, 250);
        assert!(config.registry.is_none());
    }

    #[test]
    fn test_invalid_policy_rejected() {
        let file = write_config("version-policy: sometimes\n");
        assert!(Config::load_from_file(file.path()).is_err());
    }

    #[test]
    fn test_zero_tick_rate_rejected() {
        let file = write_config("tui:\n  tick-rate-ms: 0\n");
        assert!(Config::load_from_file(file.path()).is_err());
    }

    #[test]
    fn test_discovered_invalid_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wizlauncher.yml");
        fs::write(&path, "version-policy: permisive\n").unwrap();

        let err = Config::load_first_found(vec![path.clone()]).unwrap_err();
        assert!(format!("{:#}", err).contains(&path.display().to_string()));
    }

    #[test]
    fn test_discovered_invalid_file_does_not_fall_through() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.yml");
        let valid = dir.path().join("valid.yml");
        fs::write(&broken, "tui:\n  tick-rate-ms: 0\n").unwrap();
        fs::write(&valid, "version-policy: permissive\n").unwrap();

        assert!(Config::load_first_found(vec![broken, valid]).is_err());
    }

    #[test]
    fn test_discovered_file_loads_first_existing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.yml");
        let valid = dir.path().join("wizlauncher.yml");
        fs::write(&valid, "version-policy: permissive\n").unwrap();

        let config = Config::load_first_found(vec![missing, valid]).unwrap();
        assert_eq!(config.version_policy, VersionPolicy::Permissive);
    }

    #[test]
    fn test_no_discovered_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_first_found(vec![dir.path().join("absent.yml")]).unwrap();
        assert_eq!(config.version_policy, VersionPolicy::Strict);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let path = PathBuf::from("/nonexistent/wizlauncher.yml");
        assert!(Config::load(Some(&path)).is_err());
    }
}
