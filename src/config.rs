use crate::error::ConfigError;
use crate::icons::SizeList;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Tool configuration
///
/// Every field has a default, so a missing file or a file that sets only
/// some keys both work. Output location and file naming are fixed by
/// [`crate::icons::IconLayout`] and cannot be configured.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Square pixel sizes to render, in order
    pub sizes: SizeList,
    /// What to do when one size fails to render or write
    pub on_failure: FailurePolicy,
    /// tracing filter directive for stderr diagnostics
    pub log_level: String,
}

/// Behavior after a per-size failure
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Stop at the first failed size
    #[default]
    Abort,
    /// Try every size, then report all failures together
    Continue,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            sizes: SizeList::default(),
            on_failure: FailurePolicy::Abort,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "iconforge")
            .map(|proj_dirs| proj_dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from the user config dir, or defaults if there is none
    pub fn load() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    /// Load configuration from `path`; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.sizes.iter().collect::<Vec<_>>(), vec![16, 48, 128]);
        assert_eq!(config.on_failure, FailurePolicy::Abort);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).expect("Failed to serialize");
        let deserialized: Config = toml::from_str(&toml_str).expect("Failed to deserialize");
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: Config = toml::from_str("on_failure = \"continue\"").unwrap();
        assert_eq!(config.on_failure, FailurePolicy::Continue);
        assert_eq!(config.sizes, SizeList::default());
    }

    #[test]
    fn test_empty_size_list() {
        let config: Config = toml::from_str("sizes = []").unwrap();
        assert_eq!(config.sizes.iter().count(), 0);
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(toml::from_str::<Config>("sizes = [16, 0]").is_err());
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "sizes = [32, 64]\nlog_level = \"debug\"\n").unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.sizes.iter().collect::<Vec<_>>(), vec![32, 64]);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_load_from_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "sizes = \"large\"").unwrap();
        assert!(matches!(Config::load_from(&path), Err(ConfigError::Parse { .. })));
    }
}
