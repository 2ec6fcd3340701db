//! Application Configuration
//!
//! Loaded from `config.toml`:
//!
//! ```toml
//! cloneable_apps = ["com.android.chrome"]
//! inventory = "/data/local/tmp/packages.json"
//! user = 0
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::value_objects::UserId;

const CONFIG_FILE_NAME: &str = "config.toml";
const APP_DIR_NAME: &str = "cloneable-apps";

/// Application configuration
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Packages cloneable even when they ship with the system image.
    /// Unset and empty behave the same.
    #[serde(default)]
    pub cloneable_apps: Option<Vec<String>>,

    /// Default inventory file when none is given on the command line
    #[serde(default)]
    pub inventory: Option<PathBuf>,

    /// Default user profile
    #[serde(default)]
    pub user: UserId,
}

impl Config {
    /// Find config.toml in standard locations
    pub fn find_config_path() -> Option<PathBuf> {
        // Check in order: config dir, exe dir, cwd
        let candidates = [
            dirs::config_dir().map(|p| p.join(APP_DIR_NAME).join(CONFIG_FILE_NAME)),
            std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|d| d.join(CONFIG_FILE_NAME))),
            Some(PathBuf::from(CONFIG_FILE_NAME)),
        ];

        candidates.into_iter().flatten().find(|candidate| candidate.exists())
    }

    /// Load an explicit config file, or discover one, or fall back to defaults.
    ///
    /// An explicit path must exist; a discovered file that fails to parse is
    /// still an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load_from_path(path),
            None => match Self::find_config_path() {
                Some(path) => Self::load_from_path(&path),
                None => Ok(Self::default()),
            },
        }
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

/// Configuration error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full() {
        let config = Config::parse(
            r#"
            cloneable_apps = ["com.android.chrome", "com.google.android.youtube"]
            inventory = "/tmp/packages.json"
            user = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.cloneable_apps.as_ref().map(Vec::len), Some(2));
        assert_eq!(config.inventory, Some(PathBuf::from("/tmp/packages.json")));
        assert_eq!(config.user, UserId(10));
    }

    #[test]
    fn test_parse_empty_uses_defaults() {
        let config = Config::parse("").unwrap();

        assert_eq!(config, Config::default());
        assert!(config.cloneable_apps.is_none());
        assert_eq!(config.user, UserId::PRIMARY);
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            Config::parse("cloneable_apps = \"not a list\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "cloneable_apps = []\n").unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config.cloneable_apps, Some(Vec::new()));
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load(Some(dir.path().join("nope.toml").as_path()));

        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
