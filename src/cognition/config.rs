//! # Configuration
//!
//! Storage location is resolved from explicit values rather than process-wide
//! state. A [`StorageConfig`] is built once (by the CLI, a test, or any other
//! host) and handed to the store.
//!
//! ## Storage Location
//!
//! ```text
//! <home>/it1901-gr2103/cognition/<filename>
//! ```
//!
//! | Setting | Default | Source |
//! |---------|---------|--------|
//! | `home` | user home directory | `COGNITION_HOME`, `--home`, or [`directories::BaseDirs`] |
//! | `mode` | `normal` | `--test` switches to `test` |
//! | `filename` | `cognition.json` (`cognitionTest.json` in test mode) | explicit override |

use crate::error::{CognitionError, Result};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const APP_DIR: &str = "it1901-gr2103";
pub const COMPONENT_DIR: &str = "cognition";
pub const DEFAULT_FILENAME: &str = "cognition.json";
pub const TEST_FILENAME: &str = "cognitionTest.json";

/// Environment variable overriding the home directory.
pub const HOME_ENV: &str = "COGNITION_HOME";

/// Selects which document a store works on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageMode {
    #[default]
    Normal,
    /// Isolated document for test runs, so they never touch real data.
    Test,
}

impl StorageMode {
    pub fn default_filename(self) -> &'static str {
        match self {
            StorageMode::Normal => DEFAULT_FILENAME,
            StorageMode::Test => TEST_FILENAME,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    pub home: PathBuf,
    #[serde(default)]
    pub mode: StorageMode,
    /// Overrides the mode's filename when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

impl StorageConfig {
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self {
            home: home.into(),
            mode: StorageMode::Normal,
            filename: None,
        }
    }

    /// Uses `COGNITION_HOME` if set, otherwise the user's home directory.
    pub fn from_env() -> Result<Self> {
        if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::new(home));
        }

        let dirs = BaseDirs::new().ok_or_else(|| {
            CognitionError::Store("Could not determine the home directory".to_string())
        })?;
        Ok(Self::new(dirs.home_dir()))
    }

    pub fn with_mode(mut self, mode: StorageMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn filename(&self) -> &str {
        self.filename
            .as_deref()
            .unwrap_or_else(|| self.mode.default_filename())
    }

    pub fn storage_dir(&self) -> PathBuf {
        storage_dir_in(&self.home)
    }

    pub fn storage_path(&self) -> PathBuf {
        self.storage_dir().join(self.filename())
    }
}

fn storage_dir_in(home: &Path) -> PathBuf {
    home.join(APP_DIR).join(COMPONENT_DIR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_layout() {
        let config = StorageConfig::new("/home/alice");
        assert_eq!(
            config.storage_path(),
            PathBuf::from("/home/alice/it1901-gr2103/cognition/cognition.json")
        );
    }

    #[test]
    fn test_mode_uses_isolated_file() {
        let config = StorageConfig::new("/home/alice").with_mode(StorageMode::Test);
        assert_eq!(config.filename(), "cognitionTest.json");
        assert_eq!(
            config.storage_dir(),
            PathBuf::from("/home/alice/it1901-gr2103/cognition")
        );
    }

    #[test]
    fn explicit_filename_wins() {
        let config = StorageConfig::new("/tmp")
            .with_mode(StorageMode::Test)
            .with_filename("other.json");
        assert_eq!(config.filename(), "other.json");
    }

    #[test]
    fn config_serializes_mode_in_lowercase() {
        let config = StorageConfig::new("/tmp").with_mode(StorageMode::Test);
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["mode"], "test");
        assert!(json.get("filename").is_none());

        let back: StorageConfig = serde_json::from_value(json).unwrap();
        assert_eq!(back, config);
    }
}
