//! User configuration.
//!
//! Configuration is an optional JSON file. Unless a path is given explicitly
//! it is looked up following the XDG Base Directory specification at
//! `$XDG_CONFIG_HOME/kisan-saathi/config.json`
//! (usually `~/.config/kisan-saathi/config.json`).
//!
//! ```json
//! { "default_crop": "wheat", "default_stage": 2 }
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{AdvisoryError, ConfigResultExt, Result};

/// XDG prefix for configuration files.
pub const CONFIG_PREFIX: &str = "kisan-saathi";

/// Configuration file name within the XDG config directory.
pub const CONFIG_FILE: &str = "config.json";

/// Settings that shape a new viewing session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdvisoryConfig {
    /// Crop selected when a session starts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_crop: Option<String>,

    /// Stage index selected when a session starts; clamped to the crop's
    /// final stage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_stage: Option<usize>,
}

impl AdvisoryConfig {
    /// Load configuration.
    ///
    /// With an explicit `path` the file must exist. Without one, the XDG
    /// location is used and a missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns `AdvisoryError::FileSystem` if the file cannot be read and
    /// `AdvisoryError::Configuration` if it is not valid configuration JSON.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) => Self::from_file(&path),
                None => {
                    debug!("No configuration file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Read configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `AdvisoryError::FileSystem` if the file cannot be read and
    /// `AdvisoryError::Configuration` if it is not valid configuration JSON.
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from {}", path.display());
        let contents = fs::read_to_string(path).map_err(|e| AdvisoryError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&contents)
            .map_err(|e| match e {
                AdvisoryError::Configuration { message } => AdvisoryError::Configuration {
                    message: format!("{}: {message}", path.display()),
                },
                other => other,
            })
    }

    /// Parse configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `AdvisoryError::Configuration` for malformed JSON or unknown
    /// fields.
    pub fn from_json(contents: &str) -> Result<Self> {
        serde_json::from_str(contents).config_context("Invalid configuration")
    }

    /// Existing configuration file in the XDG config directories, if any.
    pub fn default_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix(CONFIG_PREFIX).find_config_file(CONFIG_FILE)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_from_json_full() {
        let config =
            AdvisoryConfig::from_json(r#"{"default_crop": "rice", "default_stage": 3}"#).unwrap();
        assert_eq!(config.default_crop.as_deref(), Some("rice"));
        assert_eq!(config.default_stage, Some(3));
    }

    #[test]
    fn test_from_json_empty_object() {
        let config = AdvisoryConfig::from_json("{}").unwrap();
        assert_eq!(config, AdvisoryConfig::default());
    }

    #[test]
    fn test_from_json_rejects_unknown_fields() {
        let err = AdvisoryConfig::from_json(r#"{"default_season": "rabi"}"#).unwrap_err();
        assert!(matches!(err, AdvisoryError::Configuration { .. }));
    }

    #[test]
    fn test_from_json_rejects_negative_stage() {
        assert!(AdvisoryConfig::from_json(r#"{"default_stage": -1}"#).is_err());
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"default_crop": "wheat"}}"#).unwrap();

        let config = AdvisoryConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.default_crop.as_deref(), Some("wheat"));
        assert_eq!(config.default_stage, None);
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = AdvisoryConfig::load(Some(&dir.path().join("absent.json"))).unwrap_err();
        assert!(matches!(err, AdvisoryError::FileSystem { .. }));
    }

    #[test]
    fn test_malformed_file_names_path() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = AdvisoryConfig::from_file(file.path()).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("Configuration error:"));
        assert!(message.contains(&file.path().display().to_string()));
    }
}
