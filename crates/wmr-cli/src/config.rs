//! # CLI Configuration
//!
//! Optional YAML file selected with `--config`. Every key is optional and
//! command-line flags take precedence over file values.
//!
//! ```yaml
//! log:
//!   level: info      # warn when unset
//!   json: false      # structured JSON log lines on stderr
//! validation:
//!   schema: true     # run hard validation before warnings
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub log: LogConfig,
    pub validation: ValidationConfig,
}

/// Logging options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// Filter directive used when no `-v` flag is given.
    pub level: Option<String>,
    /// Emit JSON log lines instead of human-readable ones.
    pub json: bool,
}

/// Validation options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationConfig {
    /// Run hard schema validation before generating warnings.
    pub schema: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self { schema: true }
    }
}

impl CliConfig {
    /// Load from `path`, or return defaults when no path is given.
    ///
    /// An empty file is treated as all defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("invalid config file: {}", path.display()))
    }

    /// Parse a YAML document.
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_no_path() {
        let config = CliConfig::load(None).unwrap();
        assert_eq!(config, CliConfig::default());
        assert!(config.validation.schema);
        assert!(!config.log.json);
        assert!(config.log.level.is_none());
    }

    #[test]
    fn empty_file_is_defaults() {
        assert_eq!(CliConfig::from_yaml("").unwrap(), CliConfig::default());
        assert_eq!(CliConfig::from_yaml("\n  \n").unwrap(), CliConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = CliConfig::from_yaml("log:\n  json: true\n").unwrap();
        assert!(config.log.json);
        assert!(config.validation.schema);
    }

    #[test]
    fn full_file() {
        let config = CliConfig::from_yaml(
            "log:\n  level: debug\n  json: false\nvalidation:\n  schema: false\n",
        )
        .unwrap();
        assert_eq!(config.log.level.as_deref(), Some("debug"));
        assert!(!config.validation.schema);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(CliConfig::from_yaml("logging:\n  level: info\n").is_err());
        assert!(CliConfig::from_yaml("validation:\n  strict: true\n").is_err());
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wmr.yaml");
        std::fs::write(&path, "validation:\n  schema: false\n").unwrap();
        let config = CliConfig::load(Some(&path)).unwrap();
        assert!(!config.validation.schema);
    }

    #[test]
    fn load_missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.yaml");
        let err = CliConfig::load(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("missing.yaml"));
    }
}
