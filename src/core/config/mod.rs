//! Configuration types and management for colcheck-rs.
//!
//! A single YAML document configures the naming thresholds, the data value
//! checks, and optionally where to load the lexicon from. Every section has
//! defaults, so an empty file is a valid configuration.

pub mod validation;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::errors::{ColcheckError, Result, ResultExt};
use crate::detectors::names::NamingConfig;
use crate::detectors::values::ValueChecksConfig;

pub use validation::{
    validate_finite, validate_non_blank, validate_ordered, validate_positive_usize,
    validate_ratio,
};

/// Main configuration for the colcheck engine
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColcheckConfig {
    /// Column-name check thresholds
    #[serde(default)]
    pub naming: NamingConfig,

    /// Column data checks
    #[serde(default)]
    pub values: ValueChecksConfig,

    /// Lexicon file; the bundled lexicon is used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lexicon: Option<PathBuf>,
}

impl ColcheckConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading configuration from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|e| {
            ColcheckError::io(format!("Failed to read config file: {}", path.display()), e)
        })?;

        let mut config = Self::from_yaml_str(&content)
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;

        // A relative lexicon path is resolved against the config file location.
        if let (Some(lexicon), Some(parent)) = (config.lexicon.as_ref(), path.parent()) {
            if lexicon.is_relative() {
                config.lexicon = Some(parent.join(lexicon));
            }
        }

        Ok(config)
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = if content.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(content)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn to_yaml_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content).map_err(|e| {
            ColcheckError::io(
                format!("Failed to write config file: {}", path.display()),
                e,
            )
        })
    }

    /// Validate every section
    pub fn validate(&self) -> Result<()> {
        self.naming.validate()?;
        self.values.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_empty_document_is_default() {
        let config = ColcheckConfig::from_yaml_str("").unwrap();
        assert_eq!(config, ColcheckConfig::default());
    }

    #[test]
    fn test_partial_document() {
        let config = ColcheckConfig::from_yaml_str("naming:\n  max_length: 40\n").unwrap();
        assert_eq!(config.naming.max_length, 40);
        assert_eq!(config.values.sentinel, -999.0);
        assert!(config.lexicon.is_none());
    }

    #[test]
    fn test_invalid_section_rejected() {
        let err = ColcheckConfig::from_yaml_str("naming:\n  warn_length: 0\n").unwrap_err();
        assert!(matches!(err, ColcheckError::Config { .. }));
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".colcheck.yml");

        let mut config = ColcheckConfig::default();
        config.naming.warn_length = 20;
        config.to_yaml_file(&path).unwrap();

        let loaded = ColcheckConfig::from_yaml_file(&path).unwrap();
        assert_eq!(loaded.naming.warn_length, 20);
    }

    #[test]
    fn test_relative_lexicon_resolved_against_config_dir() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("colcheck.yml");
        std::fs::write(&path, "lexicon: words.yml\n").unwrap();

        let config = ColcheckConfig::from_yaml_file(&path).unwrap();
        assert_eq!(config.lexicon, Some(dir.path().join("words.yml")));
    }

    #[test]
    fn test_invalid_file_names_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.yml");
        std::fs::write(&path, "naming:\n  warn_length: 0\n").unwrap();

        let err = ColcheckConfig::from_yaml_file(&path).unwrap_err();
        assert!(matches!(err, ColcheckError::Config { .. }));
        assert!(err.to_string().contains("bad.yml"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ColcheckConfig::from_yaml_file("/nonexistent/colcheck.yml").unwrap_err();
        assert!(matches!(err, ColcheckError::Io { .. }));
    }
}
