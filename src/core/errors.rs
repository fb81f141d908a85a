//! Error types for the colcheck-rs library.
//!
//! Name checks themselves never fail: they return a [`Status`](crate::core::status::Status).
//! The errors here cover everything around them (loading lexicons and
//! configuration, reading tables, serializing reports) so that a broken
//! vocabulary stops the process before any name is validated.

use std::io;

use thiserror::Error;

/// Main result type for colcheck operations.
pub type Result<T> = std::result::Result<T, ColcheckError>;

/// Error type for all fallible colcheck operations.
#[derive(Error, Debug)]
pub enum ColcheckError {
    /// I/O related errors (reading lexicons, configs, tables)
    #[error("I/O error: {message}")]
    Io {
        /// Human-readable error message
        message: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        /// Error description
        message: String,
        /// Configuration field that caused the error
        field: Option<String>,
    },

    /// Lexicon tables that break their invariants
    #[error("Lexicon error: {message}")]
    Lexicon {
        /// Error description
        message: String,
        /// Lexicon entry that caused the error
        entry: Option<String>,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error description
        message: String,
        /// Data type being serialized
        data_type: Option<String>,
        /// Underlying serialization error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Validation errors for input data
    #[error("Validation error: {message}")]
    Validation {
        /// Error description
        message: String,
        /// Field or input that failed validation
        field: Option<String>,
    },

    /// Generic internal errors
    #[error("Internal error: {message}")]
    Internal {
        /// Error description
        message: String,
        /// Additional context
        context: Option<String>,
    },
}

impl ColcheckError {
    /// Create a new I/O error with context
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: None,
        }
    }

    /// Create a new configuration error with field context
    pub fn config_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a new lexicon error
    pub fn lexicon(message: impl Into<String>) -> Self {
        Self::Lexicon {
            message: message.into(),
            entry: None,
        }
    }

    /// Create a new lexicon error pointing at a specific entry
    pub fn lexicon_entry(message: impl Into<String>, entry: impl Into<String>) -> Self {
        Self::Lexicon {
            message: message.into(),
            entry: Some(entry.into()),
        }
    }

    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: None,
        }
    }

    /// Create a new internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            context: None,
        }
    }

    /// Add context to an existing error
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        let context = context.into();
        match &mut self {
            Self::Internal { context: ctx, .. } => {
                *ctx = Some(context);
            }
            Self::Io { message, .. }
            | Self::Config { message, .. }
            | Self::Lexicon { message, .. }
            | Self::Serialization { message, .. }
            | Self::Validation { message, .. } => {
                *message = format!("{context}: {message}");
            }
        }
        self
    }
}

impl From<io::Error> for ColcheckError {
    fn from(err: io::Error) -> Self {
        Self::io("I/O operation failed", err)
    }
}

impl From<serde_json::Error> for ColcheckError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: format!("JSON serialization failed: {err}"),
            data_type: Some("JSON".to_string()),
            source: Some(Box::new(err)),
        }
    }
}

impl From<serde_yaml::Error> for ColcheckError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization {
            message: format!("YAML serialization failed: {err}"),
            data_type: Some("YAML".to_string()),
            source: Some(Box::new(err)),
        }
    }
}

/// Result extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;

    /// Add static context to an error result
    fn context(self, msg: &'static str) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<ColcheckError>,
{
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.into().with_context(f()))
    }

    fn context(self, msg: &'static str) -> Result<T> {
        self.map_err(|e| e.into().with_context(msg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = ColcheckError::config("Invalid configuration");
        assert!(matches!(err, ColcheckError::Config { .. }));

        let err = ColcheckError::lexicon("empty filter name");
        assert!(matches!(err, ColcheckError::Lexicon { entry: None, .. }));
    }

    #[test]
    fn test_lexicon_entry_error() {
        let err = ColcheckError::lexicon_entry("synonym repeats canonical word", "ra");

        if let ColcheckError::Lexicon { message, entry } = err {
            assert_eq!(message, "synonym repeats canonical word");
            assert_eq!(entry, Some("ra".to_string()));
        } else {
            panic!("Expected Lexicon error");
        }
    }

    #[test]
    fn test_error_with_context() {
        let err = ColcheckError::internal("Something went wrong").with_context("While rendering");

        if let ColcheckError::Internal { context, .. } = err {
            assert_eq!(context, Some("While rendering".to_string()));
        } else {
            panic!("Expected Internal error");
        }
    }

    #[test]
    fn test_io_context_prefixes_message() {
        let result: std::result::Result<(), io::Error> = Err(io::Error::new(
            io::ErrorKind::NotFound,
            "missing",
        ));

        let err = result.context("Failed to read lexicon").unwrap_err();
        if let ColcheckError::Io { message, source } = err {
            assert!(message.starts_with("Failed to read lexicon"));
            assert_eq!(source.kind(), io::ErrorKind::NotFound);
        } else {
            panic!("Expected Io error");
        }
    }

    #[test]
    fn test_context_keeps_variant_and_entry() {
        let result: Result<()> = Err(ColcheckError::lexicon_entry("duplicate filter", "u_SDSS"));

        let err = result
            .with_context(|| "words.yml".to_string())
            .unwrap_err();
        if let ColcheckError::Lexicon { message, entry } = err {
            assert_eq!(message, "words.yml: duplicate filter");
            assert_eq!(entry, Some("u_SDSS".to_string()));
        } else {
            panic!("Expected Lexicon error");
        }
    }

    #[test]
    fn test_config_field_error() {
        let err = ColcheckError::config_field("Invalid value", "max_length");

        if let ColcheckError::Config { message, field } = err {
            assert_eq!(message, "Invalid value");
            assert_eq!(field, Some("max_length".to_string()));
        } else {
            panic!("Expected Config error");
        }
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<i32>("invalid json").unwrap_err();
        let err: ColcheckError = json_err.into();

        if let ColcheckError::Serialization { data_type, .. } = err {
            assert_eq!(data_type, Some("JSON".to_string()));
        } else {
            panic!("Expected Serialization error");
        }
    }

    #[test]
    fn test_from_yaml_error() {
        let yaml_err = serde_yaml::from_str::<i32>("invalid: yaml: content").unwrap_err();
        let err: ColcheckError = yaml_err.into();

        if let ColcheckError::Serialization { data_type, .. } = err {
            assert_eq!(data_type, Some("YAML".to_string()));
        } else {
            panic!("Expected Serialization error");
        }
    }

    #[test]
    fn test_with_context_leaves_config_unchanged() {
        let err = ColcheckError::config("Bad config").with_context("Should not change");

        if let ColcheckError::Config { message, .. } = err {
            assert_eq!(message, "Bad config");
        } else {
            panic!("Expected Config error");
        }
    }

    #[test]
    fn test_error_display_formatting() {
        let err = ColcheckError::lexicon_entry("duplicate filter", "u_SDSS");
        let display = format!("{}", err);
        assert!(display.contains("Lexicon error"));
        assert!(display.contains("duplicate filter"));
    }
}
