//! Error handling for the Tokensmith core layer.
//!
//! This module defines the error types shared by everything built on top of
//! `tokensmith-core`. They are declared with `thiserror`.
//!
//! The main error type for this crate is [`CoreError`], which encapsulates
//! more specific errors like [`ConfigError`] and [`LoggingError`]. Color
//! parsing failures have their own type, [`crate::types::ColorParseError`],
//! because callers usually recover from them locally.
//!
//! # Examples
//!
//! ```rust,ignore
//! use tokensmith_core::error::CoreError;
//!
//! fn write_artifact() -> Result<(), CoreError> {
//!     tokensmith_core::utils::ensure_dir_exists(std::path::Path::new("exports"))?;
//!     Ok(())
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Tokensmith.
///
/// Wraps the more specific configuration and logging errors and covers the
/// filesystem failures raised by [`crate::utils::fs`].
#[derive(Debug, Error)]
pub enum CoreError {
    /// Errors related to configuration loading, parsing, or validation.
    #[error("Configuration Error: {0}")]
    Config(#[from] ConfigError),

    /// Errors that occur while installing the global tracing subscriber.
    #[error("Logging Initialization Failed: {0}")]
    LoggingInitialization(String),

    /// A filesystem operation on a known path failed.
    #[error("Filesystem Error: {message} (Path: {path:?})")]
    Filesystem {
        message: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error type for configuration-related operations.
///
/// Usually wrapped by [`CoreError::Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the configuration file failed for a reason other than absence.
    #[error("Failed to read configuration file from {path:?}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML or does not match the schema.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),

    /// The configuration parsed but contains unusable values.
    #[error("Configuration validation failed: {0}")]
    ValidationError(String),

    /// A required base directory could not be determined.
    #[error("Could not determine base directory for {dir_type}")]
    DirectoryUnavailable { dir_type: String },
}

/// Error type for logging-related operations.
#[derive(Error, Debug)]
pub enum LoggingError {
    /// The logging configuration could not be turned into a subscriber.
    #[error("Failed to initialize logging: {0}")]
    InitializationError(String),
}

impl From<LoggingError> for CoreError {
    fn from(err: LoggingError) -> Self {
        CoreError::LoggingInitialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::io::{Error as IoError, ErrorKind};

    #[test]
    fn test_core_error_config_variant() {
        let core_err: CoreError = ConfigError::ValidationError("bad level".to_string()).into();
        assert_eq!(
            core_err.to_string(),
            "Configuration Error: Configuration validation failed: bad level"
        );
        assert!(core_err.source().is_some());
    }

    #[test]
    fn test_core_error_filesystem_variant() {
        let path = PathBuf::from("/tmp/out/design-tokens.css");
        let core_err = CoreError::Filesystem {
            message: "Failed to write string to file".to_string(),
            path: path.clone(),
            source: IoError::new(ErrorKind::PermissionDenied, "denied"),
        };

        assert_eq!(
            core_err.to_string(),
            format!("Filesystem Error: Failed to write string to file (Path: {:?})", path)
        );
        let source = core_err.source().and_then(|s| s.downcast_ref::<IoError>());
        assert_eq!(source.map(|e| e.kind()), Some(ErrorKind::PermissionDenied));
    }

    #[test]
    fn test_config_error_parse_error_variant() {
        let toml_err: toml::de::Error = toml::from_str::<toml::Value>("this is not valid toml").unwrap_err();
        let toml_err_display = toml_err.to_string();

        let config_err = ConfigError::ParseError(toml_err);
        assert_eq!(
            config_err.to_string(),
            format!("Failed to parse configuration file: {}", toml_err_display)
        );
        assert!(config_err.source().unwrap().is::<toml::de::Error>());
    }

    #[test]
    fn test_config_error_directory_unavailable_variant() {
        let config_err = ConfigError::DirectoryUnavailable { dir_type: "config".to_string() };
        assert_eq!(config_err.to_string(), "Could not determine base directory for config");
        assert!(config_err.source().is_none());
    }

    #[test]
    fn test_logging_error_converts_into_core_error() {
        let core_err: CoreError = LoggingError::InitializationError("bogus level".to_string()).into();
        assert!(matches!(core_err, CoreError::LoggingInitialization(ref msg) if msg.contains("bogus")));
    }

    #[test]
    fn test_core_error_variants_are_all_constructed() {
        let errors: Vec<CoreError> = vec![
            ConfigError::ValidationError("level".to_string()).into(),
            LoggingError::InitializationError("subscriber".to_string()).into(),
            CoreError::Filesystem {
                message: "Failed to create directory".to_string(),
                path: PathBuf::from("exports"),
                source: IoError::new(ErrorKind::NotFound, "missing"),
            },
        ];
        for err in &errors {
            match err {
                CoreError::Config(_) | CoreError::LoggingInitialization(_) | CoreError::Filesystem { .. } => {}
            }
        }
    }
}
