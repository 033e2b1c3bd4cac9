//! Default configuration values.
//!
//! Referenced from `#[serde(default = "...")]` attributes so that a missing
//! file, section or field falls back to the same values `Default` produces.

use super::types::{ExportConfig, LoggingConfig};
use std::path::PathBuf;

pub(crate) fn default_logging_config() -> LoggingConfig {
    LoggingConfig {
        level: default_log_level(),
        file_path: default_log_file_path(),
        format: default_log_format(),
    }
}

pub(crate) fn default_log_level() -> String {
    "info".to_string()
}

pub(crate) fn default_log_file_path() -> Option<PathBuf> {
    None
}

pub(crate) fn default_log_format() -> String {
    "text".to_string()
}

pub(crate) fn default_export_config() -> ExportConfig {
    ExportConfig {
        base_name: default_export_base_name(),
        output_dir: default_export_output_dir(),
        default_format: default_export_format(),
    }
}

/// Base file name of exported artifacts, before the extension.
pub(crate) fn default_export_base_name() -> String {
    "design-tokens".to_string()
}

pub(crate) fn default_export_output_dir() -> Option<PathBuf> {
    None
}

pub(crate) fn default_export_format() -> String {
    "css".to_string()
}
