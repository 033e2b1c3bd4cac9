//! Configuration data structures.
//!
//! [`TokensmithConfig`] is the root of `config.toml`. Every field has a
//! default, and unknown fields are rejected so typos surface at load time.

use super::defaults;
use serde::Deserialize;
use std::path::PathBuf;

/// Log levels accepted in [`LoggingConfig::level`].
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
/// Output formats accepted in [`LoggingConfig::format`].
pub const LOG_FORMATS: [&str; 2] = ["text", "json"];
/// Export format names accepted in [`ExportConfig::default_format`].
pub const EXPORT_FORMATS: [&str; 4] = ["css", "scss", "json", "figma"];

/// Settings for the logging subsystem.
///
/// # Examples
///
/// ```
/// use tokensmith_core::config::LoggingConfig;
/// use std::path::PathBuf;
///
/// let toml_str = r#"
/// level = "debug"
/// file_path = "/var/log/tokensmith.log"
/// format = "json"
/// "#;
/// let log_config: LoggingConfig = toml::from_str(toml_str).unwrap();
/// assert_eq!(log_config.level, "debug");
/// assert_eq!(log_config.file_path, Some(PathBuf::from("/var/log/tokensmith.log")));
/// assert_eq!(log_config.format, "json");
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Minimum level: one of [`LOG_LEVELS`], case-insensitive.
    #[serde(default = "defaults::default_log_level")]
    pub level: String,
    /// Optional log file. Relative paths resolve against the state directory.
    #[serde(default = "defaults::default_log_file_path")]
    pub file_path: Option<PathBuf>,
    /// `"text"` or `"json"`.
    #[serde(default = "defaults::default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        defaults::default_logging_config()
    }
}

/// Settings for exported artifacts.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExportConfig {
    /// File stem of exported artifacts; the extension follows the format.
    #[serde(default = "defaults::default_export_base_name")]
    pub base_name: String,
    /// Directory that receives exported files. `None` means the data directory.
    #[serde(default = "defaults::default_export_output_dir")]
    pub output_dir: Option<PathBuf>,
    /// Format preselected for export: one of [`EXPORT_FORMATS`].
    #[serde(default = "defaults::default_export_format")]
    pub default_format: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        defaults::default_export_config()
    }
}

/// Root configuration.
///
/// ```
/// use tokensmith_core::config::TokensmithConfig;
///
/// let toml_str = r#"
/// [logging]
/// level = "warn"
///
/// [export]
/// base_name = "brand"
/// "#;
/// let config: TokensmithConfig = toml::from_str(toml_str).unwrap();
/// assert_eq!(config.logging.level, "warn");
/// assert_eq!(config.export.base_name, "brand");
/// assert_eq!(config.export.default_format, "css");
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TokensmithConfig {
    #[serde(default = "defaults::default_logging_config")]
    pub logging: LoggingConfig,
    #[serde(default = "defaults::default_export_config")]
    pub export: ExportConfig,
}

impl Default for TokensmithConfig {
    fn default() -> Self {
        Self {
            logging: defaults::default_logging_config(),
            export: defaults::default_export_config(),
        }
    }
}
