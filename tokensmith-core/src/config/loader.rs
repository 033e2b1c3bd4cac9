//! Configuration loading.
//!
//! [`ConfigLoader::load()`] reads `config.toml` from the application config
//! directory. A missing or empty file yields the defaults. The result always
//! passes through [`ConfigLoader::validate_config`], which lowercases the
//! enumerated string fields, rejects unknown values and resolves a relative
//! log file path against the application state directory.

use std::fs;
use std::path::Path;

use crate::config::types::{TokensmithConfig, EXPORT_FORMATS, LOG_FORMATS, LOG_LEVELS};
use crate::error::{ConfigError, CoreError};
use crate::utils::paths::{get_app_state_dir, get_config_file_path};

/// Namespace for configuration loading.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads and validates the configuration from the platform config directory.
    pub fn load() -> Result<TokensmithConfig, CoreError> {
        let path = get_config_file_path()?;
        Self::load_from_path(&path)
    }

    /// Loads and validates the configuration stored at `path`.
    ///
    /// # Errors
    ///
    /// - `ConfigError::ReadError` when the file exists but cannot be read.
    /// - `ConfigError::ParseError` for invalid TOML or unknown fields.
    /// - `ConfigError::ValidationError` for unusable values.
    pub fn load_from_path(path: &Path) -> Result<TokensmithConfig, CoreError> {
        let config = match fs::read_to_string(path) {
            Ok(content) => Self::parse_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No configuration at {:?}; using defaults", path);
                TokensmithConfig::default()
            }
            Err(e) => {
                return Err(ConfigError::ReadError {
                    path: path.to_path_buf(),
                    source: e,
                }
                .into())
            }
        };
        Self::validate_config(config)
    }

    /// Parses TOML text without validating it.
    pub fn parse_str(content: &str) -> Result<TokensmithConfig, ConfigError> {
        if content.trim().is_empty() {
            return Ok(TokensmithConfig::default());
        }
        Ok(toml::from_str(content)?)
    }

    /// Normalizes and validates a parsed configuration.
    pub fn validate_config(mut config: TokensmithConfig) -> Result<TokensmithConfig, CoreError> {
        config.logging.level = one_of(&config.logging.level, &LOG_LEVELS, "logging.level")?;
        config.logging.format = one_of(&config.logging.format, &LOG_FORMATS, "logging.format")?;
        config.export.default_format =
            one_of(&config.export.default_format, &EXPORT_FORMATS, "export.default_format")?;

        let base_name = config.export.base_name.trim();
        if base_name.is_empty() || base_name.contains(['/', '\\']) {
            return Err(ConfigError::ValidationError(format!(
                "export.base_name must be a non-empty file stem, got '{}'",
                config.export.base_name
            ))
            .into());
        }
        config.export.base_name = base_name.to_string();

        if let Some(file_path) = &config.logging.file_path {
            if file_path.is_relative() {
                config.logging.file_path = Some(get_app_state_dir()?.join(file_path));
            }
        }

        Ok(config)
    }
}

fn one_of(value: &str, allowed: &[&str], field: &str) -> Result<String, ConfigError> {
    let normalized = value.trim().to_lowercase();
    if allowed.contains(&normalized.as_str()) {
        Ok(normalized)
    } else {
        Err(ConfigError::ValidationError(format!(
            "Invalid {} '{}'; expected one of {:?}",
            field, value, allowed
        )))
    }
}
