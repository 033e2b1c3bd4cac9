//! Application directory resolution.
//!
//! Thin wrappers over `directories-next` that map a missing home directory to
//! [`ConfigError::DirectoryUnavailable`].
//!
//! - [`get_app_config_dir()`]: e.g. `~/.config/tokensmith` on Linux; holds `config.toml`.
//! - [`get_app_data_dir()`]: e.g. `~/.local/share/tokensmith`; default export target.
//! - [`get_app_state_dir()`]: e.g. `~/.local/share/tokensmith/state`; relative log paths resolve here.

use crate::error::{ConfigError, CoreError};
use directories_next::ProjectDirs;
use std::path::PathBuf;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "Tokensmith";
const APPLICATION: &str = "tokensmith";

/// Name of the configuration file inside [`get_app_config_dir()`].
pub const CONFIG_FILE_NAME: &str = "config.toml";

fn project_dirs(dir_type: &str) -> Result<ProjectDirs, CoreError> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION).ok_or_else(|| {
        CoreError::Config(ConfigError::DirectoryUnavailable {
            dir_type: dir_type.to_string(),
        })
    })
}

/// Returns the application-specific configuration directory.
pub fn get_app_config_dir() -> Result<PathBuf, CoreError> {
    project_dirs("App Config").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Returns the application-specific data directory.
pub fn get_app_data_dir() -> Result<PathBuf, CoreError> {
    project_dirs("App Data").map(|dirs| dirs.data_dir().to_path_buf())
}

/// Returns the application-specific state directory.
///
/// Lives under the local (non-roaming) data directory.
pub fn get_app_state_dir() -> Result<PathBuf, CoreError> {
    project_dirs("App State").map(|dirs| dirs.data_local_dir().join("state"))
}

/// Full path of the configuration file.
pub fn get_config_file_path() -> Result<PathBuf, CoreError> {
    get_app_config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
}
