//! Application directory resolution.
//!
//! Directories follow the XDG Base Directory layout through `directories-next`:
//!
//! - [`get_app_config_dir()`]: e.g. `~/.config/expose`.
//! - [`get_app_state_dir()`]: e.g. `~/.local/state/expose`, used to resolve
//!   relative log file paths.
//! - [`config_file_path()`]: the configuration file, honouring the
//!   [`CONFIG_PATH_ENV`] override.

use crate::error::{ConfigError, CoreError};
use directories_next::{BaseDirs, ProjectDirs};
use std::env;
use std::path::PathBuf;

const QUALIFIER: &str = "org";
const ORGANIZATION: &str = "Expose";
const APPLICATION: &str = "expose";

/// Name of the configuration file inside the application config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable that points at an explicit configuration file.
pub const CONFIG_PATH_ENV: &str = "EXPOSE_CONFIG";

/// Returns the application-specific configuration directory.
///
/// # Errors
/// [`ConfigError::DirectoryUnavailable`] if no home directory can be determined.
pub fn get_app_config_dir() -> Result<PathBuf, CoreError> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| {
            CoreError::Config(ConfigError::DirectoryUnavailable {
                dir_type: "App Config".to_string(),
            })
        })
}

/// Returns the base directory for user state (`$XDG_STATE_HOME` on Linux).
///
/// Other platforms have no state directory; the local data directory stands in.
pub fn get_state_base_dir() -> Result<PathBuf, CoreError> {
    BaseDirs::new()
        .map(|dirs| {
            #[cfg(target_os = "linux")]
            {
                match env::var("XDG_STATE_HOME") {
                    Ok(state_home) if !state_home.is_empty() => PathBuf::from(state_home),
                    _ => dirs.home_dir().join(".local/state"),
                }
            }
            #[cfg(not(target_os = "linux"))]
            {
                dirs.data_local_dir().to_path_buf()
            }
        })
        .ok_or_else(|| {
            CoreError::Config(ConfigError::DirectoryUnavailable {
                dir_type: "State Base".to_string(),
            })
        })
}

/// Returns the application-specific state directory.
pub fn get_app_state_dir() -> Result<PathBuf, CoreError> {
    get_state_base_dir().map(|base| base.join(APPLICATION))
}

/// Location of the configuration file.
///
/// [`CONFIG_PATH_ENV`] wins when set and non-empty; otherwise the file lives in
/// [`get_app_config_dir()`].
pub fn config_file_path() -> Result<PathBuf, CoreError> {
    match env::var_os(CONFIG_PATH_ENV) {
        Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
        _ => Ok(get_app_config_dir()?.join(CONFIG_FILE_NAME)),
    }
}
