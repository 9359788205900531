//! Configuration loading and validation.
//!
//! [`ConfigLoader::load()`] locates `config.toml` (see
//! [`crate::utils::paths::config_file_path`]), parses it, falls back to defaults
//! when the file does not exist, and validates the result.
//!
//! ```rust,ignore
//! use expose_core::config::ConfigLoader;
//!
//! match ConfigLoader::load() {
//!     Ok(config) => tracing::info!("gap = {}", config.placement.gap),
//!     Err(e) => {
//!         expose_core::logging::init_minimal_logging();
//!         tracing::error!("Configuration loading failed: {}", e);
//!     }
//! }
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::config::{CoreConfig, LoggingConfig};
use crate::error::{ConfigError, CoreError};
use crate::utils::paths::{config_file_path, get_app_state_dir};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: [&str; 2] = ["text", "json"];

/// Namespace for loading and validating [`CoreConfig`].
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads the configuration from its default location.
    ///
    /// A missing file yields [`CoreConfig::default()`]. Read failures become
    /// [`ConfigError::ReadError`], malformed TOML [`ConfigError::ParseError`], and
    /// out-of-range values [`ConfigError::ValidationError`].
    pub fn load() -> Result<CoreConfig, CoreError> {
        let path = config_file_path()?;
        Self::load_from_path(&path)
    }

    /// Loads the configuration from an explicit file.
    pub fn load_from_path(path: &Path) -> Result<CoreConfig, CoreError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No configuration file at {:?}, using defaults", path);
                String::new()
            }
            Err(e) => {
                return Err(CoreError::Config(ConfigError::ReadError {
                    path: path.to_path_buf(),
                    source: e,
                }));
            }
        };

        let mut config = Self::from_toml_str(&content)?;
        Self::resolve_log_path(&mut config.logging)?;
        tracing::debug!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Parses and validates configuration from a TOML string. An empty or
    /// whitespace-only string yields the defaults.
    pub fn from_toml_str(content: &str) -> Result<CoreConfig, CoreError> {
        let mut config: CoreConfig = if content.trim().is_empty() {
            CoreConfig::default()
        } else {
            toml::from_str(content).map_err(ConfigError::ParseError)?
        };
        Self::validate_config(&mut config)?;
        Ok(config)
    }

    /// Validates the configuration, normalizing the logging strings to lowercase.
    pub fn validate_config(config: &mut CoreConfig) -> Result<(), CoreError> {
        Self::validate_logging(&mut config.logging)?;
        config.placement.validate()?;
        Ok(())
    }

    fn validate_logging(logging: &mut LoggingConfig) -> Result<(), CoreError> {
        logging.level = logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&logging.level.as_str()) {
            return Err(invalid(format!(
                "Invalid log level '{}'. Must be one of: {}",
                logging.level,
                LOG_LEVELS.join(", ")
            )));
        }

        logging.format = logging.format.to_lowercase();
        if !LOG_FORMATS.contains(&logging.format.as_str()) {
            return Err(invalid(format!(
                "Invalid log format '{}'. Must be one of: {}",
                logging.format,
                LOG_FORMATS.join(", ")
            )));
        }
        Ok(())
    }

    /// Makes a relative log file path absolute under the application state directory.
    fn resolve_log_path(logging: &mut LoggingConfig) -> Result<(), CoreError> {
        if let Some(path) = &logging.file_path {
            if path.is_relative() {
                let resolved = get_app_state_dir()?.join(path);
                tracing::debug!("Resolved relative log path {:?} to {:?}", path, resolved);
                logging.file_path = Some(resolved);
            }
        }
        Ok(())
    }
}

fn invalid(message: String) -> CoreError {
    CoreError::Config(ConfigError::ValidationError(message))
}
