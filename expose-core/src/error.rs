//! Error handling for the expose core layer.
//!
//! The main error type for this crate is [`CoreError`], which wraps the more
//! specific [`ConfigError`] and [`LoggingError`]. All of them are defined with
//! `thiserror`.
//!
//! ```rust,ignore
//! use expose_core::error::CoreError;
//!
//! fn load_something(path: &std::path::Path) -> Result<String, CoreError> {
//!     std::fs::read_to_string(path).map_err(|e| CoreError::Filesystem {
//!         message: "Failed to read file".to_string(),
//!         path: path.to_path_buf(),
//!         source: e,
//!     })
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for the expose crates.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Errors related to configuration loading, parsing, or validation.
    #[error("Configuration Error: {0}")]
    Config(#[from] ConfigError),

    /// A specific logging failure.
    #[error("Logging Error: {0}")]
    Logging(#[from] LoggingError),

    /// Filesystem operation failure, with the path involved.
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
    /// The configuration file exists but could not be read.
    #[error("Failed to read configuration file from {path:?}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML or does not match the schema.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Parsed values are out of range.
    #[error("Configuration validation failed: {0}")]
    ValidationError(String),

    /// A required base directory (e.g., XDG config home) could not be determined.
    #[error("Could not determine base directory for {dir_type}")]
    DirectoryUnavailable { dir_type: String },
}

/// Error type for logging-related operations.
#[derive(Error, Debug)]
pub enum LoggingError {
    /// The global subscriber could not be installed, or the configuration was unusable.
    #[error("Failed to initialize logging: {0}")]
    InitializationFailure(String),

    /// A log filter directive could not be parsed.
    #[error("Failed to set log filter: {0}")]
    FilterError(String),
}
