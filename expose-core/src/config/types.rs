//! Configuration data structures.
//!
//! - [`CoreConfig`]: the root, one table per subsystem.
//! - [`LoggingConfig`]: the `[logging]` table.
//! - [`PlacementConfig`]: the `[placement]` table.
//!
//! Missing fields take their values from [`super::defaults`]; unknown fields are
//! rejected via `#[serde(deny_unknown_fields)]`.

use super::defaults;
use crate::error::{ConfigError, CoreError};
use crate::types::Padding;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration settings for the logging subsystem.
///
/// ```
/// use expose_core::config::LoggingConfig;
/// use std::path::PathBuf;
///
/// let log_config: LoggingConfig = toml::from_str(r#"
/// level = "debug"
/// file_path = "/var/log/expose.log"
/// format = "json"
/// "#).unwrap();
/// assert_eq!(log_config.level, "debug");
/// assert_eq!(log_config.file_path, Some(PathBuf::from("/var/log/expose.log")));
/// assert_eq!(log_config.format, "json");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Minimum level: "trace", "debug", "info", "warn" or "error" (case-insensitive).
    #[serde(default = "defaults::default_log_level")]
    pub level: String,
    /// Optional log file. Relative paths resolve against the application state directory.
    #[serde(default = "defaults::default_log_file_path")]
    pub file_path: Option<PathBuf>,
    /// "text" or "json" (case-insensitive).
    #[serde(default = "defaults::default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        defaults::default_logging_config()
    }
}

/// Tunables of the natural placement algorithm.
///
/// The defaults reproduce the reference behaviour; changing them changes the
/// deterministic output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlacementConfig {
    /// Margin added around every window before resolving overlaps and removed
    /// again from the final rectangles.
    #[serde(default = "defaults::default_gap")]
    pub gap: i32,
    /// Magnitude of a single repulsion step and growth step of the gap filler.
    /// Must be positive; the gap filler relies on it to terminate.
    #[serde(default = "defaults::default_accuracy")]
    pub accuracy: i32,
    /// Global cap on pairwise overlap corrections in the resolver.
    #[serde(default = "defaults::default_max_corrections")]
    pub max_corrections: usize,
    /// Largest scale a small window may be blown up to.
    #[serde(default = "defaults::default_max_upscale")]
    pub max_upscale: f32,
    /// A window with either edge above this is "large" and never upscaled.
    #[serde(default = "defaults::default_large_window_threshold")]
    pub large_window_threshold: i32,
    /// Margins removed from the viewport to form the placement area.
    #[serde(default = "defaults::default_padding")]
    pub padding: Padding,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        defaults::default_placement_config()
    }
}

impl PlacementConfig {
    /// Checks the ranges the placement relies on to terminate and to produce
    /// non-degenerate rectangles.
    ///
    /// # Errors
    ///
    /// [`ConfigError::ValidationError`] naming the first offending field.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.gap < 0 {
            return Err(invalid(format!("placement.gap must be >= 0, got {}", self.gap)));
        }
        if self.accuracy <= 0 {
            return Err(invalid(format!(
                "placement.accuracy must be > 0, got {}",
                self.accuracy
            )));
        }
        if self.max_corrections == 0 {
            return Err(invalid("placement.max_corrections must be > 0".to_string()));
        }
        if !self.max_upscale.is_finite() || self.max_upscale < 1.0 {
            return Err(invalid(format!(
                "placement.max_upscale must be a finite value >= 1.0, got {}",
                self.max_upscale
            )));
        }
        if self.large_window_threshold <= 0 {
            return Err(invalid(format!(
                "placement.large_window_threshold must be > 0, got {}",
                self.large_window_threshold
            )));
        }
        let padding = self.padding;
        if padding.top < 0 || padding.right < 0 || padding.bottom < 0 || padding.left < 0 {
            return Err(invalid(format!(
                "placement.padding edges must be >= 0, got {:?}",
                padding
            )));
        }
        Ok(())
    }
}

fn invalid(message: String) -> CoreError {
    CoreError::Config(ConfigError::ValidationError(message))
}

/// Root configuration structure.
///
/// ```
/// use expose_core::config::CoreConfig;
///
/// let config: CoreConfig = toml::from_str(r#"
/// [placement]
/// gap = 6
/// "#).unwrap();
/// assert_eq!(config.placement.gap, 6);
/// assert_eq!(config.placement.accuracy, 20);
/// assert_eq!(config.logging.level, "info");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoreConfig {
    #[serde(default = "defaults::default_logging_config")]
    pub logging: LoggingConfig,
    #[serde(default = "defaults::default_placement_config")]
    pub placement: PlacementConfig,
}
