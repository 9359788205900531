//! Default configuration values.
//!
//! Used by `serde`'s `default` attributes in [`super::types`]. The placement
//! defaults are the fixed constants of the natural placement algorithm; a
//! missing configuration file reproduces it exactly.

use crate::config::{LoggingConfig, PlacementConfig};
use crate::types::Padding;
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
    None // No log file by default
}

pub(crate) fn default_log_format() -> String {
    "text".to_string()
}

pub(crate) fn default_placement_config() -> PlacementConfig {
    PlacementConfig {
        gap: default_gap(),
        accuracy: default_accuracy(),
        max_corrections: default_max_corrections(),
        max_upscale: default_max_upscale(),
        large_window_threshold: default_large_window_threshold(),
        padding: default_padding(),
    }
}

/// Inflation margin applied to every window before overlap resolution.
pub(crate) fn default_gap() -> i32 {
    10
}

/// Push magnitude of one pairwise correction, and growth step of the gap filler.
pub(crate) fn default_accuracy() -> i32 {
    20
}

/// Global cap on pairwise overlap corrections.
pub(crate) fn default_max_corrections() -> usize {
    100_000
}

pub(crate) fn default_max_upscale() -> f32 {
    2.0
}

pub(crate) fn default_large_window_threshold() -> i32 {
    300
}

pub(crate) fn default_padding() -> Padding {
    Padding::uniform(12)
}
