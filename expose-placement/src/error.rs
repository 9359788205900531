//! Errors reported by the placement entry points.
//!
//! Every variant is a contract violation detected before any computation runs.
//! A resolver that stops at its correction cap is not an error; see
//! [`crate::PlacementDiagnostics::converged`].

use expose_core::{CoreError, Padding, Rectangle};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlacementError {
    /// The caller supplied no windows.
    #[error("Placement requires at least one window")]
    NoEntries,

    /// A window's outer rectangle has a non-positive width or height.
    #[error("Window at index {index} has a non-positive size: {rect:?}")]
    InvalidWindowRect { index: usize, rect: Rectangle },

    /// The target area has a non-positive width or height.
    #[error("Placement area has a non-positive size: {area:?}")]
    InvalidArea { area: Rectangle },

    /// The padding leaves no usable area inside the viewport.
    #[error("Padding {padding:?} leaves no room in a {width}x{height} viewport")]
    InvalidViewport { width: i32, height: i32, padding: Padding },

    /// Failure from the core layer, e.g. while loading configuration.
    #[error("Core Error: {0}")]
    Core(#[from] CoreError),
}
