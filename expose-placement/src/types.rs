//! Inputs and outputs of a placement run.

use expose_core::Rectangle;
use serde::{Deserialize, Serialize};

/// One window taking part in the overview.
///
/// The order of entries matters: it seeds the tie-break that decides which
/// corner an edge-section window is pulled towards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementEntry<Id> {
    /// Caller-defined identity, handed back untouched in the result.
    pub id: Id,
    /// Current on-screen bounds including decorations.
    pub outer_rect: Rectangle,
}

impl<Id> PlacementEntry<Id> {
    pub fn new(id: Id, outer_rect: Rectangle) -> Self {
        PlacementEntry { id, outer_rect }
    }
}

/// Target rectangle and zoom for one window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementResult<Id> {
    pub id: Id,
    pub final_rect: Rectangle,
    /// `final_rect.width / outer_rect.width`.
    pub scale: f32,
}

/// Observations about a run, for tests and diagnostics.
///
/// None of this changes whether a placement succeeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementDiagnostics {
    /// Total pairwise overlap corrections applied by the resolver.
    pub corrections: usize,
    /// `false` when the resolver stopped at its correction cap with overlaps
    /// still present in its last pass.
    pub converged: bool,
    /// Bounding box of the resolved layout, before rescaling.
    pub resolved_bounds: Rectangle,
    /// Uniform scale used to fit the resolved layout into the area (at most 1).
    pub fit_scale: f32,
    /// Passes the gap filler ran, including the final pass without movement.
    pub fill_passes: usize,
    /// Windows whose final scale was clamped.
    pub clamped: usize,
}

/// Placements in input order plus the diagnostics of the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementOutcome<Id> {
    pub placements: Vec<PlacementResult<Id>>,
    pub diagnostics: PlacementDiagnostics,
}
