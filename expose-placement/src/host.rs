//! Interfaces towards the window system hosting the overview.
//!
//! The placement itself is pure. A host plugs in three collaborators:
//!
//! - [`WindowGeometrySource`]: enumerates windows with their kind and current
//!   outer rectangle, in stacking order.
//! - [`PlacementApplier`]: moves and zooms one thumbnail.
//! - [`RedrawScheduler`]: queues a repaint once a batch is applied.
//!
//! [`Overview::arrange`] drives them.

use expose_core::{PlacementConfig, PointInt, Rectangle};
use serde::{Deserialize, Serialize};

use crate::area::overview_area;
use crate::error::PlacementError;
use crate::orchestrator::NaturalPlacement;
use crate::types::{PlacementEntry, PlacementResult};

/// Window type as reported by the window system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowKind {
    #[default]
    Normal,
    Dialog,
    Dock,
    Desktop,
    Utility,
    Menu,
    Splash,
}

impl WindowKind {
    /// Only regular application windows get a thumbnail.
    pub fn is_overview_eligible(&self) -> bool {
        matches!(self, WindowKind::Normal)
    }
}

/// One window as seen by the host at the time the overview opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSnapshot<Id> {
    pub id: Id,
    pub outer_rect: Rectangle,
    pub kind: WindowKind,
}

pub trait WindowGeometrySource {
    type Id: Clone;

    /// All windows of the workspace, in stacking order.
    fn windows(&self) -> Vec<WindowSnapshot<Self::Id>>;
}

/// Where and how large a thumbnail is drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThumbnailPlacement<Id> {
    pub id: Id,
    pub final_rect: Rectangle,
    /// Uniform zoom for both axes.
    pub scale: f32,
    /// Thumbnail center; the zoom pivots around it.
    pub anchor: PointInt,
}

impl<Id> ThumbnailPlacement<Id> {
    /// Anchors a placement at `final.origin + outer.size * scale / 2`, truncated.
    pub fn from_result(result: PlacementResult<Id>, outer_rect: Rectangle) -> Self {
        let half_width = outer_rect.width as f32 * result.scale / 2.0;
        let half_height = outer_rect.height as f32 * result.scale / 2.0;
        let anchor = PointInt::new(
            result.final_rect.x + half_width as i32,
            result.final_rect.y + half_height as i32,
        );
        ThumbnailPlacement {
            id: result.id,
            final_rect: result.final_rect,
            scale: result.scale,
            anchor,
        }
    }
}

pub trait PlacementApplier<Id> {
    fn apply(&mut self, placement: &ThumbnailPlacement<Id>);
}

pub trait RedrawScheduler {
    fn schedule_redraw(&mut self);
}

/// Arranges the windows of one workspace in its overview area.
#[derive(Debug, Clone)]
pub struct Overview {
    placement: NaturalPlacement,
    area: Rectangle,
}

impl Overview {
    pub fn new(placement: NaturalPlacement, area: Rectangle) -> Self {
        Overview { placement, area }
    }

    /// Builds an overview for a `width` x `height` surface, inset by the
    /// configured padding. The configuration is validated up front.
    pub fn for_viewport(
        config: PlacementConfig,
        width: i32,
        height: i32,
    ) -> Result<Self, PlacementError> {
        config.validate()?;
        let area = overview_area(width, height, config.padding)?;
        Ok(Overview::new(NaturalPlacement::new(config), area))
    }

    pub fn area(&self) -> Rectangle {
        self.area
    }

    /// Places every eligible window of `source` and hands the thumbnails to
    /// `applier`, then schedules a single redraw.
    ///
    /// Nothing happens (no placement, no redraw) when no window is eligible.
    /// Returns the number of thumbnails applied.
    pub fn arrange<S, A, R>(
        &self,
        source: &S,
        applier: &mut A,
        redraw: &mut R,
    ) -> Result<usize, PlacementError>
    where
        S: WindowGeometrySource,
        A: PlacementApplier<S::Id>,
        R: RedrawScheduler,
    {
        let entries: Vec<PlacementEntry<S::Id>> = source
            .windows()
            .into_iter()
            .filter(|window| window.kind.is_overview_eligible())
            .map(|window| PlacementEntry::new(window.id, window.outer_rect))
            .collect();

        if entries.is_empty() {
            tracing::debug!("No eligible windows, skipping overview arrangement");
            return Ok(0);
        }

        let outcome = self.placement.place(&entries, self.area)?;
        let count = outcome.placements.len();
        for (result, entry) in outcome.placements.into_iter().zip(&entries) {
            applier.apply(&ThumbnailPlacement::from_result(result, entry.outer_rect));
        }
        redraw.schedule_redraw();

        tracing::debug!("Arranged {} thumbnails in {:?}", count, self.area);
        Ok(count)
    }
}
