//! The natural placement pipeline: resolve, fit, fill, clamp.

use expose_core::{PlacementConfig, Rectangle};

use crate::error::PlacementError;
use crate::gap_filler::fill_gaps;
use crate::rescaler::fit_into_area;
use crate::resolver::resolve_overlaps;
use crate::types::{PlacementDiagnostics, PlacementEntry, PlacementOutcome, PlacementResult};

/// Computes overview placements with a given [`PlacementConfig`].
///
/// Stateless apart from its configuration; a single instance can serve any
/// number of independent calls, from any thread.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NaturalPlacement {
    config: PlacementConfig,
}

impl NaturalPlacement {
    pub fn new(config: PlacementConfig) -> Self {
        NaturalPlacement { config }
    }

    pub fn config(&self) -> &PlacementConfig {
        &self.config
    }

    /// Places `entries` inside `area`.
    ///
    /// Results come back in input order. Changing the order of `entries` can
    /// change the layout, not just the order of the results.
    ///
    /// # Errors
    ///
    /// [`PlacementError::Core`] for an out-of-range configuration (see
    /// [`PlacementConfig::validate`]), then [`PlacementError::NoEntries`],
    /// [`PlacementError::InvalidWindowRect`] or [`PlacementError::InvalidArea`],
    /// all detected before any work is done.
    pub fn place<Id: Clone>(
        &self,
        entries: &[PlacementEntry<Id>],
        area: Rectangle,
    ) -> Result<PlacementOutcome<Id>, PlacementError> {
        self.config.validate()?;
        validate(entries, area)?;

        let outer: Vec<Rectangle> = entries.iter().map(|entry| entry.outer_rect).collect();
        let resolution = resolve_overlaps(&outer, area, &self.config);

        let mut rects = resolution.rects;
        let fit_scale = fit_into_area(&mut rects, resolution.bounds, area);
        let fill_passes = fill_gaps(&mut rects, area, self.config.accuracy);

        let mut clamped = 0usize;
        let placements = entries
            .iter()
            .zip(rects)
            .map(|(entry, filled)| {
                let (final_rect, was_clamped) = self.clamp(entry.outer_rect, filled);
                if was_clamped {
                    clamped += 1;
                }
                let scale = final_rect.width as f32 / entry.outer_rect.width as f32;
                tracing::trace!("Placed window at {:?} with scale {}", final_rect, scale);
                PlacementResult { id: entry.id.clone(), final_rect, scale }
            })
            .collect();

        let diagnostics = PlacementDiagnostics {
            corrections: resolution.corrections,
            converged: resolution.converged,
            resolved_bounds: resolution.bounds,
            fit_scale,
            fill_passes,
            clamped,
        };
        tracing::debug!(
            "Placed {} windows in {:?}: {} corrections, fit scale {}, {} fill passes, {} clamped",
            entries.len(),
            area,
            diagnostics.corrections,
            diagnostics.fit_scale,
            diagnostics.fill_passes,
            diagnostics.clamped
        );

        Ok(PlacementOutcome { placements, diagnostics })
    }

    /// Removes the gap margin and limits the zoom of a filled rectangle.
    ///
    /// Small windows may grow up to `max_upscale`; windows wider or taller than
    /// `large_window_threshold` are never shown above their real size. A clamped
    /// rectangle keeps the center of the filled one.
    fn clamp(&self, outer: Rectangle, filled: Rectangle) -> (Rectangle, bool) {
        let gap = self.config.gap;
        let rect = filled.adjusted(gap, gap, -gap, -gap);
        let scale = rect.width as f32 / outer.width as f32;
        let threshold = self.config.large_window_threshold;
        let large = outer.width > threshold || outer.height > threshold;

        if scale > self.config.max_upscale || (scale > 1.0 && large) {
            let scale = if large { 1.0 } else { self.config.max_upscale };
            let center = rect.center();
            let width = (outer.width as f32 * scale).floor() as i32;
            let height = (outer.height as f32 * scale).floor() as i32;
            let clamped =
                Rectangle::new(center.x - width / 2, center.y - height / 2, width, height);
            return (clamped, true);
        }
        (rect, false)
    }
}

/// Places `entries` inside `area` with the default configuration.
pub fn compute_placement<Id: Clone>(
    entries: &[PlacementEntry<Id>],
    area: Rectangle,
) -> Result<Vec<PlacementResult<Id>>, PlacementError> {
    NaturalPlacement::default()
        .place(entries, area)
        .map(|outcome| outcome.placements)
}

fn validate<Id>(entries: &[PlacementEntry<Id>], area: Rectangle) -> Result<(), PlacementError> {
    if entries.is_empty() {
        return Err(PlacementError::NoEntries);
    }
    if area.width <= 0 || area.height <= 0 {
        return Err(PlacementError::InvalidArea { area });
    }
    if let Some((index, entry)) = entries
        .iter()
        .enumerate()
        .find(|(_, entry)| entry.outer_rect.width <= 0 || entry.outer_rect.height <= 0)
    {
        return Err(PlacementError::InvalidWindowRect { index, rect: entry.outer_rect });
    }
    Ok(())
}
