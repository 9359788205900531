//! Overlap resolution.
//!
//! Every window is inflated by the gap margin and then pushed apart pairwise,
//! like repelling particles, until a full sweep over all ordered pairs finds no
//! overlap or the global correction cap is reached. After each push the first
//! window of the pair is pulled slightly towards a corner of the running
//! bounding box, which keeps the layout's aspect close to the area's.
//!
//! The arithmetic is `f32` throughout with explicit floors; the exact rounding
//! is what keeps the layout from jittering between runs.

use expose_core::{PlacementConfig, PointInt, Rectangle};

/// Result of [`resolve_overlaps`].
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// Inflated rectangles, index-aligned with the input.
    pub rects: Vec<Rectangle>,
    /// Union of the area and every rectangle touched during resolution.
    pub bounds: Rectangle,
    /// Pairwise corrections applied across all passes.
    pub corrections: usize,
    /// `true` if the last pass found no overlapping pair.
    pub converged: bool,
}

/// Which third of the bounding box a coordinate falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Near,
    Middle,
    Far,
}

impl Section {
    /// `round(offset / (extent / 3))`, clamped to the three sections.
    fn of(offset: i32, extent: i32) -> Section {
        let index = (offset as f32 / (extent as f32 / 3.0)).round();
        if index <= 0.0 || index.is_nan() {
            Section::Near
        } else if index >= 2.0 {
            Section::Far
        } else {
            Section::Middle
        }
    }
}

/// Cyclic tie-break assigned by input position.
fn tie_break_direction(index: usize) -> usize {
    index % 4
}

/// Separates overlapping windows.
///
/// `windows` are the outer rectangles in caller order. Best effort: when the
/// correction cap is hit, the returned layout may still overlap.
pub fn resolve_overlaps(
    windows: &[Rectangle],
    area: Rectangle,
    config: &PlacementConfig,
) -> Resolution {
    let gap = config.gap;
    let mut bounds = area;
    let mut rects = Vec::with_capacity(windows.len());
    for window in windows {
        let rect = window.adjusted(-gap, -gap, gap, gap);
        bounds = bounds.union(&rect);
        rects.push(rect);
    }

    let count = rects.len();
    let mut corrections = 0usize;
    let mut overlap;
    loop {
        overlap = false;
        for i in 0..count {
            for j in 0..count {
                if i == j {
                    continue;
                }
                let mut rect = rects[i];
                let mut comp = rects[j];
                if !rect.overlaps(&comp) {
                    continue;
                }
                corrections += 1;
                overlap = true;

                let push = push_vector(rect.center(), comp.center(), config.accuracy);
                rect = rect.translated(-push.x, -push.y);
                comp = comp.translated(push.x, push.y);

                // Bounds are still those from before this correction. The
                // vertical section is read from `comp`, not `rect`.
                let direction = tie_break_direction(i);
                let pull = corner_pull(&rect, &comp, &bounds, direction, config.accuracy);
                rect = rect.translated(pull.x, pull.y);

                bounds = bounds.union(&rect).union(&comp);
                rects[i] = rect;
                rects[j] = comp;
            }
        }
        if !overlap || corrections >= config.max_corrections {
            break;
        }
    }

    if overlap {
        tracing::warn!(
            "Overlap resolution stopped at {} corrections with overlaps remaining",
            corrections
        );
    }
    tracing::debug!(
        "Resolved {} windows with {} corrections, bounds {:?}",
        count,
        corrections,
        bounds
    );

    Resolution { rects, bounds, corrections, converged: !overlap }
}

/// Push from `from` towards `to`, normalized to roughly `accuracy` pixels.
///
/// Coincident centers push along +x.
fn push_vector(from: PointInt, to: PointInt, accuracy: i32) -> PointInt {
    let mut dx = i64::from(to.x) - i64::from(from.x);
    let dy = i64::from(to.y) - i64::from(from.y);
    if dx == 0 && dy == 0 {
        dx = 1;
    }
    let length = ((dx * dx + dy * dy) as f32).sqrt();
    let accuracy = i64::from(accuracy);
    PointInt::new(
        ((dx * accuracy) as f32 / length).floor() as i32,
        ((dy * accuracy) as f32 / length).floor() as i32,
    )
}

/// Secondary nudge of `rect` towards the corner of `bounds` it sits closest to.
///
/// The horizontal section comes from `rect.x`, the vertical one from `comp.y`.
/// A window in the middle section of exactly one axis picks a side from its
/// tie-break direction; a window in the very center is left alone.
fn corner_pull(
    rect: &Rectangle,
    comp: &Rectangle,
    bounds: &Rectangle,
    direction: usize,
    accuracy: i32,
) -> PointInt {
    let mut x_section = Section::of(rect.x - bounds.x, bounds.width);
    let mut y_section = Section::of(comp.y - bounds.y, bounds.height);

    if x_section != Section::Middle || y_section != Section::Middle {
        if x_section == Section::Middle {
            x_section = if direction / 2 == 1 { Section::Far } else { Section::Near };
        }
        if y_section == Section::Middle {
            y_section = if direction % 2 == 1 { Section::Far } else { Section::Near };
        }
    }

    let corner = match (x_section, y_section) {
        (Section::Near, Section::Near) => PointInt::new(bounds.x, bounds.y),
        (Section::Far, Section::Near) => PointInt::new(bounds.right(), bounds.y),
        (Section::Far, Section::Far) => PointInt::new(bounds.right(), bounds.bottom()),
        (Section::Near, Section::Far) => PointInt::new(bounds.x, bounds.bottom()),
        _ => return PointInt::ZERO,
    };

    let center = rect.center();
    let diff = PointInt::new(corner.x - center.x, corner.y - center.y);
    if diff.is_zero() {
        return PointInt::ZERO;
    }
    let (dx, dy) = (i64::from(diff.x), i64::from(diff.y));
    let length = ((dx * dx + dy * dy) as f32).sqrt();
    // Integer step factor: only windows within accuracy/2 of the corner move.
    let factor = (accuracy as f32 / length / 2.0).floor() as i32;
    PointInt::new(diff.x * factor, diff.y * factor)
}
