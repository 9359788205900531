//! Target area helpers for the overview surface.

use expose_core::{Padding, Rectangle};

use crate::error::PlacementError;

/// Area available for placement inside a viewport of `width` x `height`,
/// after carving out `padding` on each edge.
///
/// # Errors
///
/// [`PlacementError::InvalidViewport`] when nothing is left.
pub fn overview_area(
    width: i32,
    height: i32,
    padding: Padding,
) -> Result<Rectangle, PlacementError> {
    let area = Rectangle::new(
        padding.left,
        padding.top,
        width - padding.horizontal(),
        height - padding.vertical(),
    );
    if area.width <= 0 || area.height <= 0 {
        return Err(PlacementError::InvalidViewport { width, height, padding });
    }
    Ok(area)
}

/// Size of the overview surface for a workspace shown at `workspace_scale`.
///
/// Fractions are truncated.
pub fn scaled_viewport(screen_width: i32, screen_height: i32, workspace_scale: f32) -> (i32, i32) {
    (
        (screen_width as f32 * workspace_scale) as i32,
        (screen_height as f32 * workspace_scale) as i32,
    )
}
