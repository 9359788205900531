//! Uniform fit of a resolved layout into the target area.

use expose_core::Rectangle;

/// Scales `rects` uniformly so that `bounds` fits inside `area`, centering the
/// leftover space on both axes. Layouts that already fit are never enlarged.
///
/// Returns the scale factor used. An empty `bounds` is treated as scale 1.
pub fn fit_into_area(rects: &mut [Rectangle], bounds: Rectangle, area: Rectangle) -> f32 {
    let scale = if bounds.is_empty() {
        1.0
    } else {
        (area.width as f32 / bounds.width as f32)
            .min(area.height as f32 / bounds.height as f32)
            .min(1.0)
    };

    let origin_x = (bounds.x as f32 - (area.width as f32 - bounds.width as f32 * scale) / 2.0)
        .floor() as i32;
    let origin_y = (bounds.y as f32 - (area.height as f32 - bounds.height as f32 * scale) / 2.0)
        .floor() as i32;

    for rect in rects.iter_mut() {
        *rect = Rectangle::new(
            ((rect.x - origin_x) as f32 * scale + area.x as f32).floor() as i32,
            ((rect.y - origin_y) as f32 * scale + area.y as f32).floor() as i32,
            (rect.width as f32 * scale).floor() as i32,
            (rect.height as f32 * scale).floor() as i32,
        );
    }

    tracing::trace!("Fitted {} rects into {:?} at scale {}", rects.len(), area, scale);
    scale
}
