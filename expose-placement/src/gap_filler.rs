//! Gap filling: grow each window into free space around it.

use expose_core::Rectangle;

/// Grows rectangles inside `border` until a whole pass changes nothing.
///
/// Each window tries four expansions in a fixed order (towards top-right,
/// bottom-right, bottom-left, top-left). Each attempt starts from the result of
/// the previous one and is kept if it stays inside `border` and overlaps no
/// other window. Other windows are compared at their current value; the window
/// being grown is excluded by index.
///
/// Returns the number of passes run, including the final one without movement.
/// A non-positive `accuracy` cannot grow anything; no pass is run.
pub fn fill_gaps(rects: &mut [Rectangle], border: Rectangle, accuracy: i32) -> usize {
    if accuracy <= 0 {
        tracing::warn!("Gap filling skipped, accuracy {} is not positive", accuracy);
        return 0;
    }
    let mut passes = 0usize;
    loop {
        passes += 1;
        let mut moved = false;

        for index in 0..rects.len() {
            let mut rect = rects[index];
            if rect.width <= 0 {
                continue;
            }

            let width_diff = accuracy;
            let height_diff = ((rect.width + width_diff - rect.height) as f32
                / rect.width as f32
                * rect.height as f32)
                .floor() as i32;
            let x_diff = width_diff / 2;
            let y_diff = height_diff / 2;

            let attempts: [fn(&Rectangle, i32, i32, i32, i32) -> Rectangle; 4] = [
                |r, xd, yd, wd, hd| {
                    Rectangle::new(r.x + xd, r.y - yd - hd, r.width + wd, r.height + wd)
                },
                |r, xd, yd, wd, _| Rectangle::new(r.x + xd, r.y + yd, r.width + wd, r.height + wd),
                |r, xd, yd, wd, _| Rectangle::new(r.x - xd, r.y + yd, r.width + wd, r.height + wd),
                |r, xd, yd, wd, hd| {
                    Rectangle::new(r.x - xd, r.y - yd - hd, r.width + wd, r.height + wd)
                },
            ];

            for attempt in attempts {
                let candidate = attempt(&rect, x_diff, y_diff, width_diff, height_diff);
                if border.contains(&candidate) && !overlaps_other(rects, index, &candidate) {
                    rect = candidate;
                    moved = true;
                }
            }

            rects[index] = rect;
        }

        if !moved {
            break;
        }
    }

    tracing::trace!("Gap filling finished after {} passes", passes);
    passes
}

fn overlaps_other(rects: &[Rectangle], index: usize, candidate: &Rectangle) -> bool {
    rects
        .iter()
        .enumerate()
        .any(|(other, rect)| other != index && rect.overlaps(candidate))
}
