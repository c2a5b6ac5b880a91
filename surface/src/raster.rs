//! Pen rasterization: square-capped segments in logical pixel space.
//!
//! A segment of width `w` from `a` to `b` covers the rectangle that runs
//! `w / 2` past each endpoint along the segment and `w / 2` to either side.
//! A pixel is inked when its centre falls inside that rectangle. The along
//! interval is `[-w/2, len + w/2)` and the across interval is `(-w/2, w/2]`;
//! the half-open bounds keep a one-pixel pen exactly one pixel thick when a
//! segment lies on a pixel boundary.
//!
//! Zero-length segments use the +x axis, so a tap leaves a `w` × `w` dot.

#[cfg(test)]
#[path = "raster_test.rs"]
mod raster_test;

use crate::bitmap::{Bitmap, Rgba};
use crate::geometry::Point;

/// Draw one segment onto `bitmap`.
///
/// Returns whether any pixel changed. Non-finite endpoints draw nothing.
pub fn stroke_segment(bitmap: &mut Bitmap, from: Point, to: Point, width: f64, color: Rgba) -> bool {
    if !(from.x.is_finite() && from.y.is_finite() && to.x.is_finite() && to.y.is_finite()) {
        return false;
    }
    if width <= 0.0 || !width.is_finite() {
        return false;
    }

    let half = width / 2.0;
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let len = dx.hypot(dy);
    let (ux, uy) = if len > 0.0 { (dx / len, dy / len) } else { (1.0, 0.0) };

    // The capped rectangle fits inside the endpoint box grown by half the pen.
    let Some((x0, x1)) = pixel_span(from.x.min(to.x) - half, from.x.max(to.x) + half, bitmap.width()) else {
        return false;
    };
    let Some((y0, y1)) = pixel_span(from.y.min(to.y) - half, from.y.max(to.y) + half, bitmap.height()) else {
        return false;
    };

    let mut changed = false;
    for py in y0..=y1 {
        for px in x0..=x1 {
            #[allow(clippy::cast_precision_loss)]
            let (cx, cy) = (px as f64 + 0.5 - from.x, py as f64 + 0.5 - from.y);
            let along = cx * ux + cy * uy;
            let across = ux * cy - uy * cx;
            let inside = along >= -half && along < len + half && across > -half && across <= half;
            if inside {
                changed |= bitmap.set(px, py, color);
            }
        }
    }
    changed
}

/// Inclusive pixel index range whose centres may fall in `[lo, hi]`, clipped to `0..size`.
#[allow(clippy::cast_possible_truncation)]
fn pixel_span(lo: f64, hi: f64, size: u32) -> Option<(i64, i64)> {
    if size == 0 {
        return None;
    }
    let max = i64::from(size) - 1;
    let first = ((lo - 0.5).floor() as i64).max(0);
    let last = ((hi - 0.5).ceil() as i64).min(max);
    (first <= last).then_some((first, last))
}
