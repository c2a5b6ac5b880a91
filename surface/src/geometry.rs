#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

/// A point in either display or logical space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The on-screen rectangle the surface currently occupies.
///
/// `left` / `top` are the offset of the element in client coordinates and
/// `width` / `height` its rendered size, all in CSS pixels. Hosts must read
/// this fresh for every event so layout reflow never leaves a stale scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl DisplayRect {
    /// A rect anchored at the origin, for hosts that already report element-relative offsets.
    #[must_use]
    pub fn sized(width: f64, height: f64) -> Self {
        Self { left: 0.0, top: 0.0, width, height }
    }

    /// Whether the rect has a usable, positive area.
    #[must_use]
    pub fn is_drawable(&self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }
}

/// Uniform display-to-logical scale for one event.
///
/// `scale_x = logical_width / displayed_width`,
/// `scale_y = logical_height / displayed_height`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mapping {
    pub origin_x: f64,
    pub origin_y: f64,
    pub scale_x: f64,
    pub scale_y: f64,
}

impl Mapping {
    /// Build the mapping for a bitmap of `logical_w` × `logical_h` shown in `display`.
    ///
    /// Returns `None` when the display rect has no area.
    #[must_use]
    pub fn new(display: DisplayRect, logical_w: u32, logical_h: u32) -> Option<Self> {
        if !display.is_drawable() {
            return None;
        }
        Some(Self {
            origin_x: display.left,
            origin_y: display.top,
            scale_x: f64::from(logical_w) / display.width,
            scale_y: f64::from(logical_h) / display.height,
        })
    }

    /// Convert a display-space point (client CSS pixels) to logical bitmap coordinates.
    #[must_use]
    pub fn to_logical(&self, display: Point) -> Point {
        Point {
            x: (display.x - self.origin_x) * self.scale_x,
            y: (display.y - self.origin_y) * self.scale_y,
        }
    }

    /// Convert a logical bitmap point back to display space.
    #[must_use]
    pub fn to_display(&self, logical: Point) -> Point {
        Point {
            x: logical.x / self.scale_x + self.origin_x,
            y: logical.y / self.scale_y + self.origin_y,
        }
    }
}
