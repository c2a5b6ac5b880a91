//! Recorded pointer input, replayed headlessly.
//!
//! A stroke script is the JSON form of what a user would draw on the pad:
//! the size of the on-screen box and, for every stroke, the display-space
//! points the pointer passed through.
//!
//! ```json
//! { "display": { "width": 200, "height": 200 },
//!   "strokes": [[[100, 100], [150, 100]]] }
//! ```

use serde::{Deserialize, Serialize};
use surface::consts::{LOGICAL_HEIGHT, LOGICAL_WIDTH, MAX_LOGICAL_SIDE};
use surface::engine::SurfaceCore;
use surface::geometry::{DisplayRect, Point};

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("invalid stroke script: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("display size must be positive, got {width}x{height}")]
    Display { width: f64, height: f64 },
    #[error("logical size must be between 1 and {max} per side, got {width}x{height}", max = MAX_LOGICAL_SIDE)]
    Logical { width: u32, height: u32 },
    #[error("stroke {index} has no points")]
    EmptyStroke { index: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplaySize {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogicalSize {
    pub width: u32,
    pub height: u32,
}

impl Default for LogicalSize {
    fn default() -> Self {
        Self { width: LOGICAL_WIDTH, height: LOGICAL_HEIGHT }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeScript {
    pub display: DisplaySize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logical: Option<LogicalSize>,
    pub strokes: Vec<Vec<[f64; 2]>>,
}

impl StrokeScript {
    /// Parse and validate a script.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptError`] for malformed JSON, a non-positive display size,
    /// a logical size outside `1..=MAX_LOGICAL_SIDE`, or a stroke without points.
    pub fn from_json(text: &str) -> Result<Self, ScriptError> {
        let script: Self = serde_json::from_str(text)?;
        script.validate()?;
        Ok(script)
    }

    fn validate(&self) -> Result<(), ScriptError> {
        if !self.display_rect().is_drawable() {
            return Err(ScriptError::Display { width: self.display.width, height: self.display.height });
        }
        let logical = self.logical_size();
        let side = 1..=MAX_LOGICAL_SIDE;
        if !side.contains(&logical.width) || !side.contains(&logical.height) {
            return Err(ScriptError::Logical { width: logical.width, height: logical.height });
        }
        if let Some(index) = self.strokes.iter().position(Vec::is_empty) {
            return Err(ScriptError::EmptyStroke { index });
        }
        Ok(())
    }

    #[must_use]
    pub fn logical_size(&self) -> LogicalSize {
        self.logical.unwrap_or_default()
    }

    /// The display box, anchored at the origin.
    #[must_use]
    pub fn display_rect(&self) -> DisplayRect {
        DisplayRect::sized(self.display.width, self.display.height)
    }

    /// A blank surface at the script's logical size.
    #[must_use]
    pub fn new_surface(&self) -> SurfaceCore {
        let size = self.logical_size();
        SurfaceCore::with_size(size.width, size.height)
    }

    /// Strokes as display-space points.
    pub fn strokes(&self) -> impl Iterator<Item = Vec<Point>> + '_ {
        self.strokes.iter().map(|stroke| stroke.iter().map(|&[x, y]| Point::new(x, y)).collect())
    }

    /// Draw every stroke onto `core`: pen down on the first point, extend
    /// through the rest, pen up.
    pub fn replay(&self, core: &mut SurfaceCore) {
        let display = self.display_rect();
        for stroke in self.strokes() {
            let mut points = stroke.into_iter();
            if let Some(first) = points.next() {
                core.begin(first, display);
                for point in points {
                    core.extend(point, display);
                }
                core.end();
            }
        }
    }

    /// Replay onto a fresh surface.
    #[must_use]
    pub fn render(&self) -> SurfaceCore {
        let mut core = self.new_surface();
        self.replay(&mut core);
        core
    }
}

#[cfg(test)]
#[path = "script_test.rs"]
mod tests;
