use wasm_bindgen::{Clamped, JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ImageData};

use crate::bitmap::Bitmap;
use crate::consts::{INK, LOGICAL_HEIGHT, LOGICAL_WIDTH, PAPER, STROKE_WIDTH};
use crate::encode::{self, EncodeError};
use crate::geometry::{DisplayRect, Mapping, Point};
use crate::input::{Button, StrokeState};
use crate::raster;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    RenderNeeded,
}

impl Action {
    fn from_changed(changed: bool) -> Self {
        if changed { Self::RenderNeeded } else { Self::None }
    }

    #[must_use]
    pub fn needs_render(self) -> bool {
        self == Self::RenderNeeded
    }
}

/// Core surface state: all logic that doesn't depend on the canvas element.
///
/// Separated from `Surface` so it can be tested without WASM/browser dependencies.
#[derive(Debug, Clone)]
pub struct SurfaceCore {
    bitmap: Bitmap,
    stroke: StrokeState,
}

impl Default for SurfaceCore {
    fn default() -> Self {
        Self::with_size(LOGICAL_WIDTH, LOGICAL_HEIGHT)
    }
}

impl SurfaceCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A blank surface with the given logical resolution.
    #[must_use]
    pub fn with_size(width: u32, height: u32) -> Self {
        Self { bitmap: Bitmap::blank(width, height), stroke: StrokeState::Idle }
    }

    fn map(&self, pointer: Point, display: DisplayRect) -> Option<Point> {
        let mapping = Mapping::new(display, self.bitmap.width(), self.bitmap.height())?;
        Some(mapping.to_logical(pointer))
    }

    // --- Stroke ---

    /// Put the pen down at `pointer` (display space) and commit a dot there.
    ///
    /// A collapsed `display` rect leaves the surface idle.
    pub fn begin(&mut self, pointer: Point, display: DisplayRect) -> Action {
        let Some(at) = self.map(pointer, display) else {
            return Action::None;
        };
        self.stroke = StrokeState::Drawing { last: at };
        Action::from_changed(raster::stroke_segment(&mut self.bitmap, at, at, STROKE_WIDTH, INK))
    }

    /// Draw from the last committed point to `pointer`, then advance.
    ///
    /// Ignored unless a stroke is in progress.
    pub fn extend(&mut self, pointer: Point, display: DisplayRect) -> Action {
        let Some(last) = self.stroke.last_point() else {
            return Action::None;
        };
        let Some(at) = self.map(pointer, display) else {
            return Action::None;
        };
        let changed = raster::stroke_segment(&mut self.bitmap, last, at, STROKE_WIDTH, INK);
        self.stroke = StrokeState::Drawing { last: at };
        Action::from_changed(changed)
    }

    /// Lift the pen. Pixels are left as drawn.
    pub fn end(&mut self) -> Action {
        self.stroke = StrokeState::Idle;
        Action::None
    }

    /// Reset every pixel to paper and forget the current point.
    pub fn clear(&mut self) -> Action {
        self.bitmap.fill(PAPER);
        self.stroke = StrokeState::Idle;
        Action::RenderNeeded
    }

    // --- Export ---

    /// The bitmap as a bare base64 PNG, ready for the classification service.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError`] if the bitmap cannot be PNG-encoded.
    pub fn export_encoded(&self) -> Result<String, EncodeError> {
        encode::encode_base64(&self.bitmap)
    }

    /// The bitmap as PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError`] if the bitmap cannot be PNG-encoded.
    pub fn export_png(&self) -> Result<Vec<u8>, EncodeError> {
        encode::encode_png(&self.bitmap)
    }

    // --- Queries ---

    #[must_use]
    pub fn bitmap(&self) -> &Bitmap {
        &self.bitmap
    }

    #[must_use]
    pub fn stroke(&self) -> StrokeState {
        self.stroke
    }

    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.stroke.is_drawing()
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.bitmap.is_blank()
    }
}

/// The full surface. Wraps `SurfaceCore` and owns the browser canvas element.
///
/// The canvas element's `width` / `height` attributes are the logical
/// resolution; its CSS box is the display size.
pub struct Surface {
    canvas: HtmlCanvasElement,
    pub core: SurfaceCore,
}

impl Surface {
    /// Create a surface bound to `canvas`, sized to its bitmap attributes.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        let core = SurfaceCore::with_size(canvas.width(), canvas.height());
        Self { canvas, core }
    }

    /// The element's current on-screen box. Read fresh for every event.
    fn display_rect(&self) -> DisplayRect {
        let rect = self.canvas.get_bounding_client_rect();
        DisplayRect { left: rect.left(), top: rect.top(), width: rect.width(), height: rect.height() }
    }

    // --- Input events (client coordinates) ---

    pub fn on_pointer_down(&mut self, client_pt: Point, button: Button) -> Action {
        if !button.draws() {
            return Action::None;
        }
        let display = self.display_rect();
        self.core.begin(client_pt, display)
    }

    pub fn on_pointer_move(&mut self, client_pt: Point) -> Action {
        if !self.core.is_drawing() {
            return Action::None;
        }
        let display = self.display_rect();
        self.core.extend(client_pt, display)
    }

    pub fn on_pointer_up(&mut self) -> Action {
        self.core.end()
    }

    pub fn clear(&mut self) -> Action {
        self.core.clear()
    }

    // --- Render ---

    /// Copy the bitmap onto the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or `putImageData` fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        let bitmap = self.core.bitmap();
        let data =
            ImageData::new_with_u8_clamped_array_and_sh(Clamped(bitmap.as_rgba()), bitmap.width(), bitmap.height())?;
        ctx.put_image_data(&data, 0.0, 0.0)
    }

    // --- Delegated export ---

    /// # Errors
    ///
    /// See [`SurfaceCore::export_encoded`].
    pub fn export_encoded(&self) -> Result<String, EncodeError> {
        self.core.export_encoded()
    }
}
