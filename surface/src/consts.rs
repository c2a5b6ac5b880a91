//! Shared numeric constants for the surface crate.

// ── Bitmap ──────────────────────────────────────────────────────

/// Default logical bitmap width in pixels.
pub const LOGICAL_WIDTH: u32 = 45;

/// Default logical bitmap height in pixels.
pub const LOGICAL_HEIGHT: u32 = 45;

/// Largest logical side a bitmap accepts; larger requests are clamped.
pub const MAX_LOGICAL_SIDE: u32 = 4096;

/// Default on-screen size of the surface, in CSS pixels per side.
pub const DISPLAY_SIZE_PX: f64 = 200.0;

// ── Stroke ──────────────────────────────────────────────────────

/// Pen width in logical pixels.
pub const STROKE_WIDTH: f64 = 1.0;

/// Opaque black, the only ink colour.
pub const INK: [u8; 4] = [0, 0, 0, 255];

/// Opaque white background.
pub const PAPER: [u8; 4] = [255, 255, 255, 255];
