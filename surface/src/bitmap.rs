//! Pixel store: the fixed-resolution RGBA buffer the pen writes into.
//!
//! The bitmap's size is its logical resolution and never changes after
//! construction; display size lives in [`crate::geometry`]. Pixels are stored
//! row-major as straight RGBA bytes, which is the layout both the PNG encoder
//! and `ImageData` expect, so no conversion happens on export or blit.

#[cfg(test)]
#[path = "bitmap_test.rs"]
mod bitmap_test;

use crate::consts::{INK, MAX_LOGICAL_SIDE, PAPER};

/// An RGBA colour.
pub type Rgba = [u8; 4];

/// Fixed-size RGBA raster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Bitmap {
    /// A new bitmap filled with the paper colour. Each side is clamped to
    /// [`MAX_LOGICAL_SIDE`].
    #[must_use]
    pub fn blank(width: u32, height: u32) -> Self {
        let (width, height) = (width.min(MAX_LOGICAL_SIDE), height.min(MAX_LOGICAL_SIDE));
        let Some(len) = Self::byte_len(width, height) else {
            return Self { width: 0, height: 0, pixels: Vec::new() };
        };
        let mut bitmap = Self { width, height, pixels: vec![0; len] };
        bitmap.fill(PAPER);
        bitmap
    }

    fn byte_len(width: u32, height: u32) -> Option<usize> {
        (width as usize).checked_mul(height as usize)?.checked_mul(4)
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw row-major RGBA bytes.
    #[must_use]
    pub fn as_rgba(&self) -> &[u8] {
        &self.pixels
    }

    /// Overwrite every pixel with `color`.
    pub fn fill(&mut self, color: Rgba) {
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&color);
        }
    }

    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    fn offset(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return None;
        }
        // Both coordinates are in range, so the casts are lossless.
        Some((y as usize * self.width as usize + x as usize) * 4)
    }

    /// Colour at `(x, y)`, or `None` outside the bitmap.
    #[must_use]
    pub fn get(&self, x: i64, y: i64) -> Option<Rgba> {
        let at = self.offset(x, y)?;
        let mut out = [0; 4];
        out.copy_from_slice(&self.pixels[at..at + 4]);
        Some(out)
    }

    /// Write `color` at `(x, y)`. Out-of-range writes are clipped.
    ///
    /// Returns whether the pixel actually changed.
    pub fn set(&mut self, x: i64, y: i64, color: Rgba) -> bool {
        let Some(at) = self.offset(x, y) else {
            return false;
        };
        let px = &mut self.pixels[at..at + 4];
        if px == color {
            return false;
        }
        px.copy_from_slice(&color);
        true
    }

    /// Whether `(x, y)` holds ink.
    #[must_use]
    pub fn is_inked(&self, x: i64, y: i64) -> bool {
        self.get(x, y) == Some(INK)
    }

    /// Number of inked pixels.
    #[must_use]
    pub fn ink_count(&self) -> usize {
        self.pixels.chunks_exact(4).filter(|px| *px == INK).count()
    }

    /// True when no pixel differs from the paper colour.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.pixels.chunks_exact(4).all(|px| px == PAPER)
    }
}
