//! Transport encoding: bitmap to PNG to base64.
//!
//! The classification service accepts the full-resolution bitmap as a bare
//! base64 PNG string. Encoding is deterministic: the same pixels always
//! produce the same bytes, since the encoder settings are fixed and no
//! timestamps or text chunks are written.

#[cfg(test)]
#[path = "encode_test.rs"]
mod encode_test;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::bitmap::Bitmap;

/// Error returned by [`encode_png`] and [`encode_base64`].
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// The bitmap has a zero dimension; PNG cannot represent it.
    #[error("cannot encode an empty {width}x{height} bitmap")]
    Empty { width: u32, height: u32 },
    /// The PNG encoder rejected the header or pixel data.
    #[error("png encoding failed: {0}")]
    Png(#[from] png::EncodingError),
}

/// Encode the bitmap as an 8-bit RGBA PNG.
///
/// # Errors
///
/// Returns [`EncodeError::Empty`] for zero-sized bitmaps and
/// [`EncodeError::Png`] if the encoder fails.
pub fn encode_png(bitmap: &Bitmap) -> Result<Vec<u8>, EncodeError> {
    if bitmap.width() == 0 || bitmap.height() == 0 {
        return Err(EncodeError::Empty { width: bitmap.width(), height: bitmap.height() });
    }

    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, bitmap.width(), bitmap.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(bitmap.as_rgba())?;
        writer.finish()?;
    }
    Ok(out)
}

/// Encode the bitmap as a bare base64 PNG string (no `data:` prefix).
///
/// # Errors
///
/// Propagates [`encode_png`] failures.
pub fn encode_base64(bitmap: &Bitmap) -> Result<String, EncodeError> {
    Ok(base64_payload(&encode_png(bitmap)?))
}

/// Base64 text of already-encoded PNG bytes, e.g. an image read from disk.
#[must_use]
pub fn base64_payload(png: &[u8]) -> String {
    STANDARD.encode(png)
}

/// Remove a `data:<mime>;base64,` header if present.
///
/// Hosts that obtain the image through `toDataURL` hand over a data URI;
/// the service wants only the payload after the comma.
#[must_use]
pub fn strip_data_uri(encoded: &str) -> &str {
    if encoded.starts_with("data:") {
        if let Some((_, payload)) = encoded.split_once(',') {
            return payload;
        }
    }
    encoded
}
