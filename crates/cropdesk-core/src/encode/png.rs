//! PNG encoding for export.

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use super::{validate, EncodeError};
use crate::decode::RasterImage;

/// Encode an RGBA buffer to PNG bytes.
///
/// # Errors
///
/// Returns an error if the buffer is empty, its length does not match its
/// dimensions, or the encoder fails.
pub fn encode_png(image: &RasterImage) -> Result<Vec<u8>, EncodeError> {
    validate(image)?;

    let mut buffer = Vec::new();
    PngEncoder::new(&mut buffer)
        .write_image(
            &image.pixels,
            image.width,
            image.height,
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer)
}
