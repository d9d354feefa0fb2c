//! JPEG encoding for export.
//!
//! This module provides JPEG encoding using the `image` crate's JPEG encoder.
//! JPEG has no alpha channel, so the buffer's alpha is discarded.

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder};

use super::{validate, EncodeError};
use crate::decode::{RasterImage, CHANNELS};

/// Encode an RGBA buffer to JPEG bytes.
///
/// # Arguments
///
/// * `image` - Buffer to encode
/// * `quality` - JPEG quality (1-100, where 100 is highest quality)
///
/// # Quality Guidelines
///
/// * 90-100: High quality, suitable for further editing
/// * 80-90: Good quality, recommended for most uses
/// * 60-80: Medium quality, acceptable for web/social media
/// * Below 60: Low quality, visible artifacts
pub fn encode_jpeg(image: &RasterImage, quality: u8) -> Result<Vec<u8>, EncodeError> {
    validate(image)?;

    // Clamp quality to valid range (1-100)
    let quality = quality.clamp(1, 100);

    let rgb: Vec<u8> = image
        .pixels
        .chunks_exact(CHANNELS)
        .flat_map(|px| [px[0], px[1], px[2]])
        .collect();

    let mut buffer = Vec::new();
    JpegEncoder::new_with_quality(&mut buffer, quality)
        .write_image(&rgb, image.width, image.height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
