//! Image resizing for the editor's fitted buffer and the resize action.
//!
//! All functions return new `RasterImage` instances without modifying the
//! input.

use super::{DecodeError, FilterType, RasterImage};

/// Resize an image to exact dimensions.
///
/// # Errors
///
/// Returns `DecodeError::InvalidDimensions` if either target side is zero
/// and `DecodeError::CorruptedFile` if the source buffer does not match its
/// dimensions.
pub fn resize(
    image: &RasterImage,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<RasterImage, DecodeError> {
    if width == 0 || height == 0 {
        return Err(DecodeError::InvalidDimensions { width, height });
    }

    // Fast path: if dimensions match, just clone
    if image.width == width && image.height == height {
        return Ok(image.clone());
    }

    let view = image
        .as_rgba_image()
        .ok_or_else(|| DecodeError::CorruptedFile("Failed to create RgbaImage".to_string()))?;

    let resized = image::imageops::resize(&view, width, height, filter.to_image_filter());

    Ok(RasterImage::from_rgba_image(resized))
}

/// Resize an image so it fits inside a `max_width` x `max_height` envelope.
///
/// Aspect ratio is preserved and images that already fit are returned
/// unchanged (never upscaled).
///
/// # Errors
///
/// Same as [`resize`].
pub fn resize_to_fit(
    image: &RasterImage,
    max_width: u32,
    max_height: u32,
    filter: FilterType,
) -> Result<RasterImage, DecodeError> {
    let (width, height) = fit_within(image.width, image.height, max_width, max_height);
    resize(image, width, height, filter)
}

/// Dimensions of a `width` x `height` image shrunk into an envelope.
///
/// The width constraint is applied first, then the height constraint is
/// re-checked against the already narrowed size, so both hold at the end.
/// Each side is truncated to whole pixels, the way a canvas takes a
/// fractional width, and is at least 1.
pub fn fit_within(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (0, 0);
    }

    let max_width = f64::from(max_width.max(1));
    let max_height = f64::from(max_height.max(1));
    let mut w = f64::from(width);
    let mut h = f64::from(height);

    if w > max_width {
        h *= max_width / w;
        w = max_width;
    }
    if h > max_height {
        w *= max_height / h;
        h = max_height;
    }

    let w = (w.floor() as u32).clamp(1, max_width as u32);
    let h = (h.floor() as u32).clamp(1, max_height as u32);
    (w, h)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
