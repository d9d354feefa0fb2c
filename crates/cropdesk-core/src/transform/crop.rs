//! Extracting a pixel region from a raster buffer.
//!
//! The editor keeps its crop rectangle in floating point buffer units. It
//! is rounded to a [`PixelRegion`] (see `Rect::to_pixels`) just before the
//! crop is applied here.

use crate::decode::{RasterImage, CHANNELS};
use crate::geometry::PixelRegion;

/// Copy `region` out of `image` into a new buffer of exactly that size.
///
/// # Behavior
///
/// - The region is clamped to the image bounds
/// - Minimum output dimension is 1x1 pixels
/// - A region covering the whole image returns a copy of the original
pub fn crop_pixels(image: &RasterImage, region: PixelRegion) -> RasterImage {
    let left = region.x.min(image.width.saturating_sub(1));
    let top = region.y.min(image.height.saturating_sub(1));
    let right = left.saturating_add(region.width).min(image.width);
    let bottom = top.saturating_add(region.height).min(image.height);

    // Fast path: full crop returns a clone
    if left == 0 && top == 0 && right == image.width && bottom == image.height {
        return image.clone();
    }

    let out_width = right.saturating_sub(left).max(1);
    let out_height = bottom.saturating_sub(top).max(1);

    let src_stride = image.width as usize * CHANNELS;
    let row_len = out_width as usize * CHANNELS;
    let mut output = Vec::with_capacity(row_len * out_height as usize);

    // Copy pixel data row by row
    for y in top..top + out_height {
        let start = y as usize * src_stride + left as usize * CHANNELS;
        match image.pixels.get(start..start + row_len) {
            Some(row) => output.extend_from_slice(row),
            None => output.resize(output.len() + row_len, 0),
        }
    }

    RasterImage {
        width: out_width,
        height: out_height,
        pixels: output,
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn create_test_image(width: u32, height: u32) -> RasterImage {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.extend_from_slice(&[x as u8, y as u8, 0, 255]);
            }
        }
        RasterImage::new(width, height, pixels)
    }

    proptest! {
        /// Property: output is never empty and never larger than the input.
        #[test]
        fn prop_output_bounded(
            (width, height) in (1u32..=60, 1u32..=60),
            (x, y, w, h) in (0u32..80, 0u32..80, 0u32..80, 0u32..80),
        ) {
            let img = create_test_image(width, height);
            let result = crop_pixels(&img, PixelRegion { x, y, width: w, height: h });

            prop_assert!(result.width >= 1 && result.height >= 1);
            prop_assert!(result.width <= width && result.height <= height);
            prop_assert_eq!(
                result.pixels.len(),
                (result.width * result.height * 4) as usize
            );
        }

        /// Property: an in-bounds crop copies exactly the source pixels.
        #[test]
        fn prop_in_bounds_crop_matches_source(
            (width, height) in (10u32..=60, 10u32..=60),
            (x, y) in (0u32..5, 0u32..5),
            (w, h) in (1u32..5, 1u32..5),
        ) {
            let img = create_test_image(width, height);
            let result = crop_pixels(&img, PixelRegion { x, y, width: w, height: h });

            prop_assert_eq!((result.width, result.height), (w, h));
            for cy in 0..h {
                for cx in 0..w {
                    prop_assert_eq!(result.pixel(cx, cy), img.pixel(x + cx, y + cy));
                }
            }
        }
    }
}
