//! Core raster types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Bytes per RGBA pixel.
pub const CHANNELS: usize = 4;

/// Error types for image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The file format is not recognized or supported.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),

    /// Requested output dimensions are zero.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Filter type for image resizing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterType {
    /// Nearest neighbor interpolation (fastest, lowest quality).
    Nearest,
    /// Bilinear interpolation (fast, acceptable quality).
    #[default]
    Bilinear,
    /// Lanczos3 interpolation (slower, highest quality).
    Lanczos3,
}

impl FilterType {
    /// Convert to the image crate's FilterType.
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            FilterType::Nearest => image::imageops::FilterType::Nearest,
            FilterType::Bilinear => image::imageops::FilterType::Triangle,
            FilterType::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// EXIF orientation values (1-8).
/// See: https://exiftool.org/TagNames/EXIF.html
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Orientation {
    /// Normal (no transformation needed).
    #[default]
    Normal = 1,
    /// Horizontal flip.
    FlipHorizontal = 2,
    /// Rotate 180 degrees.
    Rotate180 = 3,
    /// Vertical flip.
    FlipVertical = 4,
    /// Transpose (flip horizontal + rotate 270 CW).
    Transpose = 5,
    /// Rotate 90 degrees clockwise.
    Rotate90CW = 6,
    /// Transverse (flip horizontal + rotate 90 CW).
    Transverse = 7,
    /// Rotate 270 degrees clockwise (90 CCW).
    Rotate270CW = 8,
}

impl From<u32> for Orientation {
    fn from(value: u32) -> Self {
        match value {
            2 => Orientation::FlipHorizontal,
            3 => Orientation::Rotate180,
            4 => Orientation::FlipVertical,
            5 => Orientation::Transpose,
            6 => Orientation::Rotate90CW,
            7 => Orientation::Transverse,
            8 => Orientation::Rotate270CW,
            _ => Orientation::Normal,
        }
    }
}

/// A raster buffer with RGBA pixel data.
///
/// This mirrors the layout of a canvas `ImageData`: row-major, 4 bytes per
/// pixel, straight (non-premultiplied) alpha.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGBA pixel data, length `width * height * 4`.
    pub pixels: Vec<u8>,
}

impl RasterImage {
    /// Create a new RasterImage with the given dimensions and pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize * CHANNELS,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// A buffer filled with a single color.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let pixels = rgba.repeat(width as usize * height as usize);
        Self::new(width, height, pixels)
    }

    /// Create a RasterImage from an image::RgbaImage.
    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            pixels: img.into_raw(),
        }
    }

    /// Borrow the pixels as an image::RgbaImage view.
    ///
    /// Returns `None` if the pixel buffer does not match the dimensions.
    pub fn as_rgba_image(&self) -> Option<image::ImageBuffer<image::Rgba<u8>, &[u8]>> {
        image::ImageBuffer::from_raw(self.width, self.height, self.pixels.as_slice())
    }

    /// RGBA value at `(x, y)`, or `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * CHANNELS;
        self.pixels
            .get(idx..idx + CHANNELS)
            .map(|p| [p[0], p[1], p[2], p[3]])
    }

    /// Check if this is an empty/invalid image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }

    /// Byte length of a `width` x `height` RGBA buffer, or `None` if it
    /// does not fit in `usize`.
    pub fn expected_len(width: u32, height: u32) -> Option<usize> {
        (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(CHANNELS)
    }

    /// Check `pixels` holds exactly `width * height` RGBA pixels.
    pub fn has_valid_length(&self) -> bool {
        Self::expected_len(self.width, self.height) == Some(self.pixels.len())
    }
}
