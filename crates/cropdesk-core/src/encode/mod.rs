//! Export encoding for the edited buffer.
//!
//! PNG is the default export format, matching the page's
//! `edited-image.png` download. JPEG is available with a quality setting
//! for smaller files; its alpha channel is dropped.
//!
//! # Examples
//!
//! ```ignore
//! use cropdesk_core::encode::{encode, ExportFormat};
//!
//! let bytes = encode(&image, ExportFormat::Png)?;
//! ```

mod jpeg;
mod png;

pub use jpeg::encode_jpeg;
pub use png::encode_png;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::decode::{RasterImage, CHANNELS};

/// Errors that can occur during export encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The encoder itself failed
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),
}

/// Output format for `export`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ExportFormat {
    /// Lossless PNG with alpha.
    #[default]
    Png,
    /// JPEG at the given quality (1-100).
    Jpeg { quality: u8 },
}

impl ExportFormat {
    /// Suggested download file name.
    pub const fn file_name(self) -> &'static str {
        match self {
            ExportFormat::Png => "edited-image.png",
            ExportFormat::Jpeg { .. } => "edited-image.jpg",
        }
    }

    /// MIME type of the encoded bytes.
    pub const fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Png => "image/png",
            ExportFormat::Jpeg { .. } => "image/jpeg",
        }
    }
}

/// Encode a buffer in the requested format.
///
/// # Errors
///
/// See [`EncodeError`].
pub fn encode(image: &RasterImage, format: ExportFormat) -> Result<Vec<u8>, EncodeError> {
    match format {
        ExportFormat::Png => encode_png(image),
        ExportFormat::Jpeg { quality } => encode_jpeg(image, quality),
    }
}

/// Check the buffer is non-empty and its length matches its dimensions.
fn validate(image: &RasterImage) -> Result<(), EncodeError> {
    if image.width == 0 || image.height == 0 {
        return Err(EncodeError::InvalidDimensions {
            width: image.width,
            height: image.height,
        });
    }

    let expected = image.width as usize * image.height as usize * CHANNELS;
    if image.pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: image.pixels.len(),
        });
    }
    Ok(())
}
