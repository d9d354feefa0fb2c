//! Decoding of uploaded image files with EXIF orientation handling.
//!
//! Browsers display JPEGs upright by honouring the EXIF orientation tag, so
//! the decoded buffer is rotated/flipped the same way before it reaches the
//! editor. PNG files carry no orientation and are passed through.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::{DynamicImage, ImageFormat, ImageReader};
use tracing::debug;

use super::{DecodeError, Orientation, RasterImage};

/// Decode a PNG or JPEG file into an RGBA buffer.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the format cannot be recognised
/// and `DecodeError::CorruptedFile` if decoding fails part way.
pub fn decode_image(bytes: &[u8]) -> Result<RasterImage, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let format = reader.format().ok_or(DecodeError::InvalidFormat)?;

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let orientation = if format == ImageFormat::Jpeg {
        get_orientation(bytes)
    } else {
        Orientation::Normal
    };

    let oriented = apply_orientation(img, orientation);
    debug!(
        ?format,
        ?orientation,
        width = oriented.width(),
        height = oriented.height(),
        "decoded image"
    );
    Ok(RasterImage::from_rgba_image(oriented.into_rgba8()))
}

/// Extract the EXIF orientation from JPEG bytes.
///
/// Returns `Orientation::Normal` if no EXIF data is found or the tag is
/// unreadable.
pub fn get_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);
    let Ok(exif) = Reader::new().read_from_container(&mut cursor) else {
        return Orientation::Normal;
    };
    exif.get_field(Tag::Orientation, In::PRIMARY)
        .and_then(|field| field.value.get_uint(0))
        .map(Orientation::from)
        .unwrap_or_default()
}

/// Apply EXIF orientation transformation to an image.
fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}
