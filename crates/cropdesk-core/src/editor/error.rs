//! Errors surfaced by editor operations.

use thiserror::Error;

use crate::decode::DecodeError;
use crate::encode::EncodeError;
use crate::geometry::MappingError;

/// Error kinds for `EditorSurface` operations.
///
/// A failed operation leaves the previous buffer and crop rectangle intact.
#[derive(Debug, Error)]
pub enum EditorError {
    /// Resize target is not a positive integer.
    #[error("Please enter valid width and height values (minimum 1px), got {0:?}")]
    InvalidDimension(String),

    /// The operation needs a loaded image.
    #[error("No image loaded")]
    NoImageLoaded,

    /// The crop region has no area.
    #[error("Crop region is empty")]
    EmptyRegion,

    /// The uploaded file could not be decoded or resampled.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Export encoding failed.
    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// The measured layout cannot be mapped to buffer space.
    #[error(transparent)]
    Mapping(#[from] MappingError),
}
