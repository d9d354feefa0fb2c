//! Raster decoding and resampling.
//!
//! This module provides functionality for:
//! - Decoding uploaded PNG and JPEG files into RGBA buffers
//! - Fitting a decoded image into the editor's display envelope
//! - Resampling a buffer to exact dimensions for the resize action
//!
//! # Architecture
//!
//! Decoding runs on the page's main thread through WASM bindings. It is
//! synchronous inside WASM; the page awaits the file read before calling in,
//! so no crop drag can start until a buffer exists.

mod file;
mod resize;
mod types;

pub use file::{decode_image, get_orientation};
pub use resize::{fit_within, resize, resize_to_fit};
pub use types::{DecodeError, FilterType, Orientation, RasterImage, CHANNELS};
