//! Destructive transforms applied to the editor's raster buffer.
//!
//! # Coordinate System
//!
//! - Regions are whole pixels in buffer space
//! - Origin is top-left corner

mod crop;

pub use crop::crop_pixels;
