//! Cropdesk Core - crop overlay geometry and raster editing
//!
//! This crate holds everything the in-browser image editor needs that is not
//! DOM wiring: the crop rectangle and its drag math, the mapping between the
//! raster buffer and its scaled on-screen presentation, and the buffer
//! lifecycle (load, resize, crop, reset, export).
//!
//! # Module Structure
//!
//! - `geometry` - `Rect`, `Point`, `Scale` and buffer/display mapping
//! - `session` - handle identities and the single active drag session
//! - `engine` - next crop rectangle for a drag
//! - `decode` / `transform` / `encode` - raster decode, resample, crop, export
//! - `editor` - `EditorSurface`, the controller tying it all together

pub mod decode;
pub mod editor;
pub mod encode;
pub mod engine;
pub mod geometry;
pub mod session;
pub mod transform;

pub use decode::{decode_image, FilterType, RasterImage};
pub use editor::{parse_dimension, EditorConfig, EditorError, EditorSurface};
pub use encode::ExportFormat;
pub use engine::{CropEngine, DEFAULT_MIN_CROP_SIZE};
pub use geometry::{to_buffer, to_display, Bounds, MappingError, PixelRegion, Point, Rect, Scale};
pub use session::{DragSession, DragTracker, HandleId};
