//! The editor surface: raster buffer lifecycle plus the crop overlay.
//!
//! `EditorSurface` owns the raster buffer exclusively. The buffer is never
//! mutated in place across a dimension change; load, resize, crop and reset
//! each build a complete replacement first and only swap it in once it is
//! ready, so a failed operation leaves the previous buffer and crop
//! rectangle untouched.
//!
//! Pointer events arrive in display space. A drag captures the current
//! display/buffer scale at pointer-down and keeps using it until
//! pointer-up, so every move of that drag maps deltas the same way.

mod config;
mod error;

pub use config::EditorConfig;
pub use error::EditorError;

use tracing::{debug, info, warn};

use crate::decode::{self, RasterImage};
use crate::encode::{self, ExportFormat};
use crate::engine::CropEngine;
use crate::geometry::{to_display, Bounds, Point, Rect, Scale};
use crate::session::{DragSession, DragTracker, HandleId};
use crate::transform::crop_pixels;

/// What the crop rectangle becomes after the buffer is replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CropReset {
    /// Centered region covering `initial_crop_fraction` of each axis.
    Initial,
    /// The whole new buffer.
    Full,
}

/// Editor state for one page.
#[derive(Debug, Clone)]
pub struct EditorSurface {
    config: EditorConfig,
    engine: CropEngine,
    original: Option<RasterImage>,
    buffer: Option<RasterImage>,
    crop: Rect,
    display: Option<Bounds>,
    drag: DragTracker,
}

impl Default for EditorSurface {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl EditorSurface {
    pub fn new(config: EditorConfig) -> Self {
        let config = config.validated();
        Self {
            engine: CropEngine::new(config.min_crop_size),
            config,
            original: None,
            buffer: None,
            crop: Rect::default(),
            display: None,
            drag: DragTracker::new(),
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn has_image(&self) -> bool {
        self.buffer.is_some()
    }

    /// The buffer currently being edited.
    pub fn buffer(&self) -> Option<&RasterImage> {
        self.buffer.as_ref()
    }

    /// The pristine image as loaded, before fitting or any edit.
    pub fn original(&self) -> Option<&RasterImage> {
        self.original.as_ref()
    }

    pub fn buffer_bounds(&self) -> Option<Bounds> {
        self.buffer
            .as_ref()
            .map(|b| Bounds::from_pixels(b.width, b.height))
    }

    /// Current crop rectangle in buffer space.
    pub fn crop_rect(&self) -> Rect {
        self.crop
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    // ------------------------------------------------------------------
    // Buffer lifecycle
    // ------------------------------------------------------------------

    /// Load a decoded image.
    ///
    /// The image is kept as the pristine original and a copy fitted into
    /// the `max_width` x `max_height` envelope becomes the buffer. The crop
    /// box resets to the initial centered region.
    ///
    /// # Errors
    ///
    /// Returns `EditorError::Decode` if the image is empty, its pixel data
    /// does not match its dimensions, or it cannot be resampled.
    pub fn load(&mut self, image: RasterImage) -> Result<(), EditorError> {
        if image.is_empty() {
            return Err(decode::DecodeError::InvalidDimensions {
                width: image.width,
                height: image.height,
            }
            .into());
        }
        if !image.has_valid_length() {
            warn!(
                width = image.width,
                height = image.height,
                len = image.pixels.len(),
                "load rejected"
            );
            return Err(decode::DecodeError::CorruptedFile(format!(
                "{} bytes of pixel data for {}x{} RGBA",
                image.pixels.len(),
                image.width,
                image.height
            ))
            .into());
        }

        let fitted = self.fit(&image)?;
        info!(
            source_width = image.width,
            source_height = image.height,
            "image loaded"
        );
        self.original = Some(image);
        self.replace_buffer(fitted, CropReset::Initial);
        Ok(())
    }

    /// Decode an uploaded PNG or JPEG file and [`load`](Self::load) it.
    ///
    /// # Errors
    ///
    /// Returns `EditorError::Decode` if the bytes cannot be decoded.
    pub fn load_bytes(&mut self, bytes: &[u8]) -> Result<(), EditorError> {
        let image =
            decode::decode_image(bytes).inspect_err(|e| warn!(error = %e, "decode failed"))?;
        self.load(image)
    }

    /// Resample the current buffer to exactly `width` x `height`.
    ///
    /// The crop box resets to the full new extent.
    ///
    /// # Errors
    ///
    /// - `EditorError::InvalidDimension` if either side is zero
    /// - `EditorError::NoImageLoaded` before the first load
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), EditorError> {
        if width == 0 || height == 0 {
            warn!(width, height, "resize rejected");
            return Err(EditorError::InvalidDimension(format!("{width}x{height}")));
        }
        let buffer = self.buffer.as_ref().ok_or(EditorError::NoImageLoaded)?;
        let resized = decode::resize(buffer, width, height, self.config.resize_filter)?;
        self.replace_buffer(resized, CropReset::Full);
        Ok(())
    }

    /// Resize from the raw text of the width and height inputs.
    ///
    /// # Errors
    ///
    /// Same as [`parse_dimension`] and [`resize`](Self::resize).
    pub fn resize_from_input(&mut self, width: &str, height: &str) -> Result<(), EditorError> {
        let width = parse_dimension(width)?;
        let height = parse_dimension(height)?;
        self.resize(width, height)
    }

    /// Replace the buffer with the pixels under `rect` (buffer space).
    ///
    /// The rectangle is rounded to whole pixels and clamped to the buffer,
    /// with a minimum of 1x1. The crop box resets to the full new extent.
    ///
    /// # Errors
    ///
    /// - `EditorError::NoImageLoaded` before the first load
    /// - `EditorError::EmptyRegion` if `rect` has no area
    pub fn apply_crop(&mut self, rect: Rect) -> Result<(), EditorError> {
        let buffer = self.buffer.as_ref().ok_or(EditorError::NoImageLoaded)?;
        if !(rect.width > 0.0 && rect.height > 0.0) {
            return Err(EditorError::EmptyRegion);
        }

        let region = rect.to_pixels(buffer.width, buffer.height);
        debug!(?region, "applying crop");
        let cropped = crop_pixels(buffer, region);
        self.replace_buffer(cropped, CropReset::Full);
        Ok(())
    }

    /// Crop to the live crop rectangle.
    ///
    /// # Errors
    ///
    /// Same as [`apply_crop`](Self::apply_crop).
    pub fn apply_current_crop(&mut self) -> Result<(), EditorError> {
        self.apply_crop(self.crop)
    }

    /// Rebuild the buffer from the pristine original.
    ///
    /// Returns `Ok(false)` without touching anything if no image was ever
    /// loaded.
    ///
    /// # Errors
    ///
    /// Returns `EditorError::Decode` if the original cannot be resampled.
    pub fn reset(&mut self) -> Result<bool, EditorError> {
        let Some(original) = self.original.as_ref() else {
            debug!("reset ignored: no image loaded");
            return Ok(false);
        };
        let fitted = self.fit(original)?;
        self.replace_buffer(fitted, CropReset::Initial);
        Ok(true)
    }

    /// Drop the buffer and the original, returning to the pre-load state.
    pub fn remove(&mut self) {
        self.drag.end();
        self.original = None;
        self.buffer = None;
        self.crop = Rect::default();
        info!("image removed");
    }

    /// Encode the buffer in the configured export format.
    ///
    /// # Errors
    ///
    /// - `EditorError::NoImageLoaded` before the first load
    /// - `EditorError::Encode` if encoding fails
    pub fn export(&self) -> Result<Vec<u8>, EditorError> {
        self.export_as(self.config.export_format)
    }

    /// Encode the buffer in `format`.
    ///
    /// # Errors
    ///
    /// Same as [`export`](Self::export).
    pub fn export_as(&self, format: ExportFormat) -> Result<Vec<u8>, EditorError> {
        let buffer = self.buffer.as_ref().ok_or(EditorError::NoImageLoaded)?;
        let bytes = encode::encode(buffer, format)?;
        info!(?format, bytes = bytes.len(), "exported");
        Ok(bytes)
    }

    fn fit(&self, image: &RasterImage) -> Result<RasterImage, EditorError> {
        Ok(decode::resize_to_fit(
            image,
            self.config.max_width,
            self.config.max_height,
            self.config.resize_filter,
        )?)
    }

    fn replace_buffer(&mut self, buffer: RasterImage, reset: CropReset) {
        // A drag snapshot refers to the old dimensions
        if self.drag.end().is_some() {
            debug!("drag ended by buffer replacement");
        }

        let bounds = Bounds::from_pixels(buffer.width, buffer.height);
        self.crop = match reset {
            CropReset::Initial => Rect::default_crop(bounds, self.config.initial_crop_fraction)
                .clamp_to(bounds, self.engine.min_size()),
            CropReset::Full => Rect::full(bounds),
        };
        info!(
            width = buffer.width,
            height = buffer.height,
            ?reset,
            "buffer replaced"
        );
        self.buffer = Some(buffer);
    }

    // ------------------------------------------------------------------
    // Layout and pointer input
    // ------------------------------------------------------------------

    /// Record the on-screen size of the buffer's presentation.
    ///
    /// Until this is called display space is assumed to equal buffer space.
    pub fn set_display_size(&mut self, width: f64, height: f64) {
        self.display = Some(Bounds::new(width, height));
    }

    /// Display/buffer ratio for the current buffer and layout.
    ///
    /// # Errors
    ///
    /// - `EditorError::NoImageLoaded` before the first load
    /// - `EditorError::Mapping` if the measured layout has no area
    pub fn scale(&self) -> Result<Scale, EditorError> {
        let buffer = self.buffer_bounds().ok_or(EditorError::NoImageLoaded)?;
        match self.display {
            Some(display) => Ok(Scale::from_layout(buffer, display)?),
            None => Ok(Scale::IDENTITY),
        }
    }

    /// Crop rectangle projected into display space for the overlay.
    ///
    /// # Errors
    ///
    /// Same as [`scale`](Self::scale).
    pub fn display_crop_rect(&self) -> Result<Rect, EditorError> {
        Ok(to_display(self.crop, self.scale()?))
    }

    /// Start a drag on `handle` with the pointer at `pointer` (display space).
    ///
    /// Returns `false` if the drag was not started: no image is loaded, the
    /// layout is degenerate, or another drag is still active.
    pub fn pointer_down(&mut self, handle: HandleId, pointer: Point) -> bool {
        let scale = match self.scale() {
            Ok(scale) => scale,
            Err(e) => {
                warn!(error = %e, %handle, "pointer down ignored");
                return false;
            }
        };
        self.drag
            .begin(DragSession::new(handle, pointer, self.crop, scale))
    }

    /// Feed a pointer move. Returns the new crop rectangle, or `None` if no
    /// drag is active.
    pub fn pointer_move(&mut self, pointer: Point) -> Option<Rect> {
        let session = *self.drag.session()?;
        let bounds = self.buffer_bounds()?;
        self.crop = self.engine.next_rect(&session, pointer, bounds);
        Some(self.crop)
    }

    /// End the active drag. Returns the final crop rectangle, or `None` if
    /// no drag was active.
    pub fn pointer_up(&mut self) -> Option<Rect> {
        self.drag.end().map(|_| self.crop)
    }
}

/// Parse a resize input the way the page's number field is read.
///
/// Leading whitespace and a leading `+` are skipped, then the leading run
/// of digits is taken and anything after it ignored (`"640px"` is 640).
///
/// # Errors
///
/// Returns `EditorError::InvalidDimension` if there are no leading digits,
/// the value is zero or negative, or it does not fit in a `u32`.
pub fn parse_dimension(input: &str) -> Result<u32, EditorError> {
    let invalid = || EditorError::InvalidDimension(input.to_string());

    let trimmed = input.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..end];

    match digits.parse::<u32>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Gradient image so crops and resizes can be checked pixel by pixel.
    fn test_image(width: u32, height: u32) -> RasterImage {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.extend_from_slice(&[(x % 256) as u8, (y % 256) as u8, 64, 255]);
            }
        }
        RasterImage::new(width, height, pixels)
    }

    fn loaded(width: u32, height: u32) -> EditorSurface {
        let mut editor = EditorSurface::default();
        editor.load(test_image(width, height)).unwrap();
        editor
    }

    fn drag(editor: &mut EditorSurface, handle: HandleId, from: Point, to: Point) -> Rect {
        assert!(editor.pointer_down(handle, from));
        editor.pointer_move(to).unwrap();
        editor.pointer_up().unwrap()
    }

    #[test]
    fn test_new_editor_is_empty() {
        let editor = EditorSurface::default();
        assert!(!editor.has_image());
        assert!(editor.buffer().is_none());
        assert_eq!(editor.crop_rect(), Rect::default());
        assert!(!editor.is_dragging());
    }

    #[test]
    fn test_load_fits_envelope_and_sets_initial_crop() {
        let editor = loaded(1600, 1200);
        let buffer = editor.buffer().unwrap();
        assert_eq!((buffer.width, buffer.height), (800, 600));
        assert_eq!(editor.crop_rect(), Rect::new(80.0, 60.0, 640.0, 480.0));
        assert_eq!(editor.original().map(|o| o.width), Some(1600));
    }

    #[test]
    fn test_load_small_image_keeps_size() {
        let editor = loaded(200, 100);
        assert_eq!(editor.buffer_bounds(), Some(Bounds::new(200.0, 100.0)));
        assert_eq!(editor.crop_rect(), Rect::new(20.0, 10.0, 160.0, 80.0));
    }

    #[test]
    fn test_load_empty_image_fails_and_keeps_state() {
        let mut editor = loaded(100, 100);
        let before = editor.crop_rect();
        let result = editor.load(RasterImage::new(0, 0, vec![]));
        assert!(matches!(result, Err(EditorError::Decode(_))));
        assert_eq!(editor.buffer_bounds(), Some(Bounds::new(100.0, 100.0)));
        assert_eq!(editor.crop_rect(), before);
    }

    #[test]
    fn test_load_mismatched_pixels_fails_and_keeps_state() {
        let mut editor = loaded(200, 100);
        let before = editor.crop_rect();
        let corrupt = RasterImage {
            width: 100,
            height: 100,
            pixels: vec![0; 12],
        };

        let result = editor.load(corrupt);
        assert!(matches!(
            result,
            Err(EditorError::Decode(decode::DecodeError::CorruptedFile(_)))
        ));
        assert_eq!(editor.buffer_bounds(), Some(Bounds::new(200.0, 100.0)));
        assert_eq!(editor.original().map(|o| o.width), Some(200));
        assert_eq!(editor.crop_rect(), before);
    }

    #[test]
    fn test_load_mismatched_pixels_into_empty_editor() {
        let mut editor = EditorSurface::default();
        let corrupt = RasterImage {
            width: 100,
            height: 100,
            pixels: vec![0; 12],
        };
        assert!(editor.load(corrupt).is_err());
        assert!(!editor.has_image());
        assert!(editor.export().is_err());
    }

    #[test]
    fn test_initial_crop_respects_min_size_on_tiny_buffer() {
        let editor = loaded(20, 20);
        assert_eq!(editor.crop_rect(), Rect::new(0.0, 0.0, 20.0, 20.0));

        let editor = loaded(24, 50);
        let crop = editor.crop_rect();
        assert_eq!(crop.width, 20.0);
        assert_eq!(crop.height, 40.0);
        assert!(crop.fits_within(Bounds::new(24.0, 50.0)));
    }

    #[test]
    fn test_load_bytes_rejects_garbage() {
        let mut editor = EditorSurface::default();
        assert!(matches!(
            editor.load_bytes(b"not an image"),
            Err(EditorError::Decode(_))
        ));
        assert!(!editor.has_image());
    }

    #[test]
    fn test_load_bytes_png() {
        let mut editor = EditorSurface::default();
        let png = encode::encode_png(&test_image(30, 20)).unwrap();
        editor.load_bytes(&png).unwrap();
        assert_eq!(editor.buffer(), Some(&test_image(30, 20)));
    }

    #[test]
    fn test_nw_drag_scenario() {
        let mut editor = loaded(800, 600);
        let rect = drag(
            &mut editor,
            HandleId::Nw,
            Point::new(80.0, 60.0),
            Point::new(130.0, 90.0),
        );
        assert_eq!(rect, Rect::new(130.0, 90.0, 590.0, 450.0));
        assert_eq!(editor.crop_rect(), rect);
        assert!(!editor.is_dragging());
    }

    #[test]
    fn test_move_drag_clamps_to_bounds() {
        let mut editor = loaded(800, 600);
        let rect = drag(
            &mut editor,
            HandleId::Move,
            Point::new(400.0, 300.0),
            Point::new(1400.0, 300.0),
        );
        assert_eq!(rect.x, 160.0);
        assert_eq!(rect.width, 640.0);
    }

    #[test]
    fn test_moves_are_relative_to_drag_start() {
        let mut editor = loaded(800, 600);
        assert!(editor.pointer_down(HandleId::Se, Point::new(720.0, 540.0)));
        editor.pointer_move(Point::new(700.0, 500.0));
        editor.pointer_move(Point::new(650.0, 450.0));
        let rect = editor.pointer_move(Point::new(700.0, 500.0)).unwrap();
        assert_eq!(rect, Rect::new(80.0, 60.0, 620.0, 440.0));
    }

    #[test]
    fn test_drag_uses_display_scale() {
        let mut editor = loaded(800, 600);
        editor.set_display_size(400.0, 300.0);

        let display = editor.display_crop_rect().unwrap();
        assert_eq!(display, Rect::new(40.0, 30.0, 320.0, 240.0));

        // 25 display pixels are 50 buffer pixels
        let rect = drag(
            &mut editor,
            HandleId::Nw,
            Point::new(40.0, 30.0),
            Point::new(65.0, 45.0),
        );
        assert_eq!(rect, Rect::new(130.0, 90.0, 590.0, 450.0));
        assert_eq!(
            editor.display_crop_rect().unwrap(),
            Rect::new(65.0, 45.0, 295.0, 225.0)
        );
    }

    #[test]
    fn test_scale_is_captured_at_pointer_down() {
        let mut editor = loaded(800, 600);
        editor.set_display_size(400.0, 300.0);
        assert!(editor.pointer_down(HandleId::Move, Point::new(0.0, 0.0)));

        // Layout reflows mid-drag; the session keeps its original scale
        editor.set_display_size(800.0, 600.0);
        let rect = editor.pointer_move(Point::new(10.0, 0.0)).unwrap();
        assert_eq!(rect.x, 100.0);
    }

    #[test]
    fn test_second_pointer_down_is_ignored() {
        let mut editor = loaded(800, 600);
        assert!(editor.pointer_down(HandleId::Se, Point::new(0.0, 0.0)));
        assert!(!editor.pointer_down(HandleId::Move, Point::new(5.0, 5.0)));

        // Still resizing from the SE corner
        let rect = editor.pointer_move(Point::new(-40.0, 0.0)).unwrap();
        assert_eq!(rect, Rect::new(80.0, 60.0, 600.0, 480.0));
    }

    #[test]
    fn test_pointer_events_without_session_are_ignored() {
        let mut editor = loaded(800, 600);
        let before = editor.crop_rect();
        assert!(editor.pointer_move(Point::new(10.0, 10.0)).is_none());
        assert!(editor.pointer_up().is_none());
        assert_eq!(editor.crop_rect(), before);
    }

    #[test]
    fn test_pointer_down_without_image_is_ignored() {
        let mut editor = EditorSurface::default();
        assert!(!editor.pointer_down(HandleId::Nw, Point::new(0.0, 0.0)));
        assert!(!editor.is_dragging());
    }

    #[test]
    fn test_degenerate_layout_blocks_drag() {
        let mut editor = loaded(800, 600);
        editor.set_display_size(0.0, 0.0);
        assert!(!editor.pointer_down(HandleId::Move, Point::new(0.0, 0.0)));
        assert!(matches!(
            editor.display_crop_rect(),
            Err(EditorError::Mapping(_))
        ));
    }

    #[test]
    fn test_resize_resets_crop_to_full_extent() {
        let mut editor = loaded(800, 600);
        editor.resize(400, 300).unwrap();
        assert_eq!(editor.buffer_bounds(), Some(Bounds::new(400.0, 300.0)));
        assert_eq!(editor.crop_rect(), Rect::new(0.0, 0.0, 400.0, 300.0));
    }

    #[test]
    fn test_resize_invalid_dimension_keeps_state() {
        let mut editor = loaded(800, 600);
        let before = editor.crop_rect();
        assert!(matches!(
            editor.resize(0, 300),
            Err(EditorError::InvalidDimension(_))
        ));
        assert!(matches!(
            editor.resize_from_input("abc", "300"),
            Err(EditorError::InvalidDimension(_))
        ));
        assert_eq!(editor.buffer_bounds(), Some(Bounds::new(800.0, 600.0)));
        assert_eq!(editor.crop_rect(), before);
    }

    #[test]
    fn test_resize_from_input() {
        let mut editor = loaded(800, 600);
        editor.resize_from_input(" 320", "240px").unwrap();
        assert_eq!(editor.buffer_bounds(), Some(Bounds::new(320.0, 240.0)));
    }

    #[test]
    fn test_operations_before_load() {
        let mut editor = EditorSurface::default();
        assert!(matches!(
            editor.resize(10, 10),
            Err(EditorError::NoImageLoaded)
        ));
        assert!(matches!(
            editor.apply_current_crop(),
            Err(EditorError::NoImageLoaded)
        ));
        assert!(matches!(editor.export(), Err(EditorError::NoImageLoaded)));
        assert!(matches!(editor.scale(), Err(EditorError::NoImageLoaded)));
        assert!(!editor.reset().unwrap());
        assert_eq!(editor.crop_rect(), Rect::default());
    }

    #[test]
    fn test_apply_crop_extracts_region() {
        let mut editor = loaded(200, 100);
        editor.apply_crop(Rect::new(10.0, 20.0, 50.0, 30.0)).unwrap();

        let buffer = editor.buffer().unwrap();
        assert_eq!((buffer.width, buffer.height), (50, 30));
        assert_eq!(buffer.pixel(0, 0), Some([10, 20, 64, 255]));
        assert_eq!(buffer.pixel(49, 29), Some([59, 49, 64, 255]));
        assert_eq!(editor.crop_rect(), Rect::new(0.0, 0.0, 50.0, 30.0));
    }

    #[test]
    fn test_apply_current_crop_uses_live_rect() {
        let mut editor = loaded(800, 600);
        editor.apply_current_crop().unwrap();
        assert_eq!(editor.buffer_bounds(), Some(Bounds::new(640.0, 480.0)));
        assert_eq!(editor.crop_rect(), Rect::new(0.0, 0.0, 640.0, 480.0));
    }

    #[test]
    fn test_apply_crop_empty_region() {
        let mut editor = loaded(100, 100);
        assert!(matches!(
            editor.apply_crop(Rect::new(10.0, 10.0, 0.0, 5.0)),
            Err(EditorError::EmptyRegion)
        ));
        assert!(matches!(
            editor.apply_crop(Rect::new(10.0, 10.0, f64::NAN, 5.0)),
            Err(EditorError::EmptyRegion)
        ));
        assert_eq!(editor.buffer_bounds(), Some(Bounds::new(100.0, 100.0)));
    }

    #[test]
    fn test_crop_then_reset_restores_fitted_original() {
        let mut editor = loaded(1600, 1200);
        let fitted = editor.buffer().cloned().unwrap();

        editor.apply_current_crop().unwrap();
        editor.resize(100, 100).unwrap();
        assert!(editor.reset().unwrap());

        assert_eq!(editor.buffer(), Some(&fitted));
        assert_eq!(editor.crop_rect(), Rect::new(80.0, 60.0, 640.0, 480.0));
    }

    #[test]
    fn test_buffer_replacement_ends_drag() {
        let mut editor = loaded(800, 600);
        assert!(editor.pointer_down(HandleId::Move, Point::new(0.0, 0.0)));
        editor.resize(400, 300).unwrap();
        assert!(!editor.is_dragging());
        assert!(editor.pointer_move(Point::new(50.0, 50.0)).is_none());
    }

    #[test]
    fn test_remove_returns_to_pre_load_state() {
        let mut editor = loaded(800, 600);
        assert!(editor.pointer_down(HandleId::Nw, Point::new(0.0, 0.0)));
        editor.remove();

        assert!(!editor.has_image());
        assert!(editor.original().is_none());
        assert!(!editor.is_dragging());
        assert_eq!(editor.crop_rect(), Rect::default());
        assert!(!editor.reset().unwrap());
    }

    #[test]
    fn test_export_png_round_trips() {
        let mut editor = loaded(120, 80);
        editor.apply_crop(Rect::new(0.0, 0.0, 60.0, 40.0)).unwrap();

        let bytes = editor.export().unwrap();
        let decoded = decode::decode_image(&bytes).unwrap();
        assert_eq!(Some(&decoded), editor.buffer());
    }

    #[test]
    fn test_export_as_jpeg() {
        let editor = loaded(64, 64);
        let bytes = editor.export_as(ExportFormat::Jpeg { quality: 85 }).unwrap();
        assert_eq!(&bytes[0..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_custom_config() {
        let config = EditorConfig {
            max_width: 100,
            max_height: 100,
            min_crop_size: 5.0,
            initial_crop_fraction: 0.5,
            ..EditorConfig::default()
        };
        let mut editor = EditorSurface::new(config);
        editor.load(test_image(400, 200)).unwrap();
        assert_eq!(editor.buffer_bounds(), Some(Bounds::new(100.0, 50.0)));
        assert_eq!(editor.crop_rect(), Rect::new(25.0, 12.5, 50.0, 25.0));

        let rect = drag(
            &mut editor,
            HandleId::Se,
            Point::new(0.0, 0.0),
            Point::new(-500.0, -500.0),
        );
        assert_eq!(rect.width, 5.0);
        assert_eq!(rect.height, 5.0);
    }

    #[test]
    fn test_parse_dimension() {
        assert_eq!(parse_dimension("640").unwrap(), 640);
        assert_eq!(parse_dimension("  480").unwrap(), 480);
        assert_eq!(parse_dimension("+12").unwrap(), 12);
        assert_eq!(parse_dimension("800px").unwrap(), 800);
        assert_eq!(parse_dimension("12.9").unwrap(), 12);

        for bad in ["", "abc", "0", "-5", "px100", "99999999999"] {
            assert!(
                matches!(parse_dimension(bad), Err(EditorError::InvalidDimension(_))),
                "{bad:?} should be rejected"
            );
        }
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
