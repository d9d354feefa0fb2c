//! Editor WASM bindings.
//!
//! `JsCropEditor` is the page controller's handle on an `EditorSurface`.
//! The page keeps the DOM side: it forwards file uploads, pointer events
//! from the crop box, the canvas' measured size and button clicks, and
//! draws whatever the editor hands back.
//!
//! # Example
//!
//! ```typescript
//! import { JsCropEditor, JsHandle } from '@cropdesk/wasm';
//!
//! const editor = new JsCropEditor();
//! editor.load_image(new Uint8Array(await file.arrayBuffer()));
//! canvas.width = editor.width;
//! canvas.height = editor.height;
//! ctx.putImageData(new ImageData(new Uint8ClampedArray(editor.pixels()), editor.width), 0, 0);
//!
//! const box = canvas.getBoundingClientRect();
//! editor.set_display_size(box.width, box.height);
//!
//! handle.addEventListener('mousedown', (e) => editor.pointer_down(JsHandle.Se, e.clientX, e.clientY));
//! document.addEventListener('mousemove', (e) => {
//!   const rect = editor.pointer_move(e.clientX, e.clientY);
//!   if (rect) drawCropBox(rect);
//! });
//! document.addEventListener('mouseup', () => editor.pointer_up());
//! ```

use cropdesk_core::{EditorConfig, EditorSurface, ExportFormat, Point, RasterImage};
use wasm_bindgen::prelude::*;

use crate::types::{to_js_error, JsCropRect, JsHandle};

/// The image editor for one page.
#[wasm_bindgen]
pub struct JsCropEditor {
    inner: EditorSurface,
}

impl Default for JsCropEditor {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl JsCropEditor {
    /// Create an editor with the default 800x600 envelope and 20px minimum crop.
    #[wasm_bindgen(constructor)]
    pub fn new() -> JsCropEditor {
        JsCropEditor {
            inner: EditorSurface::default(),
        }
    }

    /// Create an editor from a partial config object, e.g.
    /// `{ maxWidth: 1024, minCropSize: 32 }`.
    ///
    /// # Errors
    /// Returns error if the object cannot be deserialized
    pub fn with_config(config: JsValue) -> Result<JsCropEditor, JsValue> {
        let config: EditorConfig = serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("Invalid editor config: {}", e)))?;
        Ok(JsCropEditor {
            inner: EditorSurface::new(config),
        })
    }

    /// Decode an uploaded PNG or JPEG and load it.
    pub fn load_image(&mut self, bytes: &[u8]) -> Result<(), JsValue> {
        self.inner.load_bytes(bytes).map_err(to_js_error)
    }

    /// Load RGBA pixels the page already decoded (e.g. from `ImageData`).
    pub fn load_pixels(&mut self, width: u32, height: u32, pixels: Vec<u8>) -> Result<(), JsValue> {
        if RasterImage::expected_len(width, height) != Some(pixels.len()) {
            return Err(to_js_error(format!(
                "Pixel data length {} does not match {}x{} RGBA",
                pixels.len(),
                width,
                height
            )));
        }
        self.inner
            .load(RasterImage::new(width, height, pixels))
            .map_err(to_js_error)
    }

    #[wasm_bindgen(getter)]
    pub fn has_image(&self) -> bool {
        self.inner.has_image()
    }

    /// Buffer width in pixels (0 before load).
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.buffer().map_or(0, |b| b.width)
    }

    /// Buffer height in pixels (0 before load).
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.buffer().map_or(0, |b| b.height)
    }

    /// Returns the buffer's RGBA pixels as a Uint8Array copy.
    pub fn pixels(&self) -> Vec<u8> {
        self.inner
            .buffer()
            .map(|b| b.pixels.clone())
            .unwrap_or_default()
    }

    /// Report the canvas' on-screen size (`getBoundingClientRect`).
    pub fn set_display_size(&mut self, width: f64, height: f64) {
        self.inner.set_display_size(width, height);
    }

    /// Crop box in display space, or `undefined` before load or while the
    /// canvas has no on-screen size.
    pub fn crop_box(&self) -> Option<JsCropRect> {
        self.inner.display_crop_rect().ok().map(JsCropRect::from)
    }

    /// Crop rectangle in buffer pixels.
    pub fn crop_rect(&self) -> JsCropRect {
        self.inner.crop_rect().into()
    }

    /// Start a drag. Returns false if it was ignored.
    pub fn pointer_down(&mut self, handle: JsHandle, x: f64, y: f64) -> bool {
        self.inner.pointer_down(handle.into(), Point::new(x, y))
    }

    /// Continue a drag. Returns the crop box to draw (display space), or
    /// `undefined` if no drag is active.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Option<JsCropRect> {
        self.inner.pointer_move(Point::new(x, y))?;
        self.crop_box()
    }

    /// End the drag. Returns false if none was active.
    pub fn pointer_up(&mut self) -> bool {
        self.inner.pointer_up().is_some()
    }

    #[wasm_bindgen(getter)]
    pub fn is_dragging(&self) -> bool {
        self.inner.is_dragging()
    }

    /// Resize from the raw values of the width and height inputs.
    pub fn resize(&mut self, width: &str, height: &str) -> Result<(), JsValue> {
        self.inner
            .resize_from_input(width, height)
            .map_err(to_js_error)
    }

    /// Crop the buffer to the current crop box.
    pub fn apply_crop(&mut self) -> Result<(), JsValue> {
        self.inner.apply_current_crop().map_err(to_js_error)
    }

    /// Restore the fitted original. Returns false if nothing was loaded.
    pub fn reset(&mut self) -> Result<bool, JsValue> {
        self.inner.reset().map_err(to_js_error)
    }

    /// Drop the image and return to the upload state.
    pub fn remove(&mut self) {
        self.inner.remove();
    }

    /// Encode the buffer in the configured format (PNG by default).
    pub fn export(&self) -> Result<Vec<u8>, JsValue> {
        self.inner.export().map_err(to_js_error)
    }

    /// Encode the buffer as JPEG at `quality` (1-100).
    pub fn export_jpeg(&self, quality: u8) -> Result<Vec<u8>, JsValue> {
        self.inner
            .export_as(ExportFormat::Jpeg { quality })
            .map_err(to_js_error)
    }

    /// Suggested download name for `export()`.
    pub fn export_file_name(&self) -> String {
        self.inner.config().export_format.file_name().to_string()
    }

    /// MIME type for `export()`.
    pub fn export_mime_type(&self) -> String {
        self.inner.config().export_format.mime_type().to_string()
    }
}
