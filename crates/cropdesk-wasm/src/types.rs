//! WASM-compatible wrapper types for crop geometry.
//!
//! This module provides JavaScript-friendly types that wrap the core
//! Cropdesk types, handling the conversion between Rust and JavaScript data
//! representations.

use cropdesk_core::{HandleId, Rect};
use wasm_bindgen::prelude::*;

/// Which part of the crop box the pointer went down on.
///
/// The page's hit test maps its handle elements to one of these values, so
/// no class-name lookup happens on the Rust side.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsHandle {
    Nw = 0,
    Ne = 1,
    Sw = 2,
    Se = 3,
    Move = 4,
}

impl From<JsHandle> for HandleId {
    fn from(handle: JsHandle) -> Self {
        match handle {
            JsHandle::Nw => HandleId::Nw,
            JsHandle::Ne => HandleId::Ne,
            JsHandle::Sw => HandleId::Sw,
            JsHandle::Se => HandleId::Se,
            JsHandle::Move => HandleId::Move,
        }
    }
}

/// A crop rectangle for JavaScript.
///
/// Whether it is in buffer or display space depends on the method that
/// returned it; `crop_box` and the pointer methods return display space,
/// ready to be written to the overlay's `left/top/width/height` styles.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsCropRect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

#[wasm_bindgen]
impl JsCropRect {
    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f64 {
        self.height
    }
}

impl From<Rect> for JsCropRect {
    fn from(rect: Rect) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        }
    }
}

/// Convert any core error into a JavaScript `Error` object.
pub(crate) fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}
