//! Cropdesk WASM - WebAssembly bindings for Cropdesk
//!
//! This crate exposes the cropdesk-core editor to the page that hosts the
//! upload form, canvas and crop box overlay.
//!
//! # Module Structure
//!
//! - `editor` - `JsCropEditor`, the stateful editor handle
//! - `types` - WASM-compatible wrapper types for handles and rectangles
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsCropEditor } from '@cropdesk/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const editor = new JsCropEditor();
//! editor.load_image(new Uint8Array(await file.arrayBuffer()));
//! console.log(`Loaded ${editor.width}x${editor.height}`);
//! ```

use wasm_bindgen::prelude::*;

mod editor;
mod types;

// Re-export public types
pub use editor::JsCropEditor;
pub use types::{JsCropRect, JsHandle};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::log_1(&JsValue::from_str(&banner()));
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn banner() -> String {
    format!("Cropdesk WASM {} ready", version())
}
