//! Cosgrad WASM - WebAssembly bindings for the cosgrad visualizer
//!
//! This crate exposes the cosgrad-core palette math to the browser UI.
//! The JavaScript layer owns the canvases and input elements; it calls in
//! here for gradient stops, graph polylines, stroke colors, and drag
//! updates, then performs the actual drawing.
//!
//! # Module Structure
//!
//! - `palette` - Parameter set state container and color projection
//! - `render` - Per-column sampling queries for gradients and graphs
//! - `drag` - Drag-to-adjust gesture controller
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsParamSet, gradient_stops } from '@cosgrad/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const params = new JsParamSet();
//! const stops = gradient_stops(params, 0, canvas.width, 1.0);
//! for (const { position, color } of stops) {
//!   gradient.addColorStop(position, color);
//! }
//! ```

use wasm_bindgen::prelude::*;

mod drag;
mod palette;
mod render;

// Re-export public types
pub use drag::JsDragController;
pub use palette::JsParamSet;
pub use render::{gradient_stops, graph_polyline, graph_strokes};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
    web_sys::console::log_1(&format!("cosgrad-wasm {} loaded", version()).into());
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
