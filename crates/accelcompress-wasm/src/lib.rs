//! AccelCompress WASM - WebAssembly bindings for AccelCompress
//!
//! This crate exposes the accelcompress-core JPEG transcoder to
//! JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `transcode` - Transcode bindings (`transcode`, `transcode_with_report`)
//! - `types` - WASM-compatible wrapper for transcode results
//!
//! # Usage
//!
//! ```typescript
//! import init, { transcode } from '@accelcompress/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const optimized = transcode(bytes, 80);
//! console.log(`${bytes.byteLength} -> ${optimized.byteLength} bytes`);
//! ```

use wasm_bindgen::prelude::*;

mod transcode;
mod types;

// Re-export public types
pub use transcode::{normalize_quality, optimize_jpeg, transcode, transcode_with_report};
pub use types::JsTranscodeResult;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Default quality applied when a request is out of range
#[wasm_bindgen]
pub fn default_quality() -> u8 {
    accelcompress_core::DEFAULT_QUALITY
}
