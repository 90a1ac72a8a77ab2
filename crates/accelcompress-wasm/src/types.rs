//! WASM-compatible wrapper types for transcode results.

use accelcompress_core::{TranscodeOutput, TranscodeReport};
use wasm_bindgen::prelude::*;

/// The result of a transcode call, for JavaScript.
///
/// Holds the re-encoded JPEG bytes together with the size report.
///
/// # Memory Management
///
/// The bytes live in WASM memory. Calling `bytes()` copies them into a
/// JavaScript `Uint8Array`.
#[wasm_bindgen]
pub struct JsTranscodeResult {
    bytes: Vec<u8>,
    report: TranscodeReport,
}

#[wasm_bindgen]
impl JsTranscodeResult {
    /// Returns the re-encoded JPEG as a Uint8Array (copy).
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    /// Size of the input in bytes
    #[wasm_bindgen(getter)]
    pub fn original_size(&self) -> usize {
        self.report.original_size
    }

    /// Size of the output in bytes
    #[wasm_bindgen(getter)]
    pub fn optimized_size(&self) -> usize {
        self.report.optimized_size
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.report.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.report.height
    }

    /// Quality actually used, after out-of-range values fell back to 80
    #[wasm_bindgen(getter)]
    pub fn quality(&self) -> u8 {
        self.report.quality
    }

    /// Space saved in percent; negative if the output grew
    #[wasm_bindgen(getter)]
    pub fn compression_ratio(&self) -> f64 {
        self.report.compression_ratio_percent()
    }

    /// Compression ratio formatted like `"42.17%"`
    #[wasm_bindgen(getter)]
    pub fn compression_ratio_label(&self) -> String {
        self.report.ratio_label()
    }

    /// The full report as a plain JavaScript object.
    pub fn report(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.report).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl JsTranscodeResult {
    pub(crate) fn from_output(output: TranscodeOutput) -> Self {
        Self {
            bytes: output.bytes,
            report: output.report,
        }
    }
}
