//! Transcode WASM bindings.
//!
//! This module exposes the accelcompress-core transcode operation to
//! JavaScript. Byte arrays cross the boundary as `Uint8Array`; failures are
//! thrown as strings carrying the codec diagnostic.
//!
//! # Functions
//!
//! - [`transcode`] - Re-encode JPEG bytes at a quality
//! - [`optimize_jpeg`] - Alias of `transcode` under the service's historical name
//! - [`transcode_with_report`] - Re-encode and return a size report
//! - [`normalize_quality`] - Preview the quality a request resolves to
//!
//! # Example
//!
//! ```typescript
//! import { transcode_with_report } from '@accelcompress/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const result = transcode_with_report(bytes, 80);
//! console.log(`saved ${result.compression_ratio_label}`);
//! const blob = new Blob([result.bytes()], { type: 'image/jpeg' });
//! ```

use crate::types::JsTranscodeResult;
use accelcompress_core::{Quality, TranscodeError, TranscodeOptions};
use wasm_bindgen::prelude::*;

fn to_js_error(err: TranscodeError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Decode JPEG bytes and re-encode them at `quality`.
///
/// Quality outside 1-100 silently falls back to 80.
///
/// # Errors
///
/// Throws if the input is not a decodable JPEG or re-encoding fails.
#[wasm_bindgen]
pub fn transcode(bytes: &[u8], quality: i32) -> Result<Vec<u8>, JsValue> {
    accelcompress_core::transcode(bytes, quality).map_err(to_js_error)
}

/// Same as [`transcode`].
#[wasm_bindgen]
pub fn optimize_jpeg(bytes: &[u8], quality: i32) -> Result<Vec<u8>, JsValue> {
    transcode(bytes, quality)
}

/// Decode and re-encode, returning the bytes with original/optimized sizes
/// and the compression ratio.
#[wasm_bindgen]
pub fn transcode_with_report(bytes: &[u8], quality: i32) -> Result<JsTranscodeResult, JsValue> {
    let options = TranscodeOptions::new().with_quality(quality);
    accelcompress_core::transcode_with_options(bytes, &options)
        .map(JsTranscodeResult::from_output)
        .map_err(to_js_error)
}

/// Return the quality a request would actually be encoded at.
#[wasm_bindgen]
pub fn normalize_quality(quality: i32) -> u8 {
    Quality::new(quality).get()
}


/// WASM-specific tests that require JsValue.
///
/// Run these with `wasm-pack test`.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use accelcompress_core::encode::encode_jpeg;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn source() -> Vec<u8> {
        encode_jpeg(&vec![90u8; 32 * 32 * 3], 32, 32, Quality::new(95)).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_transcode_basic() {
        let jpeg = transcode(&source(), 60).unwrap();
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
    }

    #[wasm_bindgen_test]
    fn test_transcode_invalid_input() {
        assert!(transcode(b"not a jpeg", 80).is_err());
    }

    #[wasm_bindgen_test]
    fn test_optimize_jpeg_matches_transcode() {
        let src = source();
        assert_eq!(optimize_jpeg(&src, 40).unwrap(), transcode(&src, 40).unwrap());
    }

    #[wasm_bindgen_test]
    fn test_transcode_with_report() {
        let src = source();
        let result = transcode_with_report(&src, 200).unwrap();
        assert_eq!(result.original_size(), src.len());
        assert_eq!(result.quality(), 80);
        assert!(result.report().is_ok());
    }
}
