//! JPEG encoding into an in-memory sink.
//!
//! The `image` crate's baseline encoder is used with its default settings;
//! only the quality is overridden.

use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use thiserror::Error;
use tracing::debug;

use crate::decode::{DecodedImage, ImageDescriptor};
use crate::quality::Quality;

const JPEG_SOI: [u8; 2] = [0xFF, 0xD8];
const JPEG_EOI: [u8; 2] = [0xFF, 0xD9];

/// Errors that can occur during JPEG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// JPEG encoding failed
    #[error("JPEG encoding failed: {0}")]
    EncodingFailed(String),

    /// The encoder finished but the sink does not hold a complete JPEG
    #[error("Encoder produced an incomplete JPEG stream ({len} bytes)")]
    IncompleteOutput { len: usize },
}

/// Encode RGB pixel data to JPEG bytes.
///
/// # Arguments
///
/// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `quality` - Validated JPEG quality
///
/// # Returns
///
/// A complete JPEG stream on success. Nothing is returned on failure; the
/// partially written sink is dropped.
pub fn encode_jpeg(
    pixels: &[u8],
    width: u32,
    height: u32,
    quality: Quality,
) -> Result<Vec<u8>, EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected_len = ImageDescriptor::rgb(width, height)
        .buffer_len()
        .ok_or(EncodeError::InvalidDimensions { width, height })?;
    if pixels.len() != expected_len {
        return Err(EncodeError::InvalidPixelData {
            expected: expected_len,
            actual: pixels.len(),
        });
    }

    debug!(width, height, quality = quality.get(), "encoding JPEG");

    // Output size is unknown up front, so the sink grows as the encoder writes
    let mut sink = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut sink, quality.get());
    encoder
        .write_image(pixels, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    if !is_complete_jpeg(&sink) {
        return Err(EncodeError::IncompleteOutput { len: sink.len() });
    }
    Ok(sink)
}

/// Encode a decoded image, using its own geometry.
pub fn encode_image(image: &DecodedImage, quality: Quality) -> Result<Vec<u8>, EncodeError> {
    encode_jpeg(&image.pixels, image.width, image.height, quality)
}

fn is_complete_jpeg(bytes: &[u8]) -> bool {
    bytes.len() >= 4 && bytes.starts_with(&JPEG_SOI) && bytes.ends_with(&JPEG_EOI)
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::decode::decode_jpeg;
    use crate::quality::DEFAULT_QUALITY;
    use proptest::prelude::*;

    fn textured_pixels(width: u32, height: u32, seed: u8) -> Vec<u8> {
        let size = (width as usize) * (height as usize) * 3;
        (0..size)
            .map(|i| ((i * 37) as u8).wrapping_add(seed))
            .collect()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// Property: whatever integer is requested, the normalized quality
        /// encodes to a complete SOI..EOI stream.
        #[test]
        fn prop_any_requested_quality_yields_complete_stream(
            (width, height) in (1u32..=32, 1u32..=32),
            requested in any::<i32>(),
        ) {
            let pixels = textured_pixels(width, height, 0);
            let jpeg = encode_jpeg(&pixels, width, height, Quality::new(requested)).unwrap();
            prop_assert!(is_complete_jpeg(&jpeg));
        }

        /// Property: an out-of-range request encodes exactly like the default.
        #[test]
        fn prop_out_of_range_quality_encodes_as_default(
            requested in prop_oneof![i32::MIN..=0, 101i32..=i32::MAX],
            seed in any::<u8>(),
        ) {
            let pixels = textured_pixels(12, 9, seed);
            let normalized = encode_jpeg(&pixels, 12, 9, Quality::new(requested)).unwrap();
            let default = encode_jpeg(&pixels, 12, 9, Quality::default()).unwrap();
            prop_assert_eq!(Quality::new(requested).get(), DEFAULT_QUALITY);
            prop_assert_eq!(normalized, default);
        }

        /// Property: the encoded stream decodes back to the geometry it was
        /// configured with.
        #[test]
        fn prop_encoded_geometry_decodes_back(
            (width, height) in (1u32..=48, 1u32..=48),
            quality in 1i32..=100,
        ) {
            let pixels = textured_pixels(width, height, 3);
            let jpeg = encode_jpeg(&pixels, width, height, Quality::new(quality)).unwrap();

            let decoded = decode_jpeg(&jpeg).unwrap();
            prop_assert_eq!((decoded.width, decoded.height), (width, height));
            prop_assert_eq!(decoded.pixels.len(), pixels.len());
        }
    }
}
