//! Decode-then-encode orchestration.
//!
//! A transcode call runs quality normalization, the decode stage and the
//! encode stage in order. Every buffer and codec context lives on the
//! calling stack and is released when the call returns, whichever path it
//! takes, so concurrent calls share nothing.

use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span, warn};

use crate::decode::decode_jpeg_with_limits;
use crate::encode::encode_image;
use crate::error::TranscodeError;
use crate::options::TranscodeOptions;
use crate::quality::Quality;

/// Size and geometry summary of a completed transcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscodeReport {
    /// Length of the input in bytes.
    pub original_size: usize,
    /// Length of the output in bytes.
    pub optimized_size: usize,
    /// Image width in pixels (same for input and output).
    pub width: u32,
    /// Image height in pixels (same for input and output).
    pub height: u32,
    /// Quality the output was encoded at, after normalization.
    pub quality: u8,
}

impl TranscodeReport {
    /// Space saved relative to the input, in percent.
    ///
    /// Negative when the output is larger than the input.
    pub fn compression_ratio_percent(&self) -> f64 {
        if self.original_size == 0 {
            return 0.0;
        }
        let original = self.original_size as f64;
        (original - self.optimized_size as f64) / original * 100.0
    }

    /// The compression ratio formatted with two decimals, e.g. `"42.17%"`.
    pub fn ratio_label(&self) -> String {
        format!("{:.2}%", self.compression_ratio_percent())
    }
}

/// Output of [`transcode_with_options`].
#[derive(Debug, Clone)]
pub struct TranscodeOutput {
    /// The re-encoded JPEG stream.
    pub bytes: Vec<u8>,
    /// Summary of the call.
    pub report: TranscodeReport,
}

/// Decode `image_bytes` and re-encode them as a JPEG at `quality`.
///
/// Quality outside 1-100 is replaced with the default (80). The call either
/// returns a complete JPEG stream or fails without output.
///
/// # Errors
///
/// Returns [`TranscodeError::DecodeFailure`] if the input cannot be decoded,
/// and [`TranscodeError::EncodeFailure`] if re-encoding fails.
pub fn transcode(image_bytes: &[u8], quality: i32) -> Result<Vec<u8>, TranscodeError> {
    let options = TranscodeOptions::new().with_quality(quality);
    transcode_with_options(image_bytes, &options).map(|output| output.bytes)
}

/// Transcode with explicit options, returning the bytes and a size report.
pub fn transcode_with_options(
    image_bytes: &[u8],
    options: &TranscodeOptions,
) -> Result<TranscodeOutput, TranscodeError> {
    let quality = options.quality();
    let _span = debug_span!(
        "transcode",
        input_len = image_bytes.len(),
        quality = quality.get()
    )
    .entered();

    run(image_bytes, quality, options).inspect_err(|err| {
        warn!(error = %err, "transcode failed");
    })
}

fn run(
    image_bytes: &[u8],
    quality: Quality,
    options: &TranscodeOptions,
) -> Result<TranscodeOutput, TranscodeError> {
    let image = decode_jpeg_with_limits(image_bytes, &options.decode_limits())?;
    let descriptor = image.descriptor();
    debug!(
        width = descriptor.width,
        height = descriptor.height,
        "decode stage complete"
    );

    let bytes = encode_image(&image, quality)?;
    drop(image);

    let report = TranscodeReport {
        original_size: image_bytes.len(),
        optimized_size: bytes.len(),
        width: descriptor.width,
        height: descriptor.height,
        quality: quality.get(),
    };
    debug!(
        optimized_size = report.optimized_size,
        ratio = %report.ratio_label(),
        "encode stage complete"
    );

    Ok(TranscodeOutput { bytes, report })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::decode::read_descriptor;
    use image::codecs::jpeg::JpegEncoder;
    use image::{Rgb, RgbImage};
    use proptest::prelude::*;

    fn source_jpeg(width: u32, height: u32, seed: u8) -> Vec<u8> {
        let img = RgbImage::from_fn(width, height, |x, y| {
            let v = (x * 7 + y * 13) as u8;
            Rgb([v.wrapping_add(seed), v ^ seed, seed])
        });
        let mut buf = Vec::new();
        let mut encoder = JpegEncoder::new_with_quality(&mut buf, 90);
        encoder.encode_image(&img).unwrap();
        buf
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        /// Property: any valid quality yields a JPEG with the input geometry.
        #[test]
        fn prop_round_trip_keeps_geometry(
            (width, height) in (1u32..=40, 1u32..=40),
            quality in 1i32..=100,
            seed in any::<u8>(),
        ) {
            let source = source_jpeg(width, height, seed);
            let output = transcode(&source, quality).unwrap();

            let desc = read_descriptor(&output).unwrap();
            prop_assert_eq!((desc.width, desc.height), (width, height));
        }

        /// Property: out-of-range quality behaves exactly like quality 80.
        #[test]
        fn prop_invalid_quality_matches_default(
            quality in prop_oneof![i32::MIN..=0, 101i32..=i32::MAX],
        ) {
            let source = source_jpeg(16, 16, 7);
            prop_assert_eq!(transcode(&source, quality).unwrap(), transcode(&source, 80).unwrap());
        }

        /// Property: arbitrary non-JPEG bytes fail in the decode stage.
        #[test]
        fn prop_non_jpeg_bytes_fail_decode(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
            prop_assume!(!bytes.starts_with(&[0xFF, 0xD8]));
            let err = transcode(&bytes, 80).unwrap_err();
            prop_assert!(err.is_decode());
        }
    }
}
