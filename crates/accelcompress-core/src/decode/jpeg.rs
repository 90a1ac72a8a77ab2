//! JPEG decoding into a fixed RGB8 pixel buffer.

use std::io::Cursor;

use image::codecs::jpeg::JpegDecoder;
use image::{ColorType, DynamicImage, ImageDecoder, ImageError};
use tracing::debug;

use super::{DecodeError, DecodedImage, ImageDescriptor};
use crate::options::DecodeLimits;

/// Start-of-image marker every JPEG stream begins with.
const JPEG_SOI: [u8; 2] = [0xFF, 0xD8];

/// End-of-image marker closing the final scan.
const JPEG_EOI: [u8; 2] = [0xFF, 0xD9];

/// Start-of-scan marker.
const JPEG_SOS: [u8; 2] = [0xFF, 0xDA];

/// Sample layouts the decoder may hand back, before RGB coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SourceLayout {
    Gray,
    Rgb,
    Rgba,
}

impl SourceLayout {
    fn from_color_type(color_type: ColorType) -> Result<Self, DecodeError> {
        match color_type {
            ColorType::L8 => Ok(SourceLayout::Gray),
            ColorType::Rgb8 => Ok(SourceLayout::Rgb),
            ColorType::Rgba8 => Ok(SourceLayout::Rgba),
            other => Err(DecodeError::UnsupportedColorType(format!("{other:?}"))),
        }
    }
}

/// Decode a JPEG image from bytes into an RGB8 buffer.
///
/// Uses the default [`DecodeLimits`].
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the bytes are not a JPEG stream.
/// Returns `DecodeError::CorruptedFile` if the JPEG is corrupted or truncated.
pub fn decode_jpeg(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    decode_jpeg_with_limits(bytes, &DecodeLimits::default())
}

/// Decode a JPEG image from bytes into an RGB8 buffer, enforcing `limits`.
///
/// Whatever the source color encoding, the result is always row-major RGB
/// with exactly `width * height * 3` bytes.
pub fn decode_jpeg_with_limits(
    bytes: &[u8],
    limits: &DecodeLimits,
) -> Result<DecodedImage, DecodeError> {
    let mut decoder = open_decoder(bytes)?;
    ensure_end_of_image(bytes)?;
    decoder
        .set_limits(limits.to_image_limits())
        .map_err(map_image_error)?;

    let (width, height) = decoder.dimensions();
    if width == 0 || height == 0 {
        return Err(DecodeError::ZeroDimensions { width, height });
    }
    let layout = SourceLayout::from_color_type(decoder.color_type())?;

    // The RGB output is never smaller than the native buffer, so it bounds
    // the decode allocation.
    let rgb_len = ImageDescriptor::rgb(width, height)
        .buffer_len()
        .ok_or_else(|| {
            DecodeError::LimitsExceeded(format!("{width}x{height} image does not fit in memory"))
        })?;
    if !limits.allows(rgb_len as u64) {
        return Err(DecodeError::LimitsExceeded(format!(
            "{width}x{height} image needs {rgb_len} bytes, limit is {:?}",
            limits.max_alloc
        )));
    }

    debug!(width, height, ?layout, rgb_len, "decoding JPEG");

    // RGB8 output is moved out as-is; other layouts are converted by the codec
    let rgb = DynamicImage::from_decoder(decoder)
        .map_err(map_image_error)?
        .into_rgb8();
    DecodedImage::from_rgb_image(rgb)
}

/// Read the JPEG header and return the geometry the decode stage would
/// produce, without decoding pixel data.
pub fn read_descriptor(bytes: &[u8]) -> Result<ImageDescriptor, DecodeError> {
    let decoder = open_decoder(bytes)?;
    let (width, height) = decoder.dimensions();
    if width == 0 || height == 0 {
        return Err(DecodeError::ZeroDimensions { width, height });
    }
    SourceLayout::from_color_type(decoder.color_type())?;
    Ok(ImageDescriptor::rgb(width, height))
}

/// Bind a decoder to the input and parse the stream header.
fn open_decoder(bytes: &[u8]) -> Result<JpegDecoder<Cursor<&[u8]>>, DecodeError> {
    if !bytes.starts_with(&JPEG_SOI) {
        return Err(DecodeError::InvalidFormat(
            "missing JPEG start-of-image marker".to_string(),
        ));
    }
    JpegDecoder::new(Cursor::new(bytes)).map_err(map_image_error)
}

/// Reject streams cut off before the end of their last scan.
///
/// The codec pads missing scan data instead of failing. Inside entropy-coded
/// data every `0xFF` is stuffed or a restart marker, so an EOI after the last
/// SOS can only be the real end of the image. Trailing bytes after EOI are
/// allowed.
fn ensure_end_of_image(bytes: &[u8]) -> Result<(), DecodeError> {
    let last_scan = bytes
        .windows(2)
        .rposition(|w| w == JPEG_SOS)
        .ok_or_else(|| DecodeError::CorruptedFile("no start-of-scan marker".to_string()))?;
    if bytes[last_scan..].windows(2).any(|w| w == JPEG_EOI) {
        Ok(())
    } else {
        Err(DecodeError::CorruptedFile(
            "stream ends before the end-of-image marker".to_string(),
        ))
    }
}

fn map_image_error(err: ImageError) -> DecodeError {
    match err {
        ImageError::Limits(e) => DecodeError::LimitsExceeded(e.to_string()),
        ImageError::Unsupported(e) => DecodeError::InvalidFormat(e.to_string()),
        other => DecodeError::CorruptedFile(other.to_string()),
    }
}
