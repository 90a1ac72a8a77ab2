//! Core types for the decode stage.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of bytes per pixel in every decoded buffer.
///
/// The decode stage always coerces to 8-bit RGB, whatever the source color
/// encoding was, so downstream code only ever sees one pixel layout.
pub const RGB_COMPONENTS: usize = 3;

/// Error types for the decode stage.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The bytes do not start with a JPEG header.
    #[error("Invalid or unsupported image format: {0}")]
    InvalidFormat(String),

    /// The JPEG stream is corrupted or truncated.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),

    /// The header declared a zero width or height.
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    ZeroDimensions { width: u32, height: u32 },

    /// The decoder produced a sample layout that cannot be coerced to RGB8.
    #[error("Unsupported color type: {0}")]
    UnsupportedColorType(String),

    /// A buffer did not have the size its geometry requires.
    #[error("Pixel buffer size mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// Decoding would exceed the configured allocation limits.
    #[error("Decode limits exceeded: {0}")]
    LimitsExceeded(String),
}

/// Geometry of a decoded image.
///
/// This is the contract between the decode and encode stages: the encoder is
/// configured from exactly these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDescriptor {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Bytes per pixel; always [`RGB_COMPONENTS`] for decoded buffers.
    pub components: usize,
}

impl ImageDescriptor {
    /// Create a descriptor for an RGB image.
    pub fn rgb(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            components: RGB_COMPONENTS,
        }
    }

    /// Bytes in one scanline.
    pub fn row_stride(&self) -> usize {
        self.width as usize * self.components
    }

    /// Total buffer size, or `None` if it does not fit in `usize`.
    pub fn buffer_len(&self) -> Option<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)?
            .checked_mul(self.components)
    }
}

/// A decoded image with RGB pixel data.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGB pixel data in row-major order (3 bytes per pixel).
    /// Length is always width * height * 3.
    pub pixels: Vec<u8>,
}

impl DecodedImage {
    /// Create a new DecodedImage, checking the buffer against its geometry.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, DecodeError> {
        if width == 0 || height == 0 {
            return Err(DecodeError::ZeroDimensions { width, height });
        }
        let expected = ImageDescriptor::rgb(width, height)
            .buffer_len()
            .ok_or(DecodeError::SizeMismatch {
                expected: usize::MAX,
                actual: pixels.len(),
            })?;
        if pixels.len() != expected {
            return Err(DecodeError::SizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a DecodedImage from an image::RgbImage.
    pub fn from_rgb_image(img: image::RgbImage) -> Result<Self, DecodeError> {
        let (width, height) = img.dimensions();
        Self::new(width, height, img.into_raw())
    }

    /// Geometry of this image.
    pub fn descriptor(&self) -> ImageDescriptor {
        ImageDescriptor::rgb(self.width, self.height)
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Get the size of the pixel buffer in bytes.
    pub fn byte_size(&self) -> usize {
        self.pixels.len()
    }

    /// Iterate over the scanlines of the image, top to bottom.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, u8> {
        self.pixels.chunks_exact(self.descriptor().row_stride())
    }
}
