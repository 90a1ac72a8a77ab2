//! Decode stage of the transcode pipeline.
//!
//! This module turns compressed JPEG bytes into a row-major RGB8 pixel
//! buffer plus the [`ImageDescriptor`] the encode stage is configured from.
//!
//! # Color handling
//!
//! Output is always 8-bit RGB ([`RGB_COMPONENTS`] bytes per pixel). Grayscale
//! sources are expanded and alpha is dropped, so the intermediate buffer has
//! one fixed layout.
//!
//! # Examples
//!
//! ```ignore
//! use accelcompress_core::decode::decode_jpeg;
//!
//! let jpeg_bytes = std::fs::read("photo.jpg").unwrap();
//! let image = decode_jpeg(&jpeg_bytes).unwrap();
//! println!("Decoded {}x{} image", image.width, image.height);
//! ```

mod jpeg;
mod types;

pub use jpeg::{decode_jpeg, decode_jpeg_with_limits, read_descriptor};
pub use types::{DecodeError, DecodedImage, ImageDescriptor, RGB_COMPONENTS};
