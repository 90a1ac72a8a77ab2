//! AccelCompress Core - JPEG transcoding library
//!
//! This crate re-encodes JPEG images at a requested quality: the input is
//! decoded to a fixed RGB8 pixel buffer, then compressed again. The codec
//! work itself is done by the `image` crate; this crate owns the buffer
//! handling, quality normalization and error reporting around it.
//!
//! # Module Structure
//!
//! - `quality` - Permissive quality normalization (out of range becomes 80)
//! - `decode` - Decode stage (JPEG bytes to RGB8 buffer)
//! - `encode` - Encode stage (RGB8 buffer to JPEG bytes)
//! - `transcode` - Orchestration and size report
//! - `options` - Per-call configuration
//! - `error` - Unified failure type
//!
//! # Examples
//!
//! ```ignore
//! use accelcompress_core::transcode;
//!
//! let original = std::fs::read("photo.jpg").unwrap();
//! let smaller = transcode(&original, 60).unwrap();
//! ```

pub mod decode;
pub mod encode;
pub mod error;
pub mod options;
pub mod quality;
pub mod transcode;

pub use decode::{DecodedImage, ImageDescriptor, RGB_COMPONENTS};
pub use error::TranscodeError;
pub use options::{DecodeLimits, TranscodeOptions, DEFAULT_MAX_DECODE_ALLOC};
pub use quality::{is_valid_quality, Quality, DEFAULT_QUALITY, MAX_QUALITY, MIN_QUALITY};
pub use transcode::{transcode, transcode_with_options, TranscodeOutput, TranscodeReport};
