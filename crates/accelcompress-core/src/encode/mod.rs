//! Encode stage of the transcode pipeline.
//!
//! This module turns an RGB8 pixel buffer into JPEG bytes at a validated
//! [`Quality`](crate::Quality). The output is written to a growable
//! in-memory sink and checked for completeness before it is returned.
//!
//! # Examples
//!
//! ```ignore
//! use accelcompress_core::encode::encode_jpeg;
//! use accelcompress_core::Quality;
//!
//! let pixels = vec![128u8; 100 * 100 * 3]; // Gray image
//! let jpeg_bytes = encode_jpeg(&pixels, 100, 100, Quality::new(90)).unwrap();
//! println!("Encoded {} bytes", jpeg_bytes.len());
//! ```

mod jpeg;

pub use jpeg::{encode_image, encode_jpeg, EncodeError};
