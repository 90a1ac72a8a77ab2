//! Per-call transcode configuration.
//!
//! Options are plain values passed into each call; nothing here is global or
//! shared between calls.

use serde::{Deserialize, Serialize};

use crate::quality::{Quality, DEFAULT_QUALITY};

/// Default cap on decoder allocations (512 MiB), matching the codec's own
/// default limit.
pub const DEFAULT_MAX_DECODE_ALLOC: u64 = 512 * 1024 * 1024;

/// Resource limits applied while decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeLimits {
    /// Maximum bytes the decode stage may allocate for pixel data.
    /// `None` disables the cap.
    pub max_alloc: Option<u64>,
}

impl Default for DecodeLimits {
    fn default() -> Self {
        Self {
            max_alloc: Some(DEFAULT_MAX_DECODE_ALLOC),
        }
    }
}

impl DecodeLimits {
    /// Limits with no allocation cap.
    pub fn unlimited() -> Self {
        Self { max_alloc: None }
    }

    /// Returns `true` if `bytes` of pixel storage fit under the cap.
    pub fn allows(&self, bytes: u64) -> bool {
        self.max_alloc.map_or(true, |max| bytes <= max)
    }

    /// Convert to the codec's limit type.
    pub fn to_image_limits(self) -> image::Limits {
        let mut limits = image::Limits::default();
        limits.max_alloc = self.max_alloc;
        limits
    }
}

/// Options for [`crate::transcode_with_options`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscodeOptions {
    /// Requested output quality. Out-of-range values fall back to the
    /// default (80) rather than failing.
    pub quality: i32,
    /// Maximum decoder allocation in bytes.
    pub max_decode_alloc: Option<u64>,
}

impl Default for TranscodeOptions {
    fn default() -> Self {
        Self {
            quality: i32::from(DEFAULT_QUALITY),
            max_decode_alloc: Some(DEFAULT_MAX_DECODE_ALLOC),
        }
    }
}

impl TranscodeOptions {
    /// Create options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the requested quality.
    pub fn with_quality(mut self, quality: i32) -> Self {
        self.quality = quality;
        self
    }

    /// Set the decoder allocation cap.
    pub fn with_max_decode_alloc(mut self, max_alloc: Option<u64>) -> Self {
        self.max_decode_alloc = max_alloc;
        self
    }

    /// The normalized quality these options resolve to.
    pub fn quality(&self) -> Quality {
        Quality::new(self.quality)
    }

    /// The decode limits these options resolve to.
    pub fn decode_limits(&self) -> DecodeLimits {
        DecodeLimits {
            max_alloc: self.max_decode_alloc,
        }
    }
}
