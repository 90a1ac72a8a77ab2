//! Unified error type for a transcode call.
//!
//! Both codec stages report through [`TranscodeError`], so a failure in
//! either one aborts the call the same way and carries the codec's
//! diagnostic text.

use thiserror::Error;

use crate::decode::DecodeError;
use crate::encode::EncodeError;

/// Failure of a whole transcode call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranscodeError {
    /// The input is not a parseable JPEG, or the decoder reported a fault.
    #[error("decode failure: {message}")]
    DecodeFailure { message: String },

    /// The encoder reported a fault while compressing the decoded pixels.
    #[error("encode failure: {message}")]
    EncodeFailure { message: String },
}

impl TranscodeError {
    /// Returns `true` for failures raised by the decode stage.
    pub fn is_decode(&self) -> bool {
        matches!(self, TranscodeError::DecodeFailure { .. })
    }

    /// Returns `true` for failures raised by the encode stage.
    pub fn is_encode(&self) -> bool {
        matches!(self, TranscodeError::EncodeFailure { .. })
    }

    /// The codec diagnostic attached to this failure.
    pub fn message(&self) -> &str {
        match self {
            TranscodeError::DecodeFailure { message } | TranscodeError::EncodeFailure { message } => {
                message
            }
        }
    }
}

impl From<DecodeError> for TranscodeError {
    fn from(err: DecodeError) -> Self {
        TranscodeError::DecodeFailure {
            message: err.to_string(),
        }
    }
}

impl From<EncodeError> for TranscodeError {
    fn from(err: EncodeError) -> Self {
        TranscodeError::EncodeFailure {
            message: err.to_string(),
        }
    }
}
