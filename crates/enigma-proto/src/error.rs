//! Protocol error types.

use thiserror::Error;

/// Errors from encoding or decoding payloads.
#[derive(Debug, Error)]
pub enum ProtoError {
    /// CBOR serialization failed.
    #[error("CBOR encode failed: {reason}")]
    Encode {
        /// Description of the encoder failure.
        reason: String,
    },

    /// Bytes are not a valid payload.
    #[error("CBOR decode failed: {reason}")]
    Decode {
        /// Description of the decoder failure.
        reason: String,
    },
}
