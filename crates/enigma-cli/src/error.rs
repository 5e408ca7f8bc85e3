//! CLI error types.

use enigma_client::SessionError;
use enigma_core::ConfigError;
use enigma_proto::ProtoError;
use thiserror::Error;

/// Errors surfaced to the command line.
#[derive(Debug, Error)]
pub enum CliError {
    /// Machine settings rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Session refused the input.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// Payload could not be encoded or decoded.
    #[error(transparent)]
    Proto(#[from] ProtoError),

    /// Payload argument is not hex.
    #[error("payload is not valid hex: {0}")]
    Hex(#[from] hex::FromHexError),

    /// Nothing printable to send.
    #[error("message has no printable characters")]
    EmptyMessage,

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
