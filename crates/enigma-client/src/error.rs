//! Session error types.

use enigma_core::ConfigError;
use thiserror::Error;

/// Errors from session operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Machine settings were rejected by the engine.
    #[error("invalid machine settings: {0}")]
    Config(#[from] ConfigError),

    /// The same rotor was picked twice for a sending session.
    #[error("rotor {name} selected more than once")]
    DuplicateRotor {
        /// The repeated rotor name.
        name: String,
    },

    /// Event does not fit the session's current state.
    #[error("invalid state: {reason}")]
    InvalidState {
        /// Description of the state error.
        reason: String,
    },
}

impl SessionError {
    /// Returns true if this error is fatal (unrecoverable).
    ///
    /// Fatal errors mean the settings themselves are unusable and must be
    /// replaced. Transient errors come from an event arriving at the wrong
    /// time; the session is unchanged and keeps running.
    pub fn is_fatal(&self) -> bool {
        match self {
            Self::Config(_) | Self::DuplicateRotor { .. } => true,
            Self::InvalidState { .. } => false,
        }
    }
}
