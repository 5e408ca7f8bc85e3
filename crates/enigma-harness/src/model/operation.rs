//! Operations for model-based testing.
//!
//! Operations cover everything the two operators and the link between them
//! can do. They are generated randomly by proptest (or decoded from fuzz
//! bytes) and applied to both the model and the real sessions.

use arbitrary::Arbitrary;

/// Operations that can be applied to a sender/receiver pair.
#[derive(Debug, Clone, PartialEq, Eq, Arbitrary)]
pub enum Operation {
    /// Sender presses a key.
    Key {
        /// Raw key code, see [`Operation::key_char`].
        code: u8,
    },

    /// Sender asks to send the message typed so far.
    Submit,

    /// Sender answers the confirmation prompt.
    Confirm {
        /// Send when true, keep composing when false.
        accept: bool,
    },

    /// Sender wipes the draft.
    Clear,

    /// Link delivers the oldest dispatch in flight to the receiver.
    Deliver,

    /// Receiver decides on the pending dispatch.
    Decide {
        /// Decrypt when true, ignore when false.
        decrypt: bool,
    },
}

impl Operation {
    /// Character for a key code. Codes map straight to Latin-1, so control
    /// characters and non-ASCII letters show up alongside printable ASCII.
    pub fn key_char(code: u8) -> char {
        char::from(code)
    }
}

/// Result of applying an operation.
///
/// Used to compare model and real behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationResult {
    /// Operation succeeded with nothing to report.
    Ok,

    /// Receiver decrypted a dispatch.
    Delivered {
        /// Recovered message.
        plaintext: String,
    },

    /// Operation failed with expected error.
    Error(OperationError),
}

/// Expected errors that can occur during operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationError {
    /// Session refused the event in its current state.
    InvalidState,

    /// Nothing on the link to deliver.
    NothingInFlight,
}

impl OperationResult {
    /// Check if operation succeeded.
    pub fn is_ok(&self) -> bool {
        !self.is_err()
    }

    /// Check if operation failed.
    pub fn is_err(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}
