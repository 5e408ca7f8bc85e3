//! Configuration error types.

use thiserror::Error;

/// Errors raised while assembling a machine or one of its parts.
///
/// These only occur at construction time. A successfully built
/// [`Machine`](crate::Machine) never fails to encode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Rotor stack is too short or too long.
    #[error("rotor count must be between {min} and {max}, got {actual}")]
    RotorCount {
        /// Number of rotor names supplied.
        actual: usize,
        /// Smallest supported stack.
        min: usize,
        /// Largest supported stack.
        max: usize,
    },

    /// Rotor name is not in the registry.
    #[error("unknown rotor: {name:?}")]
    UnknownRotor {
        /// The name that failed to resolve.
        name: String,
    },

    /// Start position is not a letter.
    #[error("invalid start position {found:?} for rotor {index}")]
    InvalidPosition {
        /// Index of the rotor in the stack.
        index: usize,
        /// Offending character.
        found: char,
    },

    /// More start positions than rotors.
    #[error("{positions} start positions given for {rotors} rotors")]
    TooManyPositions {
        /// Number of start positions supplied.
        positions: usize,
        /// Number of rotors in the stack.
        rotors: usize,
    },

    /// Wiring table is not a valid permutation (or involution, for a
    /// reflector).
    #[error("invalid wiring for {name}: {reason}")]
    InvalidWiring {
        /// Rotor or reflector the table belongs to.
        name: String,
        /// Description of the defect.
        reason: String,
    },

    /// Notch is not a letter.
    #[error("invalid notch {found:?} for {name}")]
    InvalidNotch {
        /// Rotor the notch belongs to.
        name: String,
        /// Offending character.
        found: char,
    },
}
