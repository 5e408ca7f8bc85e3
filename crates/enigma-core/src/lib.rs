//! Enigma Core
//!
//! A rotor-based substitution cipher engine modelled on the historical
//! three-to-five rotor machines.
//!
//! # Architecture
//!
//! ```text
//! Rotor      (wired disk: permutation + notch + rotating offset)
//!     ↕ stacked 3..=5 deep, stepped right to left
//! Reflector  (fixed involution without fixed points)
//!     ↕
//! Machine    (orchestrator: advance, forward pass, reflect, backward pass)
//! ```
//!
//! # Invariants
//!
//! - Self-reciprocity: two machines built from the same rotor selection and
//!   start positions undo each other over the letters `A`-`Z`.
//! - Totality: encoding never fails. Anything that is not an ASCII letter is
//!   passed through unchanged and does not move the rotors.
//! - Determinism: rotor offsets depend only on how many letters were
//!   processed, never on which letters.
//!
//! # Example
//!
//! ```
//! use enigma_core::Machine;
//!
//! let mut alice = Machine::new(&["I", "II", "III"], "AAA")?;
//! let ciphertext = alice.encode_str("Attack at dawn!");
//!
//! let mut bob = Machine::new(&["I", "II", "III"], "AAA")?;
//! assert_eq!(bob.encode_str(&ciphertext), "ATTACK AT DAWN!");
//! # Ok::<(), enigma_core::ConfigError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod alphabet;
mod error;
mod machine;
pub mod reflector;
pub mod registry;
pub mod rotor;
pub mod wiring;

pub use alphabet::{ALPHABET_LEN, Letter};
pub use error::ConfigError;
pub use machine::{EncodeStream, MAX_ROTORS, MIN_ROTORS, Machine};
pub use reflector::Reflector;
pub use rotor::Rotor;
pub use wiring::Wiring;
