//! The fixed reflector at the end of the rotor stack.

use crate::{alphabet::Letter, error::ConfigError, wiring::Wiring};

/// Fixed-point-free involution that sends the signal back through the
/// rotors.
///
/// Reflection is what makes the machine self-reciprocal: because
/// `reflect(reflect(x)) == x`, the same settings encrypt and decrypt.
/// The lack of fixed points means no letter ever encodes to itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflector {
    name: &'static str,
    wiring: Wiring,
}

impl Reflector {
    /// Build a reflector from a 26-letter table.
    ///
    /// # Errors
    ///
    /// `ConfigError::InvalidWiring` if the table is not a permutation, is not
    /// its own inverse, or maps some letter to itself.
    pub fn new(name: &'static str, table: &str) -> Result<Self, ConfigError> {
        let wiring = Wiring::parse(name, table)?;
        let invalid = |reason: &str| ConfigError::InvalidWiring {
            name: name.to_string(),
            reason: reason.to_string(),
        };

        if !wiring.is_involution() {
            return Err(invalid("reflector must be its own inverse"));
        }
        if wiring.has_fixed_point() {
            return Err(invalid("reflector must not map a letter to itself"));
        }

        Ok(Self { name, wiring })
    }

    /// Registry name, e.g. `"B"`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Send a signal back toward the rotors.
    pub fn reflect(&self, letter: Letter) -> Letter {
        self.wiring.map(letter)
    }
}
