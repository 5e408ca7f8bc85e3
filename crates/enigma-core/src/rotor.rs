//! A single interchangeable rotor.

use crate::{alphabet::Letter, error::ConfigError, wiring::Wiring};

/// Wired disk with a notch and a rotating offset.
///
/// The offset shifts the wiring relative to the fixed contacts: a signal
/// entering at contact `x` meets the wiring at `x + offset` and leaves at
/// `wiring(x + offset) - offset`.
///
/// # Invariants
///
/// - `backward` is the exact inverse of `forward` for the same offset.
/// - `offset` always lies in `0..26`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    name: &'static str,
    wiring: Wiring,
    notch: Letter,
    offset: Letter,
    /// Offset restored by [`reset`](Self::reset).
    start: Letter,
}

impl Rotor {
    /// Build a rotor from a wiring table and notch letter, at offset `A`.
    ///
    /// # Errors
    ///
    /// `ConfigError::InvalidWiring` for a bad table, `ConfigError::InvalidNotch`
    /// if `notch` is not a letter.
    pub fn new(name: &'static str, table: &str, notch: char) -> Result<Self, ConfigError> {
        let wiring = Wiring::parse(name, table)?;
        let notch = Letter::from_char(notch)
            .ok_or_else(|| ConfigError::InvalidNotch { name: name.to_string(), found: notch })?;

        Ok(Self { name, wiring, notch, offset: Letter::A, start: Letter::A })
    }

    /// Registry name, e.g. `"III"`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Turnover letter.
    pub fn notch(&self) -> Letter {
        self.notch
    }

    /// Current rotational position.
    pub fn offset(&self) -> Letter {
        self.offset
    }

    /// Position the rotor was started at.
    pub fn start(&self) -> Letter {
        self.start
    }

    /// Route a signal through the rotor toward the reflector.
    pub fn forward(&self, letter: Letter) -> Letter {
        let shift = self.offset.index();
        self.wiring.map(letter.shift(shift)).unshift(shift)
    }

    /// Route a signal back from the reflector.
    pub fn backward(&self, letter: Letter) -> Letter {
        let shift = self.offset.index();
        self.wiring.invert(letter.shift(shift)).unshift(shift)
    }

    /// Advance one position. Returns `true` when the new offset sits on the
    /// notch, meaning the neighbour to the left must step as well.
    pub fn step(&mut self) -> bool {
        self.offset = self.offset.shift(1);
        self.offset == self.notch
    }

    /// Set the starting position. Also becomes the target of `reset`.
    pub fn set_start(&mut self, letter: Letter) {
        self.start = letter;
        self.offset = letter;
    }

    /// Return to the starting position.
    pub fn reset(&mut self) {
        self.offset = self.start;
    }
}
