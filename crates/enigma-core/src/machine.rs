//! Cipher engine.
//!
//! The `Machine` owns the rotor stack and the reflector and is the only
//! place rotor offsets change.

use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::{
    alphabet::Letter, error::ConfigError, reflector::Reflector, registry, rotor::Rotor,
};

/// Smallest rotor stack a machine accepts.
pub const MIN_ROTORS: usize = 3;

/// Largest rotor stack a machine accepts.
pub const MAX_ROTORS: usize = 5;

/// Rotor cipher machine.
///
/// Rotors are stored left to right. The rightmost (last) rotor is the fast
/// one: it steps on every letter and is the first the signal passes through.
///
/// # State machine
///
/// The state is the tuple of rotor offsets. Each letter fires exactly one
/// [`advance_mechanism`](Self::advance_mechanism) before it is routed;
/// anything that is not a letter leaves the state untouched. Offsets wrap
/// modulo 26 forever.
///
/// Encoding takes `&mut self`. Interleaving two message streams through
/// one machine corrupts both, so give each session its own machine.
#[derive(Debug, Clone)]
pub struct Machine {
    rotors: Vec<Rotor>,
    reflector: Reflector,
}

impl Machine {
    /// Assemble a machine from registry rotor names and start positions.
    ///
    /// `positions[i]` is the start letter of rotor `i` (either case). Rotors
    /// without a position start at `A`.
    ///
    /// # Errors
    ///
    /// - `ConfigError::RotorCount` unless 3 to 5 names are given
    /// - `ConfigError::UnknownRotor` for a name outside the registry
    /// - `ConfigError::TooManyPositions` if `positions` is longer than the
    ///   stack
    /// - `ConfigError::InvalidPosition` for a position that is not a letter
    pub fn new<S: AsRef<str>>(rotor_names: &[S], positions: &str) -> Result<Self, ConfigError> {
        let count = rotor_names.len();
        if !(MIN_ROTORS..=MAX_ROTORS).contains(&count) {
            return Err(ConfigError::RotorCount { actual: count, min: MIN_ROTORS, max: MAX_ROTORS });
        }

        let mut rotors = rotor_names
            .iter()
            .map(|name| registry::rotor(name.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        let starts = parse_positions(positions, count)?;
        for (rotor, start) in rotors.iter_mut().zip(starts) {
            rotor.set_start(start);
        }

        let reflector = registry::reflector()?;
        let machine = Self { rotors, reflector };

        // Rotor choice and positions are key material; log only the shape.
        debug!(rotors = machine.rotors.len(), "machine assembled");

        Ok(machine)
    }

    /// Rotors in the stack, left to right.
    pub fn rotors(&self) -> &[Rotor] {
        &self.rotors
    }

    /// Registry names of the rotors, left to right.
    pub fn rotor_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rotors.iter().map(Rotor::name)
    }

    /// The reflector in use.
    pub fn reflector(&self) -> &Reflector {
        &self.reflector
    }

    /// Current rotor offsets, left to right, as alphabet indices.
    pub fn offsets(&self) -> Vec<u8> {
        self.rotors.iter().map(|r| r.offset().index()).collect()
    }

    /// Current rotor offsets as letters, e.g. `"AAB"`.
    pub fn positions(&self) -> String {
        self.rotors.iter().map(|r| r.offset().to_char()).collect()
    }

    /// Encode one character.
    ///
    /// ASCII letters are uppercased, advance the mechanism and come back as
    /// a different uppercase letter. Everything else is returned as-is and
    /// leaves the rotors where they are.
    pub fn encode_char(&mut self, c: char) -> char {
        let Some(letter) = Letter::from_char(c) else {
            return c;
        };

        self.advance_mechanism();

        let signal = self.forward_pass(letter);
        let signal = self.reflector.reflect(signal);
        self.backward_pass(signal).to_char()
    }

    /// Step the rotors for one key press.
    ///
    /// The tail rotor always steps. Each rotor that lands on its notch steps
    /// the one to its left; the cascade ends at the first rotor that does
    /// not turn over. There is no double-stepping of middle rotors.
    pub fn advance_mechanism(&mut self) {
        for rotor in self.rotors.iter_mut().rev() {
            if !rotor.step() {
                break;
            }
            trace!(rotor = rotor.name(), "turnover");
        }
    }

    /// Lazily encode a character stream.
    ///
    /// The returned iterator borrows the machine; rotors move as items are
    /// pulled, so a partially consumed stream leaves the machine part way.
    pub fn encode_stream<I>(&mut self, chars: I) -> EncodeStream<'_, I::IntoIter>
    where
        I: IntoIterator<Item = char>,
    {
        EncodeStream { machine: self, chars: chars.into_iter() }
    }

    /// Encode a whole message.
    pub fn encode_str(&mut self, message: &str) -> String {
        self.encode_stream(message.chars()).collect()
    }

    /// Return every rotor to its start position, keeping the selection.
    ///
    /// Afterwards the machine encodes exactly like a freshly assembled one
    /// with the same settings.
    pub fn reset(&mut self) {
        for rotor in &mut self.rotors {
            rotor.reset();
        }
        debug!(rotors = self.rotors.len(), "machine reset");
    }

    /// Toward the reflector: rightmost rotor first.
    fn forward_pass(&self, letter: Letter) -> Letter {
        self.rotors.iter().rev().fold(letter, |signal, rotor| rotor.forward(signal))
    }

    /// Back from the reflector: leftmost rotor first.
    fn backward_pass(&self, letter: Letter) -> Letter {
        self.rotors.iter().fold(letter, |signal, rotor| rotor.backward(signal))
    }
}

fn parse_positions(positions: &str, rotors: usize) -> Result<Vec<Letter>, ConfigError> {
    let count = positions.chars().count();
    if count > rotors {
        return Err(ConfigError::TooManyPositions { positions: count, rotors });
    }

    positions
        .chars()
        .enumerate()
        .map(|(index, found)| {
            Letter::from_char(found).ok_or(ConfigError::InvalidPosition { index, found })
        })
        .collect()
}

/// Iterator returned by [`Machine::encode_stream`].
#[derive(Debug)]
pub struct EncodeStream<'a, I> {
    machine: &'a mut Machine,
    chars: I,
}

impl<I: Iterator<Item = char>> Iterator for EncodeStream<'_, I> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        self.chars.next().map(|c| self.machine.encode_char(c))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chars.size_hint()
    }
}

impl<I: ExactSizeIterator<Item = char>> ExactSizeIterator for EncodeStream<'_, I> {}

impl<I: FusedIterator<Item = char>> FusedIterator for EncodeStream<'_, I> {}
