//! Closed-form model of the stepping mechanism.
//!
//! The tail rotor moves once per key press. A rotor that has moved `n`
//! times has landed on its notch `floor((n - first) / 26) + 1` times, where
//! `first` is the number of moves until it first reaches the notch. Each
//! landing moves the left neighbour once, so offsets after any number of
//! presses follow from one pass over the rotors.

use enigma_core::{ALPHABET_LEN, registry};

const LEN: u64 = ALPHABET_LEN as u64;

/// Reference stepping mechanism.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelMechanism {
    /// Notch index per rotor, left to right.
    notches: Vec<u8>,
    /// Start offset per rotor, left to right.
    starts: Vec<u8>,
}

impl ModelMechanism {
    /// Model with explicit notches and start offsets (letter indices).
    ///
    /// Rotors without a start offset begin at 0.
    pub fn new(notches: Vec<u8>, starts: &[u8]) -> Self {
        let starts =
            (0..notches.len()).map(|i| starts.get(i).map_or(0, |s| s % ALPHABET_LEN)).collect();
        Self { notches: notches.into_iter().map(|n| n % ALPHABET_LEN).collect(), starts }
    }

    /// Model for registry rotors, or `None` if a name is unknown.
    pub fn for_rotors<S: AsRef<str>>(names: &[S], starts: &[u8]) -> Option<Self> {
        let notches = names
            .iter()
            .map(|name| registry::spec(name.as_ref()).map(|spec| letter_index(spec.notch)))
            .collect::<Option<Vec<_>>>()?;
        Some(Self::new(notches, starts))
    }

    /// Number of rotors.
    pub fn len(&self) -> usize {
        self.notches.len()
    }

    /// True for a model without rotors.
    pub fn is_empty(&self) -> bool {
        self.notches.is_empty()
    }

    /// Offsets, left to right, after `presses` letter key presses.
    pub fn offsets_after(&self, presses: u64) -> Vec<u8> {
        let mut offsets = self.starts.clone();
        let mut moves = presses;

        for i in (0..self.len()).rev() {
            let start = u64::from(self.starts[i]);
            let notch = u64::from(self.notches[i]);

            offsets[i] = to_index((start + moves) % LEN);

            // Moves until the first landing on the notch: 1..=26.
            let first = match (notch + LEN - start) % LEN {
                0 => LEN,
                d => d,
            };
            moves = if moves >= first { (moves - first) / LEN + 1 } else { 0 };
        }

        offsets
    }

    /// Offsets after `presses` key presses, as letters.
    pub fn positions_after(&self, presses: u64) -> String {
        self.offsets_after(presses).into_iter().map(|i| char::from(b'A' + i)).collect()
    }
}

fn letter_index(c: char) -> u8 {
    u8::try_from(c).map_or(0, |b| b.to_ascii_uppercase().wrapping_sub(b'A') % ALPHABET_LEN)
}

fn to_index(value: u64) -> u8 {
    u8::try_from(value).unwrap_or(0)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn model(names: &[&str], positions: &str) -> ModelMechanism {
        let starts: Vec<u8> = positions.bytes().map(|b| b - b'A').collect();
        ModelMechanism::for_rotors(names, &starts).unwrap()
    }

    #[test]
    fn zero_presses_is_start() {
        let m = model(&["I", "II", "III"], "QEV");
        assert_eq!(m.positions_after(0), "QEV");
    }

    #[test]
    fn full_revolution_moves_middle_once() {
        let m = model(&["I", "II", "III"], "AAA");
        assert_eq!(m.positions_after(26), "ABA");
    }

    #[test]
    fn cascade_through_three_rotors() {
        // III lands on V, II lands on E, I lands on Q.
        let m = model(&["I", "II", "III"], "PDU");
        assert_eq!(m.positions_after(1), "QEV");
    }

    #[test]
    fn no_double_step() {
        let m = model(&["I", "II", "III"], "AEA");
        assert_eq!(m.positions_after(1), "AEB");
    }

    #[test]
    fn start_on_notch_waits_full_turn() {
        let m = model(&["I", "II", "III"], "AAV");
        assert_eq!(m.positions_after(1), "AAW");
        assert_eq!(m.positions_after(26), "ABV");
    }

    #[test]
    fn unknown_rotor() {
        assert!(ModelMechanism::for_rotors(&["I", "II", "VI"], &[]).is_none());
    }

    #[test]
    fn missing_starts_default_to_zero() {
        let m = ModelMechanism::for_rotors(&["I", "II", "III", "IV"], &[1]).unwrap();
        assert_eq!(m.positions_after(0), "BAAA");
    }
}
