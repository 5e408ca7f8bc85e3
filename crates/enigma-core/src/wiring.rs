//! Letter permutations used by rotors and reflectors.

use crate::{
    alphabet::{ALPHABET_LEN, Letter},
    error::ConfigError,
};

const LEN: usize = ALPHABET_LEN as usize;

/// A bijection over the 26-letter alphabet with its inverse precomputed.
///
/// `map` follows the table as written (`table[i]` is the image of the
/// `i`-th letter); `invert` answers "which contact is wired to this one".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wiring {
    forward: [Letter; LEN],
    inverse: [Letter; LEN],
}

impl Wiring {
    /// Parses a 26-letter table such as `"EKMFLGDQVZNTOWYHXUSPAIBRCJ"`.
    ///
    /// # Errors
    ///
    /// `ConfigError::InvalidWiring` if the table is not exactly 26 letters or
    /// maps two inputs to the same output.
    pub fn parse(name: &str, table: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidWiring { name: name.to_string(), reason };

        let count = table.chars().count();
        if count != LEN {
            return Err(invalid(format!("expected {LEN} letters, got {count}")));
        }

        let mut forward = [Letter::A; LEN];
        let mut inverse = [None; LEN];
        for (input, (slot, c)) in Letter::all().zip(forward.iter_mut().zip(table.chars())) {
            let output = Letter::from_char(c).ok_or_else(|| invalid(format!("{c:?} is not a letter")))?;
            let seen = &mut inverse[usize::from(output.index())];
            if seen.is_some() {
                return Err(invalid(format!("{output} appears more than once")));
            }
            *seen = Some(input);
            *slot = output;
        }

        // 26 distinct outputs from 26 inputs: every slot is filled.
        let inverse = inverse.map(|input| input.unwrap_or(Letter::A));
        Ok(Self { forward, inverse })
    }

    /// Image of `letter` under the permutation.
    pub fn map(&self, letter: Letter) -> Letter {
        self.forward[usize::from(letter.index())]
    }

    /// Preimage of `letter`: the input that `map` sends to it.
    pub fn invert(&self, letter: Letter) -> Letter {
        self.inverse[usize::from(letter.index())]
    }

    /// Whether applying the permutation twice is the identity.
    pub fn is_involution(&self) -> bool {
        Letter::all().all(|l| self.map(self.map(l)) == l)
    }

    /// Whether some letter maps to itself.
    pub fn has_fixed_point(&self) -> bool {
        Letter::all().any(|l| self.map(l) == l)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const IDENTITY: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

    #[test]
    fn parse_and_invert() {
        let wiring = Wiring::parse("I", "EKMFLGDQVZNTOWYHXUSPAIBRCJ").unwrap();
        let a = Letter::A;
        let e = Letter::from_char('E').unwrap();

        assert_eq!(wiring.map(a), e);
        assert_eq!(wiring.invert(e), a);
        for l in Letter::all() {
            assert_eq!(wiring.invert(wiring.map(l)), l);
        }
    }

    #[test]
    fn lowercase_table_accepted() {
        let upper = Wiring::parse("x", IDENTITY).unwrap();
        let lower = Wiring::parse("x", &IDENTITY.to_lowercase()).unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn rejects_short_table() {
        let result = Wiring::parse("short", "ABC");
        assert!(matches!(result, Err(ConfigError::InvalidWiring { .. })));
    }

    #[test]
    fn rejects_repeated_letter() {
        let result = Wiring::parse("dup", "AACDEFGHIJKLMNOPQRSTUVWXYZ");
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "invalid wiring for dup: A appears more than once");
    }

    #[test]
    fn rejects_non_letter() {
        let result = Wiring::parse("digit", "0BCDEFGHIJKLMNOPQRSTUVWXYZ");
        assert!(matches!(result, Err(ConfigError::InvalidWiring { .. })));
    }

    #[test]
    fn identity_properties() {
        let identity = Wiring::parse("id", IDENTITY).unwrap();
        assert!(identity.is_involution());
        assert!(identity.has_fixed_point());
    }
}
