//! The 26-symbol machine alphabet.

use std::fmt;

/// Number of contacts on every rotor and reflector.
pub const ALPHABET_LEN: u8 = 26;

/// A letter `A`-`Z`, stored as its position in the alphabet.
///
/// Arithmetic on letters is modular: shifting past `Z` wraps to `A`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// The letter `A` (offset zero).
    pub const A: Self = Self(0);

    /// Letter at `index`, reduced modulo 26.
    pub const fn from_index(index: u8) -> Self {
        Self(index % ALPHABET_LEN)
    }

    /// Parses an ASCII letter in either case.
    ///
    /// Returns `None` for anything else, including non-ASCII letters.
    pub fn from_char(c: char) -> Option<Self> {
        let byte = u8::try_from(c).ok()?;
        byte.is_ascii_alphabetic().then(|| Self(byte.to_ascii_uppercase() - b'A'))
    }

    /// Position in the alphabet, `0..26`.
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Uppercase character for this letter.
    pub const fn to_char(self) -> char {
        (b'A' + self.0) as char
    }

    /// Moves `n` positions forward, wrapping at `Z`.
    pub const fn shift(self, n: u8) -> Self {
        Self((self.0 + n % ALPHABET_LEN) % ALPHABET_LEN)
    }

    /// Moves `n` positions backward, wrapping at `A`.
    pub const fn unshift(self, n: u8) -> Self {
        Self((self.0 + ALPHABET_LEN - n % ALPHABET_LEN) % ALPHABET_LEN)
    }

    /// All 26 letters in alphabetical order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..ALPHABET_LEN).map(Self)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
