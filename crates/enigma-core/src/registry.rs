//! Named rotor and reflector wirings.
//!
//! The tables are the Enigma I rotors I-V and the wide reflector B. They
//! are parsed once, on first use, and every machine clones from the parsed
//! set.

use std::sync::LazyLock;

use crate::{error::ConfigError, reflector::Reflector, rotor::Rotor};

/// Wiring and notch of a registered rotor type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotorSpec {
    /// Roman numeral label.
    pub name: &'static str,
    /// Substitution table, `wiring[i]` is the image of the `i`-th letter.
    pub wiring: &'static str,
    /// Letter at which this rotor kicks its left neighbour.
    pub notch: char,
}

/// Rotor types available for selection, in registry order.
pub const ROTORS: [RotorSpec; 5] = [
    RotorSpec { name: "I", wiring: "EKMFLGDQVZNTOWYHXUSPAIBRCJ", notch: 'Q' },
    RotorSpec { name: "II", wiring: "AJDKSIRUXBLHWTMCQGZNPYFVOE", notch: 'E' },
    RotorSpec { name: "III", wiring: "BDFHJLCPRTXVZNYEIWGAKMUSQO", notch: 'V' },
    RotorSpec { name: "IV", wiring: "ESOVPZJAYQUIRHXLNFTGKDCMWB", notch: 'J' },
    RotorSpec { name: "V", wiring: "VZBRGITYUPSDNHLXAWMJQOFECK", notch: 'Z' },
];

/// Name of the reflector every machine uses.
pub const REFLECTOR_NAME: &str = "B";

/// Wiring of reflector B.
pub const REFLECTOR_WIRING: &str = "YRUHQSLDPXNGOKMIEBFZCWVJAT";

/// Look up a rotor type by name. Names are matched exactly.
pub fn spec(name: &str) -> Option<&'static RotorSpec> {
    ROTORS.iter().find(|spec| spec.name == name)
}

/// Names of all registered rotor types.
pub fn names() -> impl Iterator<Item = &'static str> {
    ROTORS.iter().map(|spec| spec.name)
}

/// Parsed registry, shared by every machine in the process.
#[derive(Debug)]
struct Parsed {
    rotors: Vec<Rotor>,
    reflector: Reflector,
}

static PARSED: LazyLock<Result<Parsed, ConfigError>> = LazyLock::new(|| {
    let rotors = ROTORS
        .iter()
        .map(|spec| Rotor::new(spec.name, spec.wiring, spec.notch))
        .collect::<Result<Vec<_>, _>>()?;
    let reflector = Reflector::new(REFLECTOR_NAME, REFLECTOR_WIRING)?;
    Ok(Parsed { rotors, reflector })
});

fn parsed() -> Result<&'static Parsed, ConfigError> {
    PARSED.as_ref().map_err(Clone::clone)
}

/// A fresh rotor of the named type at offset `A`.
///
/// # Errors
///
/// `ConfigError::UnknownRotor` if the name is not registered.
pub fn rotor(name: &str) -> Result<Rotor, ConfigError> {
    parsed()?
        .rotors
        .iter()
        .find(|rotor| rotor.name() == name)
        .cloned()
        .ok_or_else(|| ConfigError::UnknownRotor { name: name.to_string() })
}

/// The standard reflector.
pub fn reflector() -> Result<Reflector, ConfigError> {
    parsed().map(|parsed| parsed.reflector.clone())
}
