//! Fuzz target for [`Machine`] construction and encoding
//!
//! # Strategy
//!
//! - Settings: rotor names drawn from the registry or raw strings, start
//!   positions of any length and alphabet
//! - Messages: arbitrary Unicode, including non-ASCII letters
//! - Wire: the same settings and ciphertext pushed through CBOR, plus raw
//!   bytes fed straight to the decoder
//!
//! # Invariants
//!
//! - Construction either succeeds or returns `ConfigError`, NEVER panics
//! - Valid machines decode their own output back to the uppercased input
//! - Output has exactly as many characters as input
//! - No ASCII letter encodes to itself
//! - Non-letters pass through unchanged
//! - Garbage CBOR is rejected with `ProtoError`, NEVER panics

#![no_main]

use arbitrary::Arbitrary;
use enigma_core::{Machine, registry};
use enigma_proto::{Dispatch, MachineSettings};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, Arbitrary)]
enum RotorChoice {
    /// Index into the registry.
    Registered(u8),
    /// Any name at all.
    Raw(String),
}

impl RotorChoice {
    fn name(&self) -> String {
        match self {
            Self::Registered(i) => {
                let names: Vec<&str> = registry::names().collect();
                names[usize::from(*i) % names.len()].to_string()
            },
            Self::Raw(name) => name.clone(),
        }
    }
}

#[derive(Debug, Clone, Arbitrary)]
struct Input {
    rotors: Vec<RotorChoice>,
    positions: String,
    message: String,
    raw_dispatch: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let _ = Dispatch::from_cbor(&input.raw_dispatch);

    let names: Vec<String> = input.rotors.iter().map(RotorChoice::name).collect();

    let Ok(mut sender) = Machine::new(names.as_slice(), &input.positions) else {
        return;
    };
    let mut receiver = Machine::new(names.as_slice(), &input.positions).expect("same settings build twice");

    let ciphertext = sender.encode_str(&input.message);
    assert_eq!(ciphertext.chars().count(), input.message.chars().count());

    for (plain, cipher) in input.message.chars().zip(ciphertext.chars()) {
        if plain.is_ascii_alphabetic() {
            assert!(cipher.is_ascii_uppercase());
            assert_ne!(plain.to_ascii_uppercase(), cipher);
        } else {
            assert_eq!(plain, cipher);
        }
    }

    let dispatch = Dispatch::new(MachineSettings::new(names, input.positions), ciphertext);
    let bytes = dispatch.to_cbor().expect("settings and text always encode");
    let decoded = Dispatch::from_cbor(&bytes).expect("own encoding decodes");
    assert_eq!(decoded, dispatch);

    let plaintext = receiver.encode_str(&decoded.text);
    assert_eq!(plaintext, input.message.to_ascii_uppercase());
});
