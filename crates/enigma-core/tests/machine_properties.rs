//! Property tests for the cipher engine.
//!
//! Every configuration is generated from the registry, so construction is
//! expected to succeed and the properties are checked on the encoded output.

use enigma_core::{MAX_ROTORS, MIN_ROTORS, Machine, registry};
use proptest::prelude::*;

/// Rotor selection plus start positions no longer than the stack.
fn settings_strategy() -> impl Strategy<Value = (Vec<&'static str>, String)> {
    let names: Vec<&'static str> = registry::names().collect();
    prop::collection::vec(prop::sample::select(names), MIN_ROTORS..=MAX_ROTORS).prop_flat_map(
        |rotors| {
            let len = rotors.len();
            ("[A-Za-z]{0,5}".prop_map(move |p| p.chars().take(len).collect::<String>()))
                .prop_map(move |positions| (rotors.clone(), positions))
        },
    )
}

fn build(rotors: &[&str], positions: &str) -> Machine {
    Machine::new(rotors, positions).expect("registry settings are valid")
}

proptest! {
    /// Encoding twice with identically configured machines is the identity
    /// on uppercase letters.
    #[test]
    fn prop_self_reciprocal(
        (rotors, positions) in settings_strategy(),
        message in "[A-Z]{0,200}",
    ) {
        let ciphertext = build(&rotors, &positions).encode_str(&message);
        let plaintext = build(&rotors, &positions).encode_str(&ciphertext);
        prop_assert_eq!(plaintext, message);
    }

    /// Output has the input's length and non-letters stay in place.
    #[test]
    fn prop_length_and_passthrough(
        (rotors, positions) in settings_strategy(),
        message in any::<String>(),
    ) {
        let output = build(&rotors, &positions).encode_str(&message);

        prop_assert_eq!(output.chars().count(), message.chars().count());
        for (i, o) in message.chars().zip(output.chars()) {
            if i.is_ascii_alphabetic() {
                prop_assert!(o.is_ascii_uppercase());
            } else {
                prop_assert_eq!(o, i);
            }
        }
    }

    /// Lowercase input encodes as its uppercase form.
    #[test]
    fn prop_case_folding(
        (rotors, positions) in settings_strategy(),
        message in "[a-zA-Z ]{0,100}",
    ) {
        let folded = build(&rotors, &positions).encode_str(&message);
        let upper = build(&rotors, &positions).encode_str(&message.to_ascii_uppercase());
        prop_assert_eq!(folded, upper);
    }

    /// Offsets depend only on the number of letters consumed.
    #[test]
    fn prop_mechanism_determinism(
        (rotors, positions) in settings_strategy(),
        a in "[A-Za-z0-9 .,]{0,80}",
        shift in 1u8..26,
        noise in "[0-9 .,]{0,20}",
    ) {
        // Same number of letters as `a`, but different letters and extra
        // punctuation.
        let b: String = a
            .chars()
            .map(|c| match c {
                'A'..='Z' => char::from(b'A' + (c as u8 - b'A' + shift) % 26),
                'a'..='z' => char::from(b'a' + (c as u8 - b'a' + shift) % 26),
                other => other,
            })
            .chain(noise.chars())
            .collect();

        let mut first = build(&rotors, &positions);
        let mut second = build(&rotors, &positions);
        first.encode_str(&a);
        second.encode_str(&b);

        prop_assert_eq!(first.offsets(), second.offsets());
    }

    /// No letter ever encodes to itself.
    #[test]
    fn prop_no_letter_maps_to_itself(
        (rotors, positions) in settings_strategy(),
        message in "[A-Z]{1,100}",
    ) {
        let output = build(&rotors, &positions).encode_str(&message);
        for (i, o) in message.chars().zip(output.chars()) {
            prop_assert_ne!(i, o);
        }
    }

    /// `reset` puts a used machine back in its freshly built state.
    #[test]
    fn prop_reset_matches_fresh(
        (rotors, positions) in settings_strategy(),
        warmup in "[A-Z]{0,60}",
        message in "[A-Z]{0,60}",
    ) {
        let mut used = build(&rotors, &positions);
        used.encode_str(&warmup);
        used.reset();

        let expected = build(&rotors, &positions).encode_str(&message);
        prop_assert_eq!(used.encode_str(&message), expected);
    }
}

#[test]
fn known_ciphertext() {
    let mut machine = build(&["I", "II", "III"], "AAA");
    assert_eq!(machine.encode_str("AAAAA"), "BDZGO");

    let mut machine = build(&["I", "II", "III"], "AAA");
    assert_eq!(machine.encode_str("Hello world"), "ILBDA AMTAZ");

    let mut decoder = build(&["I", "II", "III"], "AAA");
    assert_eq!(decoder.encode_str("ILBDA AMTAZ"), "HELLO WORLD");
}

#[test]
fn offsets_wrap_after_full_revolution() {
    let mut machine = build(&["I", "II", "III"], "AAA");
    for _ in 0..26 {
        machine.advance_mechanism();
    }
    // III passed its notch once on the way round and kicked II.
    assert_eq!(machine.positions(), "ABA");
}
