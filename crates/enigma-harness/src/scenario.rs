//! Seeded scenarios.
//!
//! A [`Scenario`] is fully determined by its seed: the rotor selection,
//! start positions and message texts all come from a `ChaCha8` stream.

use enigma_core::{MAX_ROTORS, MIN_ROTORS, registry};
use enigma_proto::MachineSettings;
use rand::{Rng, SeedableRng, seq::SliceRandom};
use rand_chacha::ChaCha8Rng;

use crate::model::Operation;

/// Longest generated message, in characters.
pub const MAX_MESSAGE_LEN: usize = 64;

/// Settings and messages for one reproducible run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    /// Seed this scenario was generated from.
    pub seed: u64,
    /// Distinct registry rotors and a start letter for each.
    pub settings: MachineSettings,
    /// Printable ASCII messages, each non-empty.
    pub messages: Vec<String>,
}

impl Scenario {
    /// Generate a scenario with `message_count` messages.
    pub fn generate(seed: u64, message_count: usize) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let mut names: Vec<&str> = registry::names().collect();
        names.shuffle(&mut rng);
        let count = rng.gen_range(MIN_ROTORS..=MAX_ROTORS.min(names.len()));
        names.truncate(count);

        let positions: String = (0..count).map(|_| random_letter(&mut rng)).collect();
        let messages = (0..message_count).map(|_| random_message(&mut rng)).collect();

        Self { seed, settings: MachineSettings::new(names, positions), messages }
    }

    /// Operations that type, send, deliver and decrypt every message in
    /// order.
    pub fn script(&self) -> Vec<Operation> {
        self.messages
            .iter()
            .flat_map(|message| {
                message
                    .bytes()
                    .map(|code| Operation::Key { code })
                    .chain([
                        Operation::Submit,
                        Operation::Confirm { accept: true },
                        Operation::Deliver,
                        Operation::Decide { decrypt: true },
                    ])
            })
            .collect()
    }
}

fn random_letter(rng: &mut ChaCha8Rng) -> char {
    char::from(rng.gen_range(b'A'..=b'Z'))
}

fn random_message(rng: &mut ChaCha8Rng) -> String {
    let len = rng.gen_range(1..=MAX_MESSAGE_LEN);
    (0..len).map(|_| char::from(rng.gen_range(b' '..=b'~'))).collect()
}
