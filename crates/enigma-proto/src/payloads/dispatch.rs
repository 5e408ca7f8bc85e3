//! Ciphertext dispatch from sender to receiver.
//!
//! The receiver rebuilds a machine from the settings and runs the text back
//! through it. Settings travel as plain names and letters; validating them
//! is the machine's job.

use serde::{Deserialize, Serialize};

use crate::error::ProtoError;

/// Rotor selection and start positions.
///
/// # Security
///
/// - **Debug Redaction**: the start positions are the daily key. The
///   `Debug` impl only reports how many there are.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineSettings {
    /// Rotor names, left to right (e.g. `["I", "II", "III"]`).
    pub rotors: Vec<String>,
    /// Start letter per rotor, left to right.
    #[serde(rename = "pos")]
    pub positions: String,
}

impl MachineSettings {
    /// Settings from rotor names and a position string.
    pub fn new<I, S>(rotors: I, positions: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { rotors: rotors.into_iter().map(Into::into).collect(), positions: positions.into() }
    }

    /// Rotor names joined with dashes, e.g. `"I-II-III"`.
    pub fn rotor_label(&self) -> String {
        self.rotors.join("-")
    }
}

impl Default for MachineSettings {
    fn default() -> Self {
        Self::new(["I", "II", "III"], "AAA")
    }
}

impl std::fmt::Debug for MachineSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MachineSettings")
            .field("rotors", &self.rotors)
            .field("positions", &format!("<redacted {} letters>", self.positions.chars().count()))
            .finish()
    }
}

/// Ciphertext plus the settings it was produced with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dispatch {
    /// Machine settings for decryption.
    pub settings: MachineSettings,
    /// Ciphertext, same length as the plaintext.
    pub text: String,
}

impl Dispatch {
    /// Create a dispatch.
    pub fn new(settings: MachineSettings, text: impl Into<String>) -> Self {
        Self { settings, text: text.into() }
    }

    /// Encode as CBOR.
    pub fn to_cbor(&self) -> Result<Vec<u8>, ProtoError> {
        let mut bytes = Vec::new();
        ciborium::ser::into_writer(self, &mut bytes)
            .map_err(|e| ProtoError::Encode { reason: e.to_string() })?;
        Ok(bytes)
    }

    /// Decode from CBOR.
    pub fn from_cbor(bytes: &[u8]) -> Result<Self, ProtoError> {
        ciborium::de::from_reader(bytes).map_err(|e| ProtoError::Decode { reason: e.to_string() })
    }
}
