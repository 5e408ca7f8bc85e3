//! Enigma Protocol
//!
//! Payloads exchanged between a sending and a receiving device. A dispatch
//! carries the ciphertext together with the machine settings needed to read
//! it; the link that moves the bytes is not part of this crate.
//!
//! Payloads are encoded as CBOR.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod error;
pub mod payloads;

pub use error::ProtoError;
pub use payloads::dispatch::{Dispatch, MachineSettings};
