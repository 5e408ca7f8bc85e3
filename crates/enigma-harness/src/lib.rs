//! Test harness for the rotor cipher.
//!
//! # Model-Based Testing
//!
//! The `model` module holds reference implementations that are simple
//! enough to be obviously correct:
//!
//! - [`ModelMechanism`] predicts rotor offsets after any number of key
//!   presses with closed-form arithmetic, no step-by-step simulation
//! - [`ModelWorld`] predicts the outcome of every operation on a sender and
//!   receiver pair joined by a lossless link
//!
//! Operations are applied to both the model and the real sessions, and their
//! results are compared.
//!
//! # Scenarios
//!
//! [`Scenario`] expands a `u64` seed into machine settings and messages.
//! Same seed, same scenario, so failures replay exactly.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod model;
pub mod scenario;

pub use model::{ModelMechanism, ModelWorld, Operation, OperationError, OperationResult};
pub use scenario::Scenario;
