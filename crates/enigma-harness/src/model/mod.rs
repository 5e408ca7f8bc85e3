//! Reference models for model-based testing.
//!
//! The models capture what the machine and sessions must do, without
//! sharing any code with the real implementation. They are the oracle the
//! real implementation is checked against.
//!
//! # Design Principles
//!
//! - Simplicity: The model should be obviously correct
//! - Independence: No wiring tables, no stepping loop, no CBOR
//! - Deterministic: Same inputs produce same outputs

mod mechanism;
pub mod operation;
mod world;

pub use mechanism::ModelMechanism;
pub use operation::{Operation, OperationError, OperationResult};
pub use world::ModelWorld;
