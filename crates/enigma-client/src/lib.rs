//! Client
//!
//! Session state machines for a pair of cipher devices: one operator types
//! and sends, the other receives and decrypts.
//!
//! # Architecture
//!
//! Both sessions are pure state machines that:
//! - Receive events from the caller (key presses, confirmations, dispatches)
//! - Produce actions for the caller to execute (echo a character, transmit
//!   a dispatch, deliver a report)
//!
//! Keyboards, displays, radio links and notification services stay with the
//! caller.
//!
//! # Components
//!
//! - [`Sender`]: composes a message one key at a time and emits a
//!   [`Dispatch`] once the operator confirms
//! - [`Receiver`]: holds an incoming dispatch until the operator decides to
//!   decrypt or ignore it
//! - [`Report`]: decrypted message with its settings, ready for a
//!   notification channel

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod error;
mod event;
mod receiver;
mod sender;

pub use enigma_proto::{Dispatch, MachineSettings};
pub use error::SessionError;
pub use event::{Decision, ReceiverAction, ReceiverEvent, Report, SenderAction, SenderEvent};
pub use receiver::Receiver;
pub use sender::{PREVIEW_LEN, Sender, SenderState};
