//! Payload types.

pub mod dispatch;
