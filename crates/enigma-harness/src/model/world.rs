//! Model world - a sender, a receiver and the link between them.
//!
//! The model never encrypts. A dispatch in flight is represented by the
//! plaintext it must decrypt to: printable ASCII typed by the sender, with
//! letters uppercased.

use std::collections::VecDeque;

use super::operation::{Operation, OperationError, OperationResult};

/// Model world - the reference implementation.
#[derive(Debug, Clone, Default)]
pub struct ModelWorld {
    /// Characters the sender has accepted since the last send or clear.
    draft: String,
    /// Sender is waiting for a confirmation answer.
    confirming: bool,
    /// Expected plaintext of each dispatch on the link, oldest first.
    in_flight: VecDeque<String>,
    /// Expected plaintext of the dispatch awaiting a receiver decision.
    pending: Option<String>,
    /// Every plaintext the receiver has delivered, in order.
    delivered: Vec<String>,
}

impl ModelWorld {
    /// Create an idle world with an empty link.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sender's draft, as the receiver would read it.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Whether the sender is waiting for confirmation.
    pub fn is_confirming(&self) -> bool {
        self.confirming
    }

    /// Dispatches on the link.
    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    /// Plaintexts delivered so far.
    pub fn delivered(&self) -> &[String] {
        &self.delivered
    }

    /// Apply an operation and return the result.
    ///
    /// The result should match the real implementation's result.
    pub fn apply(&mut self, op: &Operation) -> OperationResult {
        match op {
            Operation::Key { code } => self.apply_key(Operation::key_char(*code)),
            Operation::Submit => self.apply_submit(),
            Operation::Confirm { accept } => self.apply_confirm(*accept),
            Operation::Clear => self.apply_clear(),
            Operation::Deliver => self.apply_deliver(),
            Operation::Decide { decrypt } => self.apply_decide(*decrypt),
        }
    }

    fn apply_key(&mut self, c: char) -> OperationResult {
        if self.confirming {
            return OperationResult::Error(OperationError::InvalidState);
        }
        if (' '..='~').contains(&c) {
            self.draft.push(c.to_ascii_uppercase());
        }
        OperationResult::Ok
    }

    fn apply_submit(&mut self) -> OperationResult {
        if self.confirming {
            return OperationResult::Error(OperationError::InvalidState);
        }
        self.confirming = !self.draft.is_empty();
        OperationResult::Ok
    }

    fn apply_confirm(&mut self, accept: bool) -> OperationResult {
        if !self.confirming {
            return OperationResult::Error(OperationError::InvalidState);
        }
        self.confirming = false;
        if accept {
            self.in_flight.push_back(std::mem::take(&mut self.draft));
        }
        OperationResult::Ok
    }

    fn apply_clear(&mut self) -> OperationResult {
        if self.confirming {
            return OperationResult::Error(OperationError::InvalidState);
        }
        self.draft.clear();
        OperationResult::Ok
    }

    fn apply_deliver(&mut self) -> OperationResult {
        match self.in_flight.pop_front() {
            Some(plaintext) => {
                self.pending = Some(plaintext);
                OperationResult::Ok
            },
            None => OperationResult::Error(OperationError::NothingInFlight),
        }
    }

    fn apply_decide(&mut self, decrypt: bool) -> OperationResult {
        let Some(plaintext) = self.pending.take() else {
            return OperationResult::Error(OperationError::InvalidState);
        };
        if !decrypt {
            return OperationResult::Ok;
        }
        self.delivered.push(plaintext.clone());
        OperationResult::Delivered { plaintext }
    }
}
