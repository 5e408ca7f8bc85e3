//! Sending session.
//!
//! The operator types a message one character at a time. Each printable
//! character is encrypted immediately; on confirmation the ciphertext is
//! packed into a [`Dispatch`] and the machine goes back to its start
//! position, so every dispatch can be read by a freshly built machine.

use std::collections::HashSet;

use enigma_core::Machine;
use enigma_proto::{Dispatch, MachineSettings};
use tracing::debug;

use crate::{
    error::SessionError,
    event::{SenderAction, SenderEvent},
};

/// Number of plaintext characters shown in the confirmation prompt.
pub const PREVIEW_LEN: usize = 10;

/// Where the sending session is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SenderState {
    /// Accepting key presses.
    Composing,
    /// Waiting for the operator to confirm or decline sending.
    Confirming,
}

/// Sending session state machine.
///
/// Pure state machine - returns actions, caller handles I/O.
#[derive(Debug, Clone)]
pub struct Sender {
    settings: MachineSettings,
    machine: Machine,
    plaintext: String,
    ciphertext: String,
    state: SenderState,
}

impl Sender {
    /// Start a session with the given settings.
    ///
    /// # Errors
    ///
    /// - `SessionError::DuplicateRotor` if a rotor name appears twice
    /// - `SessionError::Config` if the engine rejects the settings
    pub fn new(settings: MachineSettings) -> Result<Self, SessionError> {
        let mut seen = HashSet::new();
        if let Some(name) = settings.rotors.iter().find(|name| !seen.insert(name.as_str())) {
            return Err(SessionError::DuplicateRotor { name: name.clone() });
        }

        let machine = Machine::new(settings.rotors.as_slice(), &settings.positions)?;
        debug!(rotors = settings.rotors.len(), "sender session started");

        Ok(Self {
            settings,
            machine,
            plaintext: String::new(),
            ciphertext: String::new(),
            state: SenderState::Composing,
        })
    }

    /// Settings this session encrypts with.
    pub fn settings(&self) -> &MachineSettings {
        &self.settings
    }

    /// Current session state.
    pub fn state(&self) -> SenderState {
        self.state
    }

    /// Message typed so far.
    pub fn plaintext(&self) -> &str {
        &self.plaintext
    }

    /// Encryption of the message typed so far.
    pub fn ciphertext(&self) -> &str {
        &self.ciphertext
    }

    /// Current rotor offsets as letters.
    pub fn positions(&self) -> String {
        self.machine.positions()
    }

    /// Process an event and return resulting actions.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidState` if the event does not fit the
    /// current state. The session is left unchanged in that case.
    pub fn handle(&mut self, event: SenderEvent) -> Result<Vec<SenderAction>, SessionError> {
        match event {
            SenderEvent::Key(c) => self.handle_key(c),
            SenderEvent::Submit => self.handle_submit(),
            SenderEvent::Confirm(accept) => self.handle_confirm(accept),
            SenderEvent::Clear => self.handle_clear(),
        }
    }

    /// Encrypt a typed character. Only printable ASCII is taken.
    fn handle_key(&mut self, c: char) -> Result<Vec<SenderAction>, SessionError> {
        self.require_composing("key press while awaiting confirmation")?;

        if !(' '..='~').contains(&c) {
            return Ok(vec![]);
        }

        let cipher = self.machine.encode_char(c);
        self.plaintext.push(c);
        self.ciphertext.push(cipher);

        Ok(vec![SenderAction::Echo { plain: c, cipher }])
    }

    /// Ask for confirmation. Nothing to send means nothing to confirm.
    fn handle_submit(&mut self) -> Result<Vec<SenderAction>, SessionError> {
        self.require_composing("submit while awaiting confirmation")?;

        if self.ciphertext.is_empty() {
            return Ok(vec![]);
        }

        self.state = SenderState::Confirming;
        let preview = self.plaintext.chars().take(PREVIEW_LEN).collect();

        Ok(vec![SenderAction::ConfirmPrompt { preview }])
    }

    /// Send or go back to composing.
    fn handle_confirm(&mut self, accept: bool) -> Result<Vec<SenderAction>, SessionError> {
        if self.state != SenderState::Confirming {
            return Err(SessionError::InvalidState {
                reason: "confirmation without a pending message".to_string(),
            });
        }

        self.state = SenderState::Composing;

        if !accept {
            debug!("send declined");
            return Ok(vec![SenderAction::Cancelled]);
        }

        let text = std::mem::take(&mut self.ciphertext);
        self.plaintext.clear();
        self.machine.reset();
        debug!(len = text.chars().count(), "dispatch ready");

        Ok(vec![SenderAction::Send(Dispatch::new(self.settings.clone(), text))])
    }

    /// Drop the message and rewind the machine.
    fn handle_clear(&mut self) -> Result<Vec<SenderAction>, SessionError> {
        self.require_composing("clear while awaiting confirmation")?;

        self.plaintext.clear();
        self.ciphertext.clear();
        self.machine.reset();

        Ok(vec![SenderAction::Cleared])
    }

    fn require_composing(&self, reason: &str) -> Result<(), SessionError> {
        match self.state {
            SenderState::Composing => Ok(()),
            SenderState::Confirming => {
                Err(SessionError::InvalidState { reason: reason.to_string() })
            },
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use enigma_core::ConfigError;

    use super::*;

    fn sender() -> Sender {
        Sender::new(MachineSettings::default()).unwrap()
    }

    fn type_text(sender: &mut Sender, text: &str) {
        for c in text.chars() {
            sender.handle(SenderEvent::Key(c)).unwrap();
        }
    }

    #[test]
    fn key_echoes_encryption() {
        let mut sender = sender();
        let actions = sender.handle(SenderEvent::Key('A')).unwrap();

        assert_eq!(actions, vec![SenderAction::Echo { plain: 'A', cipher: 'B' }]);
        assert_eq!(sender.plaintext(), "A");
        assert_eq!(sender.ciphertext(), "B");
        assert_eq!(sender.positions(), "AAB");
    }

    #[test]
    fn control_characters_ignored() {
        let mut sender = sender();
        for c in ['\n', '\r', '\t', '\u{7f}', 'é'] {
            assert!(sender.handle(SenderEvent::Key(c)).unwrap().is_empty());
        }
        assert_eq!(sender.plaintext(), "");
        assert_eq!(sender.positions(), "AAA");
    }

    #[test]
    fn submit_empty_is_noop() {
        let mut sender = sender();
        assert!(sender.handle(SenderEvent::Submit).unwrap().is_empty());
        assert_eq!(sender.state(), SenderState::Composing);
    }

    #[test]
    fn submit_prompts_with_preview() {
        let mut sender = sender();
        type_text(&mut sender, "Hello world, long message");

        let actions = sender.handle(SenderEvent::Submit).unwrap();
        assert_eq!(actions, vec![SenderAction::ConfirmPrompt { preview: "Hello worl".to_string() }]);
        assert_eq!(sender.state(), SenderState::Confirming);
    }

    #[test]
    fn confirm_sends_and_rewinds() {
        let mut sender = sender();
        type_text(&mut sender, "Hello world");
        sender.handle(SenderEvent::Submit).unwrap();

        let actions = sender.handle(SenderEvent::Confirm(true)).unwrap();
        let expected = Dispatch::new(MachineSettings::default(), "ILBDA AMTAZ");
        assert_eq!(actions, vec![SenderAction::Send(expected)]);

        assert_eq!(sender.state(), SenderState::Composing);
        assert_eq!(sender.plaintext(), "");
        assert_eq!(sender.ciphertext(), "");
        assert_eq!(sender.positions(), "AAA");
    }

    #[test]
    fn decline_keeps_message() {
        let mut sender = sender();
        type_text(&mut sender, "draft");
        sender.handle(SenderEvent::Submit).unwrap();

        let actions = sender.handle(SenderEvent::Confirm(false)).unwrap();
        assert_eq!(actions, vec![SenderAction::Cancelled]);
        assert_eq!(sender.plaintext(), "draft");

        // Composing continues where it left off.
        type_text(&mut sender, "s");
        assert_eq!(sender.plaintext(), "drafts");
    }

    #[test]
    fn keys_rejected_while_confirming() {
        let mut sender = sender();
        type_text(&mut sender, "x");
        sender.handle(SenderEvent::Submit).unwrap();

        let result = sender.handle(SenderEvent::Key('y'));
        assert!(matches!(result, Err(SessionError::InvalidState { .. })));
        assert_eq!(sender.plaintext(), "x");

        assert!(sender.handle(SenderEvent::Clear).is_err());
        assert!(sender.handle(SenderEvent::Submit).is_err());
    }

    #[test]
    fn confirm_without_prompt_rejected() {
        let mut sender = sender();
        let result = sender.handle(SenderEvent::Confirm(true));
        assert!(matches!(result, Err(SessionError::InvalidState { .. })));
    }

    #[test]
    fn clear_rewinds_machine() {
        let mut sender = sender();
        type_text(&mut sender, "oops");
        let actions = sender.handle(SenderEvent::Clear).unwrap();

        assert_eq!(actions, vec![SenderAction::Cleared]);
        assert_eq!(sender.plaintext(), "");
        assert_eq!(sender.positions(), "AAA");

        let echo = sender.handle(SenderEvent::Key('A')).unwrap();
        assert_eq!(echo, vec![SenderAction::Echo { plain: 'A', cipher: 'B' }]);
    }

    #[test]
    fn duplicate_rotor_rejected() {
        let result = Sender::new(MachineSettings::new(["I", "III", "I"], "AAA"));
        assert_eq!(result.unwrap_err(), SessionError::DuplicateRotor { name: "I".to_string() });
    }

    #[test]
    fn engine_validation_surfaces() {
        let result = Sender::new(MachineSettings::new(["I", "II"], "AA"));
        assert_eq!(
            result.unwrap_err(),
            SessionError::Config(ConfigError::RotorCount { actual: 2, min: 3, max: 5 })
        );
    }
}
