//! Receiving session.
//!
//! Incoming dispatches wait for an operator decision. Decrypting builds a
//! fresh machine from the settings carried by the dispatch; the receiver
//! keeps no machine of its own between messages.

use enigma_core::Machine;
use enigma_proto::Dispatch;
use tracing::{debug, warn};

use crate::{
    error::SessionError,
    event::{Decision, ReceiverAction, ReceiverEvent, Report},
};

/// Receiving session state machine.
///
/// Pure state machine - returns actions, caller handles I/O.
#[derive(Debug, Clone, Default)]
pub struct Receiver {
    /// Dispatch waiting for a decision.
    pending: Option<Dispatch>,
}

impl Receiver {
    /// Create an idle receiver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatch waiting for a decision, if any.
    pub fn pending(&self) -> Option<&Dispatch> {
        self.pending.as_ref()
    }

    /// Process an event and return resulting actions.
    ///
    /// # Errors
    ///
    /// - `SessionError::InvalidState` for a decision with nothing pending
    /// - `SessionError::Config` if the pending dispatch carries settings the
    ///   engine rejects; the dispatch is dropped
    pub fn handle(&mut self, event: ReceiverEvent) -> Result<Vec<ReceiverAction>, SessionError> {
        match event {
            ReceiverEvent::DispatchReceived(dispatch) => Ok(self.handle_dispatch(dispatch)),
            ReceiverEvent::Decide(decision) => self.handle_decision(decision),
        }
    }

    /// Hold the dispatch and prompt. A newer dispatch replaces an older one.
    fn handle_dispatch(&mut self, dispatch: Dispatch) -> Vec<ReceiverAction> {
        let ciphertext = dispatch.text.clone();
        if self.pending.replace(dispatch).is_some() {
            warn!("undecided dispatch replaced by a newer one");
        }

        vec![ReceiverAction::Prompt { ciphertext }]
    }

    fn handle_decision(&mut self, decision: Decision) -> Result<Vec<ReceiverAction>, SessionError> {
        let dispatch = self.pending.take().ok_or_else(|| SessionError::InvalidState {
            reason: "decision without a pending dispatch".to_string(),
        })?;

        match decision {
            Decision::Ignore => {
                debug!("dispatch ignored");
                Ok(vec![ReceiverAction::Ignored])
            },
            Decision::Decrypt => {
                let settings = dispatch.settings;
                let mut machine =
                    Machine::new(settings.rotors.as_slice(), &settings.positions)?;
                let plaintext = machine.encode_str(&dispatch.text);
                debug!(len = plaintext.chars().count(), "dispatch decrypted");

                Ok(vec![ReceiverAction::Deliver(Report {
                    settings,
                    ciphertext: dispatch.text,
                    plaintext,
                })])
            },
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use enigma_core::ConfigError;
    use enigma_proto::MachineSettings;

    use super::*;

    fn dispatch(text: &str) -> Dispatch {
        Dispatch::new(MachineSettings::default(), text)
    }

    #[test]
    fn dispatch_prompts() {
        let mut receiver = Receiver::new();
        let actions = receiver.handle(ReceiverEvent::DispatchReceived(dispatch("ILBDA"))).unwrap();

        assert_eq!(actions, vec![ReceiverAction::Prompt { ciphertext: "ILBDA".to_string() }]);
        assert!(receiver.pending().is_some());
    }

    #[test]
    fn decrypt_delivers_report() {
        let mut receiver = Receiver::new();
        receiver.handle(ReceiverEvent::DispatchReceived(dispatch("ILBDA AMTAZ"))).unwrap();

        let actions = receiver.handle(ReceiverEvent::Decide(Decision::Decrypt)).unwrap();
        let expected = Report {
            settings: MachineSettings::default(),
            ciphertext: "ILBDA AMTAZ".to_string(),
            plaintext: "HELLO WORLD".to_string(),
        };
        assert_eq!(actions, vec![ReceiverAction::Deliver(expected)]);
        assert!(receiver.pending().is_none());
    }

    #[test]
    fn ignore_drops_dispatch() {
        let mut receiver = Receiver::new();
        receiver.handle(ReceiverEvent::DispatchReceived(dispatch("ILBDA"))).unwrap();

        let actions = receiver.handle(ReceiverEvent::Decide(Decision::Ignore)).unwrap();
        assert_eq!(actions, vec![ReceiverAction::Ignored]);
        assert!(receiver.pending().is_none());
    }

    #[test]
    fn decision_without_dispatch_rejected() {
        let mut receiver = Receiver::new();
        let result = receiver.handle(ReceiverEvent::Decide(Decision::Decrypt));
        assert!(matches!(result, Err(SessionError::InvalidState { .. })));
    }

    #[test]
    fn newer_dispatch_replaces_pending() {
        let mut receiver = Receiver::new();
        receiver.handle(ReceiverEvent::DispatchReceived(dispatch("OLD"))).unwrap();
        receiver.handle(ReceiverEvent::DispatchReceived(dispatch("NEW"))).unwrap();

        assert_eq!(receiver.pending().map(|d| d.text.as_str()), Some("NEW"));
    }

    #[test]
    fn bad_settings_drop_dispatch() {
        let mut receiver = Receiver::new();
        let bad = Dispatch::new(MachineSettings::new(["I", "II", "VI"], "AAA"), "XYZ");
        receiver.handle(ReceiverEvent::DispatchReceived(bad)).unwrap();

        let result = receiver.handle(ReceiverEvent::Decide(Decision::Decrypt));
        assert_eq!(
            result.unwrap_err(),
            SessionError::Config(ConfigError::UnknownRotor { name: "VI".to_string() })
        );
        assert!(receiver.pending().is_none());
    }

    #[test]
    fn receiver_accepts_duplicate_rotors() {
        // Only the sending side enforces distinct rotors.
        let mut receiver = Receiver::new();
        let settings = MachineSettings::new(["II", "II", "II"], "ABC");
        let ciphertext = Machine::new(settings.rotors.as_slice(), &settings.positions)
            .unwrap()
            .encode_str("SAME ROTORS");
        receiver.handle(ReceiverEvent::DispatchReceived(Dispatch::new(settings, ciphertext))).unwrap();

        let actions = receiver.handle(ReceiverEvent::Decide(Decision::Decrypt)).unwrap();
        match &actions[..] {
            [ReceiverAction::Deliver(report)] => assert_eq!(report.plaintext, "SAME ROTORS"),
            other => panic!("expected a single delivery, got {other:?}"),
        }
    }
}
