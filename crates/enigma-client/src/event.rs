//! Session events and actions.

use std::fmt;

use enigma_proto::{Dispatch, MachineSettings};

/// Events fed into a [`Sender`](crate::Sender).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SenderEvent {
    /// Operator typed a character.
    Key(char),
    /// Operator asked to send the composed message.
    Submit,
    /// Operator answered the send prompt.
    Confirm(bool),
    /// Operator wiped the composed message.
    Clear,
}

/// Actions produced by a [`Sender`](crate::Sender).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SenderAction {
    /// Show a typed character next to its encryption.
    Echo {
        /// Character as typed.
        plain: char,
        /// Character after the machine.
        cipher: char,
    },

    /// Ask the operator to confirm sending.
    ConfirmPrompt {
        /// Leading part of the plaintext.
        preview: String,
    },

    /// Transmit a dispatch to the paired receiver.
    Send(Dispatch),

    /// Sending was declined; the message is still being composed.
    Cancelled,

    /// The message was wiped and the machine returned to its start.
    Cleared,
}

/// Events fed into a [`Receiver`](crate::Receiver).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReceiverEvent {
    /// A dispatch arrived from the paired sender.
    DispatchReceived(Dispatch),
    /// Operator chose what to do with the pending dispatch.
    Decide(Decision),
}

/// Operator choice for a pending dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Decrypt and deliver.
    Decrypt,
    /// Drop without decrypting.
    Ignore,
}

/// Actions produced by a [`Receiver`](crate::Receiver).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReceiverAction {
    /// Tell the operator a dispatch is waiting.
    Prompt {
        /// Ciphertext as received.
        ciphertext: String,
    },

    /// Forward a decrypted report to the notification channel.
    Deliver(Report),

    /// The pending dispatch was dropped.
    Ignored,
}

/// A decrypted message with the settings used to read it.
///
/// `Display` renders the Markdown notification text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Settings the dispatch carried.
    pub settings: MachineSettings,
    /// Text as received.
    pub ciphertext: String,
    /// Text after decryption.
    pub plaintext: String,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "🔐 *ENIGMA DECRYPTED*")?;
        writeln!(f)?;
        writeln!(f, "⚙️ *Rotors:* `{}`", self.settings.rotor_label())?;
        writeln!(f, "📍 *Positions:* `{}`", self.settings.positions)?;
        writeln!(f)?;
        writeln!(f, "🔒 *Encrypted:* `{}`", self.ciphertext)?;
        write!(f, "🔓 *Decrypted:* `{}`", self.plaintext)
    }
}
