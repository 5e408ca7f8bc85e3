//! Command-line front end.
//!
//! ```text
//! enigma encode   --rotors I,II,III --positions AAA "Hello world"
//! enigma dispatch --rotors IV,I,V --positions QEV "Attack at dawn"
//! enigma receive  <hex>
//! ```
//!
//! `encode` is its own inverse: run the ciphertext through the same
//! settings to read it. `dispatch` packs the ciphertext and settings into a
//! hex-encoded CBOR payload that `receive` turns into a report.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;

use std::io::{BufRead, Write};

use clap::{Args, Parser, Subcommand};
use enigma_client::{
    Decision, ReceiverAction, ReceiverEvent, Receiver, Sender, SenderAction, SenderEvent,
};
use enigma_core::Machine;
use enigma_proto::{Dispatch, MachineSettings};
pub use error::CliError;
use tracing::info;

/// Rotor cipher machine
#[derive(Parser, Debug)]
#[command(name = "enigma")]
#[command(about = "Rotor cipher machine with reflector")]
#[command(version)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: String,

    /// What to do
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode (or decode) text; reads stdin when TEXT is absent
    Encode {
        /// Machine settings
        #[command(flatten)]
        settings: SettingsArgs,

        /// Text to encode
        text: Option<String>,
    },

    /// Encode text and print the dispatch payload as hex
    Dispatch {
        /// Machine settings
        #[command(flatten)]
        settings: SettingsArgs,

        /// Message to send
        text: String,
    },

    /// Decrypt a hex dispatch payload and print the report
    Receive {
        /// Hex-encoded CBOR dispatch
        payload: String,
    },
}

/// Rotor selection and start positions.
#[derive(Args, Debug, Clone)]
pub struct SettingsArgs {
    /// Rotor names, left to right
    #[arg(short, long, value_delimiter = ',', default_value = "I,II,III")]
    pub rotors: Vec<String>,

    /// Start letter for each rotor, left to right
    #[arg(short, long, default_value = "AAA")]
    pub positions: String,
}

impl From<SettingsArgs> for MachineSettings {
    fn from(args: SettingsArgs) -> Self {
        Self::new(args.rotors, args.positions)
    }
}

/// Execute a command, reading from `input` when it needs text from stdin.
pub fn run<R: BufRead, W: Write>(
    command: Command,
    input: R,
    output: &mut W,
) -> Result<(), CliError> {
    match command {
        Command::Encode { settings, text } => encode(settings.into(), text, input, output),
        Command::Dispatch { settings, text } => dispatch(settings.into(), &text, output),
        Command::Receive { payload } => receive(&payload, output),
    }
}

fn encode<R: BufRead, W: Write>(
    settings: MachineSettings,
    text: Option<String>,
    input: R,
    output: &mut W,
) -> Result<(), CliError> {
    let mut machine = Machine::new(settings.rotors.as_slice(), &settings.positions)?;

    if let Some(text) = text {
        writeln!(output, "{}", machine.encode_str(&text))?;
        return Ok(());
    }

    // Newlines do not move the rotors, so line-by-line output is the same
    // as encoding the whole input at once.
    for line in input.lines() {
        writeln!(output, "{}", machine.encode_str(&line?))?;
    }
    Ok(())
}

fn dispatch<W: Write>(settings: MachineSettings, text: &str, output: &mut W) -> Result<(), CliError> {
    let mut sender = Sender::new(settings)?;

    for c in text.chars() {
        sender.handle(SenderEvent::Key(c))?;
    }

    let prompted = sender.handle(SenderEvent::Submit)?;
    if prompted.is_empty() {
        return Err(CliError::EmptyMessage);
    }

    for action in sender.handle(SenderEvent::Confirm(true))? {
        if let SenderAction::Send(dispatch) = action {
            let bytes = dispatch.to_cbor()?;
            info!(bytes = bytes.len(), "dispatch encoded");
            writeln!(output, "{}", hex::encode(bytes))?;
        }
    }
    Ok(())
}

fn receive<W: Write>(payload: &str, output: &mut W) -> Result<(), CliError> {
    let bytes = hex::decode(payload.trim())?;
    let dispatch = Dispatch::from_cbor(&bytes)?;

    let mut receiver = Receiver::new();
    receiver.handle(ReceiverEvent::DispatchReceived(dispatch))?;

    for action in receiver.handle(ReceiverEvent::Decide(Decision::Decrypt))? {
        if let ReceiverAction::Deliver(report) = action {
            writeln!(output, "{report}")?;
        }
    }
    Ok(())
}
