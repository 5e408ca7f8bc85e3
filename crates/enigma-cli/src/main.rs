//! Enigma command-line binary.
//!
//! # Usage
//!
//! ```bash
//! # Encode with the default I-II-III at AAA
//! enigma encode "Hello world"
//!
//! # Decode a file line by line with custom settings
//! enigma encode --rotors II,V,I,IV --positions MCKR < ciphertext.txt
//!
//! # Produce and read a dispatch payload
//! enigma receive "$(enigma dispatch 'Attack at dawn')"
//! ```

use std::io;

use clap::Parser;
use enigma_cli::{Cli, run};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    // Logs go to stderr so stdout carries only cipher output.
    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)).with(filter).init();

    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    run(cli.command, stdin, &mut stdout)?;

    Ok(())
}
