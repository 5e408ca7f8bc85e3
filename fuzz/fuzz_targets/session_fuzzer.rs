//! Fuzz target for the sender and receiver sessions
//!
//! Drives real sessions and the reference model with the same operation
//! sequence and requires identical results.
//!
//! # Invariants
//!
//! - Every operation result matches the model
//! - Every decrypted dispatch reads as the uppercased text that was typed
//! - Out-of-state events return `InvalidState`, NEVER panic

#![no_main]

use std::collections::VecDeque;

use arbitrary::Arbitrary;
use enigma_client::{
    Decision, Dispatch, MachineSettings, Receiver, ReceiverAction, ReceiverEvent, Sender,
    SenderAction, SenderEvent, SessionError,
};
use enigma_core::registry;
use enigma_harness::{ModelWorld, Operation, OperationError, OperationResult};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, Arbitrary)]
struct Input {
    /// Rotor picks; duplicates are dropped.
    rotors: [u8; 5],
    positions: [u8; 5],
    ops: Vec<Operation>,
}

fn settings(input: &Input) -> MachineSettings {
    let all: Vec<&str> = registry::names().collect();
    let mut names: Vec<&str> = Vec::new();
    for pick in input.rotors {
        let name = all[usize::from(pick) % all.len()];
        if !names.contains(&name) {
            names.push(name);
        }
    }
    for name in &all {
        if names.len() >= 3 {
            break;
        }
        if !names.contains(name) {
            names.push(name);
        }
    }

    let positions: String =
        input.positions[..names.len()].iter().map(|b| char::from(b'A' + b % 26)).collect();
    MachineSettings::new(names, positions)
}

fn sender_result(result: Result<Vec<SenderAction>, SessionError>, link: &mut VecDeque<Vec<u8>>) -> OperationResult {
    match result {
        Ok(actions) => {
            for action in actions {
                if let SenderAction::Send(dispatch) = action {
                    link.push_back(dispatch.to_cbor().expect("encode"));
                }
            }
            OperationResult::Ok
        },
        Err(SessionError::InvalidState { .. }) => OperationResult::Error(OperationError::InvalidState),
        Err(e) => panic!("unexpected sender error: {e}"),
    }
}

fuzz_target!(|input: Input| {
    let mut sender = Sender::new(settings(&input)).expect("distinct registry rotors");
    let mut receiver = Receiver::new();
    let mut link = VecDeque::new();
    let mut model = ModelWorld::new();

    for op in &input.ops {
        let real = match op {
            Operation::Key { code } => {
                sender_result(sender.handle(SenderEvent::Key(Operation::key_char(*code))), &mut link)
            },
            Operation::Submit => sender_result(sender.handle(SenderEvent::Submit), &mut link),
            Operation::Confirm { accept } => {
                sender_result(sender.handle(SenderEvent::Confirm(*accept)), &mut link)
            },
            Operation::Clear => sender_result(sender.handle(SenderEvent::Clear), &mut link),
            Operation::Deliver => match link.pop_front() {
                Some(bytes) => {
                    let dispatch = Dispatch::from_cbor(&bytes).expect("decode");
                    receiver.handle(ReceiverEvent::DispatchReceived(dispatch)).expect("accepted");
                    OperationResult::Ok
                },
                None => OperationResult::Error(OperationError::NothingInFlight),
            },
            Operation::Decide { decrypt } => {
                let decision = if *decrypt { Decision::Decrypt } else { Decision::Ignore };
                match receiver.handle(ReceiverEvent::Decide(decision)) {
                    Ok(actions) => match actions.into_iter().next() {
                        Some(ReceiverAction::Deliver(report)) => {
                            OperationResult::Delivered { plaintext: report.plaintext }
                        },
                        _ => OperationResult::Ok,
                    },
                    Err(SessionError::InvalidState { .. }) => {
                        OperationResult::Error(OperationError::InvalidState)
                    },
                    Err(e) => panic!("unexpected receiver error: {e}"),
                }
            },
        };

        assert_eq!(model.apply(op), real, "divergence on {op:?}");
    }
});
