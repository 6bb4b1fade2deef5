//! Interrupt handling for the interactive session

use std::io;

use interface_cli::menu::{install_interrupt_handler, write_interrupt_goodbye, INTERRUPT_GOODBYE};
use interface_cli::CliError;

#[test]
fn test_handler_installs_and_reinstalls() {
    assert!(install_interrupt_handler().is_ok());
    assert!(install_interrupt_handler().is_ok());
}

#[test]
fn test_goodbye_starts_on_a_fresh_line() {
    let mut out = Vec::new();

    write_interrupt_goodbye(&mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with('\n'));
    assert!(text.contains("Exiting Claim Copilot. Goodbye!"));
    assert!(INTERRUPT_GOODBYE.starts_with("[Interrupted]"));
}

#[test]
fn test_interrupted_reads_count_as_interrupts() {
    let read: CliError = io::Error::new(io::ErrorKind::Interrupted, "ctrl-c").into();
    assert!(read.is_interrupt());

    let prompt: CliError =
        dialoguer::Error::IO(io::Error::new(io::ErrorKind::Interrupted, "ctrl-c")).into();
    assert!(prompt.is_interrupt());

    let other: CliError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
    assert!(!other.is_interrupt());
}
