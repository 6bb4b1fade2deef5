//! Interactive session
//!
//! A menu loop over three choices: paste a claim, load one from a text file,
//! or exit. Empty input sends the operator back to the menu with a warning;
//! an interrupt ends the session.
//!
//! Prompts in raw terminal mode report Ctrl-C as an `Interrupted` I/O error.
//! Line reads in cooked mode (pasted text, the Enter pause) receive SIGINT
//! instead, which the handler from [`install_interrupt_handler`] turns into
//! the same goodbye.

use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;
use console::Term;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use tracing::warn;

use crate::app::Copilot;
use crate::error::CliError;
use crate::input::{read_text_file, read_until_marker, END_MARKER};

const MENU_ITEMS: [&str; 3] = ["Paste claim text", "Load claim from .txt file", "Exit"];

/// Farewell printed when the operator interrupts the session
pub const INTERRUPT_GOODBYE: &str = "[Interrupted] Exiting Claim Copilot. Goodbye!";

/// What the operator asked for
enum Choice {
    Paste,
    LoadFile,
    Exit,
}

/// Runs the menu until the operator exits or interrupts
pub fn run_interactive(copilot: &Copilot) -> Result<(), CliError> {
    install_interrupt_handler()?;
    let term = Term::stdout();
    print_banner(&term)?;

    loop {
        match session_step(copilot, &term) {
            Ok(true) => continue,
            Ok(false) => {
                println!("{}", "Exiting. Goodbye!".bright_blue());
                return Ok(());
            }
            Err(e) if e.is_interrupt() => {
                write_interrupt_goodbye(&mut io::stdout())?;
                return Ok(());
            }
            Err(e) => return Err(e),
        }
    }
}

/// Exits the process with the interrupt goodbye on SIGINT
///
/// Installing twice is a no-op.
pub fn install_interrupt_handler() -> Result<(), CliError> {
    let installed = ctrlc::set_handler(|| {
        let _ = Term::stdout().show_cursor();
        let _ = write_interrupt_goodbye(&mut io::stdout());
        std::process::exit(0);
    });

    match installed {
        Ok(()) | Err(ctrlc::Error::MultipleHandlers) => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// Writes the interrupt farewell on a fresh line
pub fn write_interrupt_goodbye(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", INTERRUPT_GOODBYE.bright_blue())?;
    out.flush()
}

/// One menu round; `Ok(false)` means exit
fn session_step(copilot: &Copilot, term: &Term) -> Result<bool, CliError> {
    println!();
    let choice = match prompt_choice(term)? {
        Some(choice) => choice,
        None => Choice::Exit,
    };

    let text = match choice {
        Choice::Exit => return Ok(false),
        Choice::Paste => read_pasted()?,
        Choice::LoadFile => match read_from_prompted_path()? {
            Some(text) => text,
            None => return Ok(true),
        },
    };

    if text.trim().is_empty() {
        println!("{}", "[Warning] No claim text entered. Try again.".yellow());
        return Ok(true);
    }

    let mut stdout = io::stdout().lock();
    copilot.process(&text, &mut stdout)?;
    stdout.flush()?;
    drop(stdout);

    pause(term)?;
    Ok(true)
}

fn prompt_choice(term: &Term) -> Result<Option<Choice>, CliError> {
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("What would you like to do?")
        .items(&MENU_ITEMS)
        .default(0)
        .interact_on_opt(term)?;

    Ok(selection.map(|index| match index {
        0 => Choice::Paste,
        1 => Choice::LoadFile,
        _ => Choice::Exit,
    }))
}

fn read_pasted() -> Result<String, CliError> {
    println!();
    println!("Paste your claim text below.");
    println!(
        "When you're done, type '{}' on a new line and press Enter.",
        END_MARKER.bold()
    );
    println!("{}", "-".repeat(60).dimmed());
    Ok(read_until_marker(io::stdin().lock())?)
}

/// Asks for a path and reads it; `None` when there is nothing to process
fn read_from_prompted_path() -> Result<Option<String>, CliError> {
    let path: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Path to .txt file")
        .allow_empty(true)
        .interact_text()?;
    let path = path.trim();

    if path.is_empty() {
        println!("{}", "[Warning] No path entered. Try again.".yellow());
        return Ok(None);
    }

    match read_text_file(Path::new(path)) {
        Ok(text) => Ok(Some(text)),
        Err(e) => {
            warn!(path, error = %e, "Could not read claim file");
            println!("{} {}", "[Error] Could not read file:".bright_red(), e);
            Ok(None)
        }
    }
}

fn pause(term: &Term) -> Result<(), CliError> {
    println!();
    println!("{}", "[Press Enter to return to the main menu]".dimmed());
    term.read_line()?;
    Ok(())
}

fn print_banner(term: &Term) -> Result<(), CliError> {
    term.clear_screen()?;
    println!("{}", "╔════════════════════════════════════════╗".bright_cyan());
    println!("{}", "║     Claim Copilot - Claim Intake       ║".bright_cyan());
    println!("{}", "╚════════════════════════════════════════╝".bright_cyan());
    println!("If no API key is set, language-model answers show '[LLM disabled]'.");
    println!();
    Ok(())
}
