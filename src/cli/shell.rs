//! Interactive menu shell
//!
//! Numbered menu over the session's ledger. Every add is followed by a save
//! of the whole ledger, and leaving the shell by any route (menu option 5,
//! Ctrl-C or end of input) attempts a final save.

use std::io::Write;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{debug, error};

use super::entry::{add_entry, parse_amount, EntryKind};
use super::report::{handle_list_command, handle_summary_command};
use super::session::Session;
use crate::error::{BudgetError, BudgetResult};
use crate::models::Money;

/// One read from the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Line(String),
    /// Ctrl-C at the prompt
    Interrupted,
    /// Input stream closed (Ctrl-D or end of piped input)
    Eof,
}

/// Source of user input lines
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> BudgetResult<Input>;
}

/// Terminal input backed by rustyline
pub struct TerminalInput {
    editor: DefaultEditor,
}

impl TerminalInput {
    pub fn new() -> BudgetResult<Self> {
        let editor = DefaultEditor::new()
            .map_err(|e| BudgetError::Io(format!("Failed to open terminal: {}", e)))?;
        Ok(Self { editor })
    }
}

impl LineSource for TerminalInput {
    fn read_line(&mut self, prompt: &str) -> BudgetResult<Input> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Input::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(Input::Interrupted),
            Err(ReadlineError::Eof) => Ok(Input::Eof),
            Err(e) => Err(BudgetError::Io(format!("Failed to read input: {}", e))),
        }
    }
}

/// What the menu loop does after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopControl {
    Continue,
    /// Menu option 5
    Exit,
    /// Ctrl-C or end of input during any prompt
    Quit(QuitReason),
}

/// Why the user left without choosing option 5
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuitReason {
    Interrupted,
    Eof,
}

const MENU: &str = "\n========== PERSONAL BUDGET TRACKER ==========\n\
1. Add Income\n\
2. Add Expense\n\
3. View Summary\n\
4. View All Transactions\n\
5. Save and Exit\n\
(tip: expenses are stored positive and subtracted in the summary)\n\
=============================================";

/// Run the menu loop until the user leaves
pub fn run_shell<I: LineSource, W: Write>(
    session: &mut Session,
    input: &mut I,
    out: &mut W,
) -> BudgetResult<()> {
    writeln!(out, "Welcome to Personal Budget Tracker!")?;

    loop {
        writeln!(out, "{}", MENU)?;
        out.flush()?;

        let control = match input.read_line("Enter your choice (1-5): ") {
            Ok(Input::Line(line)) => handle_choice(session, input, out, line.trim()),
            Ok(Input::Interrupted) => Ok(LoopControl::Quit(QuitReason::Interrupted)),
            Ok(Input::Eof) => Ok(LoopControl::Quit(QuitReason::Eof)),
            Err(e) => Err(e),
        };

        match control {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => {
                writeln!(out, "Saving and exiting...")?;
                session.autosave(out)?;
                writeln!(out, "Goodbye!")?;
                return Ok(());
            }
            Ok(LoopControl::Quit(reason)) => {
                let what = match reason {
                    QuitReason::Interrupted => "Interrupted",
                    QuitReason::Eof => "End of input",
                };
                writeln!(out, "\n{}. Saving data and exiting...", what)?;
                session.autosave(out)?;
                return Ok(());
            }
            Err(e) => {
                // The terminal itself failed; keep the data before giving up
                error!(error = %e, "Shell stopped");
                let _ = session.save();
                return Err(e);
            }
        }
    }
}

fn handle_choice<I: LineSource, W: Write>(
    session: &mut Session,
    input: &mut I,
    out: &mut W,
    choice: &str,
) -> BudgetResult<LoopControl> {
    debug!(choice, "Menu choice");
    match choice {
        "1" => prompt_entry(session, input, out, EntryKind::Income),
        "2" => prompt_entry(session, input, out, EntryKind::Expense),
        "3" => {
            writeln!(out)?;
            handle_summary_command(session, None, out)?;
            Ok(LoopControl::Continue)
        }
        "4" => {
            writeln!(out)?;
            handle_list_command(session, out)?;
            Ok(LoopControl::Continue)
        }
        "5" => Ok(LoopControl::Exit),
        _ => {
            writeln!(out, "Invalid choice. Please enter 1-5.")?;
            Ok(LoopControl::Continue)
        }
    }
}

/// Read a line, turning Ctrl-C and end of input into a quit
fn prompt<I: LineSource>(input: &mut I, text: &str) -> BudgetResult<Result<String, QuitReason>> {
    Ok(match input.read_line(text)? {
        Input::Line(line) => Ok(line),
        Input::Interrupted => Err(QuitReason::Interrupted),
        Input::Eof => Err(QuitReason::Eof),
    })
}

fn prompt_entry<I: LineSource, W: Write>(
    session: &mut Session,
    input: &mut I,
    out: &mut W,
    kind: EntryKind,
) -> BudgetResult<LoopControl> {
    writeln!(out, "\n--- Add {} ---", kind.title())?;

    let raw_amount = match prompt(input, "Enter amount: ")? {
        Ok(line) => line,
        Err(reason) => return Ok(LoopControl::Quit(reason)),
    };
    let amount = match parse_amount(&raw_amount) {
        Ok(amount) if amount.exceeds_entry_limit() => {
            writeln!(
                out,
                "Amount is too large. The maximum is {}.",
                Money::MAX_ENTRY.format_with_symbol(session.symbol())
            )?;
            return Ok(LoopControl::Continue);
        }
        Ok(amount) if amount.is_positive() => amount,
        Ok(amount) if amount == Money::zero() && is_fraction_of_a_cent(&raw_amount) => {
            writeln!(out, "Amount is below one cent.")?;
            return Ok(LoopControl::Continue);
        }
        Ok(_) => {
            writeln!(out, "Amount must be positive.")?;
            return Ok(LoopControl::Continue);
        }
        Err(_) => {
            writeln!(out, "Invalid amount. Please enter a number.")?;
            return Ok(LoopControl::Continue);
        }
    };

    let category_prompt = format!(
        "Enter category ({}): ",
        kind.suggestions(session).join(", ")
    );
    let category = match prompt(input, &category_prompt)? {
        Ok(line) => line,
        Err(reason) => return Ok(LoopControl::Quit(reason)),
    };
    let description = match prompt(input, "Enter description: ")? {
        Ok(line) => line,
        Err(reason) => return Ok(LoopControl::Quit(reason)),
    };

    let added = add_entry(session, kind, amount, &category, &description).map(|_| ());
    match added {
        Ok(()) => {
            writeln!(
                out,
                "{} of {} added.",
                kind.title(),
                amount.format_with_symbol(session.symbol())
            )?;
            session.autosave(out)?;
        }
        Err(e) => writeln!(out, "Could not add {}: {}", kind.label(), e)?,
    }

    Ok(LoopControl::Continue)
}

/// A positive amount written out that still rounds to zero cents, e.g. "0.004"
fn is_fraction_of_a_cent(raw: &str) -> bool {
    let raw = raw.trim();
    !raw.starts_with('-') && raw.chars().any(|c| matches!(c, '1'..='9'))
}
