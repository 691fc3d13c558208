//! Income and expense CLI commands
//!
//! Implements `income add` and `expense add`, and the shared entry logic the
//! interactive shell uses for menu options 1 and 2.

use std::io::Write;

use clap::Subcommand;

use super::session::Session;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Money, Record};
use crate::services::ledger::{add_expense, add_income};

/// Which side of the ledger an entry goes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Income,
    Expense,
}

impl EntryKind {
    /// Lowercase label used in messages
    pub fn label(&self) -> &'static str {
        match self {
            EntryKind::Income => "income",
            EntryKind::Expense => "expense",
        }
    }

    /// Capitalized label used in headings
    pub fn title(&self) -> &'static str {
        match self {
            EntryKind::Income => "Income",
            EntryKind::Expense => "Expense",
        }
    }

    /// Category suggestions from the user's settings
    pub fn suggestions<'a>(&self, session: &'a Session) -> &'a [String] {
        match self {
            EntryKind::Income => &session.settings().income_categories,
            EntryKind::Expense => &session.settings().expense_categories,
        }
    }
}

/// Entry subcommands, shared by `income` and `expense`
#[derive(Subcommand)]
pub enum EntryCommands {
    /// Record a new entry dated now
    Add {
        /// Amount (e.g., "120" or "120.50"); must be positive
        #[arg(allow_hyphen_values = true)]
        amount: String,

        /// Category (defaults to "other")
        #[arg(short, long, default_value = "")]
        category: String,

        /// Free-text description
        #[arg(short, long, default_value = "")]
        description: String,
    },
}

/// Parse a user-entered amount
pub fn parse_amount(input: &str) -> BudgetResult<Money> {
    Money::parse(input).map_err(|_| {
        BudgetError::InvalidAmount(format!("'{}' is not a number", input.trim()))
    })
}

/// Append an entry to the session's ledger
pub fn add_entry<'a>(
    session: &'a mut Session,
    kind: EntryKind,
    amount: Money,
    category: &str,
    description: &str,
) -> BudgetResult<&'a Record> {
    let ledger = session.ledger_mut();
    match kind {
        EntryKind::Income => add_income(ledger, amount, category, description),
        EntryKind::Expense => add_expense(ledger, amount, category, description),
    }
}

/// Handle an `income` or `expense` command
///
/// The ledger is saved right after the entry is added; a failed save is an
/// error here since there is no session left to keep the entry in.
pub fn handle_entry_command<W: Write>(
    session: &mut Session,
    kind: EntryKind,
    cmd: EntryCommands,
    out: &mut W,
) -> BudgetResult<()> {
    match cmd {
        EntryCommands::Add {
            amount,
            category,
            description,
        } => {
            let amount = parse_amount(&amount)?;
            let (amount, category) = {
                let record = add_entry(session, kind, amount, &category, &description)?;
                (record.amount(), record.category().to_string())
            };

            session.save()?;
            writeln!(
                out,
                "{} of {} added ({}).",
                kind.title(),
                amount.format_with_symbol(session.symbol()),
                category
            )?;
        }
    }

    Ok(())
}
