//! CLI commands for viewing the ledger
//!
//! `summary` and `list`, also used by menu options 3 and 4.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::session::Session;
use crate::display::format_ledger;
use crate::error::{BudgetError, BudgetResult};
use crate::reports::SummaryReport;

/// Print the summary, optionally also exporting it as CSV
pub fn handle_summary_command<W: Write>(
    session: &Session,
    output: Option<&Path>,
    out: &mut W,
) -> BudgetResult<()> {
    let report = SummaryReport::generate(session.ledger());
    write!(out, "{}", report.format_terminal(session.symbol()))?;

    if let Some(path) = output {
        let file = File::create(path).map_err(|e| {
            BudgetError::Export(format!("Failed to create {}: {}", path.display(), e))
        })?;
        report.export_csv(BufWriter::new(file))?;
        writeln!(out, "\nSummary exported to {}", path.display())?;
    }

    Ok(())
}

/// Print every income and expense record
pub fn handle_list_command<W: Write>(session: &Session, out: &mut W) -> BudgetResult<()> {
    write!(out, "{}", format_ledger(session.ledger(), session.symbol()))?;
    Ok(())
}
