//! `config` command
//!
//! Shows where the ledger and settings live, and writes out the default
//! `config.json` on first use so there is a file to edit.

use std::io::Write;

use tracing::info;

use super::session::Session;
use crate::config::BudgetPaths;
use crate::error::BudgetResult;

pub fn handle_config_command<W: Write>(
    session: &Session,
    paths: &BudgetPaths,
    out: &mut W,
) -> BudgetResult<()> {
    let settings = session.settings();
    let settings_file = paths.settings_file();

    writeln!(out, "Budget Tracker Configuration")?;
    writeln!(out, "============================")?;
    writeln!(out, "Data directory: {}", paths.base_dir().display())?;
    writeln!(out, "Ledger file:    {}", paths.ledger_file().display())?;
    writeln!(out, "Settings file:  {}", settings_file.display())?;

    if !settings_file.exists() {
        settings.save(paths)?;
        info!(path = %settings_file.display(), "Wrote default settings");
        writeln!(out, "  (created with default settings)")?;
    }

    writeln!(out)?;
    writeln!(out, "Settings:")?;
    writeln!(out, "  Currency symbol:    {}", settings.currency_symbol)?;
    writeln!(
        out,
        "  Income categories:  {}",
        settings.income_categories.join(", ")
    )?;
    writeln!(
        out,
        "  Expense categories: {}",
        settings.expense_categories.join(", ")
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use tempfile::TempDir;

    fn run(paths: &BudgetPaths) -> String {
        let session = Session::open(paths, &mut Vec::new()).unwrap();
        let mut out = Vec::new();
        handle_config_command(&session, paths, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_first_run_writes_default_settings() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().join("nested"));

        let output = run(&paths);

        assert!(output.contains("(created with default settings)"));
        assert!(output.contains("salary, freelance, other"));
        let written = std::fs::read_to_string(paths.settings_file()).unwrap();
        assert!(written.contains("\"currency_symbol\": \"$\""));
        assert_eq!(
            Settings::load_or_create(&paths).unwrap().expense_categories,
            Settings::default().expense_categories
        );
    }

    #[test]
    fn test_existing_settings_are_left_alone() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let contents = r#"{"currency_symbol": "€"}"#;
        std::fs::write(paths.settings_file(), contents).unwrap();

        let output = run(&paths);

        assert!(output.contains("Currency symbol:    €"));
        assert!(!output.contains("created with default settings"));
        assert_eq!(
            std::fs::read_to_string(paths.settings_file()).unwrap(),
            contents
        );
    }
}
