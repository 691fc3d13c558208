//! Record display formatting
//!
//! Numbered listings of ledger entries for the terminal.

use crate::models::{Ledger, Record};

/// Format one record as a numbered two-line entry
pub fn format_record(index: usize, record: &Record, symbol: &str) -> String {
    format!(
        "{}. {} - {}\n   {} ({})\n",
        index,
        record.amount().format_with_symbol(symbol),
        record.category(),
        record.description(),
        record.date()
    )
}

/// Format a titled list of records, numbered from 1
pub fn format_record_list(title: &str, records: &[Record], symbol: &str) -> String {
    let mut output = format!("--- {} ---\n", title.to_uppercase());

    if records.is_empty() {
        output.push_str(&format!("No {} recorded yet.\n", title.to_lowercase()));
        return output;
    }

    for (i, record) in records.iter().enumerate() {
        output.push_str(&format_record(i + 1, record, symbol));
    }

    output
}

/// Format both income and expenses
pub fn format_ledger(ledger: &Ledger, symbol: &str) -> String {
    let mut output = format_record_list("Income", ledger.income(), symbol);
    output.push('\n');
    output.push_str(&format_record_list("Expenses", ledger.expenses(), symbol));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::services::ledger::{add_expense_at, add_income_at};
    use chrono::NaiveDate;

    #[test]
    fn test_format_ledger() {
        let at = NaiveDate::from_ymd_opt(2024, 4, 2)
            .unwrap()
            .and_hms_opt(7, 45, 0)
            .unwrap();
        let mut ledger = Ledger::new();
        add_income_at(&mut ledger, Money::from_cents(50000), "salary", "April", at).unwrap();
        add_income_at(&mut ledger, Money::from_cents(1050), "", "", at).unwrap();

        let text = format_ledger(&ledger, "$");

        assert!(text.contains("--- INCOME ---\n1. $500.00 - salary\n   April (2024-04-02 07:45:00)\n"));
        assert!(text.contains("2. $10.50 - other\n"));
        assert!(text.contains("--- EXPENSES ---\nNo expenses recorded yet.\n"));
    }

    #[test]
    fn test_empty_lists() {
        let text = format_ledger(&Ledger::new(), "$");
        assert!(text.contains("No income recorded yet."));
        assert!(text.contains("No expenses recorded yet."));
    }

    #[test]
    fn test_expense_numbering_restarts() {
        let at = NaiveDate::from_ymd_opt(2024, 4, 2)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let mut ledger = Ledger::new();
        add_income_at(&mut ledger, Money::from_cents(100), "salary", "", at).unwrap();
        add_expense_at(&mut ledger, Money::from_cents(200), "food", "", at).unwrap();

        let text = format_record_list("Expenses", ledger.expenses(), "$");
        assert!(text.contains("1. $2.00 - food"));
    }
}
